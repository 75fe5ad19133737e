//! Language-neutral type identifiers.
//!
//! Attribute value types, operation return types and parameter types are
//! all recorded as flat canonical names. Operation overloads are told apart
//! by comparing ordered lists of these names for exact equality, so two
//! declarations agree on a type exactly when they agree on its name.

use std::borrow::Cow;
use std::fmt;

/// Canonical name of a declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(Cow<'static, str>);

impl TypeName {
    /// The void type (no value).
    pub const VOID: TypeName = TypeName(Cow::Borrowed("void"));
    /// The integer type.
    pub const INT: TypeName = TypeName(Cow::Borrowed("int"));
    /// The floating point type.
    pub const FLOAT: TypeName = TypeName(Cow::Borrowed("float"));
    /// The boolean type.
    pub const BOOL: TypeName = TypeName(Cow::Borrowed("bool"));
    /// The string type.
    pub const STRING: TypeName = TypeName(Cow::Borrowed("string"));

    /// Create a type name from an arbitrary identifier.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        TypeName(name.into())
    }

    /// The canonical name of a Rust type, for opaque domain types.
    pub fn of<T: ?Sized>() -> Self {
        TypeName(Cow::Borrowed(std::any::type_name::<T>()))
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeName {
    fn from(name: &'static str) -> Self {
        TypeName(Cow::Borrowed(name))
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        TypeName(Cow::Owned(name))
    }
}

/// Render an ordered signature as `"t1, t2, t3"`.
pub fn signature_string(signature: &[TypeName]) -> String {
    signature
        .iter()
        .map(TypeName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
