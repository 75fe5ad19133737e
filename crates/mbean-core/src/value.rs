//! Runtime value type for the dispatch boundary.

use std::any::Any;
use std::fmt;

/// A dynamic value passed into and out of bean methods.
///
/// This enum is the uniform representation for attribute values, operation
/// arguments and operation results. The engine never inspects or converts
/// the payload; the typed extractors exist for method bodies, which know
/// what they were declared to receive.
///
/// Note: `BeanValue` does not implement `Clone` because `Opaque` payloads
/// may not be cloneable. Use [`BeanValue::clone_if_possible`] where a copy
/// of a non-opaque value is needed.
pub enum BeanValue {
    /// No value (void-returning methods).
    Void,
    /// Integer value (all integer widths stored as i64).
    Int(i64),
    /// Floating point value (f32 and f64 both stored as f64).
    Float(f64),
    /// Boolean value.
    Bool(bool),
    /// String value (owned).
    String(String),
    /// Inline opaque value for registered domain types.
    /// Uses `Box<dyn Any>` for type safety - no raw pointer casting.
    Opaque(Box<dyn Any + Send + Sync>),
}

impl BeanValue {
    /// Box an arbitrary value into an opaque payload.
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        BeanValue::Opaque(Box::new(value))
    }

    /// Get a human-readable name for this value's shape.
    pub fn type_name(&self) -> &'static str {
        match self {
            BeanValue::Void => "void",
            BeanValue::Int(_) => "int",
            BeanValue::Float(_) => "float",
            BeanValue::Bool(_) => "bool",
            BeanValue::String(_) => "string",
            BeanValue::Opaque(_) => "opaque",
        }
    }

    /// Check if this value is void.
    pub fn is_void(&self) -> bool {
        matches!(self, BeanValue::Void)
    }

    /// Extract an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            BeanValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a floating point value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            BeanValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            BeanValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BeanValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast an opaque payload to a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            BeanValue::Opaque(boxed) => boxed.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Clone the value if it is not opaque.
    ///
    /// Returns None for `Opaque` payloads since they may not be cloneable.
    pub fn clone_if_possible(&self) -> Option<Self> {
        match self {
            BeanValue::Void => Some(BeanValue::Void),
            BeanValue::Int(v) => Some(BeanValue::Int(*v)),
            BeanValue::Float(v) => Some(BeanValue::Float(*v)),
            BeanValue::Bool(v) => Some(BeanValue::Bool(*v)),
            BeanValue::String(s) => Some(BeanValue::String(s.clone())),
            BeanValue::Opaque(_) => None,
        }
    }
}

impl fmt::Debug for BeanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeanValue::Void => write!(f, "Void"),
            BeanValue::Int(v) => write!(f, "Int({})", v),
            BeanValue::Float(v) => write!(f, "Float({})", v),
            BeanValue::Bool(v) => write!(f, "Bool({})", v),
            BeanValue::String(s) => write!(f, "String({:?})", s),
            BeanValue::Opaque(_) => write!(f, "Opaque(...)"),
        }
    }
}

impl PartialEq for BeanValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BeanValue::Void, BeanValue::Void) => true,
            (BeanValue::Int(a), BeanValue::Int(b)) => a == b,
            (BeanValue::Float(a), BeanValue::Float(b)) => a == b,
            (BeanValue::Bool(a), BeanValue::Bool(b)) => a == b,
            (BeanValue::String(a), BeanValue::String(b)) => a == b,
            // Opaque payloads can't be compared for equality
            (BeanValue::Opaque(_), BeanValue::Opaque(_)) => false,
            _ => false,
        }
    }
}

impl From<i64> for BeanValue {
    fn from(v: i64) -> Self {
        BeanValue::Int(v)
    }
}

impl From<i32> for BeanValue {
    fn from(v: i32) -> Self {
        BeanValue::Int(v as i64)
    }
}

impl From<f64> for BeanValue {
    fn from(v: f64) -> Self {
        BeanValue::Float(v)
    }
}

impl From<bool> for BeanValue {
    fn from(v: bool) -> Self {
        BeanValue::Bool(v)
    }
}

impl From<String> for BeanValue {
    fn from(v: String) -> Self {
        BeanValue::String(v)
    }
}

impl From<&str> for BeanValue {
    fn from(v: &str) -> Self {
        BeanValue::String(v.to_string())
    }
}
