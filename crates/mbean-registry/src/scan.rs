//! Method shape classification.
//!
//! Attribute-marked methods must look like accessors: a getter takes no
//! parameters and starts with `get` or `is`, a setter takes exactly one
//! parameter and starts with `set`. Anything else is dropped silently by
//! the attribute assembler. Operation-marked methods have no shape rule.

/// The accessor shape of an attribute-marked method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodShape {
    /// A zero-parameter `get*` or `is*` method.
    Getter {
        /// True for `is*` getters.
        boolean_style: bool,
    },
    /// A one-parameter `set*` method.
    Setter,
    /// Neither accessor shape; not an attribute method.
    Unrecognized,
}

/// Classify a method by name and parameter count.
///
/// A bare `get`/`is`/`set` with no suffix does not name an attribute.
pub fn classify(name: &str, param_count: usize) -> MethodShape {
    if param_count == 0 && name.len() > 3 && name.starts_with("get") {
        MethodShape::Getter {
            boolean_style: false,
        }
    } else if param_count == 0 && name.len() > 2 && name.starts_with("is") {
        MethodShape::Getter {
            boolean_style: true,
        }
    } else if param_count == 1 && name.len() > 3 && name.starts_with("set") {
        MethodShape::Setter
    } else {
        MethodShape::Unrecognized
    }
}

/// Derive the default attribute name from an accessor method name.
///
/// Strips the `get`/`is`/`set` prefix and lower-cases the first character:
/// `getLevel` becomes `level`, `isBooleanAttribute` becomes
/// `booleanAttribute`. A name without an accessor prefix is returned
/// unchanged.
pub fn derived_name(raw: &str) -> String {
    let stripped = if raw.starts_with("get") || raw.starts_with("set") {
        &raw[3..]
    } else if raw.starts_with("is") {
        &raw[2..]
    } else {
        raw
    };
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
