//! Assembled bean descriptors.
//!
//! These are the immutable records a management client renders: the bean
//! itself, its attributes, its operations and their parameters. They are
//! built once at wrapper construction and never mutated afterwards.

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::type_name::TypeName;
use crate::value::BeanValue;

bitflags! {
    /// Access sides of an attribute.
    ///
    /// An assembled attribute always has at least one side set; a method
    /// that would produce neither is never materialized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Access: u8 {
        /// The attribute has a getter.
        const READ = 1 << 0;
        /// The attribute has a setter.
        const WRITE = 1 << 1;
    }
}

/// Descriptor of a single bean attribute.
#[derive(Debug, Clone)]
pub struct AttributeInfo {
    /// Attribute name (unique key, case-sensitive).
    pub name: String,
    /// Attribute description.
    pub description: String,
    /// The attribute's value type.
    pub data_type: TypeName,
    /// Which sides of the attribute exist.
    pub access: Access,
    /// True when the attribute was discovered through an `is`-prefixed
    /// getter.
    pub boolean_style: bool,
    /// Sort value used when the bean is sorted; the name when empty.
    pub sort_value: String,
}

impl AttributeInfo {
    /// Check if the attribute can be read.
    pub fn is_readable(&self) -> bool {
        self.access.contains(Access::READ)
    }

    /// Check if the attribute can be written.
    pub fn is_writable(&self) -> bool {
        self.access.contains(Access::WRITE)
    }
}

/// Descriptor of one operation parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Parameter name (`param1`, `param2`, ... unless declared).
    pub name: String,
    /// Parameter description.
    pub description: String,
    /// The declared parameter type.
    pub data_type: TypeName,
}

/// Impact classification of an operation, using the wire codes management
/// consoles expect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, TryFromPrimitive,
)]
#[repr(i32)]
pub enum Impact {
    /// The operation is read-like.
    Info = 0,
    /// The operation is write-like.
    Action = 1,
    /// The operation is both write-like and read-like.
    ActionInfo = 2,
    /// The impact is unknown.
    #[default]
    Unknown = 3,
}

/// Descriptor of a single bean operation.
///
/// Operation names are not unique; overloads share a name and are told
/// apart by their parameter signature.
#[derive(Debug, Clone)]
pub struct OperationInfo {
    /// Operation name.
    pub name: String,
    /// Operation description.
    pub description: String,
    /// The declared return type.
    pub return_type: TypeName,
    /// Parameter descriptors, in call order.
    pub params: Vec<ParameterInfo>,
    /// Impact classification.
    pub impact: Impact,
    /// Sort value used when the bean is sorted; the name when empty.
    pub sort_value: String,
}

impl OperationInfo {
    /// The ordered parameter type signature of this operation.
    pub fn signature(&self) -> Vec<TypeName> {
        self.params.iter().map(|p| p.data_type.clone()).collect()
    }
}

/// The assembled descriptor of a whole bean.
#[derive(Debug, Clone)]
pub struct BeanInfo {
    /// Bean display name.
    pub name: String,
    /// Bean description.
    pub description: String,
    /// Attribute descriptors, in presentation order.
    pub attributes: Vec<AttributeInfo>,
    /// Operation descriptors, in presentation order.
    pub operations: Vec<OperationInfo>,
}

impl BeanInfo {
    /// Find an attribute descriptor by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Find all operation descriptors sharing a name.
    pub fn operations_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a OperationInfo> {
        self.operations.iter().filter(move |o| o.name == name)
    }
}

/// A named attribute value, as used by the batch get/set surface.
#[derive(Debug, PartialEq)]
pub struct AttributeValue {
    /// The attribute name.
    pub name: String,
    /// The value read or to be written.
    pub value: BeanValue,
}

impl AttributeValue {
    /// Create a named attribute value.
    pub fn new(name: impl Into<String>, value: BeanValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_sides() {
        let info = AttributeInfo {
            name: "level".to_string(),
            description: String::new(),
            data_type: TypeName::INT,
            access: Access::READ,
            boolean_style: false,
            sort_value: String::new(),
        };
        assert!(info.is_readable());
        assert!(!info.is_writable());
        assert!((Access::READ | Access::WRITE).contains(Access::WRITE));
    }

    #[test]
    fn impact_wire_codes() {
        assert_eq!(i32::from(Impact::Info), 0);
        assert_eq!(i32::from(Impact::ActionInfo), 2);
        assert_eq!(Impact::try_from(1), Ok(Impact::Action));
        assert!(Impact::try_from(9).is_err());
        assert_eq!(Impact::default(), Impact::Unknown);
    }

    #[test]
    fn operation_signature() {
        let op = OperationInfo {
            name: "echo".to_string(),
            description: String::new(),
            return_type: TypeName::STRING,
            params: vec![
                ParameterInfo {
                    name: "param1".to_string(),
                    description: String::new(),
                    data_type: TypeName::STRING,
                },
                ParameterInfo {
                    name: "param2".to_string(),
                    description: String::new(),
                    data_type: TypeName::INT,
                },
            ],
            impact: Impact::Unknown,
            sort_value: String::new(),
        };
        assert_eq!(op.signature(), vec![TypeName::STRING, TypeName::INT]);
    }

    #[test]
    fn bean_info_lookup() {
        let info = BeanInfo {
            name: "bean".to_string(),
            description: String::new(),
            attributes: vec![],
            operations: vec![],
        };
        assert!(info.attribute("missing").is_none());
        assert_eq!(info.operations_named("missing").count(), 0);
    }
}
