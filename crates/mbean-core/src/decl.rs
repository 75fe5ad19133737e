//! Declarative bean metadata.
//!
//! A target object is made manageable by describing it: a [`BeanDecl`]
//! lists every method the object exposes, and each method carries a marker
//! saying whether it contributes to an attribute or is an operation, plus
//! its display metadata. The wrapper consumes this declaration once at
//! construction time; nothing here is consulted afterwards.
//!
//! All marker strings follow the same convention: an empty string means
//! "not declared", and the engine falls back to the derived default. Name
//! and description keys are only consulted when the bean marker names a
//! text bundle.
//!
//! # Example
//!
//! ```ignore
//! let counter = Arc::new(AtomicI64::new(0));
//! let decl = BeanDecl::new::<Counter>()
//!     .marker(BeanMarker::new().description("A counter"))
//!     .method(
//!         MethodDecl::attribute("getCount", AttributeMarker::new(), {
//!             let counter = counter.clone();
//!             move |_args: &[BeanValue]| Ok(BeanValue::Int(counter.load(Ordering::SeqCst)))
//!         })
//!         .returns(TypeName::INT),
//!     );
//! ```

use crate::error::CallError;
use crate::info::Impact;
use crate::method::MethodFn;
use crate::type_name::TypeName;
use crate::value::BeanValue;

/// Bean-level marker: display metadata for the bean itself.
#[derive(Debug, Clone, Default)]
pub struct BeanMarker {
    /// Display name; the declared target type name when empty.
    pub name: String,
    /// Bean description, empty by default.
    pub description: String,
    /// Text-bundle key for a localized description.
    pub description_key: String,
    /// Text-bundle identifier. Empty disables localization for the whole
    /// bean, including attribute, operation and parameter keys.
    pub bundle: String,
    /// Sort attributes and operations in the assembled descriptor.
    pub sorted: bool,
}

impl BeanMarker {
    /// Create an empty bean marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the text-bundle key for the description.
    pub fn description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }

    /// Set the text-bundle identifier.
    pub fn bundle(mut self, bundle: impl Into<String>) -> Self {
        self.bundle = bundle.into();
        self
    }

    /// Request sorted attribute and operation lists.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }
}

/// Marker for a method that contributes to an attribute.
///
/// The same marker type is attached to getters and setters; the two sides
/// of an attribute are merged during assembly.
#[derive(Debug, Clone, Default)]
pub struct AttributeMarker {
    /// Display name; derived from the method name when empty.
    pub name: String,
    /// Attribute description, empty by default.
    pub description: String,
    /// Text-bundle key for a localized name.
    pub name_key: String,
    /// Text-bundle key for a localized description.
    pub description_key: String,
    /// Sort value used when the bean is sorted; the name when empty.
    pub sort_value: String,
}

impl AttributeMarker {
    /// Create an empty attribute marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the text-bundle key for the name.
    pub fn name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    /// Set the text-bundle key for the description.
    pub fn description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }

    /// Set the sort value.
    pub fn sort_value(mut self, sort_value: impl Into<String>) -> Self {
        self.sort_value = sort_value.into();
        self
    }
}

/// Marker for a method exposed as an operation.
#[derive(Debug, Clone, Default)]
pub struct OperationMarker {
    /// Display name; the raw method name when empty.
    pub name: String,
    /// Operation description, empty by default.
    pub description: String,
    /// Text-bundle key for a localized name.
    pub name_key: String,
    /// Text-bundle key for a localized description.
    pub description_key: String,
    /// Impact classification, [`Impact::Unknown`] by default.
    pub impact: Impact,
    /// Sort value used when the bean is sorted; the name when empty.
    pub sort_value: String,
}

impl OperationMarker {
    /// Create an empty operation marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the text-bundle key for the name.
    pub fn name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    /// Set the text-bundle key for the description.
    pub fn description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }

    /// Set the impact classification.
    pub fn impact(mut self, impact: Impact) -> Self {
        self.impact = impact;
        self
    }

    /// Set the sort value.
    pub fn sort_value(mut self, sort_value: impl Into<String>) -> Self {
        self.sort_value = sort_value.into();
        self
    }
}

/// Marker describing a single operation parameter.
///
/// Parameters without a marker keep their positional default name and an
/// empty description.
#[derive(Debug, Clone, Default)]
pub struct ParamMarker {
    /// Display name; `param1`, `param2`, ... when empty.
    pub name: String,
    /// Parameter description, empty by default.
    pub description: String,
    /// Text-bundle key for a localized name.
    pub name_key: String,
    /// Text-bundle key for a localized description.
    pub description_key: String,
}

impl ParamMarker {
    /// Create an empty parameter marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the text-bundle key for the name.
    pub fn name_key(mut self, key: impl Into<String>) -> Self {
        self.name_key = key.into();
        self
    }

    /// Set the text-bundle key for the description.
    pub fn description_key(mut self, key: impl Into<String>) -> Self {
        self.description_key = key.into();
        self
    }
}

/// The declared role of a method.
#[derive(Debug, Clone)]
pub enum MethodMarker {
    /// The method is one side of an attribute.
    Attribute(AttributeMarker),
    /// The method is an operation.
    Operation(OperationMarker),
}

/// A declared method parameter: its type plus an optional marker.
#[derive(Debug, Clone)]
pub struct ParamDecl {
    /// The declared parameter type.
    pub data_type: TypeName,
    /// Optional display metadata.
    pub marker: Option<ParamMarker>,
}

/// One declared method of the target object.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    /// Raw method name (e.g. `getLevel`, `reset`).
    pub name: String,
    /// Declared parameters, in call order.
    pub params: Vec<ParamDecl>,
    /// Declared return type.
    pub return_type: TypeName,
    /// The method's declared role and display metadata.
    pub marker: MethodMarker,
    /// The callable that performs the method.
    pub handler: MethodFn,
}

impl MethodDecl {
    /// Declare a method as one side of an attribute.
    pub fn attribute<F>(name: impl Into<String>, marker: AttributeMarker, handler: F) -> Self
    where
        F: Fn(&[BeanValue]) -> Result<BeanValue, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: TypeName::VOID,
            marker: MethodMarker::Attribute(marker),
            handler: MethodFn::new(handler),
        }
    }

    /// Declare a method as an operation.
    pub fn operation<F>(name: impl Into<String>, marker: OperationMarker, handler: F) -> Self
    where
        F: Fn(&[BeanValue]) -> Result<BeanValue, CallError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: TypeName::VOID,
            marker: MethodMarker::Operation(marker),
            handler: MethodFn::new(handler),
        }
    }

    /// Append an unmarked parameter.
    pub fn param(mut self, data_type: TypeName) -> Self {
        self.params.push(ParamDecl {
            data_type,
            marker: None,
        });
        self
    }

    /// Append a parameter with display metadata.
    pub fn param_marked(mut self, data_type: TypeName, marker: ParamMarker) -> Self {
        self.params.push(ParamDecl {
            data_type,
            marker: Some(marker),
        });
        self
    }

    /// Set the declared return type (void by default).
    pub fn returns(mut self, return_type: TypeName) -> Self {
        self.return_type = return_type;
        self
    }
}

/// The full declaration of a manageable object.
#[derive(Debug, Clone)]
pub struct BeanDecl {
    /// Canonical name of the declared target type.
    pub type_name: String,
    /// Bean-level marker. A declaration without one is rejected at
    /// wrapper construction.
    pub marker: Option<BeanMarker>,
    /// Declared methods, in declaration order.
    pub methods: Vec<MethodDecl>,
}

impl BeanDecl {
    /// Start a declaration for the target type `T`.
    pub fn new<T: ?Sized>() -> Self {
        Self::with_type_name(std::any::type_name::<T>())
    }

    /// Start a declaration with an explicit target type name.
    pub fn with_type_name(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            marker: None,
            methods: Vec::new(),
        }
    }

    /// Attach the bean-level marker.
    pub fn marker(mut self, marker: BeanMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Append one declared method.
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Append a batch of declared methods.
    ///
    /// Methods inherited from a supertype are included this way; they are
    /// scanned identically to methods declared directly.
    pub fn methods(mut self, methods: impl IntoIterator<Item = MethodDecl>) -> Self {
        self.methods.extend(methods);
        self
    }
}

/// Uniform "describe this object" interface.
///
/// Types implement this to produce their own declaration, so a wrapper can
/// be built from any `&dyn Describe` without static knowledge of the
/// concrete type.
pub trait Describe {
    /// Produce the declaration for this object.
    fn describe(&self) -> BeanDecl;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::BeanValue;

    #[test]
    fn marker_builders() {
        let m = BeanMarker::new()
            .name("Bean")
            .description("desc")
            .bundle("b")
            .sorted(true);
        assert_eq!(m.name, "Bean");
        assert_eq!(m.description, "desc");
        assert_eq!(m.bundle, "b");
        assert!(m.sorted);
        assert!(m.description_key.is_empty());
    }

    #[test]
    fn method_decl_defaults() {
        let m = MethodDecl::operation("reset", OperationMarker::new(), |_: &[BeanValue]| {
            Ok(BeanValue::Void)
        });
        assert_eq!(m.name, "reset");
        assert_eq!(m.return_type, TypeName::VOID);
        assert!(m.params.is_empty());
        assert!(matches!(m.marker, MethodMarker::Operation(_)));
    }

    #[test]
    fn params_keep_declaration_order() {
        let m = MethodDecl::operation("echo", OperationMarker::new(), |_: &[BeanValue]| {
            Ok(BeanValue::Void)
        })
        .param(TypeName::STRING)
        .param_marked(TypeName::INT, ParamMarker::new().name("count"));
        assert_eq!(m.params.len(), 2);
        assert_eq!(m.params[0].data_type, TypeName::STRING);
        assert!(m.params[0].marker.is_none());
        assert_eq!(m.params[1].marker.as_ref().unwrap().name, "count");
    }

    #[test]
    fn decl_captures_type_name() {
        let decl = BeanDecl::new::<String>();
        assert!(decl.type_name.contains("String"));
        assert!(decl.marker.is_none());
    }
}
