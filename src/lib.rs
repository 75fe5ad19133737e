//! Wrap ordinary objects into dynamically introspectable management
//! beans.
//!
//! A bean is described declaratively: every exposed method carries a
//! marker saying whether it is one side of an attribute (a readable
//! and/or writable property) or an operation (an invokable action),
//! together with display names, descriptions and optional localization
//! keys. [`BeanWrapper`] consumes such a declaration once and acts as a
//! proxy between a management client and the object: the client renders
//! the assembled [`BeanInfo`] and reads, writes and invokes by name
//! without static knowledge of the wrapped type.
//!
//! # Declaring a bean
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI64, Ordering};
//!
//! use mbean::prelude::*;
//!
//! let level = Arc::new(AtomicI64::new(0));
//!
//! let read = level.clone();
//! let write = level.clone();
//! let decl = BeanDecl::with_type_name("Elevator")
//!     .marker(BeanMarker::new().description("My first bean"))
//!     .method(
//!         MethodDecl::attribute(
//!             "getLevel",
//!             AttributeMarker::new()
//!                 .name("Floor Level")
//!                 .description("The current floor level"),
//!             move |_args: &[BeanValue]| Ok(BeanValue::Int(read.load(Ordering::SeqCst))),
//!         )
//!         .returns(TypeName::INT),
//!     )
//!     .method(
//!         MethodDecl::attribute("setLevel", AttributeMarker::new(), move |args: &[BeanValue]| {
//!             let v = args.first().and_then(BeanValue::as_i64).unwrap_or(0);
//!             write.store(v, Ordering::SeqCst);
//!             Ok(BeanValue::Void)
//!         })
//!         .param(TypeName::INT),
//!     )
//!     .method(
//!         MethodDecl::operation(
//!             "echo",
//!             OperationMarker::new().name("Echo Test"),
//!             |args: &[BeanValue]| {
//!                 let input = args.first().and_then(BeanValue::as_str).unwrap_or("");
//!                 Ok(BeanValue::from(format!("You said {input}")))
//!             },
//!         )
//!         .param_marked(TypeName::STRING, ParamMarker::new().name("Input"))
//!         .returns(TypeName::STRING),
//!     );
//!
//! let bean = BeanWrapper::wrap(decl).unwrap();
//! bean.set_attribute("Floor Level", &BeanValue::Int(3)).unwrap();
//! assert_eq!(bean.get_attribute("Floor Level").unwrap(), BeanValue::Int(3));
//!
//! let reply = bean
//!     .invoke("Echo Test", &[BeanValue::from("hi")], &[TypeName::STRING])
//!     .unwrap();
//! assert_eq!(reply, BeanValue::from("You said hi"));
//! ```
//!
//! # Sorting
//!
//! Mark the bean with [`BeanMarker::sorted`] to order attributes and
//! operations in the descriptor. By default they sort by name; a
//! per-method `sort_value` overrides the key.
//!
//! # Localization
//!
//! Name the text bundle in the bean marker and declare `name_key` /
//! `description_key` on markers. Build the wrapper through
//! [`BeanWrapper::wrap_localized`] with a [`TextResolver`] and an explicit
//! [`Locale`]; keys the resolver cannot find keep their literal defaults.
//! Labels are resolved once at construction - rebuild the wrapper to pick
//! up another locale.

pub use mbean_core::{
    Access, AttributeInfo, AttributeMarker, AttributeValue, BeanCallable, BeanDecl, BeanError,
    BeanInfo, BeanMarker, BeanValue, CallError, Describe, Impact, Locale, MethodDecl, MethodFn,
    MethodMarker, NoText, OperationInfo, OperationMarker, ParamDecl, ParamMarker, ParameterInfo,
    TextResolver, TextTable, TypeName, signature_string,
};
pub use mbean_registry::{
    AssembledAttributes, AssembledOperations, BeanAttribute, BeanWrapper, Localizer, MethodShape,
    OperationSlot, assemble_attributes, assemble_operations, classify, derived_name,
    sort_attributes, sort_operations,
};

/// The types most declarations and call sites need.
pub mod prelude {
    pub use mbean_core::{
        AttributeMarker, AttributeValue, BeanDecl, BeanError, BeanMarker, BeanValue, CallError,
        Describe, Impact, Locale, MethodDecl, OperationMarker, ParamMarker, TextResolver,
        TextTable, TypeName,
    };
    pub use mbean_registry::BeanWrapper;
}
