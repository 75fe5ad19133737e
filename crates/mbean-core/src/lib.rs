//! Core data model for the mbean engine.
//!
//! This crate holds everything a bean declaration and an assembled bean
//! descriptor are made of:
//!
//! - [`BeanValue`] - the uniform runtime value crossing the dispatch
//!   boundary
//! - [`TypeName`] - language-neutral type identifiers and signatures
//! - [`MethodFn`] / [`BeanCallable`] - type-erased method handles
//! - [`BeanDecl`] and the marker types - the declarative metadata attached
//!   to a target object
//! - [`BeanInfo`] and friends - the immutable descriptors a management
//!   client renders
//! - [`TextResolver`] - the localized-text collaborator
//! - [`BeanError`] / [`CallError`] - the error surface
//!
//! The engine that turns a declaration into a live wrapper lives in
//! `mbean-registry`.

mod decl;
mod error;
mod info;
mod method;
mod text;
mod type_name;
mod value;

pub use decl::{
    AttributeMarker, BeanDecl, BeanMarker, Describe, MethodDecl, MethodMarker, OperationMarker,
    ParamDecl, ParamMarker,
};
pub use error::{BeanError, CallError};
pub use info::{
    Access, AttributeInfo, AttributeValue, BeanInfo, Impact, OperationInfo, ParameterInfo,
};
pub use method::{BeanCallable, MethodFn};
pub use text::{Locale, NoText, TextResolver, TextTable};
pub use type_name::{TypeName, signature_string};
pub use value::BeanValue;
