//! Error types for bean construction and dispatch.
//!
//! Two layers are distinguished:
//!
//! - [`CallError`] - raised by the body of a bean method (a getter, setter
//!   or operation handler).
//! - [`BeanError`] - the engine surface: construction failure, name lookup
//!   failure, or a method-body failure wrapped for the caller.

use thiserror::Error;

/// Error raised by a bean method body.
#[derive(Debug, Error)]
pub enum CallError {
    /// An argument did not have the shape the method body expected.
    #[error("argument {index}: expected {expected}, got {actual}")]
    ArgumentType {
        /// Zero-based argument position.
        index: usize,
        /// The expected value shape.
        expected: &'static str,
        /// The shape that was actually passed.
        actual: &'static str,
    },

    /// An argument index was out of bounds.
    #[error("argument index {index} out of bounds ({count} available)")]
    ArgumentIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of arguments available.
        count: usize,
    },

    /// The method body failed with a message.
    #[error("{0}")]
    Failed(String),

    /// A failure forwarded through one layer of call indirection.
    ///
    /// A handler that delegates to another callable wraps that callable's
    /// error in this variant; the dispatch engine strips exactly one layer
    /// before surfacing the failure, so the caller sees the original cause.
    #[error(transparent)]
    Indirect(Box<CallError>),
}

impl CallError {
    /// Create a message-only failure.
    pub fn failed(message: impl Into<String>) -> Self {
        CallError::Failed(message.into())
    }

    /// Wrap an error in one layer of call indirection.
    pub fn indirect(cause: CallError) -> Self {
        CallError::Indirect(Box::new(cause))
    }

    /// Unwrap at most one layer of call indirection.
    pub fn into_cause(self) -> CallError {
        match self {
            CallError::Indirect(inner) => *inner,
            other => other,
        }
    }
}

/// Errors reported by the bean wrapper.
#[derive(Debug, Error)]
pub enum BeanError {
    /// The declaration carries no bean marker (construction-time, fatal).
    #[error("{type_name} is not a declared bean")]
    NotABean {
        /// The declared target type name.
        type_name: String,
    },

    /// No attribute with this name, or the requested side (getter or
    /// setter) is absent.
    #[error("attribute not found: {0}")]
    AttributeNotFound(String),

    /// No operation matches the requested name and parameter signature.
    #[error("operation not found: {name}({signature})")]
    OperationNotFound {
        /// The requested operation name.
        name: String,
        /// The requested signature, rendered as `"t1, t2"`.
        signature: String,
    },

    /// The underlying method body failed.
    #[error("invocation failed: {source}")]
    Invocation {
        /// The cause, with one layer of indirection already unwrapped.
        #[source]
        source: CallError,
    },
}

impl BeanError {
    /// Check if this is an attribute lookup failure.
    pub fn is_attribute_not_found(&self) -> bool {
        matches!(self, BeanError::AttributeNotFound(_))
    }

    /// Check if this is an operation lookup failure.
    pub fn is_operation_not_found(&self) -> bool {
        matches!(self, BeanError::OperationNotFound { .. })
    }
}

impl From<CallError> for BeanError {
    fn from(error: CallError) -> Self {
        BeanError::Invocation {
            source: error.into_cause(),
        }
    }
}
