//! Type-erased method handles.

use std::fmt;
use std::sync::Arc;

use crate::error::CallError;
use crate::value::BeanValue;

/// Trait for callable bean methods.
///
/// This is the uniform call shape every getter, setter and operation is
/// registered through: ordered typed arguments in, a typed result or an
/// error out.
pub trait BeanCallable {
    /// Call this method with the given arguments.
    fn call(&self, args: &[BeanValue]) -> Result<BeanValue, CallError>;
}

// Implement BeanCallable for closures with the matching shape
impl<F> BeanCallable for F
where
    F: Fn(&[BeanValue]) -> Result<BeanValue, CallError>,
{
    fn call(&self, args: &[BeanValue]) -> Result<BeanValue, CallError> {
        (self)(args)
    }
}

/// Type-erased method handle.
///
/// This wraps any callable that implements [`BeanCallable`], allowing
/// methods of different shapes to be stored uniformly in the dispatch
/// indices. The inner callable is wrapped in `Arc` so a handle can be
/// shared between the declaration and the assembled indices.
pub struct MethodFn {
    inner: Arc<dyn BeanCallable + Send + Sync>,
}

impl MethodFn {
    /// Create a new method handle from a callable.
    pub fn new<F>(f: F) -> Self
    where
        F: BeanCallable + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Call this method with the given arguments.
    pub fn call(&self, args: &[BeanValue]) -> Result<BeanValue, CallError> {
        self.inner.call(args)
    }

    /// Clone this handle, sharing the same underlying callable.
    pub fn clone_arc(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl fmt::Debug for MethodFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodFn").finish_non_exhaustive()
    }
}

impl Clone for MethodFn {
    fn clone(&self) -> Self {
        self.clone_arc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_callable() {
        let m = MethodFn::new(|args: &[BeanValue]| -> Result<BeanValue, CallError> {
            let n = args
                .first()
                .and_then(BeanValue::as_i64)
                .ok_or(CallError::ArgumentIndexOutOfBounds { index: 0, count: 0 })?;
            Ok(BeanValue::Int(n + 1))
        });
        assert_eq!(m.call(&[BeanValue::Int(41)]).unwrap(), BeanValue::Int(42));
    }

    #[test]
    fn clone_shares_callable() {
        let m = MethodFn::new(|_: &[BeanValue]| -> Result<BeanValue, CallError> {
            Ok(BeanValue::Void)
        });
        let c = m.clone();
        assert!(c.call(&[]).unwrap().is_void());
        assert!(m.call(&[]).unwrap().is_void());
    }

    #[test]
    fn errors_propagate() {
        let m = MethodFn::new(|_: &[BeanValue]| -> Result<BeanValue, CallError> {
            Err(CallError::failed("refused"))
        });
        assert_eq!(format!("{}", m.call(&[]).unwrap_err()), "refused");
    }
}
