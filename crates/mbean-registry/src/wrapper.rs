//! The bean wrapper: construction pipeline and dispatch engine.
//!
//! [`BeanWrapper::wrap_localized`] runs the whole construction pipeline
//! once - scan, assemble, order - and freezes the result: an immutable
//! [`BeanInfo`] plus the two dispatch indices. Everything after
//! construction is a read-only lookup followed by an indirect call, so a
//! wrapper can be shared freely between threads (the thread-safety of the
//! wrapped object's own methods remains the object's business).
//!
//! # Batch semantics
//!
//! [`get_attributes`](BeanWrapper::get_attributes) and
//! [`set_attributes`](BeanWrapper::set_attributes) are best-effort: an
//! entry that fails is omitted from the result instead of failing the
//! batch, and there is no per-item error channel. Callers that need to
//! know which entries failed use
//! [`try_set_attributes`](BeanWrapper::try_set_attributes) instead. A
//! batch is not atomic; a concurrent call can interleave between its
//! items.

use std::fmt;

use rustc_hash::FxHashMap;

use mbean_core::{
    AttributeValue, BeanDecl, BeanError, BeanInfo, BeanValue, Describe, Locale, NoText,
    TextResolver, TypeName, signature_string,
};

use crate::attributes::{BeanAttribute, assemble_attributes};
use crate::localize::Localizer;
use crate::operations::{OperationSlot, assemble_operations};
use crate::order::{sort_attributes, sort_operations};

/// A wrapped bean: an assembled descriptor plus the dispatch engine over
/// the declared methods.
pub struct BeanWrapper {
    info: BeanInfo,
    attributes: FxHashMap<String, BeanAttribute>,
    operations: FxHashMap<String, Vec<OperationSlot>>,
}

impl BeanWrapper {
    /// Wrap a declaration without localization.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NotABean`] when the declaration carries no
    /// bean marker.
    pub fn wrap(decl: BeanDecl) -> Result<Self, BeanError> {
        Self::wrap_localized(decl, &NoText, &Locale::neutral())
    }

    /// Wrap the declaration produced by an object's [`Describe`] impl.
    pub fn for_object(target: &dyn Describe) -> Result<Self, BeanError> {
        Self::wrap(target.describe())
    }

    /// Wrap a declaration, resolving declared text keys against `resolver`
    /// for `locale`.
    ///
    /// Each declared key is resolved at most once, here; the locale is not
    /// consulted again afterwards. Rebuilding the wrapper is the only way
    /// to pick up a different locale.
    ///
    /// # Errors
    ///
    /// Returns [`BeanError::NotABean`] when the declaration carries no
    /// bean marker.
    pub fn wrap_localized(
        decl: BeanDecl,
        resolver: &dyn TextResolver,
        locale: &Locale,
    ) -> Result<Self, BeanError> {
        let Some(marker) = decl.marker else {
            return Err(BeanError::NotABean {
                type_name: decl.type_name,
            });
        };

        let text = Localizer::new(resolver, &marker.bundle, locale);

        let name = if marker.name.is_empty() {
            decl.type_name.clone()
        } else {
            marker.name.clone()
        };
        let description = text.resolve(&marker.description_key, &marker.description);

        let mut assembled_attributes = assemble_attributes(&decl.methods, &text);
        let mut assembled_operations = assemble_operations(&decl.methods, &text);

        if marker.sorted {
            sort_attributes(&mut assembled_attributes.infos);
            sort_operations(&mut assembled_operations.infos);
        }

        Ok(Self {
            info: BeanInfo {
                name,
                description,
                attributes: assembled_attributes.infos,
                operations: assembled_operations.infos,
            },
            attributes: assembled_attributes.index,
            operations: assembled_operations.index,
        })
    }

    /// The assembled descriptor for this bean.
    pub fn info(&self) -> &BeanInfo {
        &self.info
    }

    // ==========================================================================
    // Attribute dispatch
    // ==========================================================================

    /// Read an attribute by name.
    ///
    /// # Errors
    ///
    /// [`BeanError::AttributeNotFound`] when no attribute has this name or
    /// the attribute has no getter; [`BeanError::Invocation`] when the
    /// getter itself fails.
    pub fn get_attribute(&self, name: &str) -> Result<BeanValue, BeanError> {
        let getter = self
            .attributes
            .get(name)
            .and_then(|a| a.getter.as_ref())
            .ok_or_else(|| BeanError::AttributeNotFound(name.to_string()))?;
        getter.call(&[]).map_err(BeanError::from)
    }

    /// Write an attribute by name.
    ///
    /// # Errors
    ///
    /// [`BeanError::AttributeNotFound`] when no attribute has this name or
    /// the attribute has no setter; [`BeanError::Invocation`] when the
    /// setter itself fails.
    pub fn set_attribute(&self, name: &str, value: &BeanValue) -> Result<(), BeanError> {
        let setter = self
            .attributes
            .get(name)
            .and_then(|a| a.setter.as_ref())
            .ok_or_else(|| BeanError::AttributeNotFound(name.to_string()))?;
        setter
            .call(std::slice::from_ref(value))
            .map(|_| ())
            .map_err(BeanError::from)
    }

    /// Read several attributes, best-effort.
    ///
    /// Names that fail to read are omitted from the result; inspect the
    /// result's length, not the input's.
    pub fn get_attributes(&self, names: &[&str]) -> Vec<AttributeValue> {
        names
            .iter()
            .filter_map(|name| {
                self.get_attribute(name)
                    .ok()
                    .map(|value| AttributeValue::new(*name, value))
            })
            .collect()
    }

    /// Write several attributes, best-effort.
    ///
    /// Each entry is written and immediately re-read; the result reports
    /// the post-write values. Entries whose write or re-read fails are
    /// omitted.
    pub fn set_attributes(&self, entries: &[AttributeValue]) -> Vec<AttributeValue> {
        entries
            .iter()
            .filter_map(|entry| {
                self.set_attribute(&entry.name, &entry.value).ok()?;
                let value = self.get_attribute(&entry.name).ok()?;
                Some(AttributeValue::new(entry.name.clone(), value))
            })
            .collect()
    }

    /// Write several attributes, reporting a per-entry outcome.
    ///
    /// The strict companion to [`set_attributes`](Self::set_attributes):
    /// same write-then-re-read behavior, but every entry produces a result
    /// instead of failures being dropped.
    pub fn try_set_attributes(
        &self,
        entries: &[AttributeValue],
    ) -> Vec<(String, Result<BeanValue, BeanError>)> {
        entries
            .iter()
            .map(|entry| {
                let outcome = self
                    .set_attribute(&entry.name, &entry.value)
                    .and_then(|_| self.get_attribute(&entry.name));
                (entry.name.clone(), outcome)
            })
            .collect()
    }

    // ==========================================================================
    // Operation dispatch
    // ==========================================================================

    /// Invoke an operation by name and exact parameter signature.
    ///
    /// The signature must match one registered overload in order and
    /// count. Arguments are passed through positionally and unchecked; the
    /// caller is responsible for their types.
    ///
    /// # Errors
    ///
    /// [`BeanError::OperationNotFound`] when no overload matches;
    /// [`BeanError::Invocation`] when the operation itself fails, carrying
    /// the cause with one layer of call indirection unwrapped.
    pub fn invoke(
        &self,
        name: &str,
        args: &[BeanValue],
        signature: &[TypeName],
    ) -> Result<BeanValue, BeanError> {
        let slot = self
            .operations
            .get(name)
            .and_then(|slots| slots.iter().find(|s| s.signature == signature))
            .ok_or_else(|| BeanError::OperationNotFound {
                name: name.to_string(),
                signature: signature_string(signature),
            })?;
        slot.handler.call(args).map_err(BeanError::from)
    }
}

impl fmt::Debug for BeanWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanWrapper")
            .field("name", &self.info.name)
            .field("attributes", &self.attributes.len())
            .field("operations", &self.operations.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI64, Ordering};

    use mbean_core::{AttributeMarker, BeanMarker, CallError, MethodDecl, OperationMarker};

    /// A counter bean with one read-write attribute and one operation.
    fn counter_decl(counter: Arc<AtomicI64>) -> BeanDecl {
        let read = counter.clone();
        let write = counter.clone();
        let add = counter.clone();
        BeanDecl::with_type_name("Counter")
            .marker(BeanMarker::new().description("A counter"))
            .method(
                MethodDecl::attribute("getCount", AttributeMarker::new(), move |_: &[BeanValue]| {
                    Ok(BeanValue::Int(read.load(Ordering::SeqCst)))
                })
                .returns(TypeName::INT),
            )
            .method(
                MethodDecl::attribute("setCount", AttributeMarker::new(), move |args: &[BeanValue]| {
                    let value = args.first().and_then(BeanValue::as_i64).ok_or(
                        CallError::ArgumentType {
                            index: 0,
                            expected: "int",
                            actual: "other",
                        },
                    )?;
                    write.store(value, Ordering::SeqCst);
                    Ok(BeanValue::Void)
                })
                .param(TypeName::INT),
            )
            .method(
                MethodDecl::operation("add", OperationMarker::new(), move |args: &[BeanValue]| {
                    let delta = args.first().and_then(BeanValue::as_i64).ok_or(
                        CallError::ArgumentType {
                            index: 0,
                            expected: "int",
                            actual: "other",
                        },
                    )?;
                    Ok(BeanValue::Int(add.fetch_add(delta, Ordering::SeqCst) + delta))
                })
                .param(TypeName::INT)
                .returns(TypeName::INT),
            )
    }

    fn counter_wrapper() -> (BeanWrapper, Arc<AtomicI64>) {
        let counter = Arc::new(AtomicI64::new(0));
        let wrapper = BeanWrapper::wrap(counter_decl(counter.clone())).unwrap();
        (wrapper, counter)
    }

    #[test]
    fn missing_marker_is_not_a_bean() {
        let decl = BeanDecl::with_type_name("Plain");
        match BeanWrapper::wrap(decl) {
            Err(BeanError::NotABean { type_name }) => assert_eq!(type_name, "Plain"),
            other => panic!("expected NotABean, got {other:?}"),
        }
    }

    #[test]
    fn get_set_round_trip() {
        let (wrapper, _) = counter_wrapper();
        for value in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
            wrapper
                .set_attribute("count", &BeanValue::Int(value))
                .unwrap();
            assert_eq!(
                wrapper.get_attribute("count").unwrap(),
                BeanValue::Int(value)
            );
        }
    }

    #[test]
    fn unknown_attribute() {
        let (wrapper, _) = counter_wrapper();
        assert!(
            wrapper
                .get_attribute("doesNotExist")
                .unwrap_err()
                .is_attribute_not_found()
        );
        assert!(
            wrapper
                .set_attribute("doesNotExist", &BeanValue::Int(0))
                .unwrap_err()
                .is_attribute_not_found()
        );
    }

    #[test]
    fn invoke_matches_signature() {
        let (wrapper, counter) = counter_wrapper();
        counter.store(40, Ordering::SeqCst);
        let result = wrapper
            .invoke("add", &[BeanValue::Int(2)], &[TypeName::INT])
            .unwrap();
        assert_eq!(result, BeanValue::Int(42));
    }

    #[test]
    fn invoke_unknown_name_or_signature() {
        let (wrapper, _) = counter_wrapper();
        assert!(
            wrapper
                .invoke("noSuchOp", &[], &[])
                .unwrap_err()
                .is_operation_not_found()
        );
        // right name, wrong signature
        assert!(
            wrapper
                .invoke("add", &[], &[])
                .unwrap_err()
                .is_operation_not_found()
        );
    }

    #[test]
    fn batch_get_omits_failures() {
        let (wrapper, counter) = counter_wrapper();
        counter.store(5, Ordering::SeqCst);
        let values = wrapper.get_attributes(&["count", "bogus"]);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], AttributeValue::new("count", BeanValue::Int(5)));
    }

    #[test]
    fn batch_set_reports_post_write_values() {
        let (wrapper, _) = counter_wrapper();
        let written = wrapper.set_attributes(&[
            AttributeValue::new("count", BeanValue::Int(9)),
            AttributeValue::new("bogus", BeanValue::Int(1)),
        ]);
        assert_eq!(written.len(), 1);
        assert_eq!(written[0], AttributeValue::new("count", BeanValue::Int(9)));
    }

    #[test]
    fn strict_batch_reports_each_entry() {
        let (wrapper, _) = counter_wrapper();
        let outcomes = wrapper.try_set_attributes(&[
            AttributeValue::new("count", BeanValue::Int(3)),
            AttributeValue::new("bogus", BeanValue::Int(1)),
        ]);
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].1.is_ok());
        assert!(outcomes[1].1.as_ref().unwrap_err().is_attribute_not_found());
    }

    #[test]
    fn invocation_failure_surfaces_cause() {
        let decl = BeanDecl::with_type_name("Failing")
            .marker(BeanMarker::new())
            .method(MethodDecl::operation(
                "explode",
                OperationMarker::new(),
                |_: &[BeanValue]| -> Result<BeanValue, CallError> {
                    Err(CallError::indirect(CallError::failed("kaboom")))
                },
            ));
        let wrapper = BeanWrapper::wrap(decl).unwrap();
        let err = wrapper.invoke("explode", &[], &[]).unwrap_err();
        assert_eq!(format!("{err}"), "invocation failed: kaboom");
    }

    #[test]
    fn write_only_attribute_rejects_reads() {
        let decl = BeanDecl::with_type_name("Sink")
            .marker(BeanMarker::new())
            .method(
                MethodDecl::attribute("setSink", AttributeMarker::new(), |_: &[BeanValue]| {
                    Ok(BeanValue::Void)
                })
                .param(TypeName::STRING),
            );
        let wrapper = BeanWrapper::wrap(decl).unwrap();
        assert!(
            wrapper
                .get_attribute("sink")
                .unwrap_err()
                .is_attribute_not_found()
        );
        assert!(
            wrapper
                .set_attribute("sink", &BeanValue::from("x"))
                .is_ok()
        );
    }

    #[test]
    fn read_only_attribute_rejects_writes() {
        let decl = BeanDecl::with_type_name("Source")
            .marker(BeanMarker::new())
            .method(
                MethodDecl::attribute("getSource", AttributeMarker::new(), |_: &[BeanValue]| {
                    Ok(BeanValue::from("fixed"))
                })
                .returns(TypeName::STRING),
            );
        let wrapper = BeanWrapper::wrap(decl).unwrap();
        assert_eq!(
            wrapper.get_attribute("source").unwrap(),
            BeanValue::from("fixed")
        );
        assert!(
            wrapper
                .set_attribute("source", &BeanValue::from("x"))
                .unwrap_err()
                .is_attribute_not_found()
        );
    }

    #[test]
    fn wrapper_is_shareable_across_threads() {
        let (wrapper, _) = counter_wrapper();
        let wrapper = Arc::new(wrapper);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let wrapper = wrapper.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        wrapper
                            .invoke("add", &[BeanValue::Int(1)], &[TypeName::INT])
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(
            wrapper.get_attribute("count").unwrap(),
            BeanValue::Int(400)
        );
    }

    #[test]
    fn debug_impl() {
        let (wrapper, _) = counter_wrapper();
        let rendered = format!("{wrapper:?}");
        assert!(rendered.contains("BeanWrapper"));
        assert!(rendered.contains("Counter"));
    }
}
