//! Attribute assembly.
//!
//! Consumes the attribute-marked methods of a declaration and merges
//! getter/setter pairs into attribute descriptors plus the dispatch index.
//!
//! # Merge rules
//!
//! Methods merge under the name derived from the raw method name, so
//! `getLevel` and `setLevel` form one attribute. The first-processed
//! method of a pair fixes the display name and the sort value; a later
//! method that declares a conflicting explicit name is silently ignored.
//! Descriptions backfill: the first non-empty description wins, in
//! declaration order. This mirrors the tolerant merge behavior management
//! consoles have historically relied on; conflicts are not construction
//! errors.

use rustc_hash::FxHashMap;

use mbean_core::{Access, AttributeInfo, MethodDecl, MethodFn, MethodMarker, TypeName};

use crate::localize::Localizer;
use crate::scan::{MethodShape, classify, derived_name};

/// Dispatch entry for one attribute: the two accessor sides, either
/// possibly absent (never both).
#[derive(Debug, Clone)]
pub struct BeanAttribute {
    /// The getter, if the attribute is readable.
    pub getter: Option<MethodFn>,
    /// The setter, if the attribute is writable.
    pub setter: Option<MethodFn>,
}

/// Output of attribute assembly.
#[derive(Debug)]
pub struct AssembledAttributes {
    /// Attribute descriptors in discovery order.
    pub infos: Vec<AttributeInfo>,
    /// Dispatch index keyed by display name.
    pub index: FxHashMap<String, BeanAttribute>,
}

struct PendingAttribute {
    name: String,
    description: String,
    sort_value: String,
    boolean_style: bool,
    getter: Option<MethodFn>,
    setter: Option<MethodFn>,
    getter_type: Option<TypeName>,
    setter_type: Option<TypeName>,
}

/// Merge attribute-marked methods into descriptors and the dispatch index.
///
/// Methods that are not attribute-marked, and attribute-marked methods
/// that match neither accessor shape, are skipped silently. Zero
/// qualifying methods yield zero attributes.
pub fn assemble_attributes(methods: &[MethodDecl], text: &Localizer) -> AssembledAttributes {
    let mut discovery: Vec<String> = Vec::new();
    let mut pending: FxHashMap<String, PendingAttribute> = FxHashMap::default();

    for method in methods {
        let MethodMarker::Attribute(marker) = &method.marker else {
            continue;
        };
        let shape = classify(&method.name, method.params.len());
        if shape == MethodShape::Unrecognized {
            continue;
        }
        let key = derived_name(&method.name);

        let declared_name = text.resolve(&marker.name_key, &marker.name);
        let description = text.resolve(&marker.description_key, &marker.description);

        let entry = pending.entry(key.clone()).or_insert_with(|| {
            discovery.push(key);
            let name = if declared_name.is_empty() {
                derived_name(&method.name)
            } else {
                declared_name
            };
            PendingAttribute {
                name,
                description: String::new(),
                sort_value: marker.sort_value.clone(),
                boolean_style: false,
                getter: None,
                setter: None,
                getter_type: None,
                setter_type: None,
            }
        });
        if entry.description.is_empty() {
            entry.description = description;
        }
        match shape {
            MethodShape::Getter { boolean_style } => {
                entry.getter = Some(method.handler.clone());
                entry.getter_type = Some(method.return_type.clone());
                if boolean_style {
                    entry.boolean_style = true;
                }
            }
            MethodShape::Setter => {
                entry.setter = Some(method.handler.clone());
                entry.setter_type = Some(method.params[0].data_type.clone());
            }
            MethodShape::Unrecognized => unreachable!(),
        }
    }

    let mut infos = Vec::with_capacity(discovery.len());
    let mut index = FxHashMap::default();
    for key in discovery {
        let entry = pending.remove(&key).expect("pending entry for derived key");
        let mut access = Access::empty();
        if entry.getter.is_some() {
            access |= Access::READ;
        }
        if entry.setter.is_some() {
            access |= Access::WRITE;
        }
        // getter return type wins over the setter's parameter type
        let data_type = entry
            .getter_type
            .or(entry.setter_type)
            .expect("qualifying method recorded a value type");
        infos.push(AttributeInfo {
            name: entry.name.clone(),
            description: entry.description,
            data_type,
            access,
            boolean_style: entry.boolean_style,
            sort_value: entry.sort_value,
        });
        index.insert(
            entry.name,
            BeanAttribute {
                getter: entry.getter,
                setter: entry.setter,
            },
        );
    }

    AssembledAttributes { infos, index }
}
