//! Operation assembly.
//!
//! Consumes the operation-marked methods of a declaration and produces
//! operation descriptors plus the name-to-overloads dispatch index.

use rustc_hash::FxHashMap;

use mbean_core::{MethodDecl, MethodFn, MethodMarker, OperationInfo, ParameterInfo, TypeName};

use crate::localize::Localizer;

/// One registered overload: its ordered parameter signature and the
/// callable to dispatch to.
#[derive(Debug, Clone)]
pub struct OperationSlot {
    /// Ordered parameter type identifiers.
    pub signature: Vec<TypeName>,
    /// The callable performing the operation.
    pub handler: MethodFn,
}

/// Output of operation assembly.
#[derive(Debug)]
pub struct AssembledOperations {
    /// Operation descriptors in discovery order.
    pub infos: Vec<OperationInfo>,
    /// Dispatch index: operation name to its registered overloads.
    pub index: FxHashMap<String, Vec<OperationSlot>>,
}

/// Assemble operation-marked methods into descriptors and the dispatch
/// index.
///
/// The display name defaults to the raw method name. Parameters default to
/// `param1`, `param2`, ... with empty descriptions; only parameters that
/// carry a marker are renamed or described. A later registration with the
/// same name and signature replaces the earlier slot in the dispatch index
/// (the descriptor list keeps both entries).
pub fn assemble_operations(methods: &[MethodDecl], text: &Localizer) -> AssembledOperations {
    let mut infos = Vec::new();
    let mut index: FxHashMap<String, Vec<OperationSlot>> = FxHashMap::default();

    for method in methods {
        let MethodMarker::Operation(marker) = &method.marker else {
            continue;
        };

        let mut name = text.resolve(&marker.name_key, &marker.name);
        if name.is_empty() {
            name = method.name.clone();
        }
        let description = text.resolve(&marker.description_key, &marker.description);

        let mut params = Vec::with_capacity(method.params.len());
        for (position, param) in method.params.iter().enumerate() {
            let default_name = format!("param{}", position + 1);
            let (param_name, param_description) = match &param.marker {
                Some(marker) => {
                    let declared = text.resolve(&marker.name_key, &marker.name);
                    let name = if declared.is_empty() {
                        default_name
                    } else {
                        declared
                    };
                    (
                        name,
                        text.resolve(&marker.description_key, &marker.description),
                    )
                }
                None => (default_name, String::new()),
            };
            params.push(ParameterInfo {
                name: param_name,
                description: param_description,
                data_type: param.data_type.clone(),
            });
        }

        let signature: Vec<TypeName> = method
            .params
            .iter()
            .map(|p| p.data_type.clone())
            .collect();

        infos.push(OperationInfo {
            name: name.clone(),
            description,
            return_type: method.return_type.clone(),
            params,
            impact: marker.impact,
            sort_value: marker.sort_value.clone(),
        });

        let slots = index.entry(name).or_default();
        let slot = OperationSlot {
            signature,
            handler: method.handler.clone(),
        };
        // duplicate (name, signature): the later registration shadows
        match slots.iter_mut().find(|s| s.signature == slot.signature) {
            Some(existing) => *existing = slot,
            None => slots.push(slot),
        }
    }

    AssembledOperations { infos, index }
}
