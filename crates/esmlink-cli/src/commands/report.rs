//! JSON reports for `--json` output.

use esmlink::{Binding, LinkedGraph, Namespace, Value};
use serde_json::{Map, Value as Json, json};

pub(crate) fn binding_to_json(binding: &Binding) -> Json {
    match binding {
        Binding::Namespace(namespace) => json!({
            "kind": "namespace",
            "source": namespace.module_id(),
            "namespace": namespace.id().index(),
        }),
        Binding::Export {
            source,
            imported,
            value,
        } => json!({
            "kind": if imported == "default" { "default" } else { "named" },
            "source": source,
            "imported": imported,
            "value": value.to_json(),
        }),
    }
}

pub(crate) fn linked_to_json(graph: &LinkedGraph) -> Json {
    let modules: Map<String, Json> = graph
        .modules
        .iter()
        .map(|(module_id, bindings)| {
            let bindings: Map<String, Json> = bindings
                .iter()
                .map(|(local, binding)| (local.to_string(), binding_to_json(binding)))
                .collect();
            (module_id.to_string(), Json::Object(bindings))
        })
        .collect();

    json!({
        "order": graph.order,
        "modules": modules,
    })
}

pub(crate) fn namespace_to_json(namespace: &Namespace) -> Json {
    json!({
        "module": namespace.module_id(),
        "keys": namespace.keys().collect::<Vec<_>>(),
        "exports": Value::Namespace(namespace.clone()).to_json(),
    })
}
