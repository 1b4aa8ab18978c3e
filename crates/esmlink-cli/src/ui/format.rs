//! Human-readable reports.

use esmlink::{Binding, LinkedGraph, Namespace, Value};
use owo_colors::OwoColorize;

fn heading(text: &str) -> String {
    if super::colors_enabled() {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

/// One line per binding: `local = form from 'source' -> value`.
///
/// Namespace bindings print as `[Module source]` rather than their contents.
pub fn format_binding(local: &str, binding: &Binding) -> String {
    let value = match binding {
        Binding::Namespace(namespace) => format!("[Module {}]", namespace.module_id()),
        Binding::Export { value, .. } => value.to_string(),
    };
    format!(
        "{local} = {} from '{}' -> {value}",
        binding.describe(),
        binding.source()
    )
}

/// Namespace keys and values, one per line, in namespace order.
pub fn format_namespace(namespace: &Namespace) -> Vec<String> {
    namespace
        .iter()
        .map(|(key, value)| match value {
            Value::Namespace(inner) => format!("{key}: [Module {}]", inner.module_id()),
            other => format!("{key}: {other}"),
        })
        .collect()
}

pub fn print_linked(graph: &LinkedGraph) {
    println!("{}", heading("Link order"));
    for (index, module_id) in graph.order.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, module_id);
    }

    for (module_id, bindings) in &graph.modules {
        if bindings.is_empty() {
            continue;
        }
        println!();
        println!("{}", heading(&module_id.to_string()));
        for (local, binding) in bindings.iter() {
            println!("  {}", format_binding(local, binding));
        }
    }
}

pub fn print_namespace(namespace: &Namespace) {
    println!("{}", heading(&format!("[Module {}]", namespace.module_id())));
    for line in format_namespace(namespace) {
        println!("  {line}");
    }
}
