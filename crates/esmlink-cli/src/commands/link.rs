//! Link command implementation.

use esmlink::ModuleId;
use esmlink_config::EsmlinkConfig;

use crate::cli::LinkArgs;
use crate::commands::{report, utils};
use crate::error::Result;
use crate::ui;

/// Execute the link command.
///
/// Entries are taken from the first non-empty source: `--entry` flags, the
/// manifest's `entries`, `link.entries` from config, every module.
pub fn execute(args: LinkArgs, config: &EsmlinkConfig) -> Result<()> {
    let (manifest, graph) = utils::load_graph(&args.manifest, &config.interop)?;

    let entries: Vec<ModuleId> = if !args.entries.is_empty() {
        args.entries
    } else if !manifest.entries.is_empty() {
        graph.entries.clone()
    } else if !config.link.entries.is_empty() {
        config.link.entries.clone()
    } else {
        graph.entries.clone()
    };

    let linked = graph.linker().link(&entries)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report::linked_to_json(&linked))?);
    } else {
        ui::print_linked(&linked);
        ui::success(&format!(
            "Linked {} modules ({} bindings, {} namespaces)",
            linked.order.len(),
            linked.binding_count(),
            graph.cache.len()
        ));
    }

    Ok(())
}
