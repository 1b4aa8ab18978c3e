//! Namespace command implementation.

use esmlink_config::EsmlinkConfig;

use crate::cli::NamespaceArgs;
use crate::commands::{report, utils};
use crate::error::Result;
use crate::ui;

/// Execute the namespace command.
pub fn execute(args: NamespaceArgs, config: &EsmlinkConfig) -> Result<()> {
    let (_, graph) = utils::load_graph(&args.manifest, &config.interop)?;
    let namespace = graph.resolver().resolve_namespace(&args.module)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report::namespace_to_json(&namespace))?);
    } else {
        ui::print_namespace(&namespace);
    }

    Ok(())
}
