//! Check command implementation.
//!
//! Links every module and builds every namespace, so defects in modules no
//! entry imports are reported too.

use esmlink_config::EsmlinkConfig;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Errors
///
/// Returns the first link error: missing module, missing export, ambiguous
/// or circular re-export, duplicate binding.
pub fn execute(args: CheckArgs, config: &EsmlinkConfig) -> Result<()> {
    ui::info(&format!("Checking {}...", args.manifest.display()));

    let (_, graph) = utils::load_graph(&args.manifest, &config.interop)?;
    let linked = graph.linker().link_all()?;

    let resolver = graph.resolver();
    for module_id in graph.registry.ids() {
        resolver.resolve_namespace(&module_id)?;
    }

    if linked.binding_count() == 0 {
        ui::warning("No import declarations found");
    }

    ui::success(&format!(
        "{} modules linked, {} bindings resolved",
        linked.order.len(),
        linked.binding_count()
    ));
    Ok(())
}
