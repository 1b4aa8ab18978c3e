//! Miette diagnostic conversion for CLI errors.

use esmlink::Error as LinkError;
use esmlink_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Link(e) => link_error_to_miette(e),
        CliError::Config(ConfigError::InvalidValue { field, hint }) => miette::miette!(
            help = hint.unwrap_or_else(|| "Check esmlink.toml and ESMLINK_* variables".to_string()),
            "Invalid configuration value for '{}'",
            field
        ),
        CliError::Config(ConfigError::FileNotFound(path)) => miette::miette!(
            help = "Pass an existing file to --config or drop the flag to use ./esmlink.toml",
            "Config file not found: {}",
            path.display()
        ),
        CliError::Manifest { path, message } => miette::miette!(
            help = "Manifests are JSON (or TOML for .toml files) with `entries` and `modules`",
            "Invalid manifest {}: {}",
            path.display(),
            message
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path, it is resolved against the current directory",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a link-time error to a miette Report with a hint.
pub fn link_error_to_miette(err: LinkError) -> Report {
    let help = match &err {
        LinkError::ModuleNotFound { .. } => {
            "Add the module to the manifest's `modules`, or fix the import source"
        }
        LinkError::ExportNotFound { .. } => {
            "Export the name from the module, or import the default export instead"
        }
        LinkError::AmbiguousExport { .. } => {
            "Two `export *` declarations provide this name; re-export it explicitly"
        }
        LinkError::CircularReExport { .. } => "Break the `export { .. } from` cycle",
        LinkError::CircularNamespace { .. } => {
            "esmlink does not link `export * as` cycles; re-export the names explicitly"
        }
        LinkError::DuplicateModule { .. } => "Each module id may appear once in `modules`",
        LinkError::DuplicateExport { .. } => {
            "Remove the duplicate, or drop `default` from `exports` when `default` is set"
        }
        LinkError::DuplicateBinding { .. } => "Rename one of the imports with `as`",
        LinkError::InvalidModuleId(_) => "Module ids are non-empty resolved paths",
    };

    let code = match &err {
        LinkError::ModuleNotFound { .. } => "esmlink::module_not_found",
        LinkError::ExportNotFound { .. } => "esmlink::export_not_found",
        LinkError::AmbiguousExport { .. } => "esmlink::ambiguous_export",
        LinkError::CircularReExport { .. } => "esmlink::circular_reexport",
        LinkError::CircularNamespace { .. } => "esmlink::circular_namespace",
        LinkError::DuplicateModule { .. } => "esmlink::duplicate_module",
        LinkError::DuplicateExport { .. } => "esmlink::duplicate_export",
        LinkError::DuplicateBinding { .. } => "esmlink::duplicate_binding",
        LinkError::InvalidModuleId(_) => "esmlink::invalid_module_id",
    };

    miette::miette!(code = code, help = help, "{}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use esmlink::ModuleId;

    #[test]
    fn test_link_error_keeps_message_and_adds_help() {
        let err = LinkError::ExportNotFound {
            module_id: ModuleId::new("abc.js").unwrap(),
            name: "missing".to_string(),
        };
        let report = link_error_to_miette(err);

        assert_eq!(
            report.to_string(),
            "module 'abc.js' does not provide an export named 'missing'"
        );
        let help = report.help().map(|h| h.to_string()).unwrap();
        assert!(help.contains("Export the name"));
    }

    #[test]
    fn test_circular_namespace_help_names_esmlink() {
        let report = link_error_to_miette(LinkError::CircularNamespace {
            module_id: ModuleId::new("self.js").unwrap(),
        });

        let help = report.help().map(|h| h.to_string()).unwrap();
        assert!(help.starts_with("esmlink does not link"));
        assert!(report.code().is_some_and(|c| c.to_string() == "esmlink::circular_namespace"));
    }

    #[test]
    fn test_manifest_error_has_help() {
        let report = cli_error_to_miette(CliError::Manifest {
            path: "graph.json".into(),
            message: "expected value".to_string(),
        });
        assert!(report.to_string().contains("graph.json"));
        assert!(report.help().is_some());
    }
}
