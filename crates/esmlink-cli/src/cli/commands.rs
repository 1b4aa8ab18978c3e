use std::path::PathBuf;

use clap::{Args, Subcommand};
use esmlink::ModuleId;

use crate::cli::validation::parse_module_id;

/// Available esmlink subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Link a module graph
    ///
    /// Prints the link order and, for every module, the binding each local
    /// import name resolved to.
    Link(LinkArgs),

    /// Print a module's namespace object
    Namespace(NamespaceArgs),

    /// Link every module in a manifest
    ///
    /// Exits non-zero with a diagnostic on the first unresolved module,
    /// missing export, ambiguous or circular re-export.
    Check(CheckArgs),

    /// Print the resolved configuration
    Config(ConfigArgs),
}

/// Arguments for the link command
#[derive(Args, Debug)]
pub struct LinkArgs {
    /// Module graph manifest (.json or .toml)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Entry module to link from (repeatable)
    ///
    /// Overrides the manifest's `entries` and `link.entries` from config.
    #[arg(short, long = "entry", value_name = "MODULE", value_parser = parse_module_id)]
    pub entries: Vec<ModuleId>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the namespace command
#[derive(Args, Debug)]
pub struct NamespaceArgs {
    /// Module graph manifest (.json or .toml)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Module id whose namespace to print
    #[arg(value_name = "MODULE", value_parser = parse_module_id)]
    pub module: ModuleId,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Module graph manifest (.json or .toml)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print JSON instead of TOML
    #[arg(long)]
    pub json: bool,
}
