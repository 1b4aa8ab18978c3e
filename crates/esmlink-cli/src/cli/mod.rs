//! Command-line interface definition for esmlink.
//!
//! # Command Structure
//!
//! - `esmlink link` - Link a module graph and print every binding
//! - `esmlink namespace` - Print one module's namespace object
//! - `esmlink check` - Link every module and report the first defect
//! - `esmlink config` - Print the resolved configuration

mod commands;
mod validation;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, LinkArgs, NamespaceArgs};
pub use validation::parse_module_id;

/// esmlink - ES module namespace resolution and linking
#[derive(Parser, Debug)]
#[command(
    name = "esmlink",
    version,
    about = "Link ES module graphs and inspect module namespace objects",
    long_about = "esmlink reads a module graph manifest (JSON or TOML), builds one namespace\n\
                  object per module and binds every import declaration against it."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of ./esmlink.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
