//! esmlink CLI - link ES module graphs and inspect module namespace objects.
//!
//! # Architecture
//!
//! - [`cli`] - clap definitions
//! - [`commands`] - `link`, `namespace`, `check` and `config`
//! - [`error`] - `CliError` and its miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - terminal output

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
