//! Command implementations for the esmlink CLI.
//!
//! Each command has its own module with an `execute` function taking the
//! parsed arguments and the resolved configuration.

pub mod check;
pub mod config;
pub mod link;
pub mod namespace;
pub(crate) mod report;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use link::execute as link_execute;
pub use namespace::execute as namespace_execute;
pub use utils::load_config;
