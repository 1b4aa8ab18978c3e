//! Configuration for esmlink.
//!
//! Settings are layered with `figment`: built-in defaults, then
//! `esmlink.toml` (discovered in a root directory or given explicitly), then
//! `ESMLINK_` environment variables with `__` separating nested keys, e.g.
//! `ESMLINK_SETTINGS__LOG_LEVEL=debug` or `ESMLINK_INTEROP__CJS_INTEROP=false`.

pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod validation;

pub use config::*;
pub use error::*;
pub use settings::*;

pub use discovery::{CONFIG_FILE_NAME, ConfigDiscovery, ENV_PREFIX, discover};
pub use esmlink::InteropOptions;
pub use validation::validate;
