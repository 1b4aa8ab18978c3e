//! Top-level configuration structure.

use esmlink::{InteropOptions, ModuleId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::settings::{GlobalSettings, LogLevel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EsmlinkConfig {
    #[serde(default)]
    pub interop: InteropOptions,

    #[serde(default)]
    pub link: LinkSettings,

    #[serde(default)]
    pub settings: GlobalSettings,
}

/// Defaults for `esmlink link`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkSettings {
    /// Entry modules used when a manifest names none and none are passed on
    /// the command line.
    #[serde(default)]
    pub entries: Vec<ModuleId>,
}

impl EsmlinkConfig {
    /// Create from a JSON value (for programmatic config).
    ///
    /// # Example
    ///
    /// ```
    /// use esmlink_config::EsmlinkConfig;
    /// use serde_json::json;
    ///
    /// let config = EsmlinkConfig::from_value(json!({
    ///     "interop": { "cjs_named_exports": false }
    /// }))
    /// .unwrap();
    /// assert!(!config.interop.cjs_named_exports);
    /// assert!(config.interop.cjs_interop);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid("config", e.to_string()))
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::invalid("config", e.to_string()))
    }

    /// Render as `esmlink.toml` content.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::invalid("config", e.to_string()))
    }

    /// Configured log level, `info` when unset.
    pub fn log_level(&self) -> Result<LogLevel> {
        match &self.settings.log_level {
            Some(level) => level
                .parse()
                .map_err(|hint: String| ConfigError::invalid("settings.log_level", hint)),
            None => Ok(LogLevel::default()),
        }
    }
}
