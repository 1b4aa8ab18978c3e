//! Schema checks that serde cannot express.

use crate::config::EsmlinkConfig;
use crate::error::{ConfigError, Result};

/// Validate a deserialized configuration.
///
/// ```
/// use esmlink_config::{EsmlinkConfig, validate};
///
/// let mut config = EsmlinkConfig::default();
/// config.settings.log_level = Some("loud".into());
/// assert!(validate(&config).is_err());
/// ```
pub fn validate(config: &EsmlinkConfig) -> Result<()> {
    config.log_level()?;

    let entries = &config.link.entries;
    for (index, entry) in entries.iter().enumerate() {
        if entries[..index].contains(entry) {
            return Err(ConfigError::invalid(
                "link.entries",
                format!("'{entry}' is listed more than once"),
            ));
        }
    }

    Ok(())
}
