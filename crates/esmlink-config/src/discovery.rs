//! File-based config discovery and layering.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};

use crate::config::EsmlinkConfig;
use crate::error::{ConfigError, Result};
use crate::validation::validate;

pub const CONFIG_FILE_NAME: &str = "esmlink.toml";

/// Prefix of environment overrides. Nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "ESMLINK_";

/// Locates `esmlink.toml` and layers it between defaults and the environment.
///
/// # Example
///
/// ```no_run
/// use esmlink_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").resolve(None).unwrap();
/// println!("{:?}", config.interop);
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of `esmlink.toml` in the root directory, if present.
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Load the discovered file on top of defaults, without environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if there is no config file.
    pub fn load(&self) -> Result<EsmlinkConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        let config: EsmlinkConfig = Figment::new()
            .merge(Serialized::defaults(EsmlinkConfig::default()))
            .merge(Toml::file(&path))
            .extract()?;
        validate(&config)?;
        Ok(config)
    }

    /// Defaults, then `explicit` or the discovered file, then `ESMLINK_*`.
    ///
    /// A missing discovered file is not an error; a missing `explicit` file is.
    pub fn figment(&self, explicit: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(EsmlinkConfig::default()));

        let file = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => self.find(),
        };

        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extract and validate the layered configuration.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<EsmlinkConfig> {
        let config: EsmlinkConfig = self.figment(explicit)?.extract()?;
        validate(&config)?;
        Ok(config)
    }
}

/// Resolve configuration for the current directory.
pub fn discover() -> Result<EsmlinkConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).resolve(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_returns_none_when_no_config() {
        let dir = TempDir::new().unwrap();
        assert!(ConfigDiscovery::new(dir.path()).find().is_none());
    }

    #[test]
    fn load_returns_not_found_when_no_config() {
        let dir = TempDir::new().unwrap();
        let result = ConfigDiscovery::new(dir.path()).load();
        assert!(matches!(result.unwrap_err(), ConfigError::NotFound));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("other.toml");
        let err = ConfigDiscovery::new(dir.path())
            .figment(Some(&missing))
            .unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(path) if path == missing));
    }

    #[test]
    fn load_parses_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[interop]
cjs_interop = false

[link]
entries = ["./src/main.js"]
"#,
        )
        .unwrap();

        let config = ConfigDiscovery::new(dir.path()).load().unwrap();
        assert!(!config.interop.cjs_interop);
        assert!(config.interop.cjs_named_exports);
        assert_eq!(config.link.entries[0].to_string(), "src/main.js");
    }
}
