use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const VIRTUAL_PREFIX: &str = "virtual:";

/// Canonical identifier for a module record.
///
/// Ids arrive already resolved by the loader, so construction only cleans the
/// path lexically (`./a/../b.js` and `b.js` name the same module) and never
/// touches the filesystem. Virtual ids (`virtual:...`, `\0...`) are kept
/// verbatim apart from prefix normalisation.
///
/// Ids are ordered so that link order can be made deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(PathBuf);

impl ModuleId {
    /// Create a module identifier from a resolved path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ModuleIdError> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(ModuleIdError::EmptyPath);
        }

        if looks_like_virtual(path) {
            return Ok(Self(normalize_virtual(path)));
        }

        let cleaned = path.clean();
        if cleaned == Path::new(".") {
            return Err(ModuleIdError::NoModulePath {
                path: path.to_path_buf(),
            });
        }

        Ok(Self(cleaned))
    }

    /// Create a module identifier for a virtual module (e.g. `virtual:entry`).
    pub fn new_virtual(id: impl Into<String>) -> Self {
        let id = id.into();

        if id.is_empty() {
            return Self(PathBuf::from(VIRTUAL_PREFIX));
        }

        let normalized = if id.starts_with(VIRTUAL_PREFIX) {
            id
        } else {
            format!("{VIRTUAL_PREFIX}{id}")
        };

        Self(PathBuf::from(normalized))
    }

    /// Returns the underlying path representation.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Returns `true` if the identifier represents a virtual module.
    pub fn is_virtual(&self) -> bool {
        self.path_string().starts_with(VIRTUAL_PREFIX)
    }

    /// Borrow the identifier as a string for logging/serialization.
    pub fn path_string(&self) -> Cow<'_, str> {
        self.0.to_string_lossy()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_string())
    }
}

impl Serialize for ModuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.path_string())
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ModuleId::new(value).map_err(serde::de::Error::custom)
    }
}

/// Error type for `ModuleId` construction failures.
#[derive(Debug, Error)]
pub enum ModuleIdError {
    /// The provided path was empty.
    #[error("module id path is empty")]
    EmptyPath,

    /// The path cleans down to the current directory and names no module.
    #[error("module id '{}' does not name a module", .path.display())]
    NoModulePath { path: PathBuf },
}

fn looks_like_virtual(path: &Path) -> bool {
    let text = path.to_string_lossy();
    text.starts_with(VIRTUAL_PREFIX) || text.starts_with('\0')
}

fn normalize_virtual(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    if text.starts_with(VIRTUAL_PREFIX) {
        PathBuf::from(text.into_owned())
    } else {
        let trimmed = text.trim_start_matches('\0');
        PathBuf::from(format!("{VIRTUAL_PREFIX}{trimmed}"))
    }
}
