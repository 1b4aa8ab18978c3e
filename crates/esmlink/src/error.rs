//! Error types for module registration, resolution and linking.

use thiserror::Error;

use crate::module_id::{ModuleId, ModuleIdError};

/// Result type alias for esmlink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Link-time errors.
///
/// Every variant is a static defect in the module graph: none of them is
/// retried or recovered locally, and no partially linked state is returned
/// alongside them.
#[derive(Debug, Error)]
pub enum Error {
    /// No record is registered under the module id.
    #[error("module not found: {module_id}")]
    ModuleNotFound { module_id: ModuleId },

    /// The module is registered but does not export `name`.
    #[error("module '{module_id}' does not provide an export named '{name}'")]
    ExportNotFound { module_id: ModuleId, name: String },

    /// Two star exports provide `name` from different bindings.
    #[error("export '{name}' of module '{module_id}' is ambiguous between star exports")]
    AmbiguousExport { module_id: ModuleId, name: String },

    /// Resolving `name` re-entered itself through re-exports.
    #[error("export '{name}' of module '{module_id}' resolves circularly through re-exports")]
    CircularReExport { module_id: ModuleId, name: String },

    /// Namespace re-exports (`export * as ns from`) form a cycle.
    #[error("namespace of '{module_id}' contains itself through `export * as` re-exports")]
    CircularNamespace { module_id: ModuleId },

    /// A record with this id was already registered.
    #[error("module '{module_id}' is already registered")]
    DuplicateModule { module_id: ModuleId },

    /// The module declares the same export name twice.
    #[error("duplicate export '{name}' in module '{module_id}'")]
    DuplicateExport { module_id: ModuleId, name: String },

    /// The importer binds the same local identifier twice.
    #[error("identifier '{local}' has already been declared in module '{module_id}'")]
    DuplicateBinding { module_id: ModuleId, local: String },

    /// A module id in loader input could not be constructed.
    #[error("invalid module id: {0}")]
    InvalidModuleId(#[from] ModuleIdError),
}

impl Error {
    pub(crate) fn module_not_found(module_id: &ModuleId) -> Self {
        Self::ModuleNotFound {
            module_id: module_id.clone(),
        }
    }

    pub(crate) fn export_not_found(module_id: &ModuleId, name: impl Into<String>) -> Self {
        Self::ExportNotFound {
            module_id: module_id.clone(),
            name: name.into(),
        }
    }

    /// The module id this error is about.
    pub fn module_id(&self) -> Option<&ModuleId> {
        match self {
            Self::ModuleNotFound { module_id }
            | Self::ExportNotFound { module_id, .. }
            | Self::AmbiguousExport { module_id, .. }
            | Self::CircularReExport { module_id, .. }
            | Self::CircularNamespace { module_id }
            | Self::DuplicateModule { module_id }
            | Self::DuplicateExport { module_id, .. }
            | Self::DuplicateBinding { module_id, .. } => Some(module_id),
            Self::InvalidModuleId(_) => None,
        }
    }
}
