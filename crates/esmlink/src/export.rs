use crate::module_id::ModuleId;
use crate::value::Value;

/// Export declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    /// `export const name = ...`
    Named,
    /// `export default ...`
    Default,
    /// `export { imported as name } from './module'`
    ReExport,
    /// `export * as name from './module'`
    NamespaceReExport,
}

/// One named export declaration of a module record.
///
/// `export * from` has no single name and is kept on the record as a list of
/// star-export sources instead.
#[derive(Debug, Clone)]
pub enum ExportEntry {
    /// Local binding, including the default export.
    Local { name: String, value: Value },
    /// Named re-export of `imported` from `from`, exposed as `name`.
    Indirect {
        name: String,
        from: ModuleId,
        imported: String,
    },
    /// The whole namespace of `from`, exposed as `name`.
    Namespace { name: String, from: ModuleId },
}

impl ExportEntry {
    pub fn kind(&self) -> ExportKind {
        match self {
            Self::Local { name, .. } if name == "default" => ExportKind::Default,
            Self::Local { .. } => ExportKind::Named,
            Self::Indirect { .. } => ExportKind::ReExport,
            Self::Namespace { .. } => ExportKind::NamespaceReExport,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Local { name, .. }
            | Self::Indirect { name, .. }
            | Self::Namespace { name, .. } => name,
        }
    }

    /// Module the export is forwarded from, if any.
    pub fn source(&self) -> Option<&ModuleId> {
        match self {
            Self::Local { .. } => None,
            Self::Indirect { from, .. } | Self::Namespace { from, .. } => Some(from),
        }
    }
}
