use serde::{Deserialize, Serialize};

use super::ModuleId;

/// Individual import binding from a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImportSpecifier {
    /// `import * as local from 'mod'`
    Namespace { local: String },
    /// `import local from 'mod'`
    Default { local: String },
    /// `import { imported as local } from 'mod'`
    ///
    /// `imported == "default"` is the `{ default as local }` form.
    Named { imported: String, local: String },
}

impl ImportSpecifier {
    pub fn namespace(local: impl Into<String>) -> Self {
        Self::Namespace {
            local: local.into(),
        }
    }

    pub fn default(local: impl Into<String>) -> Self {
        Self::Default {
            local: local.into(),
        }
    }

    /// `import { name } from 'mod'`
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::Named {
            imported: name.clone(),
            local: name,
        }
    }

    /// `import { imported as local } from 'mod'`
    pub fn aliased(imported: impl Into<String>, local: impl Into<String>) -> Self {
        Self::Named {
            imported: imported.into(),
            local: local.into(),
        }
    }

    /// The identifier bound in the importing module.
    pub fn local(&self) -> &str {
        match self {
            Self::Namespace { local } | Self::Default { local } | Self::Named { local, .. } => {
                local
            }
        }
    }
}

/// One static `import` declaration, already resolved to a module id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    pub source: ModuleId,
    #[serde(default)]
    pub specifiers: Vec<ImportSpecifier>,
}

impl ImportDeclaration {
    pub fn new(source: ModuleId, specifiers: Vec<ImportSpecifier>) -> Self {
        Self { source, specifiers }
    }

    /// Returns `true` for side-effect-only imports (`import 'polyfill'`).
    pub fn is_side_effect_only(&self) -> bool {
        self.specifiers.is_empty()
    }
}
