//! Module graphs described as data.
//!
//! A manifest is what a loader hands over after resolving specifiers and
//! evaluating module bodies: one entry per module with its exports and its
//! import declarations. The CLI reads manifests from JSON or TOML.
//!
//! ```json
//! {
//!   "entries": ["main.js"],
//!   "modules": [
//!     { "id": "abc.js", "exports": { "a": "a" }, "default": { "a": "a" } },
//!     {
//!       "id": "main.js",
//!       "imports": [
//!         { "source": "abc.js", "specifiers": [{ "kind": "namespace", "local": "ns" }] }
//!       ]
//!     }
//!   ]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cache::NamespaceCache;
use crate::error::Result;
use crate::import::ImportDeclaration;
use crate::link::Linker;
use crate::module_id::ModuleId;
use crate::options::InteropOptions;
use crate::record::{ModuleFormat, ModuleRecord};
use crate::registry::ModuleRegistry;
use crate::resolver::Resolver;
use crate::value::Value;

/// A whole module graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphManifest {
    /// Modules to link from. Empty means every module.
    pub entries: Vec<ModuleId>,
    pub modules: Vec<ModuleManifest>,
}

/// One module of a [`GraphManifest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    pub id: ModuleId,

    #[serde(default)]
    pub format: ModuleFormat,

    /// Local named exports (ES modules only).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub exports: IndexMap<String, serde_json::Value>,

    /// `export default` value (ES modules only). Absent means `undefined`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reexports: Vec<ReExportManifest>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub star_exports: Vec<ModuleId>,

    /// `module.exports` of a CommonJS module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_exports: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<ImportDeclaration>,
}

/// `export { imported as name } from 'from'`, or `export * as name from 'from'`
/// when `namespace` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReExportManifest {
    pub name: String,
    pub from: ModuleId,
    /// Defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<String>,
    #[serde(default)]
    pub namespace: bool,
}

impl ModuleManifest {
    /// Build the module record.
    ///
    /// CommonJS modules take their exports from `module_exports`; `exports`
    /// and `default` only apply to ES modules.
    pub fn to_record(&self, options: &InteropOptions) -> Result<ModuleRecord> {
        let mut builder = match self.format {
            ModuleFormat::CommonJs => {
                if !self.exports.is_empty() || self.default.is_some() {
                    tracing::warn!(
                        module = %self.id,
                        "ignoring `exports`/`default` on a CommonJS module; use `module_exports`"
                    );
                }
                let module_exports = self
                    .module_exports
                    .clone()
                    .map(Value::from)
                    .unwrap_or_else(|| Value::object(Vec::<(String, Value)>::new()));
                ModuleRecord::commonjs(self.id.clone(), module_exports, options)
            }
            ModuleFormat::Esm => {
                let mut builder = ModuleRecord::builder(self.id.clone());
                for (name, value) in &self.exports {
                    builder = builder.export(name, Value::from(value.clone()));
                }
                if let Some(default) = &self.default {
                    builder = builder.default_export(Value::from(default.clone()));
                }
                builder
            }
        };

        for re_export in &self.reexports {
            builder = if re_export.namespace {
                builder.namespace_re_export(&re_export.name, re_export.from.clone())
            } else {
                let imported = re_export.imported.as_deref().unwrap_or(&re_export.name);
                builder.re_export(&re_export.name, re_export.from.clone(), imported)
            };
        }
        for star in &self.star_exports {
            builder = builder.star_export(star.clone());
        }

        builder.imports(self.imports.iter().cloned()).build()
    }
}

impl GraphManifest {
    /// Register every module and check that the entries exist.
    pub fn load(&self, options: &InteropOptions) -> Result<LoadedGraph> {
        let registry = ModuleRegistry::new();
        for module in &self.modules {
            registry.register(module.to_record(options)?)?;
        }

        let entries = if self.entries.is_empty() {
            registry.ids()
        } else {
            for entry in &self.entries {
                registry.get(entry)?;
            }
            self.entries.clone()
        };

        tracing::debug!(
            modules = registry.len(),
            entries = entries.len(),
            "loaded module graph"
        );

        Ok(LoadedGraph {
            registry,
            cache: NamespaceCache::new(),
            entries,
        })
    }
}

/// A registered graph together with the cache its namespaces are published to.
#[derive(Debug)]
pub struct LoadedGraph {
    pub registry: ModuleRegistry,
    pub cache: NamespaceCache,
    pub entries: Vec<ModuleId>,
}

impl LoadedGraph {
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry, &self.cache)
    }

    pub fn linker(&self) -> Linker<'_> {
        Linker::new(&self.registry, &self.cache)
    }
}
