use rustc_hash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::export::ExportEntry;
use crate::import::ImportDeclaration;
use crate::module_id::ModuleId;
use crate::options::InteropOptions;
use crate::value::Value;

/// Module definition format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    /// ECMAScript module with static export declarations.
    #[default]
    Esm,
    /// CommonJS module whose exports are the `module.exports` value.
    #[serde(alias = "cjs")]
    CommonJs,
}

/// Resolved, evaluated representation of a module's exports.
///
/// A record always exports `default`: when the module declares none, the
/// default export is `undefined`.
#[derive(Debug, Clone)]
pub struct ModuleRecord {
    id: ModuleId,
    format: ModuleFormat,
    /// Named entries in declaration order (star exports excluded).
    entries: Vec<ExportEntry>,
    /// Export name -> position in `entries`.
    index: HashMap<String, usize>,
    star_exports: Vec<ModuleId>,
    imports: Vec<ImportDeclaration>,
    has_explicit_default: bool,
}

impl ModuleRecord {
    /// Create a new record builder for an ES module.
    pub fn builder(id: ModuleId) -> ModuleRecordBuilder {
        ModuleRecordBuilder {
            id,
            format: ModuleFormat::Esm,
            entries: Vec::new(),
            star_exports: Vec::new(),
            imports: Vec::new(),
        }
    }

    /// Create a builder for a CommonJS module whose `module.exports` is
    /// `module_exports`.
    ///
    /// The default export is `module_exports` itself (same identity) unless
    /// `cjs_interop` is on and the object is flagged `__esModule`, in which
    /// case its `default` property is used. With `cjs_named_exports`, every
    /// other own property becomes a named export.
    pub fn commonjs(
        id: ModuleId,
        module_exports: Value,
        options: &InteropOptions,
    ) -> ModuleRecordBuilder {
        let mut builder = Self::builder(id);
        builder.format = ModuleFormat::CommonJs;

        let Some(object) = module_exports.as_object().cloned() else {
            return builder.default_export(module_exports);
        };

        let is_es_module = matches!(object.get("__esModule"), Some(Value::Bool(true)));
        let default = match object.get("default") {
            Some(value) if options.cjs_interop && is_es_module => value.clone(),
            _ => module_exports,
        };
        builder = builder.default_export(default);

        if options.cjs_named_exports {
            for (name, value) in object.iter() {
                if name == "default" || (is_es_module && name == "__esModule") {
                    continue;
                }
                builder = builder.export(name, value.clone());
            }
        }

        builder
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    pub fn format(&self) -> ModuleFormat {
        self.format
    }

    /// Whether the module declared a default export itself.
    pub fn has_explicit_default(&self) -> bool {
        self.has_explicit_default
    }

    /// The default export, `undefined` if none was declared.
    pub fn default_export(&self) -> &Value {
        static UNDEFINED: Value = Value::Undefined;
        self.local_export("default").unwrap_or(&UNDEFINED)
    }

    /// Value of a locally declared export.
    pub fn local_export(&self, name: &str) -> Option<&Value> {
        match self.entry(name)? {
            ExportEntry::Local { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Named export entry, local or re-exported.
    pub fn entry(&self, name: &str) -> Option<&ExportEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    /// Named export entries in declaration order, `default` included.
    pub fn entries(&self) -> impl Iterator<Item = &ExportEntry> {
        self.entries.iter()
    }

    /// Sources of `export * from` declarations in declaration order.
    pub fn star_exports(&self) -> &[ModuleId] {
        &self.star_exports
    }

    pub fn imports(&self) -> &[ImportDeclaration] {
        &self.imports
    }

    /// Every module this record links against, sorted and deduplicated.
    pub fn dependencies(&self) -> Vec<ModuleId> {
        let mut deps: Vec<ModuleId> = self
            .imports
            .iter()
            .map(|import| import.source.clone())
            .chain(self.entries.iter().filter_map(|e| e.source().cloned()))
            .chain(self.star_exports.iter().cloned())
            .collect();
        deps.sort();
        deps.dedup();
        deps
    }
}

/// Builder for `ModuleRecord` to avoid long argument lists in constructors.
pub struct ModuleRecordBuilder {
    id: ModuleId,
    format: ModuleFormat,
    entries: Vec<ExportEntry>,
    star_exports: Vec<ModuleId>,
    imports: Vec<ImportDeclaration>,
}

impl ModuleRecordBuilder {
    /// `export const name = value`
    pub fn export(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push(ExportEntry::Local {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// `export default value`
    pub fn default_export(self, value: impl Into<Value>) -> Self {
        self.export("default", value)
    }

    /// `export { imported as name } from 'from'`
    pub fn re_export(
        mut self,
        name: impl Into<String>,
        from: ModuleId,
        imported: impl Into<String>,
    ) -> Self {
        self.entries.push(ExportEntry::Indirect {
            name: name.into(),
            from,
            imported: imported.into(),
        });
        self
    }

    /// `export * as name from 'from'`
    pub fn namespace_re_export(mut self, name: impl Into<String>, from: ModuleId) -> Self {
        self.entries.push(ExportEntry::Namespace {
            name: name.into(),
            from,
        });
        self
    }

    /// `export * from 'from'`
    pub fn star_export(mut self, from: ModuleId) -> Self {
        self.star_exports.push(from);
        self
    }

    pub fn import(mut self, import: ImportDeclaration) -> Self {
        self.imports.push(import);
        self
    }

    pub fn imports(mut self, imports: impl IntoIterator<Item = ImportDeclaration>) -> Self {
        self.imports.extend(imports);
        self
    }

    pub fn format(mut self, format: ModuleFormat) -> Self {
        self.format = format;
        self
    }

    /// Validate export names and produce the record.
    pub fn build(self) -> Result<ModuleRecord> {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        let mut index = HashMap::default();

        for entry in self.entries {
            let name = entry.name();
            if index.contains_key(name) {
                return Err(Error::DuplicateExport {
                    module_id: self.id,
                    name: name.to_string(),
                });
            }
            index.insert(name.to_string(), entries.len());
            entries.push(entry);
        }

        let has_explicit_default = index.contains_key("default");
        if !has_explicit_default {
            index.insert("default".to_string(), entries.len());
            entries.push(ExportEntry::Local {
                name: "default".to_string(),
                value: Value::Undefined,
            });
        }

        Ok(ModuleRecord {
            id: self.id,
            format: self.format,
            entries,
            index,
            star_exports: self.star_exports,
            imports: self.imports,
            has_explicit_default,
        })
    }
}
