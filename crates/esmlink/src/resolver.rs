//! Module namespace resolution.
//!
//! Export resolution follows the ECMAScript `GetExportedNames` /
//! `ResolveExport` rules, so `export { x } from`, `export * as ns from` and
//! `export * from` chains resolve to the module that owns the binding.
//! Values are never copied out of that module's record: namespaces and
//! bindings alias the record's `Arc`-shared values.

use indexmap::IndexMap;
use rustc_hash::FxHashSet as HashSet;

use crate::cache::NamespaceCache;
use crate::error::{Error, Result};
use crate::export::ExportEntry;
use crate::module_id::ModuleId;
use crate::namespace::{Namespace, NamespaceId, code_unit_order};
use crate::record::ModuleRecord;
use crate::registry::ModuleRegistry;
use crate::value::Value;

/// Where an export name ultimately points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedBinding {
    /// Local export `name` declared by `module`.
    Local { module: ModuleId, name: String },
    /// The namespace object of `module` (`export * as name from`).
    Namespace { module: ModuleId },
}

#[derive(Debug)]
enum Resolution {
    Found(ResolvedBinding),
    NotFound,
    Ambiguous,
    Circular,
}

impl Resolution {
    fn into_result(self, module_id: &ModuleId, name: &str) -> Result<ResolvedBinding> {
        match self {
            Self::Found(binding) => Ok(binding),
            Self::NotFound => Err(Error::export_not_found(module_id, name)),
            Self::Ambiguous => Err(Error::AmbiguousExport {
                module_id: module_id.clone(),
                name: name.to_string(),
            }),
            Self::Circular => Err(Error::CircularReExport {
                module_id: module_id.clone(),
                name: name.to_string(),
            }),
        }
    }
}

/// Resolves namespaces, default exports and named exports against a registry,
/// publishing namespaces into a cache.
///
/// The resolver holds no state of its own; both tables are borrowed from the
/// loader that owns them.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a ModuleRegistry,
    cache: &'a NamespaceCache,
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a ModuleRegistry, cache: &'a NamespaceCache) -> Self {
        Self { registry, cache }
    }

    pub fn registry(&self) -> &'a ModuleRegistry {
        self.registry
    }

    pub fn cache(&self) -> &'a NamespaceCache {
        self.cache
    }

    /// `import * as ns from "module_id"`
    ///
    /// Returns the same instance for every call with the same id. The first
    /// call builds the namespace; later calls only read the cache.
    pub fn resolve_namespace(&self, module_id: &ModuleId) -> Result<Namespace> {
        if let Some(namespace) = self.cache.get(module_id) {
            return Ok(namespace);
        }

        let record = self.registry.get(module_id)?;
        self.check_namespace_cycles(module_id)?;

        self.cache
            .get_or_try_init(module_id, |id| self.build_namespace(&record, id))
    }

    /// `import value from "module_id"`
    ///
    /// Identical (`strict_equals`) to `resolve_namespace(module_id).default()`.
    pub fn resolve_default(&self, module_id: &ModuleId) -> Result<Value> {
        Ok(self.resolve_namespace(module_id)?.default().clone())
    }

    /// `import { name } from "module_id"`
    pub fn resolve_named(&self, module_id: &ModuleId, name: &str) -> Result<Value> {
        let namespace = self.resolve_namespace(module_id)?;
        if let Some(value) = namespace.get(name) {
            return Ok(value.clone());
        }

        // Not in the namespace: report why.
        let mut resolve_set = Vec::new();
        self.resolve_export_inner(module_id, name, &mut resolve_set)?
            .into_result(module_id, name)?;
        Err(Error::export_not_found(module_id, name))
    }

    /// Resolve `name` through re-export chains to the binding that owns it.
    ///
    /// `Ok(None)` means the module does not export `name`. An explicit
    /// re-export whose target lacks the name is an error, not `None`, and is
    /// reported against the module at the end of the chain.
    pub fn resolve_export(
        &self,
        module_id: &ModuleId,
        name: &str,
    ) -> Result<Option<ResolvedBinding>> {
        let record = self.registry.get(module_id)?;
        let mut resolve_set = Vec::new();
        let resolution = self.resolve_export_inner(module_id, name, &mut resolve_set)?;

        if record.entry(name).is_some() {
            return self.resolve_declared(module_id, name, resolution).map(Some);
        }
        match resolution {
            Resolution::NotFound => Ok(None),
            other => other.into_result(module_id, name).map(Some),
        }
    }

    /// Every name the module exports, sorted. Always contains `default`.
    pub fn exported_names(&self, module_id: &ModuleId) -> Result<Vec<String>> {
        let mut visited = HashSet::default();
        let mut names = self.exported_names_inner(module_id, &mut visited)?;
        names.sort_by(|a, b| code_unit_order(a, b));
        Ok(names)
    }

    fn exported_names_inner(
        &self,
        module_id: &ModuleId,
        visited: &mut HashSet<ModuleId>,
    ) -> Result<Vec<String>> {
        if !visited.insert(module_id.clone()) {
            // Star export cycle: this module's names are already collected.
            return Ok(Vec::new());
        }

        let record = self.registry.get(module_id)?;
        let mut names: Vec<String> = record
            .entries()
            .map(|entry| entry.name().to_string())
            .collect();

        for star in record.star_exports() {
            for name in self.exported_names_inner(star, visited)? {
                if name != "default" && !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }

    fn resolve_export_inner(
        &self,
        module_id: &ModuleId,
        name: &str,
        resolve_set: &mut Vec<(ModuleId, String)>,
    ) -> Result<Resolution> {
        if resolve_set
            .iter()
            .any(|(module, export)| module == module_id && export == name)
        {
            return Ok(Resolution::Circular);
        }
        resolve_set.push((module_id.clone(), name.to_string()));

        let record = self.registry.get(module_id)?;
        match record.entry(name) {
            Some(ExportEntry::Local { .. }) => {
                return Ok(Resolution::Found(ResolvedBinding::Local {
                    module: module_id.clone(),
                    name: name.to_string(),
                }));
            }
            Some(ExportEntry::Namespace { from, .. }) => {
                // The target must exist even though its namespace is built later.
                self.registry.get(from)?;
                return Ok(Resolution::Found(ResolvedBinding::Namespace {
                    module: from.clone(),
                }));
            }
            Some(ExportEntry::Indirect { from, imported, .. }) => {
                // NotFound is passed through: under an `export *` it is skipped.
                return self.resolve_export_inner(from, imported, resolve_set);
            }
            None => {}
        }

        if name == "default" {
            // `export * from` never forwards the default export.
            return Ok(Resolution::NotFound);
        }

        let mut star_resolution: Option<ResolvedBinding> = None;
        for star in record.star_exports() {
            match self.resolve_export_inner(star, name, resolve_set)? {
                Resolution::Ambiguous => return Ok(Resolution::Ambiguous),
                Resolution::NotFound | Resolution::Circular => {}
                Resolution::Found(binding) => match &star_resolution {
                    None => star_resolution = Some(binding),
                    Some(existing) if *existing != binding => {
                        return Ok(Resolution::Ambiguous);
                    }
                    Some(_) => {}
                },
            }
        }

        Ok(star_resolution.map_or(Resolution::NotFound, Resolution::Found))
    }

    /// Finish resolving a name the module declares itself. Unlike names
    /// reached through `export *`, these must resolve.
    fn resolve_declared(
        &self,
        module_id: &ModuleId,
        name: &str,
        resolution: Resolution,
    ) -> Result<ResolvedBinding> {
        match resolution {
            Resolution::NotFound => Err(self.missing_re_export(module_id, name)),
            other => other.into_result(module_id, name),
        }
    }

    /// Follow `export { x } from` entries to the module that lacks the name,
    /// so the error names the module the importer has to fix.
    fn missing_re_export(&self, module_id: &ModuleId, name: &str) -> Error {
        let mut module = module_id.clone();
        let mut name = name.to_string();
        let mut seen = HashSet::default();

        while seen.insert((module.clone(), name.clone())) {
            let next = match self.registry.get(&module) {
                Ok(record) => match record.entry(&name) {
                    Some(ExportEntry::Indirect { from, imported, .. }) => {
                        Some((from.clone(), imported.clone()))
                    }
                    _ => None,
                },
                Err(_) => None,
            };
            let Some((from, imported)) = next else { break };
            module = from;
            name = imported;
        }

        Error::export_not_found(&module, name)
    }

    /// Resolve every exported name of `record`.
    ///
    /// Names reached only through star exports that are ambiguous or circular
    /// are left out, as ECMAScript does. Explicit re-exports must resolve.
    fn plan_namespace(&self, record: &ModuleRecord) -> Result<Vec<(String, ResolvedBinding)>> {
        let module_id = record.id();
        let mut plan = Vec::new();

        for name in self.exported_names(module_id)? {
            let mut resolve_set = Vec::new();
            let resolution = self.resolve_export_inner(module_id, &name, &mut resolve_set)?;

            if record.entry(&name).is_some() {
                let binding = self.resolve_declared(module_id, &name, resolution)?;
                plan.push((name, binding));
            } else if let Resolution::Found(binding) = resolution {
                plan.push((name, binding));
            } else {
                tracing::trace!(module = %module_id, export = %name, "omitting unresolvable star export");
            }
        }

        Ok(plan)
    }

    /// Reject `export * as` cycles before any cache slot is initialised, so
    /// that nested namespace construction can never wait on itself.
    fn check_namespace_cycles(&self, module_id: &ModuleId) -> Result<()> {
        let mut stack = Vec::new();
        let mut done = HashSet::default();
        self.visit_namespace_deps(module_id, &mut stack, &mut done)
    }

    fn visit_namespace_deps(
        &self,
        module_id: &ModuleId,
        stack: &mut Vec<ModuleId>,
        done: &mut HashSet<ModuleId>,
    ) -> Result<()> {
        if done.contains(module_id) || self.cache.get(module_id).is_some() {
            return Ok(());
        }
        if stack.contains(module_id) {
            return Err(Error::CircularNamespace {
                module_id: module_id.clone(),
            });
        }

        stack.push(module_id.clone());
        let record = self.registry.get(module_id)?;
        for (_, binding) in self.plan_namespace(&record)? {
            if let ResolvedBinding::Namespace { module } = binding {
                self.visit_namespace_deps(&module, stack, done)?;
            }
        }
        stack.pop();
        done.insert(module_id.clone());

        Ok(())
    }

    fn build_namespace(&self, record: &ModuleRecord, id: NamespaceId) -> Result<Namespace> {
        let mut properties = IndexMap::new();

        for (name, binding) in self.plan_namespace(record)? {
            let value = match binding {
                ResolvedBinding::Local { module, name } => {
                    let owner = self.registry.get(&module)?;
                    owner
                        .local_export(&name)
                        .cloned()
                        .ok_or_else(|| Error::export_not_found(&module, &name))?
                }
                ResolvedBinding::Namespace { module } => {
                    Value::Namespace(self.resolve_namespace(&module)?)
                }
            };
            properties.insert(name, value);
        }

        tracing::debug!(
            module = %record.id(),
            exports = properties.len(),
            "built namespace"
        );

        Ok(Namespace::new(id, record.id().clone(), properties))
    }
}
