//! Linking import declarations to bindings.

use indexmap::IndexMap;
use rustc_hash::FxHashSet as HashSet;

use crate::cache::NamespaceCache;
use crate::error::{Error, Result};
use crate::import::ImportSpecifier;
use crate::module_id::ModuleId;
use crate::namespace::Namespace;
use crate::registry::ModuleRegistry;
use crate::resolver::Resolver;
use crate::value::Value;

/// What a local identifier in an importing module is bound to.
///
/// Bindings alias the exporting module's values; they never own a copy.
#[derive(Debug, Clone)]
pub enum Binding {
    /// `import * as local from 'source'`
    Namespace(Namespace),
    /// `import local from 'source'` or `import { imported as local } from 'source'`
    Export {
        source: ModuleId,
        imported: String,
        value: Value,
    },
}

impl Binding {
    /// Value seen by the importer. Namespaces are wrapped, not copied.
    pub fn value(&self) -> Value {
        match self {
            Self::Namespace(namespace) => Value::Namespace(namespace.clone()),
            Self::Export { value, .. } => value.clone(),
        }
    }

    /// Module the binding was imported from.
    pub fn source(&self) -> &ModuleId {
        match self {
            Self::Namespace(namespace) => namespace.module_id(),
            Self::Export { source, .. } => source,
        }
    }

    pub fn as_namespace(&self) -> Option<&Namespace> {
        match self {
            Self::Namespace(namespace) => Some(namespace),
            Self::Export { .. } => None,
        }
    }

    /// Short description of the import form, e.g. `* as`, `default`, `{ a }`.
    pub fn describe(&self) -> String {
        match self {
            Self::Namespace(_) => "* as".to_string(),
            Self::Export { imported, .. } if imported == "default" => "default".to_string(),
            Self::Export { imported, .. } => format!("{{ {imported} }}"),
        }
    }

    /// `===` between the values two bindings expose.
    pub fn strict_equals(&self, other: &Self) -> bool {
        self.value().strict_equals(&other.value())
    }
}

/// Bindings established for one importing module, in declaration order.
#[derive(Debug, Clone)]
pub struct ModuleBindings {
    module_id: ModuleId,
    bindings: IndexMap<String, Binding>,
}

impl ModuleBindings {
    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    pub fn get(&self, local: &str) -> Option<&Binding> {
        self.bindings.get(local)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings
            .iter()
            .map(|(local, binding)| (local.as_str(), binding))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Result of linking a module graph.
#[derive(Debug, Clone)]
pub struct LinkedGraph {
    /// Modules in link order: dependencies before dependents.
    pub order: Vec<ModuleId>,
    /// Bindings per module, in link order.
    pub modules: IndexMap<ModuleId, ModuleBindings>,
}

impl LinkedGraph {
    pub fn bindings(&self, module_id: &ModuleId) -> Option<&ModuleBindings> {
        self.modules.get(module_id)
    }

    /// Total number of bindings across all modules.
    pub fn binding_count(&self) -> usize {
        self.modules.values().map(ModuleBindings::len).sum()
    }
}

/// Links importers against their dependencies in a deterministic order.
#[derive(Debug, Clone, Copy)]
pub struct Linker<'a> {
    resolver: Resolver<'a>,
}

impl<'a> Linker<'a> {
    pub fn new(registry: &'a ModuleRegistry, cache: &'a NamespaceCache) -> Self {
        Self::from_resolver(Resolver::new(registry, cache))
    }

    pub fn from_resolver(resolver: Resolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> Resolver<'a> {
        self.resolver
    }

    /// Depth-first post-order from `entries` (sorted), visiting each module's
    /// dependencies in sorted order. Cycles are allowed: a module already on
    /// the path is not revisited.
    pub fn link_order(&self, entries: &[ModuleId]) -> Result<Vec<ModuleId>> {
        let registry = self.resolver.registry();
        let mut roots = entries.to_vec();
        roots.sort();
        roots.dedup();

        let mut visited = HashSet::default();
        let mut order = Vec::new();

        for root in roots {
            if !visited.insert(root.clone()) {
                continue;
            }

            let deps = registry.get(&root)?.dependencies();
            let mut stack = vec![(root, deps.into_iter())];

            loop {
                let next = match stack.last_mut() {
                    Some((_, deps)) => deps.next(),
                    None => break,
                };

                match next {
                    Some(dep) => {
                        if visited.insert(dep.clone()) {
                            let deps = registry.get(&dep)?.dependencies();
                            stack.push((dep, deps.into_iter()));
                        }
                    }
                    None => {
                        if let Some((done, _)) = stack.pop() {
                            order.push(done);
                        }
                    }
                }
            }
        }

        Ok(order)
    }

    /// Resolve every import specifier of `module_id` into a binding.
    ///
    /// Either all bindings are established or an error is returned.
    pub fn link_module(&self, module_id: &ModuleId) -> Result<ModuleBindings> {
        let record = self.resolver.registry().get(module_id)?;
        let mut bindings = IndexMap::new();

        for import in record.imports() {
            let source = &import.source;
            if import.is_side_effect_only() {
                self.resolver.registry().get(source)?;
                continue;
            }

            for specifier in &import.specifiers {
                let binding = match specifier {
                    ImportSpecifier::Namespace { .. } => {
                        Binding::Namespace(self.resolver.resolve_namespace(source)?)
                    }
                    ImportSpecifier::Default { .. } => Binding::Export {
                        source: source.clone(),
                        imported: "default".to_string(),
                        value: self.resolver.resolve_default(source)?,
                    },
                    ImportSpecifier::Named { imported, .. } => Binding::Export {
                        source: source.clone(),
                        imported: imported.clone(),
                        value: self.resolver.resolve_named(source, imported)?,
                    },
                };

                let local = specifier.local();
                if bindings.contains_key(local) {
                    return Err(Error::DuplicateBinding {
                        module_id: module_id.clone(),
                        local: local.to_string(),
                    });
                }

                tracing::trace!(
                    module = %module_id,
                    local,
                    source = %source,
                    form = %binding.describe(),
                    "bound import"
                );
                bindings.insert(local.to_string(), binding);
            }
        }

        tracing::debug!(module = %module_id, bindings = bindings.len(), "linked module");

        Ok(ModuleBindings {
            module_id: module_id.clone(),
            bindings,
        })
    }

    /// Link `entries` and everything they depend on.
    pub fn link(&self, entries: &[ModuleId]) -> Result<LinkedGraph> {
        let _span = tracing::debug_span!("link", entries = entries.len()).entered();

        let order = self.link_order(entries)?;
        let mut modules = IndexMap::with_capacity(order.len());
        for module_id in &order {
            modules.insert(module_id.clone(), self.link_module(module_id)?);
        }

        tracing::info!(
            modules = order.len(),
            namespaces = self.resolver.cache().len(),
            "linked module graph"
        );

        Ok(LinkedGraph { order, modules })
    }

    /// Link every registered module.
    pub fn link_all(&self) -> Result<LinkedGraph> {
        let entries = self.resolver.registry().ids();
        self.link(&entries)
    }
}
