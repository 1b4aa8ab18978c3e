//! Write-once namespace cache.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use dashmap::DashMap;
use once_cell::sync::OnceCell;

use crate::error::Result;
use crate::module_id::ModuleId;
use crate::namespace::{Namespace, NamespaceId};

/// Namespace objects keyed by module id.
///
/// Each slot is initialised at most once: concurrent first resolutions of the
/// same module block on the slot's once-cell and all observe the single
/// published namespace. A failed construction leaves the slot empty.
///
/// The cache is explicit state owned next to the [`ModuleRegistry`]; dropping
/// it drops every namespace it published.
///
/// [`ModuleRegistry`]: crate::ModuleRegistry
#[derive(Debug, Default)]
pub struct NamespaceCache {
    slots: DashMap<ModuleId, Arc<OnceCell<Namespace>>>,
    next_id: AtomicU32,
    constructions: AtomicUsize,
}

impl NamespaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The published namespace for `module_id`, if any.
    pub fn get(&self, module_id: &ModuleId) -> Option<Namespace> {
        self.slots
            .get(module_id)
            .and_then(|slot| slot.value().get().cloned())
    }

    /// Return the cached namespace or publish the one produced by `init`.
    ///
    /// `init` receives the id the namespace will be published under and runs
    /// at most once per module across all threads, unless it fails.
    pub(crate) fn get_or_try_init<F>(&self, module_id: &ModuleId, init: F) -> Result<Namespace>
    where
        F: FnOnce(NamespaceId) -> Result<Namespace>,
    {
        // Clone the slot out so the shard lock is released before `init` runs.
        let slot = Arc::clone(self.slots.entry(module_id.clone()).or_default().value());

        slot.get_or_try_init(|| {
            let id = NamespaceId(self.next_id.fetch_add(1, Ordering::Relaxed));
            let namespace = init(id)?;
            self.constructions.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(module = %module_id, namespace = %id, "published namespace");
            Ok(namespace)
        })
        .cloned()
    }

    /// Number of namespaces constructed so far.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }

    /// Number of published namespaces.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.value().get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
