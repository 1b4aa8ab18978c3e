//! Loader-owned table of module records.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::error::{Error, Result};
use crate::module_id::ModuleId;
use crate::record::ModuleRecord;

/// Module records indexed by canonical id.
///
/// Registration is write-once per id. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    inner: Arc<RwLock<HashMap<ModuleId, Arc<ModuleRecord>>>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a registry from an iterator of records.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = ModuleRecord>,
    {
        let registry = Self::new();
        for record in records {
            registry.register(record)?;
        }
        Ok(registry)
    }

    /// Add a record. Fails if the id is already taken.
    pub fn register(&self, record: ModuleRecord) -> Result<Arc<ModuleRecord>> {
        let mut inner = self.inner.write();
        if inner.contains_key(record.id()) {
            return Err(Error::DuplicateModule {
                module_id: record.id().clone(),
            });
        }

        tracing::trace!(module = %record.id(), format = ?record.format(), "registered module");
        let record = Arc::new(record);
        inner.insert(record.id().clone(), Arc::clone(&record));
        Ok(record)
    }

    /// Look up a record, failing with `ModuleNotFound`.
    pub fn get(&self, id: &ModuleId) -> Result<Arc<ModuleRecord>> {
        self.inner
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::module_not_found(id))
    }

    /// Whether a record is present.
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.inner.read().contains_key(id)
    }

    /// All registered ids in sorted order.
    pub fn ids(&self) -> Vec<ModuleId> {
        let mut ids: Vec<ModuleId> = self.inner.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
