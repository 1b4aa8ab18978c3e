//! Module namespace objects.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::module_id::ModuleId;
use crate::value::Value;

/// Handle identifying one published namespace inside a [`NamespaceCache`].
///
/// Ids are allocated sequentially by the cache and never reused, so two
/// namespaces with the same id are the same instance.
///
/// [`NamespaceCache`]: crate::NamespaceCache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(pub(crate) u32);

impl NamespaceId {
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ns#{}", self.0)
    }
}

#[derive(Debug)]
struct NamespaceData {
    id: NamespaceId,
    module_id: ModuleId,
    /// Sorted by export name; always contains `default`.
    properties: IndexMap<String, Value>,
}

/// Namespace key order: UTF-16 code units, which differs from `str`'s byte
/// order for names mixing astral and high-BMP characters.
pub(crate) fn code_unit_order(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Frozen view of a module's exports, including `default`.
///
/// There is no mutating API. Clones share the same allocation, and
/// [`Namespace::ptr_eq`] tells whether two handles are the same instance.
#[derive(Debug, Clone)]
pub struct Namespace(Arc<NamespaceData>);

impl Namespace {
    pub(crate) fn new(
        id: NamespaceId,
        module_id: ModuleId,
        mut properties: IndexMap<String, Value>,
    ) -> Self {
        debug_assert!(properties.contains_key("default"));
        properties.sort_by(|a, _, b, _| code_unit_order(a, b));
        Self(Arc::new(NamespaceData {
            id,
            module_id,
            properties,
        }))
    }

    pub fn id(&self) -> NamespaceId {
        self.0.id
    }

    /// The module this namespace exposes.
    pub fn module_id(&self) -> &ModuleId {
        &self.0.module_id
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.properties.get(name)
    }

    /// The `default` property.
    pub fn default(&self) -> &Value {
        static UNDEFINED: Value = Value::Undefined;
        self.0.properties.get("default").unwrap_or(&UNDEFINED)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.properties.contains_key(name)
    }

    /// Enumerable keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.properties.is_empty()
    }

    /// Identity comparison: same cache slot and same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id && Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn properties(&self) -> &IndexMap<String, Value> {
        &self.0.properties
    }
}
