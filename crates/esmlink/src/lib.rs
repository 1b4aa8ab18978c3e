//! # esmlink
//!
//! ES module interop primitives: module records, namespace objects and the
//! linker that turns `import` declarations into bindings.
//!
//! ## Overview
//!
//! A loader (a bundler, a test harness, the `esmlink` CLI) registers one
//! [`ModuleRecord`] per canonical [`ModuleId`] in a [`ModuleRegistry`]. A
//! [`Resolver`] then answers the three questions an importer can ask:
//!
//! - `import * as ns from "m"` → [`Resolver::resolve_namespace`]
//! - `import def from "m"` → [`Resolver::resolve_default`]
//! - `import { name } from "m"` → [`Resolver::resolve_named`]
//!
//! Namespaces are built lazily and cached in a [`NamespaceCache`], one
//! instance per module for the lifetime of the cache. Every import form that
//! carries the default export hands out the same `Arc`-shared value.
//!
//! ```text
//! ┌───────────────┐   register    ┌────────────────┐
//! │    loader     │──────────────▶│ ModuleRegistry │
//! └───────────────┘               └───────┬────────┘
//!                                         │ borrow
//!                ┌────────────────┐  ┌────▼─────┐   ┌────────┐
//!                │ NamespaceCache │◀─│ Resolver │◀──│ Linker │
//!                └────────────────┘  └──────────┘   └────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use esmlink::{ModuleId, ModuleRecord, ModuleRegistry, NamespaceCache, Resolver, Value};
//!
//! # fn main() -> esmlink::Result<()> {
//! let registry = ModuleRegistry::new();
//! let id = ModuleId::new("fixture/export/abc.js")?;
//!
//! let record = ModuleRecord::builder(id.clone())
//!     .export("a", "a")
//!     .export("b", "b")
//!     .default_export(Value::object([("a", "a"), ("b", "b")]))
//!     .build()?;
//! registry.register(record)?;
//!
//! let cache = NamespaceCache::new();
//! let resolver = Resolver::new(&registry, &cache);
//!
//! let ns = resolver.resolve_namespace(&id)?;
//! assert!(ns.ptr_eq(&resolver.resolve_namespace(&id)?));
//! assert!(ns.default().strict_equals(&resolver.resolve_default(&id)?));
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! The registry and the cache are `Send + Sync`. First resolution of a module
//! may race between threads; the cache publishes at most one namespace per
//! module id.

pub mod cache;
pub mod error;
pub mod export;
pub mod import;
pub mod link;
pub mod manifest;
pub mod module_id;
pub mod namespace;
pub mod options;
pub mod record;
pub mod registry;
pub mod resolver;
pub mod value;

pub use cache::NamespaceCache;
pub use error::{Error, Result};
pub use export::{ExportEntry, ExportKind};
pub use import::{ImportDeclaration, ImportSpecifier};
pub use link::{Binding, LinkedGraph, Linker, ModuleBindings};
pub use manifest::{GraphManifest, LoadedGraph, ModuleManifest};
pub use module_id::{ModuleId, ModuleIdError};
pub use namespace::{Namespace, NamespaceId};
pub use options::InteropOptions;
pub use record::{ModuleFormat, ModuleRecord, ModuleRecordBuilder};
pub use registry::ModuleRegistry;
pub use resolver::{ResolvedBinding, Resolver};
pub use value::{Object, Value};

#[cfg(test)]
mod tests;
