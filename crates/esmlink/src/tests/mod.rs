mod link_tests;
mod reexport_tests;

use crate::{
    ImportDeclaration, ImportSpecifier, ModuleId, ModuleRecord, ModuleRegistry, Value,
};

pub(crate) fn id(path: &str) -> ModuleId {
    ModuleId::new(path).expect("valid module id")
}

pub(crate) const ABC: &str = "fixture/export/abc.js";

/// `abc.js`: `export const a = "a", b = "b", c = "c"; export default { a, b, c }`
pub(crate) fn abc_record() -> ModuleRecord {
    ModuleRecord::builder(id(ABC))
        .export("a", "a")
        .export("b", "b")
        .export("c", "c")
        .default_export(Value::object([("a", "a"), ("b", "b"), ("c", "c")]))
        .build()
        .expect("abc record")
}

/// An importer using every import form against `abc.js`.
pub(crate) fn main_record() -> ModuleRecord {
    ModuleRecord::builder(id("fixture/main.js"))
        .import(ImportDeclaration::new(
            id(ABC),
            vec![
                ImportSpecifier::namespace("ns"),
                ImportSpecifier::default("def"),
                ImportSpecifier::named("a"),
                ImportSpecifier::aliased("default", "alsoDef"),
            ],
        ))
        .build()
        .expect("main record")
}

pub(crate) fn registry(records: impl IntoIterator<Item = ModuleRecord>) -> ModuleRegistry {
    ModuleRegistry::from_records(records).expect("registry")
}
