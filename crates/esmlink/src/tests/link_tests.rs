use super::{ABC, abc_record, id, main_record, registry};
use crate::{
    Binding, Error, ImportDeclaration, ImportSpecifier, Linker, ModuleRecord, NamespaceCache,
    Value,
};

fn importer(path: &str, imports: &[(&str, Vec<ImportSpecifier>)]) -> ModuleRecord {
    ModuleRecord::builder(id(path))
        .imports(
            imports
                .iter()
                .map(|(source, specifiers)| ImportDeclaration::new(id(source), specifiers.clone())),
        )
        .build()
        .unwrap()
}

#[test]
fn link_order_puts_dependencies_first() {
    let registry = registry([
        abc_record(),
        importer("util.js", &[(ABC, vec![ImportSpecifier::named("a")])]),
        importer(
            "main.js",
            &[
                ("util.js", vec![]),
                (ABC, vec![ImportSpecifier::namespace("abc")]),
            ],
        ),
    ]);
    let cache = NamespaceCache::new();
    let linker = Linker::new(&registry, &cache);

    let order = linker.link_order(&[id("main.js")]).unwrap();
    assert_eq!(order, vec![id(ABC), id("util.js"), id("main.js")]);
}

#[test]
fn link_order_is_independent_of_declaration_order() {
    let forward = registry([
        importer("a.js", &[]),
        importer("b.js", &[]),
        importer("main.js", &[("b.js", vec![]), ("a.js", vec![])]),
    ]);
    let backward = registry([
        importer("main.js", &[("a.js", vec![]), ("b.js", vec![])]),
        importer("b.js", &[]),
        importer("a.js", &[]),
    ]);
    let cache = NamespaceCache::new();

    let entries = [id("main.js")];
    let first = Linker::new(&forward, &cache).link_order(&entries).unwrap();
    let second = Linker::new(&backward, &cache).link_order(&entries).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, vec![id("a.js"), id("b.js"), id("main.js")]);
}

#[test]
fn link_order_tolerates_import_cycles() {
    let registry = registry([
        importer("a.js", &[("b.js", vec![])]),
        importer("b.js", &[("a.js", vec![])]),
    ]);
    let cache = NamespaceCache::new();
    let linker = Linker::new(&registry, &cache);

    assert_eq!(
        linker.link_order(&[id("a.js")]).unwrap(),
        vec![id("b.js"), id("a.js")]
    );
    // Every module appears once even when several entries reach it.
    assert_eq!(
        linker.link_order(&[id("b.js"), id("a.js"), id("a.js")]).unwrap(),
        vec![id("b.js"), id("a.js")]
    );
}

#[test]
fn link_order_fails_on_missing_dependency() {
    let registry = registry([importer("main.js", &[("ghost.js", vec![])])]);
    let cache = NamespaceCache::new();

    let err = Linker::new(&registry, &cache)
        .link_order(&[id("main.js")])
        .unwrap_err();
    assert!(matches!(err, Error::ModuleNotFound { ref module_id } if *module_id == id("ghost.js")));
}

#[test]
fn link_binds_every_import_form() {
    let registry = registry([abc_record(), main_record()]);
    let cache = NamespaceCache::new();
    let linker = Linker::new(&registry, &cache);

    let graph = linker.link(&[id("fixture/main.js")]).unwrap();
    assert_eq!(graph.order, vec![id(ABC), id("fixture/main.js")]);

    let abc = graph.bindings(&id(ABC)).unwrap();
    assert!(abc.is_empty());

    let main = graph.bindings(&id("fixture/main.js")).unwrap();
    let locals: Vec<&str> = main.iter().map(|(local, _)| local).collect();
    assert_eq!(locals, vec!["ns", "def", "a", "alsoDef"]);
    assert_eq!(graph.binding_count(), 4);

    match main.get("a").unwrap() {
        Binding::Export {
            source,
            imported,
            value,
        } => {
            assert_eq!(source, &id(ABC));
            assert_eq!(imported, "a");
            assert_eq!(value, &Value::from("a"));
        }
        other => panic!("expected export binding, got {other:?}"),
    }
    assert_eq!(main.get("alsoDef").unwrap().describe(), "default");
    assert_eq!(main.get("ns").unwrap().describe(), "* as");
    assert_eq!(main.get("a").unwrap().describe(), "{ a }");
}

#[test]
fn linking_twice_reuses_namespaces() {
    let registry = registry([abc_record(), main_record()]);
    let cache = NamespaceCache::new();
    let linker = Linker::new(&registry, &cache);

    let first = linker.link_all().unwrap();
    let second = linker.link_all().unwrap();

    let ns = |graph: &crate::LinkedGraph| {
        graph
            .bindings(&id("fixture/main.js"))
            .and_then(|b| b.get("ns"))
            .and_then(Binding::as_namespace)
            .cloned()
            .unwrap()
    };
    assert!(ns(&first).ptr_eq(&ns(&second)));
    assert_eq!(cache.constructions(), 1);
}

#[test]
fn duplicate_local_binding_is_rejected() {
    let registry = registry([
        abc_record(),
        importer(
            "dup.js",
            &[
                (ABC, vec![ImportSpecifier::named("a")]),
                (ABC, vec![ImportSpecifier::aliased("b", "a")]),
            ],
        ),
    ]);
    let cache = NamespaceCache::new();

    let err = Linker::new(&registry, &cache)
        .link(&[id("dup.js")])
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateBinding { ref local, .. } if local == "a"));
}

#[test]
fn missing_named_import_fails_the_link() {
    let registry = registry([
        abc_record(),
        importer("bad.js", &[(ABC, vec![ImportSpecifier::named("missing")])]),
    ]);
    let cache = NamespaceCache::new();

    let err = Linker::new(&registry, &cache)
        .link_module(&id("bad.js"))
        .unwrap_err();
    assert!(matches!(err, Error::ExportNotFound { ref name, .. } if name == "missing"));
}

#[test]
fn side_effect_import_of_missing_module_fails() {
    let registry = registry([importer("main.js", &[("polyfill.js", vec![])])]);
    let cache = NamespaceCache::new();

    let err = Linker::new(&registry, &cache)
        .link_module(&id("main.js"))
        .unwrap_err();
    assert!(matches!(err, Error::ModuleNotFound { .. }));
    // No namespace is built for a side-effect import.
    assert!(cache.is_empty());
}
