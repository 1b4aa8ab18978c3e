//! `export { x } from`, `export * from` and `export * as ns from`.

use super::{ABC, abc_record, id, registry};
use crate::{Error, ModuleRecord, NamespaceCache, ResolvedBinding, Resolver, Value};

fn record(path: &str) -> crate::ModuleRecordBuilder {
    ModuleRecord::builder(id(path))
}

#[test]
fn indirect_re_export_aliases_original_value() {
    let shared = Value::object([("deep", true)]);
    let registry = registry([
        record("source.js").export("obj", shared.clone()).build().unwrap(),
        record("middle.js").re_export("obj", id("source.js"), "obj").build().unwrap(),
        record("outer.js").re_export("renamed", id("middle.js"), "obj").build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let value = resolver.resolve_named(&id("outer.js"), "renamed").unwrap();
    assert!(value.strict_equals(&shared));
}

#[test]
fn re_exporting_default_under_a_name() {
    let registry = registry([
        abc_record(),
        record("facade.js").re_export("abc", id(ABC), "default").build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let abc = resolver.resolve_named(&id("facade.js"), "abc").unwrap();
    assert!(abc.strict_equals(&resolver.resolve_default(&id(ABC)).unwrap()));
    // The facade has no default of its own.
    assert!(resolver.resolve_default(&id("facade.js")).unwrap().is_undefined());
}

#[test]
fn star_export_forwards_names_but_not_default() {
    let registry = registry([
        abc_record(),
        record("barrel.js")
            .export("own", 1)
            .star_export(id(ABC))
            .build()
            .unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let ns = resolver.resolve_namespace(&id("barrel.js")).unwrap();
    assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "default", "own"]);
    assert!(ns.default().is_undefined());
    assert_eq!(ns.get("a"), Some(&Value::from("a")));
}

#[test]
fn local_export_shadows_star_export() {
    let registry = registry([
        abc_record(),
        record("barrel.js")
            .export("a", "mine")
            .star_export(id(ABC))
            .build()
            .unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    assert_eq!(
        resolver.resolve_named(&id("barrel.js"), "a").unwrap(),
        Value::from("mine")
    );
}

#[test]
fn conflicting_star_exports_are_ambiguous() {
    let registry = registry([
        record("left.js").export("x", "left").export("l", 1).build().unwrap(),
        record("right.js").export("x", "right").export("r", 2).build().unwrap(),
        record("both.js")
            .star_export(id("left.js"))
            .star_export(id("right.js"))
            .build()
            .unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let ns = resolver.resolve_namespace(&id("both.js")).unwrap();
    assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["default", "l", "r"]);

    let err = resolver.resolve_named(&id("both.js"), "x").unwrap_err();
    assert!(matches!(err, Error::AmbiguousExport { ref name, .. } if name == "x"));
    assert!(matches!(
        resolver.resolve_export(&id("both.js"), "x"),
        Err(Error::AmbiguousExport { .. })
    ));
}

#[test]
fn same_binding_through_two_stars_is_not_ambiguous() {
    let registry = registry([
        abc_record(),
        record("left.js").star_export(id(ABC)).build().unwrap(),
        record("right.js").star_export(id(ABC)).build().unwrap(),
        record("diamond.js")
            .star_export(id("left.js"))
            .star_export(id("right.js"))
            .build()
            .unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    assert_eq!(
        resolver.resolve_export(&id("diamond.js"), "a").unwrap(),
        Some(ResolvedBinding::Local {
            module: id(ABC),
            name: "a".to_string(),
        })
    );
    assert_eq!(
        resolver.resolve_named(&id("diamond.js"), "b").unwrap(),
        Value::from("b")
    );
}

#[test]
fn circular_indirect_re_export_is_an_error() {
    let registry = registry([
        record("a.js").re_export("x", id("b.js"), "x").build().unwrap(),
        record("b.js").re_export("x", id("a.js"), "x").build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    assert!(matches!(
        resolver.resolve_export(&id("a.js"), "x"),
        Err(Error::CircularReExport { .. })
    ));
    assert!(matches!(
        resolver.resolve_namespace(&id("a.js")),
        Err(Error::CircularReExport { .. })
    ));
    assert!(cache.is_empty());
}

#[test]
fn star_export_cycles_terminate() {
    let registry = registry([
        record("a.js").export("x", "x").star_export(id("b.js")).build().unwrap(),
        record("b.js").export("y", "y").star_export(id("a.js")).build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let a = resolver.resolve_namespace(&id("a.js")).unwrap();
    let b = resolver.resolve_namespace(&id("b.js")).unwrap();

    assert_eq!(a.keys().collect::<Vec<_>>(), vec!["default", "x", "y"]);
    assert_eq!(b.keys().collect::<Vec<_>>(), vec!["default", "x", "y"]);
    assert!(matches!(
        resolver.resolve_named(&id("a.js"), "z"),
        Err(Error::ExportNotFound { .. })
    ));
}

#[test]
fn namespace_re_export_shares_the_singleton() {
    let registry = registry([
        abc_record(),
        record("facade.js").namespace_re_export("abc", id(ABC)).build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let facade = resolver.resolve_namespace(&id("facade.js")).unwrap();
    let nested = facade.get("abc").and_then(Value::as_namespace).unwrap();
    let direct = resolver.resolve_namespace(&id(ABC)).unwrap();

    assert!(nested.ptr_eq(&direct));
    assert_eq!(cache.constructions(), 2);
    assert_eq!(
        resolver.resolve_export(&id("facade.js"), "abc").unwrap(),
        Some(ResolvedBinding::Namespace { module: id(ABC) })
    );
}

#[test]
fn namespace_re_export_cycle_is_rejected() {
    let registry = registry([
        record("a.js").namespace_re_export("b", id("b.js")).build().unwrap(),
        record("b.js").namespace_re_export("a", id("a.js")).build().unwrap(),
        record("self.js").namespace_re_export("me", id("self.js")).build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    assert!(matches!(
        resolver.resolve_namespace(&id("a.js")),
        Err(Error::CircularNamespace { ref module_id }) if *module_id == id("a.js")
    ));
    assert!(matches!(
        resolver.resolve_namespace(&id("self.js")),
        Err(Error::CircularNamespace { .. })
    ));
    assert!(cache.is_empty());
}

#[test]
fn re_export_of_missing_name_fails_the_namespace() {
    let registry = registry([
        abc_record(),
        record("broken.js").re_export("nope", id(ABC), "nope").build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let err = resolver.resolve_namespace(&id("broken.js")).unwrap_err();
    assert!(matches!(
        err,
        Error::ExportNotFound { ref module_id, ref name } if *module_id == id(ABC) && name == "nope"
    ));
}

#[test]
fn re_export_chain_reports_the_module_lacking_the_name() {
    let registry = registry([
        abc_record(),
        record("middle.js").re_export("gone", id(ABC), "nope").build().unwrap(),
        record("outer.js").re_export("alias", id("middle.js"), "gone").build().unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    let err = resolver.resolve_export(&id("outer.js"), "alias").unwrap_err();
    assert!(matches!(
        err,
        Error::ExportNotFound { ref module_id, ref name } if *module_id == id(ABC) && name == "nope"
    ));
    assert!(matches!(
        resolver.resolve_namespace(&id("outer.js")),
        Err(Error::ExportNotFound { ref module_id, .. }) if *module_id == id(ABC)
    ));
}

/// `a` reaches `d.x` through `export * from b` and again through
/// `export * from c`, where `c` re-exports `x` from `f`, itself a star over
/// `d`. The second path revisits `(d, x)` and must be skipped, not fail.
#[test]
fn star_branch_revisiting_a_binding_is_skipped() {
    let registry = registry([
        record("d.js").export("x", "1").build().unwrap(),
        record("b.js").star_export(id("d.js")).build().unwrap(),
        record("f.js").star_export(id("d.js")).build().unwrap(),
        record("c.js").re_export("x", id("f.js"), "x").build().unwrap(),
        record("a.js")
            .star_export(id("b.js"))
            .star_export(id("c.js"))
            .build()
            .unwrap(),
    ]);
    let cache = NamespaceCache::new();
    let resolver = Resolver::new(&registry, &cache);

    assert_eq!(
        resolver.resolve_export(&id("a.js"), "x").unwrap(),
        Some(ResolvedBinding::Local {
            module: id("d.js"),
            name: "x".to_string(),
        })
    );

    let ns = resolver.resolve_namespace(&id("a.js")).unwrap();
    assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["default", "x"]);
    assert_eq!(ns.get("x"), Some(&Value::from("1")));
    assert_eq!(resolver.resolve_named(&id("c.js"), "x").unwrap(), Value::from("1"));
}
