use super::*;
use crate::DescriptorKind;
use pretty_assertions::assert_eq;

#[test]
fn catalog_lookups() {
    let registry = build_registry();
    assert!(!registry.is_empty());

    let unsigned_long = registry.resolve("unsigned long");
    assert!(unsigned_long.is_primitive());
    assert_eq!(unsigned_long.managed_type(), "int");
    assert_eq!(unsigned_long.native_type(), "unsigned");

    let dom_string = registry.resolve("DOMString");
    assert_eq!(dom_string.managed_type(), "String");
    assert_eq!(dom_string.parameter_type(), "const String&");

    assert_eq!(registry.managed_type("DOMStringList"), "Indexable");
    assert_eq!(registry.script_type("IDBDatabase"), "webkitIDBDatabase");
    assert!(registry.resolve("SVGLength").is_tear_off());
}

#[test]
fn catalog_keys_match_descriptor_names() {
    let registry = build_registry();
    for desc in registry.entries() {
        let by_name = registry.get(desc.idl_type());
        assert!(by_name.is_some_and(|found| Arc::ptr_eq(found, desc)));
    }
}

#[test]
fn entries_are_sorted() {
    let registry = build_registry();
    let entries = registry.entries();
    let names: Vec<&str> = entries.iter().map(|d| d.idl_type()).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn unknown_names_resolve_to_identity() {
    let registry = build_registry();
    let desc = registry.resolve("HTMLMarqueeElement");
    assert!(!registry.contains("HTMLMarqueeElement"));
    assert_eq!(*desc.kind(), DescriptorKind::Generic);
    assert_eq!(desc.managed_type(), "HTMLMarqueeElement");
    assert_eq!(desc.native_type(), "HTMLMarqueeElement");
}

#[test]
fn sequences_are_synthesized_and_cached() {
    let registry = build_registry();
    assert_eq!(registry.cached_sequences(), 0);

    let first = registry.resolve("sequence<long>");
    let second = registry.resolve("sequence<long>");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.cached_sequences(), 1);

    assert_eq!(first.managed_type(), "IndexableInt");
    assert_eq!(first.element().map(|e| e.idl_type()), Some("long"));

    registry.resolve("sequence<Node>");
    assert_eq!(registry.cached_sequences(), 2);
}

#[test]
fn multi_word_sequence_falls_back_to_identity() {
    let registry = build_registry();
    let desc = registry.resolve("sequence<unsigned long>");
    assert_eq!(*desc.kind(), DescriptorKind::Generic);
    assert_eq!(registry.cached_sequences(), 0);
}

#[test]
fn bare_sequence_keyword_is_a_catalog_entry() {
    let registry = build_registry();
    assert!(registry.resolve("sequence").is_primitive());
    assert_eq!(registry.managed_type("sequence"), "Indexable");
}

#[test]
fn concurrent_sequence_resolution_agrees() {
    let registry = Arc::new(build_registry());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.resolve("sequence<Node>"))
        })
        .collect();

    let resolved: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("resolver thread panicked"))
        .collect();
    for desc in &resolved[1..] {
        assert!(Arc::ptr_eq(&resolved[0], desc));
    }
    assert_eq!(registry.cached_sequences(), 1);
}

#[test]
fn later_entries_replace_earlier_ones() {
    let registry = TypeRegistry::from_entries([
        TypeDescriptor::generic("Node"),
        TypeDescriptor::generic("Node").managed("Object"),
    ]);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.managed_type("Node"), "Object");
}
