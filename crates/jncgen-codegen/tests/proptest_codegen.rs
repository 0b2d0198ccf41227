//! Property-based tests for the deterministic building blocks
//!
//! Ordered sets keep first-occurrence order, sanitizing is idempotent and
//! generation output depends only on its input.

use jncgen_codegen::naming::{camelize, make_valid_identifier, sanitize};
use jncgen_codegen::{GeneratorConfig, OrderedSet, generate};
use jncgen_schema::{Keyword, Schema, annotate, descendants};
use proptest::prelude::*;

// Strategy: YANG-like identifiers, with reserved words mixed in
fn arb_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9.-]{0,12}",
        Just("class".to_string()),
        Just("String".to_string()),
        Just("new".to_string()),
    ]
}

fn module_with_leafs(names: &[String]) -> Schema {
    let mut schema = Schema::new();
    let module = schema.add_root(Keyword::Module, "prop");
    schema.add_child(module, Keyword::Namespace, Some("urn:prop"));
    schema.add_child(module, Keyword::Prefix, Some("prop"));
    let top = schema.add_child(module, Keyword::Container, Some("top"));
    for (i, name) in names.iter().enumerate() {
        let keyword = if i % 2 == 0 { Keyword::Leaf } else { Keyword::LeafList };
        let leaf = schema.add_child(top, keyword, Some(name));
        schema.add_child(leaf, Keyword::Type, Some("int32"));
    }
    annotate(&mut schema);
    schema
}

fn args(schema: &Schema) -> Vec<String> {
    let root = schema.roots()[0];
    std::iter::once(root)
        .chain(descendants(schema, root))
        .map(|id| schema.arg(id).to_string())
        .collect()
}

proptest! {
    /// Property: iteration yields each value once, at its first position
    #[test]
    fn proptest_ordered_set_first_occurrence_order(values in prop::collection::vec(0u8..16, 0..64)) {
        let set: OrderedSet<u8> = values.iter().copied().collect();

        let mut expected = Vec::new();
        for value in &values {
            if !expected.contains(value) {
                expected.push(*value);
            }
        }

        prop_assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(set.len(), expected.len());
    }

    /// Property: discarding keeps the relative order of the survivors
    #[test]
    fn proptest_ordered_set_discard_preserves_order(
        values in prop::collection::vec(0u8..16, 0..32),
        removed in prop::collection::vec(0u8..16, 0..8)
    ) {
        let mut set: OrderedSet<u8> = values.iter().copied().collect();
        for value in &removed {
            set.discard(value);
        }

        let forward: Vec<u8> = set.iter().copied().collect();
        let mut backward: Vec<u8> = set.iter().rev().copied().collect();
        backward.reverse();

        prop_assert!(forward.iter().all(|v| !removed.contains(v)));
        prop_assert_eq!(forward, backward);
    }

    /// Property: identifiers are stable once made valid
    #[test]
    fn proptest_make_valid_identifier_idempotent(name in arb_identifier()) {
        let once = make_valid_identifier(&name);

        prop_assert_eq!(make_valid_identifier(&once), once.clone());
        prop_assert_eq!(camelize(&once), once);
    }

    /// Property: a second sanitizing pass changes nothing
    #[test]
    fn proptest_sanitize_idempotent(names in prop::collection::vec(arb_identifier(), 1..8)) {
        let mut schema = module_with_leafs(&names);
        let root = schema.roots()[0];

        sanitize(&mut schema, root);
        let snapshot = args(&schema);
        let changed = sanitize(&mut schema, root);

        prop_assert_eq!(changed, 0);
        prop_assert_eq!(args(&schema), snapshot);
    }

    /// Property: identical input and config give identical output
    #[test]
    fn proptest_generate_deterministic(names in prop::collection::vec(arb_identifier(), 1..6)) {
        let config = GeneratorConfig::default();

        let first = generate(&mut module_with_leafs(&names), &config).unwrap();
        let second = generate(&mut module_with_leafs(&names), &config).unwrap();

        prop_assert_eq!(first.classes, second.classes);
        prop_assert_eq!(first.schemas, second.schemas);
    }
}
