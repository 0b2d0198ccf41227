#![allow(non_snake_case)]

use super::*;

struct Fixture {
    schema: Schema,
    module: NodeId,
    top: NodeId,
    count: NodeId,
    items: NodeId,
    id: NodeId,
    tags: NodeId,
}

fn fixture() -> Fixture {
    let mut schema = Schema::new();
    let module = schema.add_root(Keyword::Module, "acme");
    schema.add_child(module, Keyword::Namespace, Some("urn:acme"));
    schema.add_child(module, Keyword::Prefix, Some("acme"));
    let top = schema.add_child(module, Keyword::Container, Some("top"));
    let count = schema.add_child(top, Keyword::Leaf, Some("count"));
    let items = schema.add_child(top, Keyword::List, Some("items"));
    schema.add_child(items, Keyword::Key, Some("id"));
    let id = schema.add_child(items, Keyword::Leaf, Some("id"));
    let tags = schema.add_child(items, Keyword::LeafList, Some("tags"));
    Fixture {
        schema,
        module,
        top,
        count,
        items,
        id,
        tags,
    }
}

#[test]
fn occurs___module___exactly_once() {
    let f = fixture();

    assert_eq!(occurs(&f.schema, f.module), Occurs { min: 1, max: 1 });
}

#[test]
fn occurs___top_level_container___optional_single() {
    let f = fixture();

    assert_eq!(occurs(&f.schema, f.top), Occurs { min: 0, max: 1 });
}

#[test]
fn occurs___children_of_container___at_most_once() {
    let f = fixture();

    assert_eq!(occurs(&f.schema, f.count), Occurs { min: 0, max: 1 });
    assert_eq!(occurs(&f.schema, f.items), Occurs { min: 0, max: 1 });
}

#[test]
fn occurs___key_leaf___exactly_once() {
    let f = fixture();

    assert_eq!(occurs(&f.schema, f.id), Occurs { min: 1, max: 1 });
}

#[test]
fn occurs___mandatory_leaf___min_one() {
    let mut f = fixture();
    let name = f.schema.add_child(f.module, Keyword::Leaf, Some("name"));
    f.schema.add_child(name, Keyword::Mandatory, Some("true"));

    assert_eq!(occurs(&f.schema, name), Occurs { min: 1, max: -1 });
}

#[test]
fn occurs___top_level_list___unbounded() {
    let mut f = fixture();
    let entries = f.schema.add_child(f.module, Keyword::List, Some("entries"));

    assert_eq!(occurs(&f.schema, entries), Occurs { min: 0, max: -1 });
}

#[test]
fn schema_file___module___renders_root_node_first() {
    let f = fixture();

    let generated = schema_file(&f.schema, f.module, &[], "gen").unwrap();

    assert_eq!(generated.file_name, "Acme.schema");
    assert_eq!(generated.package, "gen");
    let expected_root = "\
<schema>
    <node>
        <tagpath>/</tagpath>
        <namespace>urn:acme</namespace>
        <primitive_type>0</primitive_type>
        <min_occurs>1</min_occurs>
        <max_occurs>1</max_occurs>
        <children>top</children>
        <flags>0</flags>
        <desc></desc>
    </node>
";
    assert!(generated.content.starts_with(expected_root), "{}", generated.content);
    assert!(generated.content.ends_with("</schema>\n"));
}

#[test]
fn schema_file___nested_nodes___tagpaths_accumulate() {
    let f = fixture();

    let generated = schema_file(&f.schema, f.module, &[], "gen").unwrap();

    let tagpaths: Vec<&str> = generated
        .content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("<tagpath>"))
        .filter_map(|rest| rest.strip_suffix("</tagpath>"))
        .collect();
    assert_eq!(
        tagpaths,
        ["/", "/top/", "/top/count/", "/top/items/", "/top/items/id/"]
    );
}

#[test]
fn schema_file___leaf_list___listed_as_child_only() {
    let f = fixture();

    let generated = schema_file(&f.schema, f.module, &[], "gen").unwrap();

    assert!(generated.content.contains("<children>id tags</children>"));
    assert!(!generated.content.contains("<tagpath>/top/items/tags/</tagpath>"));
    assert_eq!(occurs(&f.schema, f.tags), Occurs { min: 0, max: 1 });
}

#[test]
fn schema_file___augmented_document___adds_root_and_subtree() {
    let mut f = fixture();
    let other = f.schema.add_root(Keyword::Module, "other");
    f.schema.add_child(other, Keyword::Namespace, Some("urn:other"));
    f.schema.add_child(other, Keyword::Prefix, Some("oth"));
    f.schema.add_child(other, Keyword::Container, Some("extra"));

    let generated = schema_file(&f.schema, f.module, &[other], "gen").unwrap();

    assert_eq!(generated.content.matches("<tagpath>/</tagpath>").count(), 2);
    assert!(generated.content.contains("<tagpath>/extra/</tagpath>"));
    assert!(generated.content.contains("<namespace>urn:other</namespace>"));
}
