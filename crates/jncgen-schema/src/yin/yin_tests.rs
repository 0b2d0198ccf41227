#![allow(non_snake_case)]

use super::*;

const ACME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<module name="acme-system"
        xmlns="urn:ietf:params:xml:ns:yang:yin:1"
        xmlns:acme="http://acme.example.com/system">
  <namespace uri="http://acme.example.com/system"/>
  <prefix value="acme"/>
  <organization>
    <text>ACME Inc.</text>
  </organization>
  <revision date="2007-06-09"/>
  <container name="system">
    <leaf name="host-name">
      <type name="string">
        <pattern value="[a-z]&lt;x&gt;"/>
      </type>
      <description>
        <text>Hostname &amp; domain</text>
      </description>
    </leaf>
  </container>
</module>
"#;

#[test]
fn parse_yin___module___builds_statement_tree() {
    let mut schema = Schema::new();

    let root = parse_yin(&mut schema, ACME).unwrap();

    assert_eq!(schema.keyword(root), &Keyword::Module);
    assert_eq!(schema.arg(root), "acme-system");
    assert_eq!(schema.search_arg(root, &Keyword::Prefix), Some("acme"));
    assert_eq!(
        schema.search_arg(root, &Keyword::Namespace),
        Some("http://acme.example.com/system")
    );
    assert_eq!(schema.latest_revision(root), "2007-06-09");
}

#[test]
fn parse_yin___documentation_statement___takes_argument_from_text_child() {
    let mut schema = Schema::new();

    let root = parse_yin(&mut schema, ACME).unwrap();

    assert_eq!(schema.search_arg(root, &Keyword::Organization), Some("ACME Inc."));
    let system = schema.search_one(root, &Keyword::Container).unwrap();
    let leaf = schema.search_one(system, &Keyword::Leaf).unwrap();
    let description = schema.search_arg(leaf, &Keyword::Description).unwrap();
    assert!(description.contains('&'));
}

#[test]
fn parse_yin___escaped_attribute___is_unescaped() {
    let mut schema = Schema::new();

    let root = parse_yin(&mut schema, ACME).unwrap();

    let system = schema.search_one(root, &Keyword::Container).unwrap();
    let leaf = schema.search_one(system, &Keyword::Leaf).unwrap();
    let ty = schema.search_one(leaf, &Keyword::Type).unwrap();
    assert_eq!(schema.search_arg(ty, &Keyword::Pattern), Some("[a-z]<x>"));
}

#[test]
fn parse_yin___parent_links___point_to_enclosing_element() {
    let mut schema = Schema::new();

    let root = parse_yin(&mut schema, ACME).unwrap();

    let system = schema.search_one(root, &Keyword::Container).unwrap();
    let leaf = schema.search_one(system, &Keyword::Leaf).unwrap();
    assert_eq!(schema.parent(leaf), Some(system));
    assert_eq!(schema.top(leaf), root);
}

#[test]
fn parse_yin___non_module_root___returns_not_a_document() {
    let mut schema = Schema::new();

    let result = parse_yin(&mut schema, r#"<container name="x"/>"#);

    assert!(matches!(result, Err(ParseError::NotADocument(name)) if name == "container"));
}

#[test]
fn parse_yin___module_without_name___returns_missing_argument() {
    let mut schema = Schema::new();

    let result = parse_yin(&mut schema, "<module></module>");

    assert!(matches!(result, Err(ParseError::MissingArgument { .. })));
}

#[test]
fn parse_yin___empty_input___returns_invalid_structure() {
    let mut schema = Schema::new();

    let result = parse_yin(&mut schema, "");

    assert!(matches!(result, Err(ParseError::InvalidStructure(_))));
}
