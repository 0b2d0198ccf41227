#![allow(non_snake_case)]

use super::*;
use jncgen_schema::annotate;
use test_case::test_case;

fn module(schema: &mut Schema, name: &str) -> NodeId {
    let root = schema.add_root(Keyword::Module, name);
    schema.add_child(root, Keyword::Namespace, Some(&format!("urn:{name}")));
    schema.add_child(root, Keyword::Prefix, Some(name));
    root
}

fn leaf(schema: &mut Schema, parent: NodeId, name: &str, ty: &str) -> NodeId {
    let leaf = schema.add_child(parent, Keyword::Leaf, Some(name));
    schema.add_child(leaf, Keyword::Type, Some(ty));
    leaf
}

fn typedef(schema: &mut Schema, parent: NodeId, name: &str, ty: &str) -> NodeId {
    let typedef = schema.add_child(parent, Keyword::Typedef, Some(name));
    schema.add_child(typedef, Keyword::Type, Some(ty));
    typedef
}

#[test_case("string", "com.tailf.jnc.YangString", "String")]
#[test_case("boolean", "com.tailf.jnc.YangBoolean", "Boolean")]
#[test_case("enumeration", "com.tailf.jnc.YangEnumeration", "String")]
#[test_case("binary", "com.tailf.jnc.YangBinary", "String")]
#[test_case("bits", "com.tailf.jnc.YangBits", "BigInteger")]
#[test_case("leafref", "com.tailf.jnc.YangLeafref", "Element")]
#[test_case("instance-identifier", "com.tailf.jnc.YangInstanceIdentifier", "Element")]
#[test_case("empty", "com.tailf.jnc.YangEmpty", "boolean")]
#[test_case("int8", "com.tailf.jnc.YangInt8", "byte")]
#[test_case("int64", "com.tailf.jnc.YangInt64", "long")]
#[test_case("uint8", "com.tailf.jnc.YangUInt8", "short")]
#[test_case("uint32", "com.tailf.jnc.YangUInt32", "long")]
#[test_case("uint64", "com.tailf.jnc.YangUInt64", "BigInteger")]
#[test_case("decimal64", "com.tailf.jnc.YangDecimal64", "BigDecimal")]
#[test_case("union", "com.tailf.jnc.YangUnion", "String")]
fn builtin_pair___maps_builtin(name: &str, library: &str, primitive: &str) {
    let pair = builtin_pair(name).unwrap();

    assert_eq!(pair.library, library);
    assert_eq!(pair.primitive, primitive);
}

#[test]
fn builtin_pair___alias_name___is_none() {
    assert!(builtin_pair("percent").is_none());
    assert!(builtin_pair("uint128").is_none());
}

#[test]
fn TypePair___is_text___only_for_string_primitive() {
    assert!(TypePair::string().is_text());
    assert!(!builtin_pair("int8").unwrap().is_text());
}

#[test]
fn package_of___nested_node___joins_ancestors_below_root() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    let top = schema.add_child(root, Keyword::Container, Some("top"));
    let items = schema.add_child(top, Keyword::List, Some("items"));
    let id = leaf(&mut schema, items, "id", "string");

    assert_eq!(package_of(&schema, "gen", top), "gen");
    assert_eq!(package_of(&schema, "gen", items), "gen.top");
    assert_eq!(package_of(&schema, "gen", id), "gen.top.items");
}

#[test]
fn TypeResolver___leaf_with_builtin___uses_table() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    let count = leaf(&mut schema, root, "count", "int8");
    let mut warnings = WarningLog::new();

    let pair = TypeResolver::new(&schema, "gen").resolve(count, &mut warnings);

    assert_eq!(pair.library, "com.tailf.jnc.YangInt8");
    assert_eq!(pair.primitive, "byte");
    assert!(warnings.messages().is_empty());
}

#[test]
fn TypeResolver___resolved_alias___uses_generated_class_and_base_primitive() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    typedef(&mut schema, root, "my-percent", "uint8");
    let top = schema.add_child(root, Keyword::Container, Some("top"));
    let load = leaf(&mut schema, top, "load", "my-percent");
    annotate(&mut schema);
    let mut warnings = WarningLog::new();

    let pair = TypeResolver::new(&schema, "gen").resolve(load, &mut warnings);

    assert_eq!(pair.library, "gen.MyPercent");
    assert_eq!(pair.primitive, "short");
}

#[test]
fn TypeResolver___alias_chain___takes_ultimate_base_primitive() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    typedef(&mut schema, root, "base", "int32");
    typedef(&mut schema, root, "derived", "base");
    let value = leaf(&mut schema, root, "value", "derived");
    annotate(&mut schema);
    let mut warnings = WarningLog::new();

    let pair = TypeResolver::new(&schema, "gen").resolve(value, &mut warnings);

    assert_eq!(pair.library, "gen.Derived");
    assert_eq!(pair.primitive, "int");
}

#[test]
fn TypeResolver___unresolved_alias___warns_once_and_degrades_to_string() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    let a = leaf(&mut schema, root, "a", "missing");
    let b = leaf(&mut schema, root, "b", "missing");
    annotate(&mut schema);
    let resolver = TypeResolver::new(&schema, "gen");
    let mut warnings = WarningLog::new();

    let first = resolver.resolve(a, &mut warnings);
    let second = resolver.resolve(b, &mut warnings);

    assert_eq!(first, TypePair::string());
    assert_eq!(second, TypePair::string());
    assert_eq!(warnings.messages().len(), 1);
    assert!(warnings.messages()[0].contains("defaulting to string"));
}

#[test]
fn TypeResolver___unresolved_alias_in_two_modules___warns_per_module() {
    let mut schema = Schema::new();
    let acme = module(&mut schema, "acme");
    let other = module(&mut schema, "other");
    let a = leaf(&mut schema, acme, "a", "missing");
    let b = leaf(&mut schema, other, "b", "missing");
    annotate(&mut schema);
    let resolver = TypeResolver::new(&schema, "gen");
    let mut warnings = WarningLog::new();

    resolver.resolve(a, &mut warnings);
    resolver.resolve(b, &mut warnings);

    assert_eq!(warnings.messages().len(), 2);
    assert!(warnings.messages()[0].contains("\"gen.a.missing\""));
}

#[test]
fn TypeResolver___looping_alias___degrades_primitive_to_string() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    let a = typedef(&mut schema, root, "a", "b");
    let b = typedef(&mut schema, root, "b", "a");
    let a_type = schema.substmts(a)[0];
    let b_type = schema.substmts(b)[0];
    schema.set_typedef(a_type, Resolution::Resolved(b));
    schema.set_typedef(b_type, Resolution::Resolved(a));
    let mut warnings = WarningLog::new();

    let pair = TypeResolver::new(&schema, "gen").resolve(a, &mut warnings);

    assert_eq!(pair.library, "gen.B");
    assert_eq!(pair.primitive, "String");
}

#[test]
fn TypeResolver___leaf_without_type___warns_and_uses_string() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    let bare = schema.add_child(root, Keyword::Leaf, Some("bare"));
    let mut warnings = WarningLog::new();

    let pair = TypeResolver::new(&schema, "gen").resolve(bare, &mut warnings);

    assert_eq!(pair, TypePair::string());
    assert_eq!(warnings.messages().len(), 1);
}

#[test]
fn TypeResolver___base_typedef___follows_one_step() {
    let mut schema = Schema::new();
    let root = module(&mut schema, "acme");
    let base = typedef(&mut schema, root, "base", "string");
    let derived = typedef(&mut schema, root, "derived", "base");
    annotate(&mut schema);
    let resolver = TypeResolver::new(&schema, "gen");

    assert_eq!(resolver.base_typedef(derived), Some(base));
    assert_eq!(resolver.base_typedef(base), None);
}
