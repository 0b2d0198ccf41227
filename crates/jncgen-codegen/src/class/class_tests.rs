#![allow(non_snake_case)]

use super::*;

fn banner() -> Banner {
    Banner {
        version: "1.0".to_string(),
        date: None,
    }
}

fn getter(name: &str) -> JavaMethod {
    JavaMethod::public(name, "String").line("return null;")
}

#[test]
fn JavaClass___duplicate_constructor___is_kept_once() {
    let mut class = JavaClass::new("Top", "gen");

    assert!(class.add_constructor(JavaMethod::new("Top").modifier("public")));
    assert!(!class.add_constructor(JavaMethod::new("Top").modifier("public")));

    assert_eq!(class.constructors().len(), 1);
}

#[test]
fn JavaClass___append_access_method___groups_by_key_in_first_use_order() {
    let mut class = JavaClass::new("Top", "gen");
    class.append_access_method("b", getter("getB"));
    class.append_access_method("a", getter("getA"));
    class.append_access_method("b", getter("getB2"));

    let keys: Vec<&str> = class.access_methods().keys().map(String::as_str).collect();

    assert_eq!(keys, ["b", "a"]);
    assert_eq!(class.access_methods()["b"].len(), 2);
}

#[test]
fn JavaClass___into_source___renders_header_and_declaration() {
    let mut class = JavaClass::new("Top", "gen");
    class.set_description(vec!["This class represents a \"top\" element".to_string()]);
    class.set_source("module \"acme\", revision: \"unknown\".");
    class.set_superclass("YangElement");

    let source = class.into_source(&banner());

    assert!(source.starts_with("/*\n * @(#)Top.java        1.0\n"));
    assert!(source.contains(" * Origin: module \"acme\", revision: \"unknown\".\n"));
    assert!(source.contains("\npackage gen;\n"));
    assert!(source.contains("\nimport com.tailf.jnc.YangElement;\n"));
    assert!(source.contains(" * @version 1.0\n * @author Auto Generated\n"));
    assert!(source.contains("public class Top extends YangElement {\n"));
    assert!(source.contains("    private static final long serialVersionUID = 1L;\n"));
    assert!(source.ends_with("}\n"));
}

#[test]
fn JavaClass___into_source___stamps_date_when_given() {
    let class = JavaClass::new("Top", "gen");
    let banner = Banner {
        version: "2.1".to_string(),
        date: Some("2024-05-01".to_string()),
    };

    let source = class.into_source(&banner);

    assert!(source.contains("@(#)Top.java        2.1 2024-05-01"));
    assert!(source.contains(" * @version 2.1 2024-05-01"));
}

#[test]
fn JavaClass___into_source___sorts_imports_and_skips_own_package() {
    let mut class = JavaClass::new("Items", "gen.top");
    let mut method = JavaMethod::public("get", "gen.top.Other");
    method.add_parameter("com.tailf.jnc.YangString", "name");
    method.add_exception("JNCException");
    method.add_dependency("gen.Acme");
    class.add_support_method(method);

    let source = class.into_source(&banner());

    let imports: Vec<&str> = source.lines().filter(|l| l.starts_with("import ")).collect();
    assert_eq!(
        imports,
        [
            "import com.tailf.jnc.JNCException;",
            "import com.tailf.jnc.YangString;",
            "import gen.Acme;",
        ]
    );
}

#[test]
fn JavaClass___into_source___without_superclass_has_no_serial_version() {
    let class = JavaClass::new("Acme", "gen");

    let source = class.into_source(&banner());

    assert!(source.contains("public class Acme {\n"));
    assert!(!source.contains("serialVersionUID"));
}

#[test]
fn JavaClass___into_source___orders_member_kinds() {
    let mut class = JavaClass::new("Top", "gen");
    class.add_support_method(JavaMethod::public("support", "void"));
    class.append_access_method("x", getter("access"));
    class.add_name_getter(JavaMethod::public("names", "String[]"));
    class.add_cloner(JavaMethod::public("cloner", "YangElement"));
    class.add_constructor(JavaMethod::new("Top").modifier("public"));
    class.add_field(JavaValue::new("field").modifiers(&["public"]).value_type("int"));

    let source = class.into_source(&banner());

    let order = ["int field;", "Top()", "cloner()", "names()", "access()", "support()"];
    let positions: Vec<usize> = order.iter().map(|s| source.find(s).unwrap()).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn JavaClass___qualified_superclass___is_imported_and_shortened() {
    let mut class = JavaClass::new("Derived", "gen");
    class.set_superclass("gen.types.Base");

    assert_eq!(class.superclass(), Some("Base"));
    let source = class.into_source(&banner());
    assert!(source.contains("import gen.types.Base;"));
    assert!(source.contains("public class Derived extends Base {"));
}
