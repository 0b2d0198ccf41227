//! Method synthesis for generated classes.
//!
//! A [`MethodGenerator`] produces the constructors, cloners, setters,
//! checker and structure getters of the class generated for one container,
//! list or typedef, plus the access methods its parent class gets for it.
//! The node kind selects a [`MethodFamily`] once; every operation then
//! dispatches on it.
//!
//! Leaf and leaf-list children have no class of their own; their access
//! methods come from [`LeafMethodGenerator`].

mod alias;
mod container;
mod leaf;
mod list;

pub use leaf::LeafMethodGenerator;

use crate::java::{JavaMethod, JavaValue, Member};
use crate::naming::class_name;
use crate::types::{TypePair, TypeResolver};
use crate::warnings::WarningLog;
use jncgen_schema::{Keyword, NodeId, Schema};

/// Node-kind specific state of a [`MethodGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodFamily {
    /// Class generated for a `typedef`.
    Alias {
        pair: TypePair,
        needs_check: bool,
        enums: Vec<String>,
        patterns: Vec<String>,
    },
    Container,
    List {
        is_config: bool,
        keys: Vec<(String, TypePair)>,
    },
}

/// Where the generated root class of a document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootClass {
    /// Fully qualified, e.g. `gen.Acme`.
    pub qualified: String,
    /// Short name, e.g. `Acme`.
    pub name: String,
}

impl RootClass {
    pub fn new(package: &str, prefix: &str) -> Self {
        let name = class_name(prefix);
        Self {
            qualified: format!("{package}.{name}"),
            name,
        }
    }
}

/// Generates the methods of one container, list or typedef class.
pub struct MethodGenerator<'a> {
    schema: &'a Schema,
    node: NodeId,
    /// Argument of the node, e.g. `items`.
    arg: &'a str,
    /// Short class name, e.g. `Items`.
    name: String,
    /// Fully qualified class name.
    qualified: String,
    root: &'a RootClass,
    is_top_level: bool,
    family: MethodFamily,
}

impl<'a> MethodGenerator<'a> {
    /// Generator for the class of `node` in `package`. `None` for node kinds
    /// that never get a class.
    pub fn new(
        schema: &'a Schema,
        node: NodeId,
        package: &str,
        root: &'a RootClass,
        resolver: &TypeResolver<'_>,
        warnings: &mut WarningLog,
    ) -> Option<Self> {
        let family = match schema.keyword(node) {
            Keyword::Typedef => alias::family(schema, node, resolver, warnings),
            Keyword::Container => MethodFamily::Container,
            Keyword::List => list::family(schema, node, resolver, warnings),
            _ => return None,
        };
        let arg = schema.arg(node);
        let name = class_name(arg);
        Some(Self {
            schema,
            node,
            arg,
            qualified: format!("{package}.{name}"),
            name,
            root,
            is_top_level: schema.is_top_level(node),
            family,
        })
    }

    pub fn family(&self) -> &MethodFamily {
        &self.family
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.family, MethodFamily::Alias { .. })
    }

    /// `(<Root>.NAMESPACE, "<arg>");`
    fn root_namespace(&self, arg: &str) -> String {
        format!("({}.NAMESPACE, \"{arg}\");", self.root.name)
    }

    /// Constructor calling the parent constructor, without parameters or
    /// javadoc.
    fn constructor_template(&self) -> JavaMethod {
        let mut constructor = JavaMethod::new(self.name.clone()).modifier("public");
        match self.family {
            MethodFamily::Alias { .. } => constructor.add_line("super(value);"),
            MethodFamily::Container | MethodFamily::List { .. } => {
                constructor.add_dependency(&self.root.qualified);
                constructor.add_line(format!("super{}", self.root_namespace(self.arg)));
                if self.is_top_level {
                    constructor.add_line("setDefaultPrefix();");
                    constructor.add_line(format!("setPrefix({}.PREFIX);", self.root.name));
                }
            }
        }
        constructor
    }

    fn empty_constructor(&self) -> JavaMethod {
        let mut constructor = self.constructor_template();
        constructor.add_javadoc(format!("Constructor for an empty {} object.", self.name));
        constructor
    }

    pub fn constructors(&self) -> Vec<JavaMethod> {
        match &self.family {
            MethodFamily::Alias { .. } => alias::constructors(self),
            MethodFamily::Container => vec![self.empty_constructor()],
            MethodFamily::List { .. } => list::constructors(self),
        }
    }

    /// `clone()` and `cloneShallow()`. Aliases have none.
    pub fn cloners(&self) -> Vec<JavaMethod> {
        if self.is_alias() {
            return Vec::new();
        }
        [("an exact", "", ""), ("a shallow", " Children are not included.", "Shallow")]
            .into_iter()
            .map(|(copy, children, kind)| {
                JavaMethod::public(format!("clone{kind}"), "YangElement")
                    .javadoc(format!("Clones this object, returning {copy} copy."))
                    .javadoc(format!("@return A clone of the object.{children}"))
                    .line(format!("return clone{kind}Content(new {}());", self.name))
            })
            .collect()
    }

    /// `setValue` overloads. Only aliases have setters.
    pub fn setters(&self) -> Vec<JavaMethod> {
        match &self.family {
            MethodFamily::Alias { .. } => alias::setters(self),
            _ => Vec::new(),
        }
    }

    /// `check()` for aliases declaring enum values or patterns.
    pub fn checker(&self) -> Option<JavaMethod> {
        match &self.family {
            MethodFamily::Alias { .. } => alias::checker(self),
            _ => None,
        }
    }

    /// `addChild(Element)`, keeping the container fields in sync.
    ///
    /// `fields` holds `(field name, qualified class)` of every container
    /// child.
    pub fn support_method(&self, fields: &[(String, String)]) -> Option<JavaMethod> {
        if self.is_alias() {
            return None;
        }
        let mut add_child = JavaMethod::public("addChild", "void")
            .param("Element", "child")
            .javadoc("Support method for addChild.")
            .javadoc("Adds a child to this object.")
            .javadoc("")
            .javadoc("@param child The child to add")
            .line("super.addChild(child);");
        for (i, (field, class)) in fields.iter().rev().enumerate() {
            let simple = add_child.add_dependency(class);
            let cond = if i > 0 { "else " } else { "" };
            add_child.add_line(format!(
                "{cond}if (child instanceof {simple}) {field} = ({simple})child;"
            ));
        }
        Some(add_child)
    }

    /// `keyNames()`, returning the list keys or null.
    pub fn key_names(&self) -> Option<JavaMethod> {
        if self.is_alias() {
            return None;
        }
        let keys: Vec<&str> = self
            .schema
            .search(self.node, &Keyword::Key)
            .into_iter()
            .flat_map(|key| self.schema.arg(key).split_whitespace())
            .collect();
        let mut method = JavaMethod::public("keyNames", "String[]")
            .javadoc("Structure information which specifies")
            .javadoc("the keys for the list entries.");
        if keys.is_empty() {
            method.add_line("return null;");
        } else {
            method.add_line("return new String[] {");
            for key in keys {
                method.add_line(format!("    \"{key}\","));
            }
            method.add_line("};");
        }
        Some(method)
    }

    /// `childrenNames()`, listing data children in schema order.
    pub fn children_names(&self) -> Option<JavaMethod> {
        if self.is_alias() {
            return None;
        }
        let mut names: Vec<&str> = Vec::new();
        let effective = self.schema.i_children(self.node).unwrap_or_default();
        for &child in effective.iter().chain(self.schema.substmts(self.node)) {
            let arg = self.schema.arg(child);
            if self.schema.keyword(child).is_data_node() && !names.contains(&arg) {
                names.push(arg);
            }
        }
        let mut method = JavaMethod::public("childrenNames", "String[]")
            .javadoc("Structure information with the names of the children.")
            .javadoc("Makes it possible to order the children.")
            .line("return new String[] {");
        for name in names {
            method.add_line(format!("    \"{name}\","));
        }
        method.add_line("};");
        Some(method)
    }

    /// Field the parent class keeps for a container child.
    pub fn child_field(&self) -> Option<JavaValue> {
        match self.family {
            MethodFamily::Container => Some(
                JavaValue::new(self.arg)
                    .javadoc(format!("Field for child container \"{}\".", self.arg))
                    .modifiers(&["public"])
                    .value_type(&self.qualified)
                    .value("null"),
            ),
            _ => None,
        }
    }

    /// Methods the parent class gets for managing this child.
    pub fn parent_access_methods(&self) -> Vec<Member> {
        match &self.family {
            MethodFamily::Alias { .. } => Vec::new(),
            MethodFamily::Container => container::parent_access_methods(self),
            MethodFamily::List { .. } => list::parent_access_methods(self),
        }
    }
}

/// Section banner preceding the access methods of one child.
pub(crate) fn access_methods_comment(keyword: &str, arg: &str, optional: bool) -> Member {
    let optional = if optional { "optional " } else { "" };
    Member::Comment(vec![
        "-------------------------------------------------------".to_string(),
        format!("Access methods for {optional}{keyword} child: \"{arg}\"."),
        "-------------------------------------------------------".to_string(),
    ])
}

/// `ElementChildrenIterator` or `ElementLeafListValueIterator` getter.
pub(crate) fn child_iterator(keyword: &str, arg: &str) -> JavaMethod {
    let iterator = if keyword == "leaf-list" {
        "ElementLeafListValueIterator"
    } else {
        "ElementChildrenIterator"
    };
    JavaMethod::public(format!("{arg}Iterator"), iterator)
        .javadoc(format!("Iterator method for the {keyword} \"{arg}\"."))
        .javadoc(format!("@return An iterator for the {keyword}."))
        .line(format!("return new {iterator}(children, \"{arg}\");"))
}

/// Java string literal body for `value`.
pub(crate) fn escape_java(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    pub(super) fn module(schema: &mut Schema) -> NodeId {
        let root = schema.add_root(Keyword::Module, "acme");
        schema.add_child(root, Keyword::Namespace, Some("urn:acme"));
        schema.add_child(root, Keyword::Prefix, Some("acme"));
        root
    }

    pub(super) fn root_class() -> RootClass {
        RootClass::new("gen", "acme")
    }

    fn generator<'a>(schema: &'a Schema, node: NodeId, root: &'a RootClass) -> MethodGenerator<'a> {
        let resolver = TypeResolver::new(schema, "gen");
        MethodGenerator::new(schema, node, "gen", root, &resolver, &mut WarningLog::new()).unwrap()
    }

    #[test]
    fn RootClass___new___capitalizes_prefix() {
        let root = RootClass::new("gen", "acme-sys");

        assert_eq!(root.name, "AcmeSys");
        assert_eq!(root.qualified, "gen.AcmeSys");
    }

    #[test]
    fn MethodGenerator___leaf___has_no_generator() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let leaf = schema.add_child(root, Keyword::Leaf, Some("x"));
        let resolver = TypeResolver::new(&schema, "gen");
        let root_class = root_class();

        let generator =
            MethodGenerator::new(&schema, leaf, "gen", &root_class, &resolver, &mut WarningLog::new());

        assert!(generator.is_none());
    }

    #[test]
    fn constructor___top_level_container___sets_prefix() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let root_class = root_class();

        let constructors = generator(&schema, top, &root_class).constructors();

        assert_eq!(constructors.len(), 1);
        assert_eq!(
            constructors[0].body(),
            [
                "super(Acme.NAMESPACE, \"top\");",
                "setDefaultPrefix();",
                "setPrefix(Acme.PREFIX);",
            ]
        );
        assert!(constructors[0].imports().contains("gen.Acme"));
    }

    #[test]
    fn constructor___nested_container___skips_prefix() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let inner = schema.add_child(top, Keyword::Container, Some("inner"));
        let root_class = root_class();

        let constructors = generator(&schema, inner, &root_class).constructors();

        assert_eq!(constructors[0].body(), ["super(Acme.NAMESPACE, \"inner\");"]);
    }

    #[test]
    fn cloners___container___returns_exact_and_shallow() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let root_class = root_class();

        let cloners = generator(&schema, top, &root_class).cloners();

        let names: Vec<&str> = cloners.iter().map(JavaMethod::name).collect();
        assert_eq!(names, ["clone", "cloneShallow"]);
        assert_eq!(cloners[1].body(), ["return cloneShallowContent(new Top());"]);
    }

    #[test]
    fn support_method___two_fields___chains_else_if_in_reverse() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let root_class = root_class();
        let fields = vec![
            ("a".to_string(), "gen.top.A".to_string()),
            ("b".to_string(), "gen.top.B".to_string()),
        ];

        let method = generator(&schema, top, &root_class).support_method(&fields).unwrap();

        assert_eq!(
            method.body(),
            [
                "super.addChild(child);",
                "if (child instanceof B) b = (B)child;",
                "else if (child instanceof A) a = (A)child;",
            ]
        );
        assert!(method.imports().contains("gen.top.A"));
    }

    #[test]
    fn key_names___keyless_container___returns_null() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let root_class = root_class();

        let method = generator(&schema, top, &root_class).key_names().unwrap();

        assert_eq!(method.body(), ["return null;"]);
    }

    #[test]
    fn children_names___lists_data_children_once() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let count = schema.add_child(top, Keyword::Leaf, Some("count"));
        schema.add_child(top, Keyword::Description, Some("ignored"));
        let items = schema.add_child(top, Keyword::List, Some("items"));
        schema.set_i_children(top, vec![count, items]);
        let root_class = root_class();

        let method = generator(&schema, top, &root_class).children_names().unwrap();

        assert_eq!(
            method.body(),
            ["return new String[] {", "    \"count\",", "    \"items\",", "};"]
        );
    }

    #[test]
    fn child_field___container___is_null_initialized() {
        let mut schema = Schema::new();
        let root = module(&mut schema);
        let top = schema.add_child(root, Keyword::Container, Some("top"));
        let root_class = root_class();

        let field = generator(&schema, top, &root_class).child_field().unwrap();

        assert_eq!(field.as_lines().last().unwrap(), "    public Top top = null;");
    }

    #[test]
    fn escape_java___quotes_and_backslashes() {
        assert_eq!(escape_java(r#"[a-z"]+\d"#), r#"[a-z\"]+\\d"#);
    }
}
