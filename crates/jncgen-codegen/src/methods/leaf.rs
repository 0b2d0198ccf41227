//! Access methods for leaf and leaf-list children.

use super::{RootClass, access_methods_comment, child_iterator};
use crate::java::{JavaMethod, Member};
use crate::naming::capitalize_first;
use crate::types::{TypePair, TypeResolver};
use crate::warnings::WarningLog;
use jncgen_schema::{Keyword, NodeId, Schema};

const OPERATIONS: [&str; 4] = ["replace", "merge", "create", "delete"];

/// Generates the methods a class gets for one leaf or leaf-list child.
pub struct LeafMethodGenerator<'a> {
    arg: &'a str,
    name: String,
    is_leaf_list: bool,
    pair: TypePair,
    root: &'a RootClass,
    is_key: bool,
}

impl<'a> LeafMethodGenerator<'a> {
    /// `parent` is the node whose class receives the methods; a leaf named
    /// in its `key` is mandatory. `None` unless `node` is a leaf or
    /// leaf-list.
    pub fn new(
        schema: &'a Schema,
        node: NodeId,
        parent: NodeId,
        root: &'a RootClass,
        resolver: &TypeResolver<'_>,
        warnings: &mut WarningLog,
    ) -> Option<Self> {
        let is_leaf_list = match schema.keyword(node) {
            Keyword::Leaf => false,
            Keyword::LeafList => true,
            _ => return None,
        };
        let arg = schema.arg(node);
        let is_key = !is_leaf_list
            && schema
                .search_arg(parent, &Keyword::Key)
                .is_some_and(|key| key.split_whitespace().any(|k| k == arg));
        Some(Self {
            arg,
            name: capitalize_first(arg),
            is_leaf_list,
            pair: resolver.resolve(node, warnings),
            root,
            is_key,
        })
    }

    pub fn is_key(&self) -> bool {
        self.is_key
    }

    fn keyword(&self) -> &'static str {
        if self.is_leaf_list { "leaf-list" } else { "leaf" }
    }

    /// All access methods in declaration order, headed by a section comment.
    pub fn access_methods(&self) -> Vec<Member> {
        if self.is_leaf_list {
            self.leaf_list_methods()
        } else {
            self.leaf_methods()
        }
    }

    fn leaf_methods(&self) -> Vec<Member> {
        let optional = !self.is_key;
        let mut members = vec![if self.is_key {
            access_methods_comment("key", self.arg, false)
        } else {
            access_methods_comment("leaf", self.arg, true)
        }];
        members.push(self.value_getter().into());
        members.extend(self.setters().into_iter().map(Member::from));
        if optional {
            members.push(self.unsetter().into());
        }
        members.push(self.filter_adder().into());
        if optional {
            for op in OPERATIONS {
                members.extend(self.marks(op).into_iter().map(Member::from));
            }
        }
        members
    }

    fn leaf_list_methods(&self) -> Vec<Member> {
        let mut members = vec![
            access_methods_comment("leaf-list", self.arg, false),
            child_iterator("leaf-list", self.arg).into(),
        ];
        members.extend(self.setters().into_iter().map(Member::from));
        members.push(self.value_deleter(false).into());
        members.push(self.value_deleter(true).into());
        members.push(self.filter_adder().into());
        for op in OPERATIONS {
            members.extend(self.marks(op).into_iter().map(Member::from));
        }
        members
    }

    fn value_getter(&self) -> JavaMethod {
        let mut getter = JavaMethod::public(format!("get{}Value", self.name), &self.pair.library)
            .javadoc(format!("Return the value for child leaf \"{}\".", self.arg))
            .javadoc("@return The value of the leaf.")
            .throws("JNCException");
        let library = getter.add_dependency(&self.pair.library);
        getter.add_line(format!("return ({library})getValue(\"{}\");", self.arg));
        getter
    }

    /// Library-typed setter storing through the parent, then the `String`
    /// and primitive convenience overloads wrapping into the library type.
    fn setters(&self) -> Vec<JavaMethod> {
        let (arg, keyword) = (self.arg, self.keyword());
        let param = format!("{arg}Value");
        let store = if self.is_leaf_list {
            "setLeafListValue"
        } else {
            "setLeafValue"
        };

        let mut setters = vec![
            JavaMethod::public(format!("set{}Value", self.name), "void")
                .javadoc(format!("Sets the value for child {keyword} \"{arg}\"."))
                .javadoc(format!("@param {param} The value to set."))
                .param(&self.pair.library, &param)
                .throws("JNCException")
                .dependency(&self.root.qualified)
                .line(format!("{store}({}.NAMESPACE,", self.root.name))
                .line(format!("    \"{arg}\","))
                .line(format!("    {param},"))
                .line("    childrenNames());"),
        ];

        let mut overloads = vec![("String", "using a string value", "string representation of the ")];
        if !self.pair.is_text() {
            overloads.push((self.pair.primitive.as_str(), "using the java primitive value", ""));
        }
        for (param_type, using, described) in overloads {
            let mut setter = JavaMethod::public(format!("set{}Value", self.name), "void")
                .javadoc(format!("Sets the value for child {keyword} \"{arg}\", {using}."))
                .javadoc(format!("@param {param} The {described}value to set."))
                .param(param_type, &param)
                .throws("JNCException");
            let library = setter.add_dependency(&self.pair.library);
            setter.add_line(format!("set{}Value(new {library}({param}));", self.name));
            setters.push(setter);
        }
        setters
    }

    fn unsetter(&self) -> JavaMethod {
        JavaMethod::public(format!("unset{}Value", self.name), "void")
            .javadoc(format!("Unsets the value for child leaf \"{}\".", self.arg))
            .throws("JNCException")
            .line(format!("delete(\"{}\");", self.arg))
    }

    /// `addX()` for leafs, `addEmptyX()` for leaf-lists: a valueless child
    /// for subtree filters.
    fn filter_adder(&self) -> JavaMethod {
        let (arg, keyword) = (self.arg, self.keyword());
        let (name, store) = if self.is_leaf_list {
            (format!("addEmpty{}", self.name), "setLeafListValue")
        } else {
            (format!("add{}", self.name), "setLeafValue")
        };
        JavaMethod::public(name, "void")
            .javadoc("This method is used for creating a subtree filter.")
            .javadoc(format!("The added \"{arg}\" {keyword} will not have a value."))
            .throws("JNCException")
            .dependency(&self.root.qualified)
            .line(format!("{store}({}.NAMESPACE,", self.root.name))
            .line(format!("    \"{arg}\","))
            .line("    null,")
            .line("    childrenNames());")
    }

    fn value_deleter(&self, text: bool) -> JavaMethod {
        let arg = self.arg;
        let param = format!("{arg}Value");
        let param_type = if text { "String" } else { self.pair.library.as_str() };
        let mut deleter = JavaMethod::public(format!("delete{}", self.name), "void")
            .javadoc(format!("Deletes leaf-list entry \"{arg}\"."));
        if text {
            deleter.add_javadoc("The value is specified as a String.");
        }
        deleter
            .javadoc(format!("@param {param} Child to be removed."))
            .param(param_type, &param)
            .throws("JNCException")
            .line(format!("String path = \"{arg}[name='\" + {param} + \"']\";"))
            .line("delete(path);")
    }

    /// `markX<Op>` methods. Leaf-lists address one value and get a `String`
    /// overload unless the primitive already is `String`.
    fn marks(&self, op: &str) -> Vec<JavaMethod> {
        let (arg, keyword) = (self.arg, self.keyword());
        let method_name = format!("mark{}{}", self.name, capitalize_first(op));
        let mark_call = format!("markLeaf{}", capitalize_first(op));

        if !self.is_leaf_list {
            return vec![
                JavaMethod::public(method_name, "void")
                    .javadoc(format!("Marks the leaf \"{arg}\" with operation \"{op}\"."))
                    .throws("JNCException")
                    .line(format!("{mark_call}(\"{arg}\");")),
            ];
        }

        let param = format!("{arg}Value");
        let mut variants = vec![(self.pair.library.as_str(), "")];
        if !self.pair.is_text() {
            variants.push(("String", ", given as a String"));
        }
        variants
            .into_iter()
            .map(|(param_type, given)| {
                JavaMethod::public(method_name.clone(), "void")
                    .javadoc(format!(
                        "Marks the {keyword} \"{arg}\" with operation \"{op}\"."
                    ))
                    .javadoc(format!("@param {param} The value to mark{given}"))
                    .param(param_type, &param)
                    .throws("JNCException")
                    .line(format!(
                        "{mark_call}(\"{arg}[name='\" + {param} + \"']\");"
                    ))
            })
            .collect()
    }
}
