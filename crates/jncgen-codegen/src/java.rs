//! Java code elements: fields, methods and standalone comments.
//!
//! Elements compare by value, so the ordered sets in a
//! [`JavaClass`](crate::class::JavaClass) drop exact duplicates no matter
//! how many times generation produces them.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashSet};

/// Java reserved words.
pub const JAVA_RESERVED_WORDS: [&str; 53] = [
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "double",
    "do",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// `java.lang` classes whose short names generated code must not shadow.
pub const JAVA_LANG: [&str; 10] = [
    "Boolean", "Byte", "Double", "Float", "Integer", "Long", "Number", "Object", "Short", "String",
];

/// JNC library classes referenced by generated method bodies.
const JNC_CLASSES: [&str; 14] = [
    "Element",
    "ElementChildrenIterator",
    "ElementLeafListValueIterator",
    "JNCException",
    "Leaf",
    "SchemaNode",
    "SchemaParser",
    "SchemaTree",
    "Tagpath",
    "YangElement",
    "YangException",
    "YangString",
    "YangBoolean",
    "YangUnion",
];

const JNC_PACKAGE: &str = "com.tailf.jnc";

static JAVA_BUILT_IN: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    JAVA_RESERVED_WORDS
        .iter()
        .chain(JAVA_LANG.iter())
        .copied()
        .collect()
});

/// True for Java reserved words and `java.lang` short names.
pub fn is_java_built_in(name: &str) -> bool {
    JAVA_BUILT_IN.contains(name)
}

/// Record the import a type reference needs and return the name to use in
/// code.
///
/// Qualified names are imported and shortened. Known JNC and `java.math`
/// short names are imported from their packages. Java built-ins and anything
/// else are used as given.
fn add_dependency(imports: &mut BTreeSet<String>, type_name: &str) -> String {
    if let Some((_, simple)) = type_name.rsplit_once('.') {
        if is_java_built_in(simple) {
            return type_name.to_string();
        }
        imports.insert(type_name.to_string());
        return simple.to_string();
    }
    match type_name {
        "BigInteger" | "BigDecimal" => {
            imports.insert(format!("java.math.{type_name}"));
        }
        name if JNC_CLASSES.contains(&name) => {
            imports.insert(format!("{JNC_PACKAGE}.{name}"));
        }
        _ => {}
    }
    type_name.to_string()
}

fn javadoc_lines(indent: &str, javadocs: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    if javadocs.is_empty() {
        return lines;
    }
    lines.push(format!("{indent}/**"));
    for doc in javadocs {
        if doc.is_empty() {
            lines.push(format!("{indent} *"));
        } else {
            lines.push(format!("{indent} * {doc}"));
        }
    }
    lines.push(format!("{indent} */"));
    lines
}

/// A field declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaValue {
    javadocs: Vec<String>,
    modifiers: Vec<String>,
    value_type: Option<String>,
    name: String,
    value: Option<String>,
    imports: BTreeSet<String>,
    indent: usize,
}

impl JavaValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            javadocs: Vec::new(),
            modifiers: Vec::new(),
            value_type: None,
            name: name.into(),
            value: None,
            imports: BTreeSet::new(),
            indent: 4,
        }
    }

    pub fn javadoc(mut self, line: impl Into<String>) -> Self {
        self.javadocs.push(line.into());
        self
    }

    pub fn modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers.extend(modifiers.iter().map(|m| m.to_string()));
        self
    }

    pub fn value_type(mut self, type_name: &str) -> Self {
        self.value_type = Some(add_dependency(&mut self.imports, type_name));
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    pub fn as_lines(&self) -> Vec<String> {
        let indent = " ".repeat(self.indent);
        let mut lines = javadoc_lines(&indent, &self.javadocs);
        let mut declaration: Vec<&str> = self.modifiers.iter().map(String::as_str).collect();
        if let Some(value_type) = &self.value_type {
            declaration.push(value_type);
        }
        declaration.push(&self.name);
        if let Some(value) = &self.value {
            declaration.push("=");
            declaration.push(value);
        }
        lines.push(format!("{indent}{};", declaration.join(" ")));
        lines
    }
}

/// A method or constructor. Constructors have no return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaMethod {
    javadocs: Vec<String>,
    modifiers: Vec<String>,
    return_type: Option<String>,
    name: String,
    parameters: Vec<String>,
    exceptions: Vec<String>,
    body: Vec<String>,
    imports: BTreeSet<String>,
    indent: usize,
}

impl JavaMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            javadocs: Vec::new(),
            modifiers: Vec::new(),
            return_type: None,
            name: name.into(),
            parameters: Vec::new(),
            exceptions: Vec::new(),
            body: Vec::new(),
            imports: BTreeSet::new(),
            indent: 4,
        }
    }

    /// A `public` method with the given return type.
    pub fn public(name: impl Into<String>, return_type: &str) -> Self {
        let mut method = Self::new(name).modifier("public");
        method.set_return_type(return_type);
        method
    }

    pub fn modifier(mut self, modifier: &str) -> Self {
        self.modifiers.push(modifier.to_string());
        self
    }

    pub fn javadoc(mut self, line: impl Into<String>) -> Self {
        self.javadocs.push(line.into());
        self
    }

    pub fn add_javadoc(&mut self, line: impl Into<String>) {
        self.javadocs.push(line.into());
    }

    pub fn set_return_type(&mut self, type_name: &str) {
        self.return_type = Some(add_dependency(&mut self.imports, type_name));
    }

    pub fn add_parameter(&mut self, type_name: &str, name: &str) {
        let simple = add_dependency(&mut self.imports, type_name);
        self.parameters.push(format!("{simple} {name}"));
    }

    pub fn param(mut self, type_name: &str, name: &str) -> Self {
        self.add_parameter(type_name, name);
        self
    }

    pub fn add_exception(&mut self, exception: &str) {
        let simple = add_dependency(&mut self.imports, exception);
        if !self.exceptions.contains(&simple) {
            self.exceptions.push(simple);
        }
    }

    pub fn throws(mut self, exception: &str) -> Self {
        self.add_exception(exception);
        self
    }

    /// Register a type used inside the body and return its short name.
    pub fn add_dependency(&mut self, type_name: &str) -> String {
        add_dependency(&mut self.imports, type_name)
    }

    pub fn dependency(mut self, type_name: &str) -> Self {
        self.add_dependency(type_name);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.body.push(line.into());
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.add_line(line);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    pub fn body(&self) -> &[String] {
        &self.body
    }

    pub fn imports(&self) -> &BTreeSet<String> {
        &self.imports
    }

    pub fn as_lines(&self) -> Vec<String> {
        let indent = " ".repeat(self.indent);
        let mut lines = javadoc_lines(&indent, &self.javadocs);

        let mut header: Vec<&str> = self.modifiers.iter().map(String::as_str).collect();
        if let Some(return_type) = &self.return_type {
            header.push(return_type);
        }
        header.push(&self.name);

        let mut signature = format!("{indent}{}({})", header.join(" "), self.parameters.join(", "));
        if !self.exceptions.is_empty() {
            signature.push_str(" throws ");
            signature.push_str(&self.exceptions.join(", "));
        }
        signature.push_str(" {");
        lines.push(signature);

        for line in &self.body {
            lines.push(format!("{indent}    {line}"));
        }
        lines.push(format!("{indent}}}"));
        lines
    }
}

/// An entry in a class's grouped access methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    Method(JavaMethod),
    /// Section banner; each line becomes one javadoc line.
    Comment(Vec<String>),
}

impl Member {
    pub fn as_method(&self) -> Option<&JavaMethod> {
        match self {
            Self::Method(method) => Some(method),
            Self::Comment(_) => None,
        }
    }

    pub fn imports(&self) -> Option<&BTreeSet<String>> {
        self.as_method().map(JavaMethod::imports)
    }

    pub fn as_lines(&self) -> Vec<String> {
        match self {
            Self::Method(method) => method.as_lines(),
            Self::Comment(lines) => javadoc_lines("    ", lines),
        }
    }
}

impl From<JavaMethod> for Member {
    fn from(method: JavaMethod) -> Self {
        Self::Method(method)
    }
}
