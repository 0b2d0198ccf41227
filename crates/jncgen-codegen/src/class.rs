//! Java class model and renderer.

use crate::config::GeneratorConfig;
use crate::java::{JavaMethod, JavaValue, Member};
use crate::ordered_set::OrderedSet;
use indexmap::IndexMap;

/// Version and date stamped into every class header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub version: String,
    pub date: Option<String>,
}

impl Banner {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            version: config.version.clone(),
            date: config.date.clone(),
        }
    }

    fn stamp(&self) -> String {
        match &self.date {
            Some(date) => format!("{} {date}", self.version),
            None => self.version.clone(),
        }
    }
}

/// A generated Java class under construction.
///
/// Members accumulate in per-kind ordered sets, so rendering order depends
/// only on member kind and first insertion, never on how often generation
/// produced a member.
#[derive(Debug, Clone)]
pub struct JavaClass {
    name: String,
    package: String,
    description: Vec<String>,
    source: String,
    superclass: Option<String>,
    imports: OrderedSet<String>,
    fields: OrderedSet<JavaValue>,
    constructors: OrderedSet<JavaMethod>,
    cloners: OrderedSet<JavaMethod>,
    enablers: OrderedSet<JavaMethod>,
    schema_registrators: OrderedSet<JavaMethod>,
    name_getters: OrderedSet<JavaMethod>,
    access_methods: IndexMap<String, Vec<Member>>,
    support_methods: OrderedSet<JavaMethod>,
}

impl JavaClass {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            description: Vec::new(),
            source: "<unknown>.yang".to_string(),
            superclass: None,
            imports: OrderedSet::new(),
            fields: OrderedSet::new(),
            constructors: OrderedSet::new(),
            cloners: OrderedSet::new(),
            enablers: OrderedSet::new(),
            schema_registrators: OrderedSet::new(),
            name_getters: OrderedSet::new(),
            access_methods: IndexMap::new(),
            support_methods: OrderedSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    /// Class javadoc, one entry per line.
    pub fn set_description(&mut self, lines: Vec<String>) {
        self.description = lines;
    }

    /// Origin line of the header, e.g. `module "acme", revision: "unknown".`
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
    }

    /// Set the superclass from a short JNC name or a qualified name.
    pub fn set_superclass(&mut self, superclass: &str) {
        let simple = match superclass.rsplit_once('.') {
            Some((_, simple)) => {
                self.imports.add(superclass.to_string());
                simple.to_string()
            }
            None => {
                self.imports.add(format!("com.tailf.jnc.{superclass}"));
                superclass.to_string()
            }
        };
        self.superclass = Some(simple);
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn add_field(&mut self, field: JavaValue) -> bool {
        self.fields.add(field)
    }

    pub fn add_constructor(&mut self, constructor: JavaMethod) -> bool {
        self.constructors.add(constructor)
    }

    pub fn add_cloner(&mut self, cloner: JavaMethod) -> bool {
        self.cloners.add(cloner)
    }

    pub fn add_enabler(&mut self, enabler: JavaMethod) -> bool {
        self.enablers.add(enabler)
    }

    pub fn add_schema_registrator(&mut self, registrator: JavaMethod) -> bool {
        self.schema_registrators.add(registrator)
    }

    pub fn add_name_getter(&mut self, getter: JavaMethod) -> bool {
        self.name_getters.add(getter)
    }

    /// Append to the access methods grouped under `key`, creating the group
    /// on first use.
    pub fn append_access_method(&mut self, key: &str, member: impl Into<Member>) {
        self.access_methods
            .entry(key.to_string())
            .or_default()
            .push(member.into());
    }

    pub fn add_support_method(&mut self, method: JavaMethod) -> bool {
        self.support_methods.add(method)
    }

    pub fn fields(&self) -> &OrderedSet<JavaValue> {
        &self.fields
    }

    pub fn constructors(&self) -> &OrderedSet<JavaMethod> {
        &self.constructors
    }

    pub fn cloners(&self) -> &OrderedSet<JavaMethod> {
        &self.cloners
    }

    pub fn name_getters(&self) -> &OrderedSet<JavaMethod> {
        &self.name_getters
    }

    pub fn access_methods(&self) -> &IndexMap<String, Vec<Member>> {
        &self.access_methods
    }

    pub fn support_methods(&self) -> &OrderedSet<JavaMethod> {
        &self.support_methods
    }

    /// Every method of the class in rendering order, comments skipped.
    pub fn methods(&self) -> impl Iterator<Item = &JavaMethod> {
        self.constructors
            .iter()
            .chain(self.cloners.iter())
            .chain(self.enablers.iter())
            .chain(self.schema_registrators.iter())
            .chain(self.name_getters.iter())
            .chain(
                self.access_methods
                    .values()
                    .flatten()
                    .filter_map(Member::as_method),
            )
            .chain(self.support_methods.iter())
    }

    fn member_lines(&self) -> Vec<Vec<String>> {
        let mut members: Vec<Vec<String>> = self.fields.iter().map(JavaValue::as_lines).collect();
        members.extend(
            self.constructors
                .iter()
                .chain(self.cloners.iter())
                .chain(self.enablers.iter())
                .chain(self.schema_registrators.iter())
                .chain(self.name_getters.iter())
                .map(JavaMethod::as_lines),
        );
        members.extend(self.access_methods.values().flatten().map(Member::as_lines));
        members.extend(self.support_methods.iter().map(JavaMethod::as_lines));
        members
    }

    fn collect_imports(&mut self) {
        let mut imports: Vec<String> = Vec::new();
        imports.extend(self.fields.iter().flat_map(|f| f.imports().iter().cloned()));
        imports.extend(self.methods().flat_map(|m| m.imports().iter().cloned()));
        self.imports.extend(imports);
    }

    /// Render the class as Java source, consuming the model.
    pub fn into_source(mut self, banner: &Banner) -> String {
        if self.superclass.is_some() {
            self.fields.add_first(
                JavaValue::new("serialVersionUID")
                    .modifiers(&["private", "static", "final"])
                    .value_type("long")
                    .value("1L"),
            );
        }
        self.collect_imports();

        let mut lines = vec![
            "/*".to_string(),
            format!(" * @(#){}.java        {}", self.name, banner.stamp()),
            " *".to_string(),
            " * This file has been auto-generated by jncgen, the".to_string(),
            " * JNC class generator for YANG modules.".to_string(),
            format!(" * Origin: {}", self.source),
            " */".to_string(),
            String::new(),
            format!("package {};", self.package),
        ];

        let own_package = self.package.as_str();
        let imports: Vec<String> = self
            .imports
            .sorted()
            .into_iter()
            .filter(|import| {
                import
                    .rsplit_once('.')
                    .is_some_and(|(package, _)| package != own_package)
            })
            .collect();
        if !imports.is_empty() {
            lines.push(String::new());
            lines.extend(imports.iter().map(|import| format!("import {import};")));
        }

        lines.push(String::new());
        lines.push("/**".to_string());
        lines.extend(self.description.iter().map(|line| format!(" * {line}")));
        lines.push(" *".to_string());
        lines.push(format!(" * @version {}", banner.stamp()));
        lines.push(" * @author Auto Generated".to_string());
        lines.push(" */".to_string());
        match &self.superclass {
            Some(superclass) => {
                lines.push(format!("public class {} extends {superclass} {{", self.name))
            }
            None => lines.push(format!("public class {} {{", self.name)),
        }
        lines.push(String::new());

        for member in self.member_lines() {
            lines.extend(member);
            lines.push(String::new());
        }
        lines.push("}".to_string());

        let mut source = lines.join("\n");
        source.push('\n');
        source
    }
}

#[cfg(test)]
#[path = "class/class_tests.rs"]
mod class_tests;
