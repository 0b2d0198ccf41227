//! Schema tree to class hierarchy.
//!
//! [`generate`] sanitizes every loaded document, then walks each module top
//! down. Containers, lists and typedefs get a class of their own; leafs and
//! leaf-lists become access methods of the enclosing class. Augments emit
//! nothing themselves: their children already sit in the target's effective
//! children, and the target document is queued for generation after the
//! module that augments it.

use crate::class::{Banner, JavaClass};
use crate::config::GeneratorConfig;
use crate::error::{CodegenError, CodegenResult};
use crate::java::{JavaMethod, JavaValue};
use crate::methods::{LeafMethodGenerator, MethodFamily, MethodGenerator, RootClass, escape_java};
use crate::naming::{class_name, package_path, sanitize};
use crate::schema_file::{GeneratedSchema, schema_file};
use crate::types::{TypeResolver, package_of};
use crate::warnings::WarningLog;
use indexmap::IndexMap;
use jncgen_schema::{DiagnosticCategory, Keyword, NodeId, Resolution, Schema};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info};

/// Java source of one generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedClass {
    pub package: String,
    pub name: String,
    pub source: String,
}

impl GeneratedClass {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    /// `gen/top/Items.java` for class `Items` in package `gen.top`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = package_path(&self.package);
        path.push(format!("{}.java", self.name));
        path
    }
}

/// Everything one [`generate`] call produced.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// In generation order; nested classes precede their parent.
    pub classes: Vec<GeneratedClass>,
    pub schemas: Vec<GeneratedSchema>,
    pub warnings: Vec<String>,
}

impl Generation {
    pub fn class(&self, qualified_name: &str) -> Option<&GeneratedClass> {
        self.classes.iter().find(|c| c.qualified_name() == qualified_name)
    }
}

/// Generate the class hierarchy of every module in `schema`.
///
/// Identifiers are sanitized in place first. Fails only on fatal schema
/// diagnostics (unless `ignore_errors` is set) or when a schema file cannot
/// be rendered.
pub fn generate(schema: &mut Schema, config: &GeneratorConfig) -> CodegenResult<Generation> {
    let mut warnings = WarningLog::new();
    if !config.ignore_errors {
        check_diagnostics(schema, &mut warnings)?;
    }

    let roots = schema.roots().to_vec();
    let renamed: usize = roots.iter().map(|&root| sanitize(schema, root)).sum();
    debug!(renamed, "Identifiers sanitized");

    let mut context = GenerationContext::new(schema, config, warnings);
    context.run()?;
    Ok(context.finish())
}

/// Apply the diagnostics policy: missing modules and unknown error
/// categories abort, unresolved references only degrade the output.
fn check_diagnostics(schema: &Schema, warnings: &mut WarningLog) -> CodegenResult<()> {
    for diagnostic in schema.diagnostics() {
        let tag = diagnostic.category.tag();
        let invalid = || CodegenError::InvalidInput {
            module: diagnostic.module.clone(),
            category: tag.to_string(),
        };
        match &diagnostic.category {
            DiagnosticCategory::ModuleNotFound | DiagnosticCategory::ModuleNotFoundRev
                if diagnostic.is_error() =>
            {
                return Err(invalid());
            }
            category if category.is_degradable() => {
                warnings.warn(
                    tag,
                    format!(
                        "{}, generated class hierarchy might be incomplete.",
                        tag.to_lowercase()
                    ),
                );
            }
            _ if diagnostic.is_error() => {
                warnings.warn(tag, format!("{}, aborting.", tag.to_lowercase()));
                return Err(invalid());
            }
            _ => {
                warnings.warn(tag, diagnostic.to_string());
            }
        }
    }
    Ok(())
}

/// Per-document values every class of the document shares.
struct DocumentScope {
    namespace: String,
    prefix: String,
    root: RootClass,
    source: String,
}

struct GenerationContext<'a> {
    schema: &'a Schema,
    config: &'a GeneratorConfig,
    banner: Banner,
    warnings: WarningLog,
    /// Qualified class names of typedefs generated in the current document.
    defined_types: HashSet<String>,
    /// Documents extended by augments of the current module, by name.
    extension_targets: IndexMap<String, NodeId>,
    generated_documents: HashSet<NodeId>,
    /// Nodes whose class is being generated; breaks grouping cycles.
    active: Vec<NodeId>,
    classes: IndexMap<String, GeneratedClass>,
    schemas: Vec<GeneratedSchema>,
}

impl<'a> GenerationContext<'a> {
    fn new(schema: &'a Schema, config: &'a GeneratorConfig, warnings: WarningLog) -> Self {
        Self {
            schema,
            config,
            banner: Banner::from_config(config),
            warnings,
            defined_types: HashSet::new(),
            extension_targets: IndexMap::new(),
            generated_documents: HashSet::new(),
            active: Vec::new(),
            classes: IndexMap::new(),
            schemas: Vec::new(),
        }
    }

    fn run(&mut self) -> CodegenResult<()> {
        let schema = self.schema;
        let roots = schema.roots();

        for &root in roots {
            if schema.keyword(root) != &Keyword::Module {
                let message = format!(
                    "Ignoring schema tree rooted at \"{} {}\" - not a module",
                    schema.keyword(root),
                    schema.arg(root)
                );
                self.warnings.warn(message.clone(), message);
                continue;
            }

            if self.generated_documents.insert(root) {
                self.generate_document(root);
            }
            let mut augmented = Vec::new();
            while let Some((_, document)) = self.extension_targets.shift_remove_index(0) {
                if document != root && !augmented.contains(&document) {
                    augmented.push(document);
                }
                if self.generated_documents.insert(document) {
                    self.generate_document(document);
                }
            }
            info!(module = schema.arg(root), "Java classes generation complete");

            if !self.config.no_schema {
                let generated = schema_file(schema, root, &augmented, &self.config.package)?;
                info!(file = %generated.file_name, "Schema generation complete");
                self.schemas.push(generated);
            }
        }

        if roots.len() != 1 {
            let message = "Generating code for several modules has not been tested thoroughly.";
            self.warnings.warn(message, message);
        }
        Ok(())
    }

    fn finish(self) -> Generation {
        Generation {
            classes: self.classes.into_values().collect(),
            schemas: self.schemas,
            warnings: self.warnings.into_messages(),
        }
    }

    fn scope(&self, document: NodeId) -> DocumentScope {
        let schema = self.schema;
        let (namespace, prefix) = match schema.keyword(document) {
            Keyword::Submodule => {
                let prefix = schema
                    .search_one(document, &Keyword::BelongsTo)
                    .and_then(|belongs_to| schema.search_arg(belongs_to, &Keyword::Prefix))
                    .unwrap_or_default();
                (format!("<unknown/prefix: {prefix}>"), prefix)
            }
            _ => (
                schema
                    .search_arg(document, &Keyword::Namespace)
                    .unwrap_or_default()
                    .to_string(),
                schema.search_arg(document, &Keyword::Prefix).unwrap_or_default(),
            ),
        };
        DocumentScope {
            root: RootClass::new(&self.config.package, prefix),
            prefix: prefix.to_string(),
            namespace,
            source: format!(
                "module \"{}\", revision: \"{}\".",
                schema.arg(document),
                schema.latest_revision(document)
            ),
        }
    }

    fn generate_document(&mut self, document: NodeId) {
        let schema = self.schema;
        let scope = self.scope(document);
        self.defined_types.clear();

        let package = self.config.package.clone();
        for &stmt in schema.substmts(document) {
            if matches!(
                schema.keyword(stmt),
                Keyword::Container | Keyword::List | Keyword::Augment | Keyword::Typedef
            ) {
                self.generate_class(&scope, stmt, &package, "");
            }
        }

        let class = root_class(&scope, &package);
        self.emit(class);
        debug!(document = schema.arg(document), "Document generated");
    }

    /// Generate the class of `node` and, recursively, of its children.
    ///
    /// `path` is the slash-terminated path of the parent within the
    /// document, used in the class description.
    fn generate_class(&mut self, scope: &DocumentScope, node: NodeId, package: &str, path: &str) {
        let (schema, config) = (self.schema, self.config);
        match schema.keyword(node) {
            Keyword::Augment => {
                self.record_extension(node);
                return;
            }
            Keyword::Typedef => {
                let qualified = format!("{package}.{}", class_name(schema.arg(node)));
                if !self.defined_types.insert(qualified) {
                    return;
                }
            }
            _ => {}
        }
        if self.active.contains(&node) {
            return;
        }

        let resolver = TypeResolver::new(schema, &config.package);
        let Some(generator) =
            MethodGenerator::new(schema, node, package, &scope.root, &resolver, &mut self.warnings)
        else {
            return;
        };
        self.active.push(node);

        let arg = schema.arg(node);
        let mut class = JavaClass::new(class_name(arg), package);
        class.set_description(vec![
            format!("This class represents a \"{path}{arg}\" element"),
            format!("from the namespace {}", scope.namespace),
        ]);
        class.set_source(scope.source.clone());
        if !generator.is_alias() {
            class.set_superclass("YangElement");
        }

        let child_package = format!("{package}.{arg}");
        let child_path = format!("{path}{arg}/");
        let mut fields = Vec::new();
        for child in walk_order(schema, node) {
            self.generate_child(
                scope,
                &mut class,
                (node, child),
                (&child_package, &child_path),
                &mut fields,
            );
        }

        for constructor in generator.constructors() {
            class.add_constructor(constructor);
        }
        for cloner in generator.cloners() {
            class.add_cloner(cloner);
        }
        for (i, setter) in generator.setters().into_iter().enumerate() {
            class.append_access_method(&i.to_string(), setter);
        }
        if let Some(checker) = generator.checker() {
            class.append_access_method("check", checker);
        }
        if let Some(support) = generator.support_method(&fields) {
            class.add_support_method(support);
        }

        match generator.family() {
            MethodFamily::Alias { pair, .. } => {
                class.set_superclass(&pair.library);
                if let Some(base) = resolver.base_typedef(node) {
                    self.generate_base_typedef(scope, node, base);
                }
            }
            _ => {
                let getters = [generator.key_names(), generator.children_names()];
                for getter in getters.into_iter().flatten() {
                    class.add_name_getter(getter);
                }
            }
        }

        self.active.pop();
        self.emit(class);
    }

    fn generate_child(
        &mut self,
        scope: &DocumentScope,
        class: &mut JavaClass,
        (parent, child): (NodeId, NodeId),
        (package, path): (&str, &str),
        fields: &mut Vec<(String, String)>,
    ) {
        let (schema, config) = (self.schema, self.config);
        let arg = schema.arg(child);
        let resolver = TypeResolver::new(schema, &config.package);

        match schema.keyword(child) {
            Keyword::Container | Keyword::List => {
                self.generate_class(scope, child, package, path);
                let Some(generator) = MethodGenerator::new(
                    schema,
                    child,
                    package,
                    &scope.root,
                    &resolver,
                    &mut self.warnings,
                ) else {
                    return;
                };
                if let Some(field) = generator.child_field() {
                    fields.push((arg.to_string(), generator.qualified_name().to_string()));
                    class.add_field(field);
                }
                for member in generator.parent_access_methods() {
                    class.append_access_method(arg, member);
                }
            }
            Keyword::Typedef => self.generate_class(scope, child, package, path),
            Keyword::Leaf | Keyword::LeafList => {
                if let Some(leaf) = LeafMethodGenerator::new(
                    schema,
                    child,
                    parent,
                    &scope.root,
                    &resolver,
                    &mut self.warnings,
                ) {
                    for member in leaf.access_methods() {
                        class.append_access_method(arg, member);
                    }
                }
            }
            _ => {}
        }
    }

    /// Generate the class of a typedef another typedef derives from, in
    /// the package and document it is declared in.
    fn generate_base_typedef(&mut self, scope: &DocumentScope, typedef: NodeId, base: NodeId) {
        let (schema, config) = (self.schema, self.config);
        let package = package_of(schema, &config.package, base);
        let qualified = format!("{package}.{}", class_name(schema.arg(base)));
        if self.defined_types.contains(&qualified) {
            return;
        }
        let document = schema.top(base);
        if document == schema.top(typedef) {
            self.generate_class(scope, base, &package, "");
        } else {
            let base_scope = self.scope(document);
            self.generate_class(&base_scope, base, &package, "");
        }
    }

    fn record_extension(&mut self, augment: NodeId) {
        let schema = self.schema;
        match schema.node(augment).target {
            Resolution::Resolved(target) => {
                let document = schema.top(target);
                if document != schema.top(augment) {
                    self.extension_targets
                        .insert(schema.arg(document).to_string(), document);
                }
            }
            Resolution::Unresolved | Resolution::NotAnnotated => {
                let message = "Target missing from augment statement";
                self.warnings.warn(message, message);
            }
        }
    }

    fn emit(&mut self, class: JavaClass) {
        let qualified = class.qualified_name();
        if self.classes.contains_key(&qualified) {
            debug!(class = %qualified, "Class already generated");
            return;
        }
        debug!(class = %qualified, "Generated class");
        let generated = GeneratedClass {
            package: class.package().to_string(),
            name: class.name().to_string(),
            source: class.into_source(&self.banner),
        };
        self.classes.insert(qualified, generated);
    }
}

/// Effective children first, then substatements not reachable from them.
fn walk_order(schema: &Schema, node: NodeId) -> Vec<NodeId> {
    let effective = schema.i_children(node).unwrap_or_default();

    let mut expanded: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = effective.to_vec();
    while let Some(id) = stack.pop() {
        if !expanded.insert(id) {
            continue;
        }
        stack.extend(schema.i_children(id).unwrap_or_default());
        stack.extend(schema.substmts(id));
    }

    let mut order = effective.to_vec();
    order.extend(
        schema
            .substmts(node)
            .iter()
            .copied()
            .filter(|id| !expanded.contains(id)),
    );
    order
}

/// The document root class: namespace constants and schema registration.
fn root_class(scope: &DocumentScope, package: &str) -> JavaClass {
    let root = &scope.root;
    let mut class = JavaClass::new(root.name.clone(), package);
    class.set_description(vec![
        format!(
            "The root class for namespace {} (accessible from",
            scope.namespace
        ),
        format!(
            "{}.NAMESPACE) with prefix \"{}\" ({}.PREFIX).",
            root.name, scope.prefix, root.name
        ),
    ]);
    class.set_source(scope.source.clone());

    for (name, value) in [("NAMESPACE", &scope.namespace), ("PREFIX", &scope.prefix)] {
        class.add_field(
            JavaValue::new(name)
                .modifiers(&["public", "static", "final"])
                .value_type("String")
                .value(format!("\"{}\"", escape_java(value))),
        );
    }

    class.add_enabler(
        JavaMethod::public("enable", "void")
            .modifier("static")
            .javadoc("Enable the elements in this namespace to be aware")
            .javadoc("of the data model and use the generated classes.")
            .throws("JNCException")
            .dependency("YangElement")
            .line("YangElement.setPackage(NAMESPACE, PREFIX);")
            .line(format!("{}.registerSchema();", root.name)),
    );

    let schema_resource = format!("{}.schema", root.name);
    class.add_schema_registrator(
        JavaMethod::public("registerSchema", "void")
            .modifier("static")
            .javadoc("Register the schema for this namespace in the global")
            .javadoc("schema table (SchemaTree) making it possible to lookup")
            .javadoc("SchemaNode entries for all tagpaths")
            .throws("JNCException")
            .dependency("SchemaParser")
            .dependency("Tagpath")
            .dependency("SchemaNode")
            .dependency("SchemaTree")
            .dependency("java.util.HashMap")
            .line("StackTraceElement[] sTrace = (new Exception()).getStackTrace();")
            .line("ClassLoader loader = sTrace[0].getClass().getClassLoader();")
            .line(format!(
                "java.net.URL schemaUrl = loader.getResource(\"{schema_resource}\");"
            ))
            .line("SchemaParser parser = new SchemaParser();")
            .line("HashMap<Tagpath, SchemaNode> h = SchemaTree.create(NAMESPACE);")
            .line("if (schemaUrl == null)")
            .line(format!("    parser.readFile(\"{schema_resource}\", h);"))
            .line("else")
            .line("    parser.readFile(schemaUrl, h);"),
    );
    class
}
