//! Reference annotator.
//!
//! Fills in the annotations the generator consumes: resolved typedefs on
//! `type` statements, effective children (`uses` expanded by reference,
//! `choice`/`case` flattened, augments applied) and augment targets.
//! Anything that cannot be resolved is recorded as a [`Diagnostic`] on the
//! schema; annotation never fails.

use crate::diagnostic::{Diagnostic, DiagnosticCategory};
use crate::keyword::Keyword;
use crate::tree::{NodeId, Resolution, Schema};
use std::collections::HashMap;
use tracing::{debug, info};

/// YANG builtin type names.
pub const BUILTIN_TYPES: [&str; 19] = [
    "empty",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "binary",
    "bits",
    "boolean",
    "decimal64",
    "enumeration",
    "identityref",
    "instance-identifier",
    "leafref",
    "string",
    "union",
];

pub fn is_builtin_type(name: &str) -> bool {
    BUILTIN_TYPES.contains(&name)
}

/// Annotate every loaded document.
pub fn annotate(schema: &mut Schema) {
    let mut annotator = Annotator::default();
    let roots = schema.roots().to_vec();

    for &root in &roots {
        annotator.check_imports(schema, root);
    }
    for &root in &roots {
        annotator.resolve_references(schema, root);
    }
    for &root in &roots {
        annotator.compute_children(schema, root);
    }
    for &root in &roots {
        annotator.apply_augments(schema, root);
    }

    info!(
        documents = roots.len(),
        diagnostics = schema.diagnostics().len(),
        "Annotation complete"
    );
}

#[derive(Default)]
struct Annotator {
    /// `uses` statement to the grouping it expands.
    groupings: HashMap<NodeId, NodeId>,
}

impl Annotator {
    fn check_imports(&self, schema: &mut Schema, root: NodeId) {
        let module = schema.arg(root).to_string();
        let mut missing = Vec::new();
        for keyword in [Keyword::Import, Keyword::Include] {
            for import in schema.search(root, &keyword) {
                let name = schema.arg(import);
                if schema.find_root(name).is_none() {
                    missing.push(name.to_string());
                }
            }
        }
        for name in missing {
            schema.push_diagnostic(Diagnostic::error(
                DiagnosticCategory::ModuleNotFound,
                &module,
                format!("module \"{name}\" not found in search path"),
            ));
        }
    }

    fn resolve_references(&mut self, schema: &mut Schema, root: NodeId) {
        let module = schema.arg(root).to_string();
        for id in descendants(schema, root) {
            let reference = schema.arg(id).to_string();
            match schema.keyword(id).clone() {
                Keyword::Type if !is_builtin_type(&reference) => {
                    match lookup(schema, id, &Keyword::Typedef, &reference, true) {
                        Some(typedef) => schema.set_typedef(id, Resolution::Resolved(typedef)),
                        None => {
                            schema.set_typedef(id, Resolution::Unresolved);
                            schema.push_diagnostic(Diagnostic::error(
                                DiagnosticCategory::TypeNotFound,
                                &module,
                                format!("type \"{reference}\" not found"),
                            ));
                        }
                    }
                }
                Keyword::Uses => match lookup(schema, id, &Keyword::Grouping, &reference, true) {
                    Some(grouping) => {
                        self.groupings.insert(id, grouping);
                    }
                    None => schema.push_diagnostic(Diagnostic::error(
                        DiagnosticCategory::GroupingNotFound,
                        &module,
                        format!("grouping \"{reference}\" not found"),
                    )),
                },
                Keyword::Other(ref name) if name == "if-feature" => {
                    let feature = Keyword::Other("feature".to_string());
                    if lookup(schema, id, &feature, &reference, false).is_none() {
                        schema.push_diagnostic(Diagnostic::error(
                            DiagnosticCategory::FeatureNotFound,
                            &module,
                            format!("feature \"{reference}\" not found"),
                        ));
                    }
                }
                Keyword::Other(ref name) if name == "base" => {
                    let identity = Keyword::Other("identity".to_string());
                    if lookup(schema, id, &identity, &reference, false).is_none() {
                        schema.push_diagnostic(Diagnostic::error(
                            DiagnosticCategory::IdentityNotFound,
                            &module,
                            format!("identity \"{reference}\" not found"),
                        ));
                    }
                }
                _ => {}
            }
        }
    }

    fn compute_children(&self, schema: &mut Schema, root: NodeId) {
        let mut holders = vec![root];
        holders.extend(descendants(schema, root));
        for id in holders {
            if holds_data(schema.keyword(id)) {
                let children = self.data_children(schema, id, &mut vec![id]);
                schema.set_i_children(id, children);
            }
        }
    }

    fn data_children(&self, schema: &Schema, id: NodeId, active: &mut Vec<NodeId>) -> Vec<NodeId> {
        let mut children = Vec::new();
        for &child in schema.substmts(id) {
            match schema.keyword(child) {
                keyword if keyword.is_data_node() => children.push(child),
                Keyword::Choice | Keyword::Case => {
                    children.extend(self.data_children(schema, child, active));
                }
                Keyword::Uses => {
                    if let Some(&grouping) = self.groupings.get(&child)
                        && !active.contains(&grouping)
                    {
                        active.push(grouping);
                        children.extend(self.data_children(schema, grouping, active));
                        active.pop();
                    }
                }
                _ => {}
            }
        }
        children
    }

    fn apply_augments(&self, schema: &mut Schema, root: NodeId) {
        let module = schema.arg(root).to_string();
        let augments: Vec<NodeId> = descendants(schema, root)
            .into_iter()
            .filter(|&id| schema.keyword(id) == &Keyword::Augment)
            .collect();

        for augment in augments {
            let path = schema.arg(augment).to_string();
            match self.find_target(schema, augment, &path) {
                Some(target) => {
                    schema.set_target(augment, Resolution::Resolved(target));
                    let added = schema.i_children(augment).unwrap_or_default().to_vec();
                    let mut children = match schema.i_children(target) {
                        Some(existing) => existing.to_vec(),
                        None => self.data_children(schema, target, &mut Vec::new()),
                    };
                    children.extend(added);
                    schema.set_i_children(target, children);
                    debug!(module = %module, target = %path, "Applied augment");
                }
                None => {
                    schema.set_target(augment, Resolution::Unresolved);
                    schema.push_diagnostic(Diagnostic::error(
                        DiagnosticCategory::Other("NODE_NOT_FOUND".to_string()),
                        &module,
                        format!("augment target \"{path}\" not found"),
                    ));
                }
            }
        }
    }

    fn find_target(&self, schema: &Schema, augment: NodeId, path: &str) -> Option<NodeId> {
        let mut steps = path.split('/').filter(|step| !step.is_empty()).peekable();
        let top = schema.top(augment);

        let mut current = if path.starts_with('/') {
            let (prefix, _) = split_prefix(steps.peek()?);
            match prefix {
                Some(prefix) if !is_own_prefix(schema, top, prefix) => {
                    imported_root(schema, top, prefix)?
                }
                _ => top,
            }
        } else {
            // Relative augments live under `uses` and address the grouping.
            let parent = schema.parent(augment)?;
            self.groupings.get(&parent).copied().unwrap_or(parent)
        };

        for step in steps {
            let (_, name) = split_prefix(step);
            current = find_step(schema, current, name)?;
        }
        Some(current)
    }
}

fn holds_data(keyword: &Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Module
            | Keyword::Submodule
            | Keyword::Container
            | Keyword::List
            | Keyword::Grouping
            | Keyword::Augment
            | Keyword::Choice
            | Keyword::Case
    )
}

fn find_step(schema: &Schema, node: NodeId, name: &str) -> Option<NodeId> {
    let effective = schema.i_children(node).unwrap_or_default();
    schema
        .substmts(node)
        .iter()
        .chain(effective.iter())
        .copied()
        .find(|&child| {
            let keyword = schema.keyword(child);
            (keyword.is_data_node() || matches!(keyword, Keyword::Choice | Keyword::Case))
                && schema.arg(child) == name
        })
}

/// Preorder list of all statements below `root`.
pub fn descendants(schema: &Schema, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack: Vec<NodeId> = schema.substmts(root).iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        out.push(id);
        stack.extend(schema.substmts(id).iter().rev().copied());
    }
    out
}

fn split_prefix(reference: &str) -> (Option<&str>, &str) {
    match reference.split_once(':') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, reference),
    }
}

fn own_prefix(schema: &Schema, top: NodeId) -> Option<&str> {
    match schema.keyword(top) {
        Keyword::Submodule => schema
            .search_one(top, &Keyword::BelongsTo)
            .and_then(|belongs_to| schema.search_arg(belongs_to, &Keyword::Prefix)),
        _ => schema.search_arg(top, &Keyword::Prefix),
    }
}

fn is_own_prefix(schema: &Schema, top: NodeId, prefix: &str) -> bool {
    own_prefix(schema, top) == Some(prefix)
}

fn imported_root(schema: &Schema, top: NodeId, prefix: &str) -> Option<NodeId> {
    schema
        .search(top, &Keyword::Import)
        .into_iter()
        .find(|&import| schema.search_arg(import, &Keyword::Prefix) == Some(prefix))
        .and_then(|import| schema.find_root(schema.arg(import)))
}

/// Resolve a possibly prefixed reference to a definition statement.
///
/// Lexical lookups walk the enclosing statements first; all lookups then
/// fall back to the document top level and its included submodules.
fn lookup(
    schema: &Schema,
    from: NodeId,
    keyword: &Keyword,
    reference: &str,
    lexical: bool,
) -> Option<NodeId> {
    let (prefix, name) = split_prefix(reference);
    let top = schema.top(from);

    if let Some(prefix) = prefix
        && !is_own_prefix(schema, top, prefix)
    {
        let module = imported_root(schema, top, prefix)?;
        return schema.search_one_arg(module, keyword, name);
    }

    if lexical {
        let mut scope = schema.parent(from);
        while let Some(node) = scope {
            if let Some(found) = schema.search_one_arg(node, keyword, name) {
                return Some(found);
            }
            scope = schema.parent(node);
        }
    }

    schema
        .search_one_arg(top, keyword, name)
        .or_else(|| {
            schema
                .search(top, &Keyword::Include)
                .into_iter()
                .filter_map(|include| schema.find_root(schema.arg(include)))
                .find_map(|sub| schema.search_one_arg(sub, keyword, name))
        })
}
