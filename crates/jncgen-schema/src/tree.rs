//! Arena-backed YANG statement tree.
//!
//! Every statement of every loaded module lives in one [`Schema`] and is
//! addressed by a [`NodeId`]. Parent/child links own nothing; the arena owns
//! all nodes. Annotation links (`i_children`, resolved typedef, augment
//! target) are plain ids as well and may point across modules.

use crate::diagnostic::Diagnostic;
use crate::keyword::Keyword;

/// Index of a statement in a [`Schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// State of an annotation supplied by the annotator.
///
/// `NotAnnotated` means the annotator never looked at the node,
/// `Unresolved` means it tried and failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution<T> {
    #[default]
    NotAnnotated,
    Unresolved,
    Resolved(T),
}

impl<T: Copy> Resolution<T> {
    pub fn resolved(&self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(*value),
            _ => None,
        }
    }
}

/// One YANG statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub keyword: Keyword,
    pub arg: Option<String>,
    pub parent: Option<NodeId>,
    pub substmts: Vec<NodeId>,
    /// Effective data children, with uses/choice/case expanded and augments
    /// applied. `None` until annotated.
    pub i_children: Option<Vec<NodeId>>,
    /// Resolved typedef of a `type` statement.
    pub typedef: Resolution<NodeId>,
    /// Resolved target node of an `augment` statement.
    pub target: Resolution<NodeId>,
}

impl Statement {
    fn new(keyword: Keyword, arg: Option<String>, parent: Option<NodeId>) -> Self {
        Self {
            keyword,
            arg,
            parent,
            substmts: Vec::new(),
            i_children: None,
            typedef: Resolution::NotAnnotated,
            target: Resolution::NotAnnotated,
        }
    }

    /// The argument, or an empty string for argument-less statements.
    pub fn arg(&self) -> &str {
        self.arg.as_deref().unwrap_or("")
    }
}

/// All loaded modules plus the diagnostics raised while loading them.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    nodes: Vec<Statement>,
    roots: Vec<NodeId>,
    diagnostics: Vec<Diagnostic>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module or submodule root.
    pub fn add_root(&mut self, keyword: Keyword, arg: impl Into<String>) -> NodeId {
        let id = self.push(Statement::new(keyword, Some(arg.into()), None));
        self.roots.push(id);
        id
    }

    /// Append a substatement to `parent`.
    pub fn add_child(&mut self, parent: NodeId, keyword: Keyword, arg: Option<&str>) -> NodeId {
        let id = self.push(Statement::new(
            keyword,
            arg.map(str::to_string),
            Some(parent),
        ));
        self.nodes[parent.0].substmts.push(id);
        id
    }

    fn push(&mut self, stmt: Statement) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(stmt);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, id: NodeId) -> &Statement {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Statement {
        &mut self.nodes[id.0]
    }

    pub fn keyword(&self, id: NodeId) -> &Keyword {
        &self.nodes[id.0].keyword
    }

    pub fn arg(&self, id: NodeId) -> &str {
        self.nodes[id.0].arg()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn substmts(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].substmts
    }

    pub fn i_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes[id.0].i_children.as_deref()
    }

    /// The module or submodule that contains `id`.
    pub fn top(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current
    }

    /// True if `id` sits directly under its document root.
    pub fn is_top_level(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.parent(parent).is_none())
    }

    /// First substatement with the given keyword.
    pub fn search_one(&self, id: NodeId, keyword: &Keyword) -> Option<NodeId> {
        self.substmts(id)
            .iter()
            .copied()
            .find(|&child| self.keyword(child) == keyword)
    }

    /// First substatement with the given keyword and argument.
    pub fn search_one_arg(&self, id: NodeId, keyword: &Keyword, arg: &str) -> Option<NodeId> {
        self.substmts(id)
            .iter()
            .copied()
            .find(|&child| self.keyword(child) == keyword && self.arg(child) == arg)
    }

    /// All substatements with the given keyword, in declaration order.
    pub fn search(&self, id: NodeId, keyword: &Keyword) -> Vec<NodeId> {
        self.substmts(id)
            .iter()
            .copied()
            .filter(|&child| self.keyword(child) == keyword)
            .collect()
    }

    /// Argument of the first substatement with the given keyword.
    pub fn search_arg(&self, id: NodeId, keyword: &Keyword) -> Option<&str> {
        self.search_one(id, keyword).map(|child| self.arg(child))
    }

    /// A loaded module or submodule by name.
    pub fn find_root(&self, name: &str) -> Option<NodeId> {
        self.roots.iter().copied().find(|&root| self.arg(root) == name)
    }

    /// Most recent `revision` date of a document, or `unknown`.
    pub fn latest_revision(&self, root: NodeId) -> &str {
        self.search(root, &Keyword::Revision)
            .into_iter()
            .map(|rev| self.arg(rev))
            .max()
            .unwrap_or("unknown")
    }

    /// True when the nearest `config` statement on the ancestor path is
    /// absent or `true`.
    pub fn is_config(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(config) = self.search_arg(node, &Keyword::Config) {
                return config == "true";
            }
            current = self.parent(node);
        }
        true
    }

    pub fn set_arg(&mut self, id: NodeId, arg: String) {
        self.nodes[id.0].arg = Some(arg);
    }

    pub fn set_i_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        self.nodes[id.0].i_children = Some(children);
    }

    pub fn set_typedef(&mut self, id: NodeId, typedef: Resolution<NodeId>) {
        self.nodes[id.0].typedef = typedef;
    }

    pub fn set_target(&mut self, id: NodeId, target: Resolution<NodeId>) {
        self.nodes[id.0].target = target;
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
