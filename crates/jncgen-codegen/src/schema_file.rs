//! `.schema` metadata files read by JNC's `SchemaParser`.
//!
//! One `<node>` per module, container, list and leaf, addressed by tagpath.
//! Leaf-lists appear only in their parent's `<children>`.

use crate::error::{CodegenError, CodegenResult};
use crate::naming::class_name;
use jncgen_schema::{Keyword, NodeId, Schema};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

/// A rendered schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSchema {
    pub package: String,
    /// `<RootClass>.schema`, the resource `registerSchema()` loads.
    pub file_name: String,
    pub content: String,
}

/// Occurrence bounds of one schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurs {
    pub min: i32,
    pub max: i32,
}

fn in_schema(keyword: &Keyword) -> bool {
    matches!(
        keyword,
        Keyword::Container | Keyword::List | Keyword::Module | Keyword::Leaf
    )
}

fn has_true(schema: &Schema, node: NodeId, keyword: &Keyword) -> bool {
    schema.search_arg(node, keyword) == Some("true")
}

/// Occurrence bounds of `node` within its parent.
pub fn occurs(schema: &Schema, node: NodeId) -> Occurs {
    let keyword = schema.keyword(node);
    let parent = schema.parent(node);
    let is_key = parent
        .and_then(|parent| schema.search_arg(parent, &Keyword::Key))
        .is_some_and(|key| key == schema.arg(node));
    let in_container_or_list = parent.is_some_and(|parent| {
        matches!(schema.keyword(parent), Keyword::Container | Keyword::List)
    });
    let is_container = keyword == &Keyword::Container;

    let mut bounds = Occurs { min: 0, max: -1 };
    if keyword.is_document() || is_key || (in_container_or_list && is_container) {
        bounds = Occurs { min: 1, max: 1 };
    }
    if has_true(schema, node, &Keyword::Mandatory) {
        bounds.min = 1;
    }
    if has_true(schema, node, &Keyword::Unique) || in_container_or_list || is_container {
        bounds.max = 1;
    }
    bounds
}

struct SchemaWriter<'a> {
    schema: &'a Schema,
    writer: Writer<Vec<u8>>,
}

impl SchemaWriter<'_> {
    fn element(&mut self, tag: &str, text: &str) -> CodegenResult<()> {
        self.writer
            .create_element(tag)
            .write_text_content(BytesText::new(text))
            .map_err(|e| CodegenError::SchemaFile(e.to_string()))?;
        Ok(())
    }

    fn event(&mut self, event: Event<'_>) -> CodegenResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| CodegenError::SchemaFile(e.to_string()))
    }

    fn node(&mut self, node: NodeId, tagpath: &str) -> CodegenResult<()> {
        let schema = self.schema;
        let top = schema.top(node);
        let namespace = schema.search_arg(top, &Keyword::Namespace).unwrap_or_default();
        let bounds = occurs(schema, node);
        let children: Vec<&str> = schema
            .substmts(node)
            .iter()
            .filter(|&&child| schema.keyword(child).is_data_node())
            .map(|&child| schema.arg(child))
            .collect();

        self.event(Event::Start(BytesStart::new("node")))?;
        self.element("tagpath", tagpath)?;
        self.element("namespace", namespace)?;
        self.element("primitive_type", "0")?;
        self.element("min_occurs", &bounds.min.to_string())?;
        self.element("max_occurs", &bounds.max.to_string())?;
        self.element("children", &children.join(" "))?;
        self.element("flags", "0")?;
        self.element("desc", "")?;
        self.event(Event::End(BytesEnd::new("node")))
    }

    fn subtree(&mut self, stmts: &[NodeId], tagpath: &str) -> CodegenResult<()> {
        let schema = self.schema;
        for &stmt in stmts {
            if !in_schema(schema.keyword(stmt)) {
                continue;
            }
            let path = format!("{tagpath}{}/", schema.arg(stmt));
            self.node(stmt, &path)?;
            self.subtree(schema.substmts(stmt), &path)?;
        }
        Ok(())
    }
}

/// Render the schema file of `module`, covering the documents its augments
/// extend.
pub fn schema_file(
    schema: &Schema,
    module: NodeId,
    augmented: &[NodeId],
    package: &str,
) -> CodegenResult<GeneratedSchema> {
    let prefix = schema.search_arg(module, &Keyword::Prefix).unwrap_or_default();
    let mut out = SchemaWriter {
        schema,
        writer: Writer::new_with_indent(Vec::new(), b' ', 4),
    };

    out.event(Event::Start(BytesStart::new("schema")))?;
    let documents: Vec<NodeId> = std::iter::once(module)
        .chain(augmented.iter().copied().filter(|&doc| doc != module))
        .collect();
    for &document in &documents {
        out.node(document, "/")?;
    }
    let stmts: Vec<NodeId> = documents
        .iter()
        .flat_map(|&document| schema.substmts(document).iter().copied())
        .collect();
    out.subtree(&stmts, "/")?;
    out.event(Event::End(BytesEnd::new("schema")))?;

    let mut content = String::from_utf8(out.writer.into_inner())
        .map_err(|e| CodegenError::SchemaFile(e.to_string()))?;
    content.push('\n');

    let file_name = format!("{}.schema", class_name(prefix));
    debug!(module = schema.arg(module), file = %file_name, "Generated schema file");
    Ok(GeneratedSchema {
        package: package.to_string(),
        file_name,
        content,
    })
}

#[cfg(test)]
#[path = "schema_file/schema_file_tests.rs"]
mod schema_file_tests;
