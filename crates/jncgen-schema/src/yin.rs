//! YIN (XML form of YANG) reader.
//!
//! Each element becomes one statement. The statement argument is taken from
//! the keyword's argument attribute, or from the `<text>` child for the
//! documentation statements.

use crate::error::{ParseError, ParseResult};
use crate::keyword::Keyword;
use crate::tree::{NodeId, Schema};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Attributes that carry a statement argument in YIN.
const ARGUMENT_ATTRIBUTES: [&str; 8] = [
    "name",
    "value",
    "uri",
    "target-node",
    "date",
    "module",
    "condition",
    "tag",
];

enum Frame {
    Statement(NodeId),
    Text(NodeId, String),
    Ignored,
}

/// Parse one YIN document into `schema`, returning its root.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or the root element is not
/// a module or submodule.
pub fn parse_yin(schema: &mut Schema, xml: &str) -> ParseResult<NodeId> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let frame = open_element(schema, &stack, &mut root, e)?;
                stack.push(frame);
            }
            Ok(Event::Empty(ref e)) => {
                open_element(schema, &stack, &mut root, e)?;
            }
            Ok(Event::Text(ref t)) => {
                if let Some(Frame::Text(_, text)) = stack.last_mut() {
                    text.push_str(std::str::from_utf8(t.as_ref())?);
                }
            }
            Ok(Event::CData(ref c)) => {
                if let Some(Frame::Text(_, text)) = stack.last_mut() {
                    text.push_str(std::str::from_utf8(c.as_ref())?);
                }
            }
            Ok(Event::GeneralRef(ref r)) => {
                if let Some(Frame::Text(_, text)) = stack.last_mut() {
                    let name = std::str::from_utf8(r.as_ref())?;
                    text.push_str(&unescape(&format!("&{name};"))?);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(Frame::Text(owner, text)) = stack.pop() {
                    schema.set_arg(owner, text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let root = root.ok_or_else(|| ParseError::InvalidStructure("no root element".to_string()))?;
    debug!(
        module = schema.arg(root),
        keyword = %schema.keyword(root),
        "Loaded YIN document"
    );
    Ok(root)
}

/// Read and parse a YIN file.
///
/// # Errors
/// Returns `ParseError::Io` if the file cannot be read, or any error of
/// [`parse_yin`].
pub fn load_yin_file(schema: &mut Schema, path: &Path) -> ParseResult<NodeId> {
    let xml = fs::read_to_string(path)?;
    parse_yin(schema, &xml)
}

fn open_element(
    schema: &mut Schema,
    stack: &[Frame],
    root: &mut Option<NodeId>,
    e: &BytesStart<'_>,
) -> ParseResult<Frame> {
    let local = e.local_name();
    let name = std::str::from_utf8(local.as_ref())?;

    match stack.last() {
        None => {
            if root.is_some() {
                return Err(ParseError::InvalidStructure(format!(
                    "second root element '{name}'"
                )));
            }
            let keyword = Keyword::parse(name);
            if !keyword.is_document() {
                return Err(ParseError::NotADocument(name.to_string()));
            }
            let arg = argument(e)?.ok_or_else(|| ParseError::MissingArgument {
                element: name.to_string(),
                attribute: "name".to_string(),
            })?;
            let id = schema.add_root(keyword, arg);
            *root = Some(id);
            Ok(Frame::Statement(id))
        }
        Some(Frame::Statement(parent)) => {
            let parent = *parent;
            if text_element(schema.keyword(parent)) == Some(name) {
                return Ok(Frame::Text(parent, String::new()));
            }
            let arg = argument(e)?;
            let id = schema.add_child(parent, Keyword::parse(name), arg.as_deref());
            Ok(Frame::Statement(id))
        }
        Some(_) => Ok(Frame::Ignored),
    }
}

/// Child element that holds the argument of statements whose YIN argument
/// is element content rather than an attribute.
fn text_element(keyword: &Keyword) -> Option<&'static str> {
    match keyword {
        Keyword::Description | Keyword::Contact | Keyword::Organization | Keyword::Reference => {
            Some("text")
        }
        Keyword::Other(name) if name == "error-message" => Some("value"),
        _ => None,
    }
}

fn argument(e: &BytesStart<'_>) -> ParseResult<Option<String>> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if ARGUMENT_ATTRIBUTES.contains(&key) {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape(raw)?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "yin/yin_tests.rs"]
mod yin_tests;
