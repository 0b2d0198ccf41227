//! Identifier conventions for generated Java code.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `host-name` | [`camelize`] | `hostName` |
//! | `hostName` | [`capitalize_first`] | `HostName` |
//! | `host-name` | [`class_name`] | `HostName` |
//! | `class` | [`make_valid_identifier`] | `Jclass` |

use crate::java::is_java_built_in;
use jncgen_schema::{NodeId, Schema};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

fn is_separator(c: char) -> bool {
    c == '-' || c == '.'
}

/// Capitalize the first character of a string.
///
/// ```
/// use jncgen_codegen::naming::capitalize_first;
///
/// assert_eq!(capitalize_first("items"), "Items");
/// assert_eq!(capitalize_first(""), "");
/// ```
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Remove hyphens and dots, upper-casing the character that follows.
///
/// A run of separators counts as one. Trailing separators are kept, so the
/// result never changes when camelized again.
///
/// ```
/// use jncgen_codegen::naming::camelize;
///
/// assert_eq!(camelize("host-name"), "hostName");
/// assert_eq!(camelize("ietf.ip"), "ietfIp");
/// assert_eq!(camelize("trailing-"), "trailing-");
/// ```
pub fn camelize(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut pending = String::new();

    for c in s.chars() {
        if is_separator(c) {
            pending.push(c);
        } else if pending.is_empty() {
            result.push(c);
        } else {
            pending.clear();
            result.extend(c.to_uppercase());
        }
    }

    result.push_str(&pending);
    result
}

/// Java class name for a statement argument.
pub fn class_name(arg: &str) -> String {
    capitalize_first(&camelize(arg))
}

/// Camelize and prefix with `J` if the result is a Java reserved word or a
/// `java.lang` class name.
pub fn make_valid_identifier(arg: &str) -> String {
    let camel = camelize(arg);
    if is_java_built_in(&camel) {
        format!("J{camel}")
    } else {
        camel
    }
}

/// Relative directory of a Java package: `gen.top` becomes `gen/top`.
///
/// Empty segments are skipped, so an empty package maps to an empty path.
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// Rewrite every mutable statement argument below `root` into a valid Java
/// identifier.
///
/// Walks substatements and effective children, visiting each node once.
/// Returns the number of arguments changed.
pub fn sanitize(schema: &mut Schema, root: NodeId) -> usize {
    let mut visited = HashSet::new();
    let mut stack = vec![root];
    let mut changed = 0;

    while let Some(id) = stack.pop() {
        if !visited.insert(id) {
            continue;
        }

        let stmt = schema.node(id);
        if !stmt.keyword.is_immutable()
            && let Some(arg) = stmt.arg.as_deref()
        {
            let valid = make_valid_identifier(arg);
            if valid != arg {
                schema.set_arg(id, valid);
                changed += 1;
            }
        }

        let stmt = schema.node(id);
        stack.extend(stmt.substmts.iter().rev());
        if let Some(children) = &stmt.i_children {
            stack.extend(children.iter().rev());
        }
    }

    debug!(root = schema.arg(root), changed, "Sanitized identifiers");
    changed
}
