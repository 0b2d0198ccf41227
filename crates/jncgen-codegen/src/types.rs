//! YANG type to Java type mapping.
//!
//! Every YANG type maps to a [`TypePair`]: the JNC wrapper class used to
//! store and validate a value, and the simplest Java type accepted by the
//! convenience overloads of generated setters and constructors.

use crate::naming::class_name;
use crate::warnings::WarningLog;
use jncgen_schema::{Keyword, NodeId, Resolution, Schema};

const JNC_PACKAGE: &str = "com.tailf.jnc";

/// Library and primitive Java types of a YANG type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypePair {
    /// Fully qualified JNC or generated class.
    pub library: String,
    /// Java primitive or `java.lang`/`java.math` short name.
    pub primitive: String,
}

impl TypePair {
    fn new(library: impl Into<String>, primitive: impl Into<String>) -> Self {
        Self {
            library: library.into(),
            primitive: primitive.into(),
        }
    }

    /// The pair every unknown type degrades to.
    pub fn string() -> Self {
        Self::new(format!("{JNC_PACKAGE}.YangString"), "String")
    }

    /// True when the primitive is `String`, so no primitive overload is
    /// generated.
    pub fn is_text(&self) -> bool {
        self.primitive == "String"
    }
}

/// Pair for a YANG builtin type, `None` for anything else.
pub fn builtin_pair(name: &str) -> Option<TypePair> {
    let library = match name.strip_prefix("ui") {
        Some(width) => format!("{JNC_PACKAGE}.YangUI{width}"),
        None => format!("{JNC_PACKAGE}.Yang{}", class_name(name)),
    };
    let primitive = match name {
        "string" | "enumeration" | "binary" | "union" => "String",
        "boolean" => "Boolean",
        "bits" => "BigInteger",
        "instance-identifier" | "leafref" | "identityref" => "Element",
        "empty" => "boolean",
        "int8" => "byte",
        "int16" => "short",
        "int32" => "int",
        "int64" => "long",
        "uint8" => "short",
        "uint16" => "int",
        "uint32" => "long",
        "uint64" => "BigInteger",
        "decimal64" => "BigDecimal",
        _ => return None,
    };
    Some(TypePair::new(library, primitive))
}

/// Java package of the class generated for `node`.
///
/// The base package followed by the arguments of every ancestor between the
/// document root and `node`, both excluded.
pub fn package_of(schema: &Schema, base_package: &str, node: NodeId) -> String {
    let mut segments = Vec::new();
    let mut current = schema.parent(node);
    while let Some(ancestor) = current {
        if schema.parent(ancestor).is_some() {
            segments.push(schema.arg(ancestor));
        }
        current = schema.parent(ancestor);
    }
    let mut package = base_package.to_string();
    for segment in segments.into_iter().rev() {
        package.push('.');
        package.push_str(segment);
    }
    package
}

/// Maps type references to [`TypePair`]s.
pub struct TypeResolver<'a> {
    schema: &'a Schema,
    base_package: &'a str,
}

impl<'a> TypeResolver<'a> {
    pub fn new(schema: &'a Schema, base_package: &'a str) -> Self {
        Self {
            schema,
            base_package,
        }
    }

    /// Resolve a `type`, `typedef`, `leaf` or `leaf-list` statement.
    ///
    /// Never fails. Unknown or unresolved aliases warn once per type and map
    /// to the string pair.
    pub fn resolve(&self, node: NodeId, warnings: &mut WarningLog) -> TypePair {
        let Some(type_stmt) = self.type_statement(node) else {
            let key = format!("{}:{}", self.schema.keyword(node), self.schema.arg(node));
            warnings.warn(
                key,
                format!(
                    "{} \"{}\" has no type, defaulting to string.",
                    self.schema.keyword(node),
                    self.schema.arg(node)
                ),
            );
            return TypePair::string();
        };

        let name = self.schema.arg(type_stmt);
        if let Some(pair) = builtin_pair(name) {
            return pair;
        }

        match self.schema.node(type_stmt).typedef {
            Resolution::Resolved(typedef) => {
                let library = format!(
                    "{}.{}",
                    package_of(self.schema, self.base_package, typedef),
                    class_name(self.schema.arg(typedef))
                );
                let primitive = self
                    .base_builtin(typedef)
                    .map(|pair| pair.primitive)
                    .unwrap_or_else(|| "String".to_string());
                TypePair::new(library, primitive)
            }
            Resolution::Unresolved | Resolution::NotAnnotated => {
                let document = self.schema.arg(self.schema.top(type_stmt));
                let qualified = format!(
                    "{}.{}",
                    package_of(self.schema, self.base_package, type_stmt),
                    name
                );
                warnings.warn(
                    format!("{document}:{name}"),
                    format!("No support for type \"{qualified}\", defaulting to string."),
                );
                TypePair::string()
            }
        }
    }

    /// The typedef a `typedef` derives from, if its type is another alias.
    pub fn base_typedef(&self, typedef: NodeId) -> Option<NodeId> {
        let type_stmt = self.schema.search_one(typedef, &Keyword::Type)?;
        self.schema.node(type_stmt).typedef.resolved()
    }

    fn type_statement(&self, node: NodeId) -> Option<NodeId> {
        match self.schema.keyword(node) {
            Keyword::Type => Some(node),
            _ => self.schema.search_one(node, &Keyword::Type),
        }
    }

    /// Builtin pair at the end of an alias chain. `None` for chains that
    /// loop or end in an unresolved reference.
    fn base_builtin(&self, typedef: NodeId) -> Option<TypePair> {
        let mut current = typedef;
        for _ in 0..self.schema.len() {
            let type_stmt = self.schema.search_one(current, &Keyword::Type)?;
            if let Some(pair) = builtin_pair(self.schema.arg(type_stmt)) {
                return Some(pair);
            }
            current = self.schema.node(type_stmt).typedef.resolved()?;
        }
        None
    }
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
