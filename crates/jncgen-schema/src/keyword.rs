//! YANG statement keywords.

use std::fmt;

/// The keyword of a YANG statement.
///
/// Every keyword the generator dispatches on has its own variant. Anything
/// else (extension keywords, statements the generator never inspects) is
/// kept verbatim in [`Keyword::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    Module,
    Submodule,
    Container,
    List,
    Leaf,
    LeafList,
    Typedef,
    Type,
    Augment,
    Key,
    Namespace,
    Prefix,
    BelongsTo,
    Import,
    Include,
    Organization,
    Contact,
    Description,
    Reference,
    Range,
    Length,
    Pattern,
    Enum,
    Bit,
    Config,
    Mandatory,
    Unique,
    Revision,
    Grouping,
    Uses,
    Choice,
    Case,
    Default,
    Units,
    Other(String),
}

impl Keyword {
    /// Parse a keyword from its YANG spelling.
    pub fn parse(s: &str) -> Self {
        match s {
            "module" => Self::Module,
            "submodule" => Self::Submodule,
            "container" => Self::Container,
            "list" => Self::List,
            "leaf" => Self::Leaf,
            "leaf-list" => Self::LeafList,
            "typedef" => Self::Typedef,
            "type" => Self::Type,
            "augment" => Self::Augment,
            "key" => Self::Key,
            "namespace" => Self::Namespace,
            "prefix" => Self::Prefix,
            "belongs-to" => Self::BelongsTo,
            "import" => Self::Import,
            "include" => Self::Include,
            "organization" => Self::Organization,
            "contact" => Self::Contact,
            "description" => Self::Description,
            "reference" => Self::Reference,
            "range" => Self::Range,
            "length" => Self::Length,
            "pattern" => Self::Pattern,
            "enum" => Self::Enum,
            "bit" => Self::Bit,
            "config" => Self::Config,
            "mandatory" => Self::Mandatory,
            "unique" => Self::Unique,
            "revision" => Self::Revision,
            "grouping" => Self::Grouping,
            "uses" => Self::Uses,
            "choice" => Self::Choice,
            "case" => Self::Case,
            "default" => Self::Default,
            "units" => Self::Units,
            other => Self::Other(other.to_string()),
        }
    }

    /// The YANG spelling of this keyword.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Module => "module",
            Self::Submodule => "submodule",
            Self::Container => "container",
            Self::List => "list",
            Self::Leaf => "leaf",
            Self::LeafList => "leaf-list",
            Self::Typedef => "typedef",
            Self::Type => "type",
            Self::Augment => "augment",
            Self::Key => "key",
            Self::Namespace => "namespace",
            Self::Prefix => "prefix",
            Self::BelongsTo => "belongs-to",
            Self::Import => "import",
            Self::Include => "include",
            Self::Organization => "organization",
            Self::Contact => "contact",
            Self::Description => "description",
            Self::Reference => "reference",
            Self::Range => "range",
            Self::Length => "length",
            Self::Pattern => "pattern",
            Self::Enum => "enum",
            Self::Bit => "bit",
            Self::Config => "config",
            Self::Mandatory => "mandatory",
            Self::Unique => "unique",
            Self::Revision => "revision",
            Self::Grouping => "grouping",
            Self::Uses => "uses",
            Self::Choice => "choice",
            Self::Case => "case",
            Self::Default => "default",
            Self::Units => "units",
            Self::Other(s) => s,
        }
    }

    /// True for module and submodule.
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Module | Self::Submodule)
    }

    /// True for the four data node kinds that carry instance data.
    pub fn is_data_node(&self) -> bool {
        matches!(
            self,
            Self::Container | Self::List | Self::Leaf | Self::LeafList
        )
    }

    /// Keywords whose argument is a literal that must never be rewritten.
    pub fn is_immutable(&self) -> bool {
        matches!(
            self,
            Self::Type
                | Self::Typedef
                | Self::Namespace
                | Self::Prefix
                | Self::Organization
                | Self::Contact
                | Self::Description
                | Self::Reference
                | Self::Range
                | Self::Length
                | Self::Pattern
                | Self::Enum
                | Self::Bit
                | Self::Default
                | Self::Units
                | Self::Revision
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use test_case::test_case;

    #[test_case("leaf-list", Keyword::LeafList)]
    #[test_case("belongs-to", Keyword::BelongsTo)]
    #[test_case("container", Keyword::Container)]
    #[test_case("tailf:info", Keyword::Other("tailf:info".into()))]
    fn Keyword___parse___round_trips_spelling(input: &str, expected: Keyword) {
        let keyword = Keyword::parse(input);

        assert_eq!(keyword, expected);
        assert_eq!(keyword.as_str(), input);
    }

    #[test]
    fn Keyword___typedef___is_immutable() {
        assert!(Keyword::Typedef.is_immutable());
        assert!(!Keyword::Leaf.is_immutable());
        assert!(!Keyword::Key.is_immutable());
    }

    #[test]
    fn Keyword___data_nodes___exclude_typedef_and_augment() {
        assert!(Keyword::LeafList.is_data_node());
        assert!(!Keyword::Typedef.is_data_node());
        assert!(!Keyword::Augment.is_data_node());
    }
}
