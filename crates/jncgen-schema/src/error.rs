//! Error types for loading YIN documents.

use thiserror::Error;

/// Result type alias for loading operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for YIN loading.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed character or entity reference.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document root is not a module or submodule.
    #[error("expected module or submodule, found '{0}'")]
    NotADocument(String),

    /// Missing argument attribute.
    #[error("missing '{attribute}' attribute on '{element}'")]
    MissingArgument { element: String, attribute: String },

    /// Structurally invalid document.
    #[error("invalid YIN structure: {0}")]
    InvalidStructure(String),
}
