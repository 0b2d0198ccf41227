//! Error types for code generation

use thiserror::Error;

/// Result type alias for generator operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum CodegenError {
    /// The loaded schema carries diagnostics that make generation unsafe
    #[error("{module} contains errors ({category})")]
    InvalidInput { module: String, category: String },

    /// Configuration file could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Writing generated files failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema metadata could not be serialized
    #[error("schema file error: {0}")]
    SchemaFile(String),
}

impl CodegenError {
    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            CodegenError::InvalidInput { .. } => 1,
            CodegenError::Config(_) => 2,
            CodegenError::Io(_) => 3,
            CodegenError::SchemaFile(_) => 4,
        }
    }
}
