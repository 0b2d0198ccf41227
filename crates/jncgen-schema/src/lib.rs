//! jncgen-schema - YANG statement tree for the jncgen generator
//!
//! This crate provides:
//! - [`Schema`]: an arena holding every statement of every loaded module
//! - [`Keyword`]: the closed set of statement kinds the generator dispatches on
//! - [`Diagnostic`]: severity/category records raised while loading
//! - [`parse_yin`]: a YIN (XML YANG) reader
//! - [`annotate`]: resolution of typedefs, groupings and augment targets

pub mod diagnostic;
pub mod error;
pub mod keyword;
pub mod resolve;
pub mod tree;
pub mod yin;

pub use diagnostic::{Diagnostic, DiagnosticCategory, Severity};
pub use error::{ParseError, ParseResult};
pub use keyword::Keyword;
pub use resolve::{BUILTIN_TYPES, annotate, descendants, is_builtin_type};
pub use tree::{NodeId, Resolution, Schema, Statement};
pub use yin::{load_yin_file, parse_yin};
