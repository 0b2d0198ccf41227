//! jncgen-codegen - JNC Java class generator for YANG modules
//!
//! This crate provides:
//! - [`generate`]: turns an annotated [`Schema`](jncgen_schema::Schema) into
//!   Java classes and `.schema` files
//! - [`GeneratorConfig`] for package, banner and error-policy options
//! - [`JavaClass`], the class model the generator assembles and renders
//! - [`OrderedSet`], the deduplicating container that keeps output stable
//! - [`Generation::write_to`] for writing results below an output directory

pub mod class;
pub mod config;
pub mod error;
pub mod generator;
pub mod java;
pub mod methods;
pub mod naming;
pub mod ordered_set;
pub mod output;
pub mod schema_file;
pub mod types;
pub mod warnings;

pub use class::{Banner, JavaClass};
pub use config::{CONFIG_FILE_NAME, GeneratorConfig};
pub use error::{CodegenError, CodegenResult};
pub use generator::{GeneratedClass, Generation, generate};
pub use ordered_set::OrderedSet;
pub use schema_file::GeneratedSchema;
pub use types::{TypePair, TypeResolver};
pub use warnings::WarningLog;
