//! # sprotogen Schema
//!
//! Schema model consumed by the sprotogen code generator.
//!
//! This crate provides:
//! - The immutable model of structs, enums and fields handed over by the
//!   schema parser
//! - Leading-comment annotations queried for explicit tags
//! - A registry of every declared type across all modules
//! - Loading of a module dumped as JSON

pub mod comment;
pub mod error;
pub mod parser;
pub mod registry;
pub mod structs;
pub mod types;

pub use comment::CommentGroup;
pub use error::SchemaError;
pub use parser::{load_module, parse_module};
pub use registry::{DeclaredKind, DeclaredType, TypeRegistry};
pub use structs::{SchemaField, SchemaStruct};
pub use types::{ComplexRef, FieldKind, FixedPoint, SchemaEnum, SchemaModule};
