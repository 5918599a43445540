//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use sprotogen::prelude::*;
//! ```

// Schema model
pub use sprotogen_schema::{
    CommentGroup, ComplexRef, FieldKind, FixedPoint, SchemaEnum, SchemaError, SchemaField,
    SchemaModule, SchemaStruct, TypeRegistry, load_module, parse_module,
};

// Code generation
pub use sprotogen_codegen::{
    CodegenError, Emitter, GenerationReport, Generator, GeneratorConfig, generate,
    generate_from_files,
};
