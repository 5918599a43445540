//! Error types for code generation.

use sprotogen_schema::FieldKind;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
///
/// Every variant is fatal to the run: the driver stops at the first one.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema error: {0}")]
    Schema(#[from] sprotogen_schema::SchemaError),

    /// A template could not be written out.
    #[error("template error: {0}")]
    Template(#[from] std::fmt::Error),

    /// An enum or struct field carries no referenced type.
    #[error("field '{field}' of kind {kind} has no referenced type")]
    MissingReference {
        /// Field name.
        field: String,
        /// Declared kind.
        kind: FieldKind,
    },

    /// The struct behind a map field is not declared anywhere.
    #[error("unknown struct '{type_name}' in map field '{field}'")]
    UnknownType {
        /// Type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// The map key is not a field of the referenced struct.
    #[error("map key '{key}' of field '{field}' is not declared on '{type_name}'")]
    UnknownMapKey {
        /// Key field name.
        key: String,
        /// Referenced struct name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// The map key names a collection field, which cannot key a map.
    #[error("map key '{key}' of field '{field}' is a repeated field of '{type_name}'")]
    InvalidMapKey {
        /// Key field name.
        key: String,
        /// Referenced struct name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// A fixed-point scale is attached to a field without a numeric scalar.
    #[error("fixed-point scale on field '{field}' requires a numeric scalar, found {kind}")]
    InvalidFixedPoint {
        /// Field name.
        field: String,
        /// Declared kind.
        kind: FieldKind,
    },

    /// A fixed-point scale is zero, negative or not finite.
    #[error("fixed-point scale {scale} on field '{field}' must be finite and positive")]
    InvalidScale {
        /// Field name.
        field: String,
        /// Declared scale.
        scale: f64,
    },

    /// A namespace segment would escape the output root.
    #[error("namespace '{namespace}' has invalid path segment '{segment}'")]
    InvalidNamespace {
        /// Resolved namespace.
        namespace: String,
        /// Offending segment.
        segment: String,
    },

    /// Directory creation or file write failed.
    #[error("failed to write '{path}': {source}")]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates an IO error bound to the path that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
