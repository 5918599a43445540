//! Error types for schema loading.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading a schema model.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The JSON dump could not be deserialized.
    #[error("invalid schema model: {0}")]
    Json(#[from] serde_json::Error),

    /// The model file could not be read.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path of the model file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Creates an IO error bound to the file that failed.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
