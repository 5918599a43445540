//! Output file placement and writing.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::java::namespace::NAMESPACE_SEPARATOR;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Writes generated sources under an output root.
///
/// Files are overwritten unconditionally; nothing is written atomically and
/// files from earlier runs are never removed.
#[derive(Debug, Clone)]
pub struct Emitter {
    root: PathBuf,
    extension: String,
}

impl Emitter {
    /// Creates an emitter writing under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Creates an emitter from a generator configuration.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.out_dir, &config.extension)
    }

    /// Returns the output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Computes `<root>/<namespace as path>/<type_name><extension>`.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidNamespace` if a segment is not a plain
    /// directory name, such as `..` or one containing a path separator.
    pub fn output_path(&self, namespace: &str, type_name: &str) -> Result<PathBuf, CodegenError> {
        let mut path = self.root.clone();
        for segment in namespace.split(NAMESPACE_SEPARATOR).filter(|s| !s.is_empty()) {
            let mut components = Path::new(segment).components();
            let plain = matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(name)), None) if name == OsStr::new(segment)
            ) && !segment.contains('\\');
            if !plain {
                return Err(CodegenError::InvalidNamespace {
                    namespace: namespace.to_string(),
                    segment: segment.to_string(),
                });
            }
            path.push(segment);
        }
        path.push(format!("{type_name}{}", self.extension));
        Ok(path)
    }

    /// Writes `contents` to the file of `type_name` in `namespace`.
    ///
    /// # Errors
    /// Returns `CodegenError::InvalidNamespace` for a namespace that would leave
    /// the output root, and `CodegenError::Io` if a directory cannot be created
    /// or the file cannot be written.
    pub fn emit(
        &self,
        namespace: &str,
        type_name: &str,
        contents: &[u8],
    ) -> Result<PathBuf, CodegenError> {
        let path = self.output_path(namespace, type_name)?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| CodegenError::io(dir, e))?;
        }
        std::fs::write(&path, contents).map_err(|e| CodegenError::io(&path, e))?;

        tracing::info!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(path)
    }
}
