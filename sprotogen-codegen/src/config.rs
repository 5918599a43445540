//! Generator configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Default suffix of generated files.
pub const DEFAULT_EXTENSION: &str = ".java";

/// Default annotation key overriding a type's output namespace.
pub const DEFAULT_NAMESPACE_TAG: &str = "javaPackage";

/// Default banner written at the top of every generated file.
pub const DEFAULT_BANNER: &str = "// Generated by sprotogen\n// DO NOT EDIT!";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Root of the output tree.
    pub out_dir: PathBuf,
    /// Suffix appended to each type name, including the dot.
    pub extension: String,
    /// Annotation key naming a namespace override.
    pub namespace_tag: String,
    /// Comment lines written before each generated file.
    pub banner: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
            namespace_tag: DEFAULT_NAMESPACE_TAG.to_string(),
            banner: DEFAULT_BANNER.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration writing under `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    /// Sets the file suffix.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the namespace annotation key.
    #[must_use]
    pub fn with_namespace_tag(mut self, tag: impl Into<String>) -> Self {
        self.namespace_tag = tag.into();
        self
    }

    /// Sets the banner.
    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.extension, ".java");
        assert_eq!(config.namespace_tag, "javaPackage");
        assert!(config.banner.contains("DO NOT EDIT"));
    }

    #[test]
    fn test_builder_methods() {
        let config = GeneratorConfig::new("/tmp/out")
            .with_extension(".jav")
            .with_namespace_tag("pkg")
            .with_banner("// hi");

        assert_eq!(config.out_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.extension, ".jav");
        assert_eq!(config.namespace_tag, "pkg");
        assert_eq!(config.banner, "// hi");
    }
}
