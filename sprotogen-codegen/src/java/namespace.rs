//! Output package resolution.
//!
//! A type lands in its module's default namespace unless its leading comment
//! overrides it, either with an explicit `@javaPackage item` tag or with a
//! comment that starts with `javaPackage:`. The override extends the module
//! namespace rather than replacing it.

use sprotogen_schema::{CommentGroup, DeclaredType};

/// Separator between namespace segments.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Computes the effective namespace of structs and enums.
#[derive(Debug, Clone)]
pub struct NamespaceResolver {
    tag: String,
    prefix: String,
}

impl NamespaceResolver {
    /// Creates a resolver for the given annotation key.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let prefix = format!("{tag}:");
        Self { tag, prefix }
    }

    /// Returns the override carried by a comment, if any.
    ///
    /// An explicit tag takes priority over the comment prefix; an empty value
    /// counts as no override.
    #[must_use]
    pub fn override_for<'c>(&self, comment: &'c CommentGroup) -> Option<&'c str> {
        let value = match comment.match_tag(&self.tag) {
            Some(tagged) => tagged,
            None => comment.leading.strip_prefix(&self.prefix)?,
        };
        Some(value.trim()).filter(|v| !v.is_empty())
    }

    /// Resolves the namespace of a type declared in a module.
    #[must_use]
    pub fn resolve(&self, module_namespace: &str, comment: &CommentGroup) -> String {
        match self.override_for(comment) {
            None => module_namespace.to_string(),
            Some(extra) if module_namespace.is_empty() => extra.to_string(),
            Some(extra) => format!("{module_namespace}{NAMESPACE_SEPARATOR}{extra}"),
        }
    }

    /// Resolves the namespace of a registered type.
    #[must_use]
    pub fn resolve_declared(&self, declared: &DeclaredType<'_>) -> String {
        self.resolve(&declared.module.namespace, declared.comment())
    }
}
