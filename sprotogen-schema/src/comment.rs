//! Comment annotations attached to schema objects.
//!
//! The parser keeps the comment block preceding a struct or enum verbatim.
//! Generators query it for explicit tags such as `@javaPackage item`.

use serde::{Deserialize, Serialize};

/// Comments attached to a struct or enum declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentGroup {
    /// Comment text preceding the declaration, without comment markers.
    #[serde(default)]
    pub leading: String,
    /// Comment text following the declaration on the same line.
    #[serde(default)]
    pub trailing: String,
}

impl CommentGroup {
    /// Creates a comment group with only a leading comment.
    #[must_use]
    pub fn leading(text: impl Into<String>) -> Self {
        Self {
            leading: text.into(),
            trailing: String::new(),
        }
    }

    /// Returns true if neither comment carries any text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }

    /// Looks up an explicit tag in the leading comment.
    ///
    /// A tag is a line of the form `@key value` or `@key: value`. The value is
    /// returned as written after the key and its optional colon, untrimmed, so
    /// callers decide how to normalize it. The first matching line wins.
    #[must_use]
    pub fn match_tag(&self, key: &str) -> Option<&str> {
        self.leading.lines().find_map(|line| {
            let rest = line.trim_start().strip_prefix('@')?.strip_prefix(key)?;
            match rest.chars().next() {
                None => Some(rest),
                Some(':') => Some(&rest[1..]),
                Some(c) if c.is_whitespace() => Some(rest),
                // `@keyword` must not match `@key`
                Some(_) => None,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_tag_with_space() {
        let comment = CommentGroup::leading("@javaPackage item");
        assert_eq!(comment.match_tag("javaPackage"), Some(" item"));
    }

    #[test]
    fn test_match_tag_with_colon() {
        let comment = CommentGroup::leading("player data\n  @javaPackage: item.bag\n");
        assert_eq!(
            comment.match_tag("javaPackage").map(str::trim),
            Some("item.bag")
        );
    }

    #[test]
    fn test_match_tag_requires_exact_key() {
        let comment = CommentGroup::leading("@javaPackageName item");
        assert_eq!(comment.match_tag("javaPackage"), None);
    }

    #[test]
    fn test_match_tag_first_line_wins() {
        let comment = CommentGroup::leading("@javaPackage a\n@javaPackage b");
        assert_eq!(comment.match_tag("javaPackage"), Some(" a"));
    }

    #[test]
    fn test_match_tag_bare_key() {
        let comment = CommentGroup::leading("@javaPackage");
        assert_eq!(comment.match_tag("javaPackage"), Some(""));
    }

    #[test]
    fn test_match_tag_missing() {
        let comment = CommentGroup::leading("javaPackage:item");
        assert_eq!(comment.match_tag("javaPackage"), None);
        assert!(CommentGroup::default().is_empty());
    }
}
