//! Java code generation modules.

pub mod enums;
pub mod namespace;
pub mod references;
pub mod structs;
pub mod types;

pub use enums::EnumGenerator;
pub use namespace::NamespaceResolver;
pub use references::ReferenceResolver;
pub use structs::StructGenerator;
pub use types::{FieldBinding, TypeResolver};

/// Capitalizes the first character, as Java accessor names expect.
#[must_use]
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a float as a Java `float` literal.
#[must_use]
pub fn float_literal(value: f64) -> String {
    format!("{value}f")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("hp"), "Hp");
        assert_eq!(upper_first("itemList"), "ItemList");
        assert_eq!(upper_first("X"), "X");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal(0.01), "0.01f");
        assert_eq!(float_literal(100.0), "100f");
        assert_eq!(float_literal(2.5), "2.5f");
    }
}
