//! Struct definitions for sproto schemas.
//!
//! This module contains the struct declaration and its fields.

use crate::comment::CommentGroup;
use crate::types::{ComplexRef, FieldKind, FixedPoint};
use serde::{Deserialize, Serialize};

/// One declared member of a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name, unique within the struct.
    pub name: String,
    /// Wire tag, also the bit position in the presence bitmap.
    pub tag: u16,
    /// Declared kind.
    pub kind: FieldKind,
    /// Whether the field is a collection.
    #[serde(default)]
    pub repeated: bool,
    /// Key field on the referenced struct when the collection is a map.
    #[serde(default)]
    pub map_key: Option<String>,
    /// Fixed-point scale for numeric fields exposing a float view.
    #[serde(default)]
    pub fixed_point: Option<FixedPoint>,
    /// Referenced type for enum and struct kinds.
    #[serde(default)]
    pub complex: Option<ComplexRef>,
}

impl SchemaField {
    /// Creates a scalar field.
    #[must_use]
    pub fn new(name: impl Into<String>, tag: u16, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            tag,
            kind,
            repeated: false,
            map_key: None,
            fixed_point: None,
            complex: None,
        }
    }

    /// Creates a field referencing a declared struct.
    #[must_use]
    pub fn struct_ref(name: impl Into<String>, tag: u16, type_name: impl Into<String>) -> Self {
        Self::new(name, tag, FieldKind::Struct).with_complex(ComplexRef::new(type_name))
    }

    /// Creates a field referencing a declared enum.
    #[must_use]
    pub fn enum_ref(name: impl Into<String>, tag: u16, type_name: impl Into<String>) -> Self {
        Self::new(name, tag, FieldKind::Enum).with_complex(ComplexRef::new(type_name))
    }

    /// Marks the field as repeated.
    #[must_use]
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Renders a repeated struct reference as a map keyed by `key`.
    #[must_use]
    pub fn with_map_key(mut self, key: impl Into<String>) -> Self {
        self.repeated = true;
        self.map_key = Some(key.into());
        self
    }

    /// Attaches a fixed-point scale.
    #[must_use]
    pub fn with_fixed_point(mut self, scale: f64) -> Self {
        self.fixed_point = Some(FixedPoint::new(scale));
        self
    }

    /// Sets the referenced type.
    #[must_use]
    pub fn with_complex(mut self, complex: ComplexRef) -> Self {
        self.complex = Some(complex);
        self
    }
}

/// Struct declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaStruct {
    /// Struct name.
    pub name: String,
    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<SchemaField>,
    /// Comments attached to the declaration.
    #[serde(default)]
    pub comment: CommentGroup,
}

impl SchemaStruct {
    /// Creates an empty struct.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            comment: CommentGroup::default(),
        }
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    /// Attaches a comment group.
    #[must_use]
    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = comment;
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builders() {
        let field = SchemaField::struct_ref("items", 3, "Item").with_map_key("id");
        assert!(field.repeated);
        assert_eq!(field.map_key.as_deref(), Some("id"));
        assert_eq!(field.complex, Some(ComplexRef::new("Item")));
        assert_eq!(field.kind, FieldKind::Struct);
    }

    #[test]
    fn test_scalar_field_has_no_reference() {
        let field = SchemaField::new("hp", 1, FieldKind::Int32).with_fixed_point(0.01);
        assert!(!field.repeated);
        assert!(field.complex.is_none());
        assert_eq!(field.fixed_point, Some(FixedPoint::new(0.01)));
    }

    #[test]
    fn test_struct_get_field_keeps_order() {
        let st = SchemaStruct::new("Point")
            .with_field(SchemaField::new("x", 1, FieldKind::Int32))
            .with_field(SchemaField::new("y", 2, FieldKind::Int32));

        assert_eq!(st.get_field("y").map(|f| f.tag), Some(2));
        assert!(st.get_field("z").is_none());
        let names: Vec<_> = st.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }
}
