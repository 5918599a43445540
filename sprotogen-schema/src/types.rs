//! Schema type definitions.
//!
//! This module contains the field kinds, enum declarations and the module
//! container produced by the schema parser.

use crate::comment::CommentGroup;
use crate::structs::SchemaStruct;
use serde::{Deserialize, Serialize};

/// Declared kind of a struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Boolean, sent as a number.
    Bool,
    /// Untyped integer, treated as 32 bits.
    Integer,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 32-bit integer.
    #[serde(rename = "uint32")]
    UInt32,
    /// Unsigned 64-bit integer.
    #[serde(rename = "uint64")]
    UInt64,
    /// Single precision float.
    Float32,
    /// Double precision float.
    Float64,
    /// UTF-8 string.
    String,
    /// Opaque byte blob.
    Bytes,
    /// Reference to a declared enum.
    Enum,
    /// Reference to a declared struct.
    Struct,
}

impl FieldKind {
    /// Returns the schema keyword for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Enum => "enum",
            Self::Struct => "struct",
        }
    }

    /// Returns true for kinds the protocol carries as a 32-bit integer.
    #[must_use]
    pub const fn is_int32(self) -> bool {
        matches!(self, Self::Integer | Self::Int32)
    }

    /// Returns true for kinds the protocol unifies into one 64-bit number.
    #[must_use]
    pub const fn is_wide_numeric(self) -> bool {
        matches!(
            self,
            Self::Int64 | Self::UInt32 | Self::UInt64 | Self::Float32 | Self::Float64
        )
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reference from a field to a user-declared struct or enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexRef {
    /// Declared name of the referenced type.
    pub name: String,
    /// Name of the module declaring it, when the parser knows it.
    #[serde(default)]
    pub module: Option<String>,
}

impl ComplexRef {
    /// Creates a reference by type name only.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
        }
    }

    /// Pins the reference to a declaring module.
    #[must_use]
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }
}

/// Fixed-point scale attached to a numeric field.
///
/// The field stores a scaled integer; generated code exposes an extra float
/// view. The transform truncates and is not an exact inverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedPoint {
    /// Value of one raw unit, e.g. `0.01`.
    pub scale: f64,
}

impl FixedPoint {
    /// Creates a fixed-point description with the given scale.
    #[must_use]
    pub const fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Multiplier converting a float to its raw representation.
    #[must_use]
    pub fn reciprocal(&self) -> f64 {
        1.0 / self.scale
    }

    /// Returns true if the scale and its reciprocal are finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.scale > 0.0 && self.scale.is_finite() && self.reciprocal().is_finite()
    }
}

/// Enum declaration.
///
/// A member's wire value is its position in `members`, so reordering members
/// breaks wire compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEnum {
    /// Enum name.
    pub name: String,
    /// Member names in declaration order.
    pub members: Vec<String>,
    /// Comments attached to the declaration.
    #[serde(default)]
    pub comment: CommentGroup,
}

impl SchemaEnum {
    /// Creates an enum with the given members.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
            comment: CommentGroup::default(),
        }
    }

    /// Attaches a comment group.
    #[must_use]
    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = comment;
        self
    }
}

/// One schema source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaModule {
    /// Module (file) name.
    pub name: String,
    /// Default output namespace of every type in this module.
    #[serde(default)]
    pub namespace: String,
    /// Struct declarations in declaration order.
    #[serde(default)]
    pub structs: Vec<SchemaStruct>,
    /// Enum declarations in declaration order.
    #[serde(default)]
    pub enums: Vec<SchemaEnum>,
}

impl SchemaModule {
    /// Creates an empty module.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            structs: Vec::new(),
            enums: Vec::new(),
        }
    }

    /// Adds a struct declaration.
    #[must_use]
    pub fn with_struct(mut self, st: SchemaStruct) -> Self {
        self.structs.push(st);
        self
    }

    /// Adds an enum declaration.
    #[must_use]
    pub fn with_enum(mut self, en: SchemaEnum) -> Self {
        self.enums.push(en);
        self
    }

    /// Looks up a struct declared in this module.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&SchemaStruct> {
        self.structs.iter().find(|s| s.name == name)
    }

    /// Looks up an enum declared in this module.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&SchemaEnum> {
        self.enums.iter().find(|e| e.name == name)
    }
}
