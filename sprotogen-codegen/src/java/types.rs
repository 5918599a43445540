//! Field type mapping.
//!
//! Maps each schema field to its Java type and to the decoder/encoder calls
//! moving it across the wire. The calls target the `sproto` Java runtime.

use crate::error::CodegenError;
use crate::java::references::ReferenceResolver;
use crate::java::upper_first;
use sprotogen_schema::{ComplexRef, FieldKind, SchemaField};

/// Java rendering of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Java type of the private member.
    pub type_name: String,
    /// Expression producing the member from `decoder`.
    pub decode: String,
    /// Statement writing the member to `encoder`.
    pub encode: String,
}

/// Resolves fields to their Java bindings.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    references: ReferenceResolver<'a>,
}

impl<'a> TypeResolver<'a> {
    /// Creates a type resolver.
    #[must_use]
    pub fn new(references: ReferenceResolver<'a>) -> Self {
        Self { references }
    }

    /// Resolves a field of a struct placed in `owner_namespace`.
    ///
    /// # Errors
    /// Returns `CodegenError` if a reference field lacks its target type or a
    /// map key cannot be found on the referenced struct.
    pub fn resolve(
        &self,
        field: &SchemaField,
        owner_namespace: &str,
    ) -> Result<FieldBinding, CodegenError> {
        let tag = field.tag;
        let name = &field.name;
        let repeated = field.repeated;

        let binding = match field.kind {
            FieldKind::Bool if repeated => FieldBinding {
                type_name: "boolean[]".to_string(),
                decode: "decoder.readBooleanArray()".to_string(),
                encode: format!("encoder.writeBooleanArray({tag},{name})"),
            },
            FieldKind::Bool => FieldBinding {
                type_name: "boolean".to_string(),
                decode: format!("decoder.readBool({tag})"),
                encode: format!("encoder.writeNumber({tag},{name}?1:0)"),
            },
            FieldKind::Integer | FieldKind::Int32 => {
                if repeated {
                    FieldBinding {
                        type_name: "int[]".to_string(),
                        decode: "decoder.readIntArray()".to_string(),
                        encode: format!("encoder.writeNumberArray({tag},{name})"),
                    }
                } else {
                    FieldBinding {
                        type_name: "int".to_string(),
                        decode: format!("(int)decoder.readNumber({tag})"),
                        encode: format!("encoder.writeNumber({tag},{name})"),
                    }
                }
            }
            // int64, uint32, uint64 and both floats share one wire number
            FieldKind::Int64
            | FieldKind::UInt32
            | FieldKind::UInt64
            | FieldKind::Float32
            | FieldKind::Float64 => {
                if repeated {
                    FieldBinding {
                        type_name: "long[]".to_string(),
                        decode: "decoder.readLongArray()".to_string(),
                        encode: format!("encoder.writeNumberArray({tag},{name})"),
                    }
                } else {
                    FieldBinding {
                        type_name: "long".to_string(),
                        decode: format!("decoder.readNumber({tag})"),
                        encode: format!("encoder.writeNumber({tag},{name})"),
                    }
                }
            }
            FieldKind::String if repeated => FieldBinding {
                type_name: "String[]".to_string(),
                decode: "decoder.readStringArray()".to_string(),
                encode: format!("encoder.writeStringArray({tag},{name})"),
            },
            FieldKind::String => FieldBinding {
                type_name: "String".to_string(),
                decode: "decoder.readString()".to_string(),
                encode: format!("encoder.writeString({tag},{name})"),
            },
            // a blob is never an array of blobs
            FieldKind::Bytes => FieldBinding {
                type_name: "ByteBuffer".to_string(),
                decode: "decoder.readBinary()".to_string(),
                encode: format!("encoder.writeBinary({tag},{name})"),
            },
            FieldKind::Enum => {
                let class = self.complex_class(field, owner_namespace)?;
                if repeated {
                    FieldBinding {
                        type_name: format!("List<{class}>"),
                        decode: format!("enums(decoder.readIntArray(),{class}::byInt)"),
                        encode: format!(
                            "encoder.writeNumberArray({tag},enums({name},{class}::ordinal))"
                        ),
                    }
                } else {
                    FieldBinding {
                        type_name: class.clone(),
                        decode: format!("{class}.byInt((int)decoder.readNumber({tag}))"),
                        encode: format!("encoder.writeNumber({tag},{name}.ordinal())"),
                    }
                }
            }
            FieldKind::Struct => self.resolve_struct(field, owner_namespace)?,
        };

        Ok(binding)
    }

    fn resolve_struct(
        &self,
        field: &SchemaField,
        owner_namespace: &str,
    ) -> Result<FieldBinding, CodegenError> {
        let tag = field.tag;
        let name = &field.name;
        let class = self.complex_class(field, owner_namespace)?;

        if !field.repeated {
            return Ok(FieldBinding {
                decode: format!("decoder.readObject({class}::new)"),
                encode: format!("encoder.writeObject({tag},{name})"),
                type_name: class,
            });
        }

        let Some(key) = field.map_key.as_deref() else {
            return Ok(FieldBinding {
                type_name: format!("List<{class}>"),
                decode: format!("decoder.readList(new LinkedList<>(),{class}::new)"),
                encode: format!("encoder.writeObjectList({tag},{name})"),
            });
        };

        let key_field = self.map_key_field(field, key)?;
        let key_type = self.resolve(key_field, owner_namespace)?.type_name;

        Ok(FieldBinding {
            type_name: format!("Map<{},{class}>", boxed(&key_type)),
            decode: format!(
                "decoder.readMap(new HashMap<>(),{class}::new,{class}::get{})",
                upper_first(&key_field.name)
            ),
            encode: format!("encoder.writeObjectList({tag},{name}.values())"),
        })
    }

    fn reference<'f>(&self, field: &'f SchemaField) -> Result<&'f ComplexRef, CodegenError> {
        field
            .complex
            .as_ref()
            .ok_or_else(|| CodegenError::MissingReference {
                field: field.name.clone(),
                kind: field.kind,
            })
    }

    fn complex_class(
        &self,
        field: &SchemaField,
        owner_namespace: &str,
    ) -> Result<String, CodegenError> {
        let reference = self.reference(field)?;
        Ok(self.references.qualified_name(reference, owner_namespace))
    }

    fn map_key_field(
        &self,
        field: &SchemaField,
        key: &str,
    ) -> Result<&'a SchemaField, CodegenError> {
        let reference = self.reference(field)?;
        let target =
            self.references
                .lookup_struct(reference)
                .ok_or_else(|| CodegenError::UnknownType {
                    type_name: reference.name.clone(),
                    field: field.name.clone(),
                })?;

        let key_field = target
            .get_field(key)
            .ok_or_else(|| CodegenError::UnknownMapKey {
                key: key.to_string(),
                type_name: reference.name.clone(),
                field: field.name.clone(),
            })?;

        // the key is resolved as a field itself, so it must not be a map again
        if key_field.repeated || key_field.map_key.is_some() {
            return Err(CodegenError::InvalidMapKey {
                key: key.to_string(),
                type_name: reference.name.clone(),
                field: field.name.clone(),
            });
        }
        Ok(key_field)
    }
}

/// Returns the reference type usable as a generic argument.
fn boxed(type_name: &str) -> &str {
    match type_name {
        "int" => "Integer",
        "long" => "Long",
        "boolean" => "Boolean",
        other => other,
    }
}
