//! Loading of a parsed module handed over as JSON.
//!
//! The sproto text parser lives upstream; it dumps each module it parsed as
//! one JSON document, which is read back here.

use crate::error::SchemaError;
use crate::types::SchemaModule;
use std::path::Path;

/// Parses a module from its JSON dump.
///
/// # Errors
/// Returns `SchemaError::Json` if the document does not describe a module.
pub fn parse_module(json: &str) -> Result<SchemaModule, SchemaError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a module dump from disk.
///
/// # Errors
/// Returns `SchemaError` if the file cannot be read or parsed.
pub fn load_module(path: &Path) -> Result<SchemaModule, SchemaError> {
    let json = std::fs::read_to_string(path).map_err(|e| SchemaError::io(path, e))?;
    parse_module(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;

    const MODULE_JSON: &str = r#"{
        "name": "game.sp",
        "namespace": "game",
        "structs": [
            {
                "name": "Player",
                "comment": { "leading": "@javaPackage role" },
                "fields": [
                    { "name": "id", "tag": 1, "kind": "int32" },
                    { "name": "gold", "tag": 2, "kind": "uint64", "fixed_point": { "scale": 0.01 } },
                    {
                        "name": "bag", "tag": 3, "kind": "struct", "map_key": "id",
                        "repeated": true, "complex": { "name": "Item", "module": "item.sp" }
                    }
                ]
            }
        ],
        "enums": [ { "name": "Color", "members": ["Red", "Green"] } ]
    }"#;

    #[test]
    fn test_parse_module() {
        let module = parse_module(MODULE_JSON).expect("Failed to parse");

        assert_eq!(module.namespace, "game");
        let player = module.get_struct("Player").expect("Player");
        assert_eq!(player.fields.len(), 3);
        assert_eq!(player.fields[1].kind, FieldKind::UInt64);
        assert_eq!(player.fields[2].map_key.as_deref(), Some("id"));
        assert_eq!(
            player.fields[2].complex.as_ref().and_then(|c| c.module.as_deref()),
            Some("item.sp")
        );
        assert_eq!(player.comment.match_tag("javaPackage"), Some(" role"));
        assert_eq!(module.enums[0].members, ["Red", "Green"]);
    }

    #[test]
    fn test_parse_module_rejects_unknown_kind() {
        let json = r#"{ "name": "a", "structs": [ { "name": "S", "fields": [
            { "name": "x", "tag": 1, "kind": "decimal" } ] } ] }"#;
        assert!(matches!(parse_module(json), Err(SchemaError::Json(_))));
    }

    #[test]
    fn test_load_module_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("game.json");
        std::fs::write(&path, MODULE_JSON).expect("write");

        let module = load_module(&path).expect("Failed to load");
        assert_eq!(module.name, "game.sp");
    }

    #[test]
    fn test_load_module_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_module(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
