//! # sprotogen
//!
//! Java code generator for the sproto tag-based binary protocol.
//!
//! Given parsed schema modules, sprotogen writes one Java source per declared
//! struct and enum. Structs carry a presence bitmap, get/set/is-set
//! accessors, a decode method driven by the tags present on the wire and an
//! encode method driven by the bitmap.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sprotogen::prelude::*;
//!
//! let module = SchemaModule::new("game.sp", "game").with_struct(
//!     SchemaStruct::new("Player").with_field(SchemaField::new("id", 1, FieldKind::Int32)),
//! );
//!
//! let report = generate(&[module], &GeneratorConfig::new("gen"))?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, annotations and type registry
//! - [`codegen`] - Type mapping, Java templates and file emission

pub mod prelude;

/// Schema model and type registry.
pub mod schema {
    pub use sprotogen_schema::*;
}

/// Java code generation.
pub mod codegen {
    pub use sprotogen_codegen::*;
}

pub use sprotogen_codegen::{CodegenError, GeneratorConfig, generate, generate_from_files};
pub use sprotogen_schema::{SchemaModule, TypeRegistry};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_generates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let module = SchemaModule::new("game.sp", "game").with_struct(
            SchemaStruct::new("Player").with_field(SchemaField::new("id", 1, FieldKind::Int32)),
        );

        let report = generate(&[module], &GeneratorConfig::new(dir.path())).expect("generate");

        assert_eq!(report.len(), 1);
        assert!(dir.path().join("game").join("Player.java").is_file());
    }
}
