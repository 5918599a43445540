//! # sprotogen Codegen
//!
//! Java code generation from sproto schema models.
//!
//! This crate provides:
//! - Field type mapping to Java types and `sproto` runtime calls
//! - Cross-module type reference qualification
//! - Output package resolution from `@javaPackage` annotations
//! - Struct and enum class templates
//! - File emission under an output root

pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod java;

pub use config::GeneratorConfig;
pub use emitter::Emitter;
pub use error::CodegenError;
pub use generator::{GenerationReport, Generator, RenderedFile};

use sprotogen_schema::{SchemaModule, TypeRegistry};
use std::path::Path;

/// Generates Java sources for every type declared in `modules`.
///
/// All modules together form the registry that cross-module references are
/// resolved against.
///
/// # Arguments
/// * `modules` - Parsed schema modules
/// * `config` - Output root and rendering settings
///
/// # Returns
/// The paths of the written files.
///
/// # Errors
/// Returns the first `CodegenError` hit; files written before it remain.
pub fn generate(
    modules: &[SchemaModule],
    config: &GeneratorConfig,
) -> Result<GenerationReport, CodegenError> {
    let registry = TypeRegistry::new(modules);
    Generator::new(&registry, config).generate_all()
}

/// Loads JSON module dumps and generates Java sources for all of them.
///
/// # Arguments
/// * `paths` - Module dump files
/// * `config` - Output root and rendering settings
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_files<P: AsRef<Path>>(
    paths: &[P],
    config: &GeneratorConfig,
) -> Result<GenerationReport, CodegenError> {
    let modules = paths
        .iter()
        .map(|p| sprotogen_schema::load_module(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    generate(&modules, config)
}
