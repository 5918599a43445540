//! Generation driver.
//!
//! Walks each module's structs, then its enums, in declaration order:
//! resolve the namespace, render the template, emit the file. The first error
//! stops the run; files already written stay in place.

use crate::config::GeneratorConfig;
use crate::emitter::Emitter;
use crate::error::CodegenError;
use crate::java::{
    EnumGenerator, NamespaceResolver, ReferenceResolver, StructGenerator, TypeResolver,
};
use sprotogen_schema::{SchemaModule, TypeRegistry};
use std::path::PathBuf;

/// Files written by a generation run, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Paths of the generated files.
    pub files: Vec<PathBuf>,
}

impl GenerationReport {
    /// Returns the number of files written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A rendered source file not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Resolved namespace of the type.
    pub namespace: String,
    /// Declared type name.
    pub type_name: String,
    /// Generated source.
    pub contents: String,
}

/// Drives Java generation for the modules of a registry.
pub struct Generator<'a> {
    registry: &'a TypeRegistry<'a>,
    namespaces: NamespaceResolver,
    emitter: Emitter,
    banner: String,
}

impl<'a> Generator<'a> {
    /// Creates a generator over `registry` configured by `config`.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry<'a>, config: &GeneratorConfig) -> Self {
        Self {
            registry,
            namespaces: NamespaceResolver::new(&config.namespace_tag),
            emitter: Emitter::from_config(config),
            banner: config.banner.clone(),
        }
    }

    /// Renders every struct then every enum of `module` without writing.
    ///
    /// # Errors
    /// Returns the first `CodegenError` raised while rendering.
    pub fn render_module(&self, module: &SchemaModule) -> Result<Vec<RenderedFile>, CodegenError> {
        let mut files = Vec::with_capacity(module.structs.len() + module.enums.len());
        self.render_each(module, |file| {
            files.push(file);
            Ok(())
        })?;
        Ok(files)
    }

    /// Generates and writes every type declared in `module`.
    ///
    /// Each type is written as soon as it is rendered, so a failure leaves the
    /// files of earlier types on disk.
    ///
    /// # Errors
    /// Returns the first rendering or filesystem error.
    pub fn generate_module(&self, module: &SchemaModule) -> Result<GenerationReport, CodegenError> {
        let mut report = GenerationReport::default();
        self.render_each(module, |file| {
            let path = self.emitter.emit(
                &file.namespace,
                &file.type_name,
                file.contents.as_bytes(),
            )?;
            report.files.push(path);
            Ok(())
        })?;

        tracing::info!(
            "generated {} file(s) for module {}",
            report.len(),
            module.name
        );
        Ok(report)
    }

    fn render_each<F>(&self, module: &SchemaModule, mut sink: F) -> Result<(), CodegenError>
    where
        F: FnMut(RenderedFile) -> Result<(), CodegenError>,
    {
        let references = ReferenceResolver::new(self.registry, &self.namespaces).within(module);
        let structs = StructGenerator::new(TypeResolver::new(references), &self.banner);
        let enums = EnumGenerator::new(&self.banner);

        for st in &module.structs {
            let namespace = self.namespaces.resolve(&module.namespace, &st.comment);
            tracing::debug!("rendering struct {} in '{}'", st.name, namespace);
            let contents = structs.generate(st, &namespace)?;
            sink(RenderedFile {
                namespace,
                type_name: st.name.clone(),
                contents,
            })?;
        }

        for en in &module.enums {
            let namespace = self.namespaces.resolve(&module.namespace, &en.comment);
            tracing::debug!("rendering enum {} in '{}'", en.name, namespace);
            let contents = enums.generate(en, &namespace)?;
            sink(RenderedFile {
                namespace,
                type_name: en.name.clone(),
                contents,
            })?;
        }

        Ok(())
    }

    /// Generates every module known to the registry, in order.
    ///
    /// # Errors
    /// Returns the first rendering or filesystem error.
    pub fn generate_all(&self) -> Result<GenerationReport, CodegenError> {
        let mut report = GenerationReport::default();
        for module in self.registry.modules() {
            report.files.extend(self.generate_module(module)?.files);
        }
        Ok(report)
    }
}
