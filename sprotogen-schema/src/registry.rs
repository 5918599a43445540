//! Registry of every declared type across all modules.
//!
//! The registry is built once per generation run and shared by reference
//! with every resolver, so cross-module lookups never rescan the model.

use crate::comment::CommentGroup;
use crate::structs::SchemaStruct;
use crate::types::{ComplexRef, SchemaEnum, SchemaModule};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Declaration behind a registered name.
#[derive(Debug, Clone, Copy)]
pub enum DeclaredKind<'a> {
    /// Struct declaration.
    Struct(&'a SchemaStruct),
    /// Enum declaration.
    Enum(&'a SchemaEnum),
}

/// A registered type together with its declaring module.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredType<'a> {
    /// Module declaring the type.
    pub module: &'a SchemaModule,
    /// The declaration itself.
    pub kind: DeclaredKind<'a>,
}

impl<'a> DeclaredType<'a> {
    /// Returns the declared type name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self.kind {
            DeclaredKind::Struct(s) => &s.name,
            DeclaredKind::Enum(e) => &e.name,
        }
    }

    /// Returns the comments attached to the declaration.
    #[must_use]
    pub fn comment(&self) -> &'a CommentGroup {
        match self.kind {
            DeclaredKind::Struct(s) => &s.comment,
            DeclaredKind::Enum(e) => &e.comment,
        }
    }

    /// Returns the struct declaration, if this is a struct.
    #[must_use]
    pub fn as_struct(&self) -> Option<&'a SchemaStruct> {
        match self.kind {
            DeclaredKind::Struct(s) => Some(s),
            DeclaredKind::Enum(_) => None,
        }
    }
}

/// Immutable index of declared structs and enums.
#[derive(Debug, Clone)]
pub struct TypeRegistry<'a> {
    modules: &'a [SchemaModule],
    types: HashMap<&'a str, DeclaredType<'a>>,
}

impl<'a> TypeRegistry<'a> {
    /// Indexes every struct and enum declared in `modules`.
    ///
    /// When a name is declared more than once, the first declaration in
    /// module order wins for unqualified lookups.
    #[must_use]
    pub fn new(modules: &'a [SchemaModule]) -> Self {
        let mut types = HashMap::new();

        for module in modules {
            let structs = module.structs.iter().map(DeclaredKind::Struct);
            let enums = module.enums.iter().map(DeclaredKind::Enum);
            for kind in structs.chain(enums) {
                let declared = DeclaredType { module, kind };
                if let Entry::Vacant(slot) = types.entry(declared.name()) {
                    slot.insert(declared);
                }
            }
        }

        Self { modules, types }
    }

    /// Returns the indexed modules.
    #[must_use]
    pub fn modules(&self) -> &'a [SchemaModule] {
        self.modules
    }

    /// Returns the number of registered type names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Looks up a type by its declared name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DeclaredType<'a>> {
        self.types.get(name)
    }

    /// Resolves a field's type reference without an owning module.
    ///
    /// A reference pinned to a module is looked up there first; otherwise,
    /// or when that module does not declare it, the global index is used.
    #[must_use]
    pub fn resolve(&self, reference: &ComplexRef) -> Option<DeclaredType<'a>> {
        self.resolve_from(reference, None)
    }

    /// Resolves a field's type reference as seen from module `owner`.
    ///
    /// Lookup order is the pinned module, then `owner`, then the global index,
    /// so a module's own declaration shadows one declared earlier elsewhere.
    #[must_use]
    pub fn resolve_from(
        &self,
        reference: &ComplexRef,
        owner: Option<&str>,
    ) -> Option<DeclaredType<'a>> {
        let name = reference.name.as_str();
        reference
            .module
            .as_deref()
            .and_then(|module| self.declared_in(module, name))
            .or_else(|| owner.and_then(|module| self.declared_in(module, name)))
            .or_else(|| self.get(name).copied())
    }

    fn declared_in(&self, module_name: &str, name: &str) -> Option<DeclaredType<'a>> {
        let module = self.modules.iter().find(|m| m.name == module_name)?;
        module
            .get_struct(name)
            .map(DeclaredKind::Struct)
            .or_else(|| module.get_enum(name).map(DeclaredKind::Enum))
            .map(|kind| DeclaredType { module, kind })
    }
}
