//! Cross-reference resolution.
//!
//! A field naming a struct or enum renders the bare type name when the
//! referenced type lands in the referencing struct's package, and the
//! package-qualified name otherwise. Names are looked up in the referencing
//! struct's own module before the rest of the registry.

use crate::java::namespace::{NAMESPACE_SEPARATOR, NamespaceResolver};
use sprotogen_schema::{ComplexRef, DeclaredType, SchemaModule, SchemaStruct, TypeRegistry};

/// Resolves references to user-declared types against the registry.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    registry: &'a TypeRegistry<'a>,
    namespaces: &'a NamespaceResolver,
    owner: Option<&'a str>,
}

impl<'a> ReferenceResolver<'a> {
    /// Creates a resolver over a registry.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry<'a>, namespaces: &'a NamespaceResolver) -> Self {
        Self {
            registry,
            namespaces,
            owner: None,
        }
    }

    /// Scopes lookups to structs declared in `module`.
    #[must_use]
    pub fn within(mut self, module: &'a SchemaModule) -> Self {
        self.owner = Some(&module.name);
        self
    }

    fn declared(&self, reference: &ComplexRef) -> Option<DeclaredType<'a>> {
        self.registry.resolve_from(reference, self.owner)
    }

    /// Returns the Java name of a referenced type as seen from `owner_namespace`.
    ///
    /// An unknown type degrades to its bare declared name.
    #[must_use]
    pub fn qualified_name(&self, reference: &ComplexRef, owner_namespace: &str) -> String {
        let Some(declared) = self.declared(reference) else {
            tracing::warn!(
                "type '{}' is not declared in any module, using the bare name",
                reference.name
            );
            return reference.name.clone();
        };

        let namespace = self.namespaces.resolve_declared(&declared);
        if namespace == owner_namespace || namespace.is_empty() {
            declared.name().to_string()
        } else {
            format!("{namespace}{NAMESPACE_SEPARATOR}{}", declared.name())
        }
    }

    /// Looks up the struct declaration behind a reference.
    #[must_use]
    pub fn lookup_struct(&self, reference: &ComplexRef) -> Option<&'a SchemaStruct> {
        self.declared(reference)?.as_struct()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprotogen_schema::{CommentGroup, SchemaEnum, SchemaModule};

    fn modules() -> Vec<SchemaModule> {
        vec![
            SchemaModule::new("game.sp", "game")
                .with_struct(SchemaStruct::new("A"))
                .with_struct(SchemaStruct::new("C"))
                .with_struct(
                    SchemaStruct::new("B")
                        .with_comment(CommentGroup::leading("@javaPackage item")),
                ),
            SchemaModule::new("net.sp", "net").with_enum(SchemaEnum::new("Status", ["Ok"])),
            SchemaModule::new("root.sp", "").with_struct(SchemaStruct::new("Root")),
        ]
    }

    #[test]
    fn test_cross_namespace_reference_is_qualified() {
        let modules = modules();
        let registry = TypeRegistry::new(&modules);
        let namespaces = NamespaceResolver::new("javaPackage");
        let resolver = ReferenceResolver::new(&registry, &namespaces);

        assert_eq!(
            resolver.qualified_name(&ComplexRef::new("B"), "game"),
            "game.item.B"
        );
        assert_eq!(
            resolver.qualified_name(&ComplexRef::new("Status"), "game"),
            "net.Status"
        );
    }

    #[test]
    fn test_same_namespace_reference_is_bare() {
        let modules = modules();
        let registry = TypeRegistry::new(&modules);
        let namespaces = NamespaceResolver::new("javaPackage");
        let resolver = ReferenceResolver::new(&registry, &namespaces);

        assert_eq!(resolver.qualified_name(&ComplexRef::new("C"), "game"), "C");
        assert_eq!(
            resolver.qualified_name(&ComplexRef::new("B"), "game.item"),
            "B"
        );
    }

    #[test]
    fn test_unknown_reference_falls_back_to_bare_name() {
        let modules = modules();
        let registry = TypeRegistry::new(&modules);
        let namespaces = NamespaceResolver::new("javaPackage");
        let resolver = ReferenceResolver::new(&registry, &namespaces);

        assert_eq!(
            resolver.qualified_name(&ComplexRef::new("Ghost"), "game"),
            "Ghost"
        );
        assert!(resolver.lookup_struct(&ComplexRef::new("Ghost")).is_none());
    }

    #[test]
    fn test_default_package_reference_is_bare() {
        let modules = modules();
        let registry = TypeRegistry::new(&modules);
        let namespaces = NamespaceResolver::new("javaPackage");
        let resolver = ReferenceResolver::new(&registry, &namespaces);

        assert_eq!(
            resolver.qualified_name(&ComplexRef::new("Root"), "game"),
            "Root"
        );
    }

    #[test]
    fn test_lookup_struct_ignores_enums() {
        let modules = modules();
        let registry = TypeRegistry::new(&modules);
        let namespaces = NamespaceResolver::new("javaPackage");
        let resolver = ReferenceResolver::new(&registry, &namespaces);

        assert!(resolver.lookup_struct(&ComplexRef::new("A")).is_some());
        assert!(resolver.lookup_struct(&ComplexRef::new("Status")).is_none());
    }

    #[test]
    fn test_own_module_shadows_earlier_declaration() {
        let modules = vec![
            SchemaModule::new("game.sp", "game").with_struct(SchemaStruct::new("Item")),
            SchemaModule::new("bag.sp", "bag")
                .with_struct(SchemaStruct::new("Item"))
                .with_struct(SchemaStruct::new("Bag")),
        ];
        let registry = TypeRegistry::new(&modules);
        let namespaces = NamespaceResolver::new("javaPackage");
        let unscoped = ReferenceResolver::new(&registry, &namespaces);
        let item = ComplexRef::new("Item");

        assert_eq!(unscoped.qualified_name(&item, "bag"), "game.Item");
        assert_eq!(unscoped.within(&modules[1]).qualified_name(&item, "bag"), "Item");
        assert_eq!(unscoped.within(&modules[0]).qualified_name(&item, "game"), "Item");
    }
}
