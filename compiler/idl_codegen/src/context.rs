//! Code generation context.
//!
//! Everything generation reads lives behind shared references, so one
//! context can be handed to many interfaces (and threads) at once.

use idl_ir::DeclarationGraph;
use idl_types::TypeRegistry;

/// Default root package for generated managed types.
pub const DEFAULT_PACKAGE_ROOT: &str = "elemental";

/// Options that change generated text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodegenOptions {
    /// Dotted root package of the managed bindings (`elemental`).
    pub package_root: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            package_root: DEFAULT_PACKAGE_ROOT.to_owned(),
        }
    }
}

impl CodegenOptions {
    #[must_use]
    pub fn with_package_root(mut self, package_root: impl Into<String>) -> Self {
        self.package_root = package_root.into();
        self
    }

    /// The root package as a signature path (`com.example` → `com/example`).
    pub fn package_path(&self) -> String {
        self.package_root.replace('.', "/")
    }
}

/// Code generation context.
///
/// Holds the type registry, the declaration graph, and the options.
pub struct CodegenContext<'a, G: DeclarationGraph> {
    pub registry: &'a TypeRegistry,
    pub graph: &'a G,
    pub options: &'a CodegenOptions,
}

impl<G: DeclarationGraph> Clone for CodegenContext<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: DeclarationGraph> Copy for CodegenContext<'_, G> {}

impl<'a, G: DeclarationGraph> CodegenContext<'a, G> {
    pub fn new(registry: &'a TypeRegistry, graph: &'a G, options: &'a CodegenOptions) -> Self {
        Self {
            registry,
            graph,
            options,
        }
    }

    /// Managed type name of an IDL type.
    #[inline]
    pub fn managed_type(&self, idl_type: &str) -> String {
        self.registry.managed_type(idl_type)
    }
}
