//! The type descriptor registry.
//!
//! Built once from the literal catalog and read-only afterwards, except for
//! the sequence cache.
//!
//! # Design
//!
//! - Catalog entries live in an `FxHashMap` behind `Arc` so resolution hands
//!   out shared descriptors without copying.
//! - Sequence descriptors are synthesized lazily the first time a
//!   `sequence<T>` name is seen, keyed by the full name. The cache sits behind
//!   a `parking_lot::RwLock`; on a miss the descriptor is built outside the
//!   lock and the first writer wins, so concurrent resolvers always observe
//!   one descriptor per name.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::{catalog, sequence_element, TypeDescriptor};

/// Registry shared across worker threads.
pub type SharedRegistry = Arc<TypeRegistry>;

/// Maps IDL type names to descriptors.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    catalog: FxHashMap<String, Arc<TypeDescriptor>>,
    sequences: RwLock<FxHashMap<String, Arc<TypeDescriptor>>>,
}

/// Build the process-wide registry from the fixed catalog.
pub fn build_registry() -> TypeRegistry {
    TypeRegistry::from_entries(catalog::entries())
}

impl TypeRegistry {
    /// Create a registry over the given entries. Later entries replace
    /// earlier ones with the same IDL name.
    pub fn from_entries(entries: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        let catalog = entries
            .into_iter()
            .map(|desc| (desc.idl_type().to_owned(), Arc::new(desc)))
            .collect();
        TypeRegistry {
            catalog,
            sequences: RwLock::new(FxHashMap::default()),
        }
    }

    /// Resolve an IDL type name. Never fails.
    ///
    /// `sequence<T>` names resolve to a cached sequence descriptor; catalog
    /// names to their entry; anything else to an identity descriptor whose
    /// managed and native names equal the input.
    pub fn resolve(&self, idl_type: &str) -> Arc<TypeDescriptor> {
        if let Some(sequence) = self.resolve_sequence(idl_type) {
            return sequence;
        }
        match self.catalog.get(idl_type) {
            Some(desc) => Arc::clone(desc),
            None => Arc::new(TypeDescriptor::identity(idl_type)),
        }
    }

    /// Resolve `sequence<T>` syntax, or `None` for any other name.
    pub fn resolve_sequence(&self, idl_type: &str) -> Option<Arc<TypeDescriptor>> {
        let element_name = sequence_element(idl_type)?;

        if let Some(cached) = self.sequences.read().get(idl_type) {
            return Some(Arc::clone(cached));
        }

        let element = self.resolve(element_name);
        let desc = Arc::new(TypeDescriptor::sequence(idl_type, element));

        let mut sequences = self.sequences.write();
        let entry = sequences
            .entry(idl_type.to_owned())
            .or_insert_with(|| {
                tracing::trace!(sequence = idl_type, "cached sequence descriptor");
                desc
            });
        Some(Arc::clone(entry))
    }

    /// Catalog entry for a name, without fallback.
    pub fn get(&self, idl_type: &str) -> Option<&Arc<TypeDescriptor>> {
        self.catalog.get(idl_type)
    }

    pub fn contains(&self, idl_type: &str) -> bool {
        self.catalog.contains_key(idl_type)
    }

    /// Managed-language name of an IDL type.
    pub fn managed_type(&self, idl_type: &str) -> String {
        self.resolve(idl_type).managed_type().into_owned()
    }

    /// Script binding name of an IDL type.
    pub fn script_type(&self, idl_type: &str) -> String {
        self.resolve(idl_type).script_type().to_owned()
    }

    pub fn is_primitive(&self, idl_type: &str) -> bool {
        self.resolve(idl_type).is_primitive()
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Number of sequence descriptors synthesized so far.
    pub fn cached_sequences(&self) -> usize {
        self.sequences.read().len()
    }

    /// Catalog entries sorted by IDL name.
    pub fn entries(&self) -> Vec<&Arc<TypeDescriptor>> {
        let mut entries: Vec<_> = self.catalog.values().collect();
        entries.sort_by(|a, b| a.idl_type().cmp(b.idl_type()));
        entries
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, reason = "Tests use expect for brevity")]
mod tests;
