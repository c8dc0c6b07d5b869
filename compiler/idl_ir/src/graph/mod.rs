//! Declaration-graph capability traits and the in-memory graph.
//!
//! The generator never touches a concrete upstream representation. It asks
//! an `InterfaceDecl` for its parents, operations, attributes and
//! annotations, and a `DeclarationGraph` for interfaces by name.

use std::collections::BTreeMap;

use crate::{Attribute, ExtAttrs, Interface, Operation};

/// Read-only view of one interface declaration.
pub trait InterfaceDecl {
    /// Interface name (its IDL type id).
    fn name(&self) -> &str;

    /// Parent type ids in declaration order.
    fn parents(&self) -> &[String];

    /// Operations in declaration order; overloads share a name.
    fn operations(&self) -> &[Operation];

    fn attributes(&self) -> &[Attribute];

    fn ext_attrs(&self) -> &ExtAttrs;

    /// Look up `annotations[group][key]`.
    fn annotation(&self, group: &str, key: &str) -> Option<&str>;
}

impl InterfaceDecl for Interface {
    fn name(&self) -> &str {
        &self.id
    }

    fn parents(&self) -> &[String] {
        &self.parents
    }

    fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn ext_attrs(&self) -> &ExtAttrs {
        &self.ext_attrs
    }

    fn annotation(&self, group: &str, key: &str) -> Option<&str> {
        self.annotations
            .get(group)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }
}

/// Read-only view of the whole declaration graph.
pub trait DeclarationGraph {
    type Interface: InterfaceDecl;

    /// Look up an interface by name.
    fn interface(&self, id: &str) -> Option<&Self::Interface>;

    fn has_interface(&self, id: &str) -> bool {
        self.interface(id).is_some()
    }

    /// All interfaces, sorted by name.
    fn interfaces(&self) -> Box<dyn Iterator<Item = &Self::Interface> + '_>;
}

/// In-memory declaration graph keyed by interface name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdlDatabase {
    interfaces: BTreeMap<String, Interface>,
}

impl IdlDatabase {
    pub fn new() -> Self {
        Self {
            interfaces: BTreeMap::new(),
        }
    }

    /// Add an interface, returning the one it replaced (if any).
    pub fn insert(&mut self, interface: Interface) -> Option<Interface> {
        self.interfaces.insert(interface.id.clone(), interface)
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

impl FromIterator<Interface> for IdlDatabase {
    fn from_iter<I: IntoIterator<Item = Interface>>(iter: I) -> Self {
        let mut database = Self::new();
        for interface in iter {
            database.insert(interface);
        }
        database
    }
}

impl DeclarationGraph for IdlDatabase {
    type Interface = Interface;

    fn interface(&self, id: &str) -> Option<&Interface> {
        self.interfaces.get(id)
    }

    fn interfaces(&self) -> Box<dyn Iterator<Item = &Interface> + '_> {
        Box::new(self.interfaces.values())
    }
}
