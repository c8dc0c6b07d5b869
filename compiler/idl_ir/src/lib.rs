//! IDL declaration records for the binding generator.
//!
//! The upstream IDL parser hands over an already-parsed declaration graph.
//! This crate holds the shape of that graph and nothing else:
//! - `Interface`, `Operation`, `Attribute`, `Argument` records
//! - `ExtAttrs`, the extension-annotation mapping attached to each record
//! - `InterfaceDecl` / `DeclarationGraph`, the narrow capability traits the
//!   generator depends on
//! - `IdlDatabase`, an in-memory graph keyed by interface name
//!
//! Every record is read-only from the generator's point of view. Nothing in
//! the downstream crates mutates declarations.
//!
//! # Serialization
//!
//! With the `serde` feature enabled every record derives `Serialize` and
//! `Deserialize`, which lets the driver load a graph from JSON.

mod decl;
mod ext_attrs;
mod graph;

pub use decl::{Annotations, Argument, Attribute, Interface, Operation};
pub use ext_attrs::{names, ExtAttrValue, ExtAttrs, FunctionValue};
pub use graph::{DeclarationGraph, IdlDatabase, InterfaceDecl};
