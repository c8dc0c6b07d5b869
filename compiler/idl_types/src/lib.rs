//! Type descriptors for the IDL binding generator.
//!
//! Every IDL type name maps to a [`TypeDescriptor`] that knows its
//! managed-language name, its native representation, and how to emit
//! conversion code in both directions across the native/managed boundary.
//!
//! # Architecture
//!
//! ```text
//! catalog::entries()  (fixed literal catalog)
//!     ↓
//! build_registry() ──► TypeRegistry
//!     │                   ├── resolve("DOMString")        → Primitive
//!     │                   ├── resolve("sequence<long>")   → Sequence (cached)
//!     │                   └── resolve("Unknown")          → identity Generic
//!     ↓
//! TypeDescriptor
//!     ├── emit_native_conversion()   managed value → native
//!     ├── emit_managed_conversion()  native value → managed
//!     └── native_dependencies() / conversion_includes() / native_includes()
//! ```
//!
//! # Design Decisions
//!
//! - Variants are a closed enum ([`DescriptorKind`]) matched exhaustively by
//!   every capability, so a new variant cannot silently fall through.
//! - The registry is immutable after `build_registry()` except for the
//!   sequence cache, which is an `RwLock`-guarded memo table. Descriptor
//!   construction is pure, so a lost race only duplicates work.
//! - Lookups never fail: unknown names resolve to an identity descriptor.

pub mod catalog;
mod convert;
mod descriptor;
mod registry;

pub use convert::{NativeConversion, NativeConversionContext, TearOffCast};
pub use descriptor::{sequence_element, Accessors, DescriptorKind, TypeDescriptor};
pub use registry::{build_registry, SharedRegistry, TypeRegistry};
