//! Binding generation for IDL interfaces.
//!
//! Turns read-only interface declarations into the calling conventions and
//! conversion glue of the managed bindings.
//!
//! # Architecture
//!
//! ```text
//! Operation overloads ──► overload::merge_overloads() ──► OperationInfo
//!                                                            │
//!                    ┌───────────────────────────────────────┤
//!                    ↓                                       ↓
//!        format (three parameter views)        callback::bind_argument()
//!                    │                                       │
//!                    └──────────────┬────────────────────────┘
//!                                   ↓
//!                   bindings::generate_interface() ──► BindingsResult
//! ```
//!
//! The type registry is consulted by the resolver (to merge managed types)
//! and by the generator (to emit conversions). Nothing downstream
//! re-derives a type or overload decision.
//!
//! # Error Handling
//!
//! Errors are per operation. [`generate_interface`] reports a failing
//! operation as a diagnostic and keeps generating its siblings.

pub mod bindings;
pub mod callback;
mod context;
mod error;
mod format;
pub mod naming;
mod operation;
pub mod overload;

pub use bindings::{
    generate_interface, AttributeBinding, BindingsResult, ConstructorBinding, InterfaceBindings,
    OperationBinding,
};
pub use callback::{bind_argument, PrimitiveSignature, TargetModule};
pub use context::{CodegenContext, CodegenOptions, DEFAULT_PACKAGE_ROOT};
pub use error::CodegenError;
pub use format::type_or_nothing;
pub use operation::{OperationInfo, ParamInfo, DYNAMIC_TYPE};
pub use overload::{analyze_constructor, merge_overloads, recognize_callback};
