//! Diagnostic system for the binding generator.
//!
//! Generation errors are per operation, never per run: a failing operation is
//! reported and its siblings continue. Every failure therefore becomes a
//! [`Diagnostic`] naming the offending interface and operation, and the
//! [`DiagnosticQueue`] accumulates them until the driver prints the summary.
//!
//! - Error codes for searchability
//! - Interface/operation location instead of source spans
//! - Notes for context

mod diagnostic;
mod error_code;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
