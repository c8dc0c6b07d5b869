//! Driver for the managed binding generator.
//!
//! Loads a declaration graph from JSON, generates bindings for every selected
//! interface in parallel, and collects the per-operation diagnostics into one
//! end-of-run summary.
//!
//! # Architecture
//!
//! ```text
//! INPUT.json ──► load::load_database() ──► IdlDatabase
//!                                             │
//!                       select interfaces (--interface filter)
//!                                             │
//!                  rayon pool (--jobs) ──► generate_interface() per interface
//!                                             │
//!                    DiagnosticQueue (--error-limit) + Summary
//!                                             ↓
//!                   report::render_report() on stdout, diagnostics on stderr
//! ```
//!
//! One process-wide [`TypeRegistry`](idl_types::TypeRegistry) is shared by
//! every worker; only its sequence cache is written during a run.

mod config;
mod error;
mod generate;
mod load;
mod report;

pub use config::GeneratorConfig;
pub use error::DriverError;
pub use generate::{generate, run, RunOutput, Summary};
pub use load::{load_database, parse_database};
pub use report::render_report;
