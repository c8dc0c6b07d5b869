//! Parallel per-interface generation.

use std::fmt;

use idl_codegen::{generate_interface, BindingsResult, CodegenContext, InterfaceBindings};
use idl_diagnostic::{Diagnostic, DiagnosticQueue, ErrorCode};
use idl_ir::{DeclarationGraph, IdlDatabase, Interface};
use idl_types::build_registry;
use rayon::prelude::*;

use crate::{load_database, DriverError, GeneratorConfig};

/// Counts reported at the end of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Summary {
    /// Interfaces with generated bindings.
    pub interfaces: usize,
    /// Operations generated across those interfaces.
    pub operations: usize,
    /// Operations dropped because of errors.
    pub failed: usize,
    /// Interfaces skipped as a whole.
    pub skipped: usize,
    /// Errors recorded in the diagnostic queue.
    pub errors: usize,
    /// Errors dropped after the error limit was reached.
    pub suppressed: usize,
}

impl Summary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0 || self.suppressed > 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generated {} interfaces, {} operations; {} operations failed",
            self.interfaces, self.operations, self.failed
        )
    }
}

/// Everything a run produced.
#[derive(Clone, Debug, Default)]
pub struct RunOutput {
    /// Generated interfaces, in name order.
    pub bindings: Vec<InterfaceBindings>,
    /// Recorded diagnostics, sorted by location.
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

/// Load the configured input and generate bindings for it.
pub fn run(config: &GeneratorConfig) -> Result<RunOutput, DriverError> {
    let database = load_database(&config.input)?;
    Ok(generate(config, &database))
}

/// Generate bindings for the selected interfaces of `database`.
///
/// Never fails: per-operation and per-interface errors end up in
/// [`RunOutput::diagnostics`].
#[tracing::instrument(level = "debug", skip_all, fields(declared = database.len()))]
pub fn generate(config: &GeneratorConfig, database: &IdlDatabase) -> RunOutput {
    let mut queue = DiagnosticQueue::with_config(config.diagnostic_config());
    let selected = select_interfaces(config, database, &mut queue);

    let registry = build_registry();
    let options = config.codegen_options();
    let cx = CodegenContext::new(&registry, database, &options);
    let results = generate_all(&cx, &selected, config.worker_count());

    let mut summary = Summary::default();
    let mut bindings = Vec::with_capacity(results.len());
    for result in results {
        summary.failed += result.failed;
        queue.extend(result.diagnostics);
        match result.bindings {
            Some(interface) => {
                summary.interfaces += 1;
                summary.operations += interface.operations.len();
                bindings.push(interface);
            }
            None => summary.skipped += 1,
        }
    }
    summary.errors = queue.error_count();
    summary.suppressed = queue.suppressed_count();
    tracing::debug!(
        interfaces = summary.interfaces,
        failed = summary.failed,
        sequences = registry.cached_sequences(),
        "generation finished"
    );

    RunOutput {
        bindings,
        diagnostics: queue.flush(),
        summary,
    }
}

/// Interfaces named by the filter (all when empty), sorted by name.
///
/// Names that are not declared are reported as warnings.
fn select_interfaces<'db>(
    config: &GeneratorConfig,
    database: &'db IdlDatabase,
    queue: &mut DiagnosticQueue,
) -> Vec<&'db Interface> {
    if config.interfaces.is_empty() {
        return database.interfaces().collect();
    }

    let mut selected = Vec::with_capacity(config.interfaces.len());
    for name in &config.interfaces {
        match database.interface(name) {
            Some(interface) => selected.push(interface),
            None => {
                queue.add(
                    Diagnostic::warning(ErrorCode::E2001)
                        .with_message(format!("interface `{name}` is not declared"))
                        .at(name.as_str(), None),
                );
            }
        }
    }
    selected.sort_by(|a, b| a.id.cmp(&b.id));
    selected.dedup_by(|a, b| a.id == b.id);
    selected
}

/// Generate every interface on a pool of `workers` threads.
///
/// Results keep the order of `interfaces`. Falls back to sequential
/// generation when the pool cannot be built.
fn generate_all(
    cx: &CodegenContext<'_, IdlDatabase>,
    interfaces: &[&Interface],
    workers: usize,
) -> Vec<BindingsResult> {
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| {
            interfaces
                .par_iter()
                .map(|interface| generate_interface(cx, *interface))
                .collect()
        }),
        Err(error) => {
            tracing::warn!("failed to create thread pool ({error}), generating sequentially");
            interfaces
                .iter()
                .map(|interface| generate_interface(cx, *interface))
                .collect()
        }
    }
}
