//! Run configuration.

use std::path::PathBuf;

use idl_codegen::{CodegenOptions, DEFAULT_PACKAGE_ROOT};
use idl_diagnostic::DiagnosticConfig;

/// Everything one generator run is configured with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// JSON declaration graph to load.
    pub input: PathBuf,
    /// Interfaces to generate; empty means all of them.
    pub interfaces: Vec<String>,
    /// Dotted root package of the managed bindings.
    pub package_root: String,
    /// Maximum number of errors recorded (0 = unlimited).
    pub error_limit: usize,
    /// Worker threads (0 = one per core).
    pub jobs: usize,
}

impl GeneratorConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            input: input.into(),
            interfaces: Vec::new(),
            package_root: DEFAULT_PACKAGE_ROOT.to_owned(),
            error_limit: 0,
            jobs: 0,
        }
    }

    #[must_use]
    pub fn with_interfaces(mut self, interfaces: Vec<String>) -> Self {
        self.interfaces = interfaces;
        self
    }

    #[must_use]
    pub fn with_package_root(mut self, package_root: impl Into<String>) -> Self {
        self.package_root = package_root.into();
        self
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }

    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// The subset of the configuration that changes generated text.
    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions::default().with_package_root(self.package_root.clone())
    }

    pub fn diagnostic_config(&self) -> DiagnosticConfig {
        DiagnosticConfig::with_limit(self.error_limit)
    }

    /// Worker thread count, resolving 0 to the available parallelism.
    pub fn worker_count(&self) -> usize {
        if self.jobs == 0 {
            rayon::current_num_threads()
        } else {
            self.jobs
        }
    }
}
