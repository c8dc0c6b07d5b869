//! IDL binding generator CLI.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

use clap::Parser;
use idlc::{render_report, run, GeneratorConfig};

static TRACING_INIT: Once = Once::new();

/// Generate managed bindings from an IDL declaration graph.
#[derive(Parser, Debug, Clone)]
#[command(name = "idlc")]
#[command(about, long_about = None)]
struct Cli {
    /// JSON declaration graph (`{ "interfaces": [...] }`)
    input: PathBuf,

    /// Generate only this interface (repeatable)
    #[arg(short = 'i', long = "interface", value_name = "NAME")]
    interfaces: Vec<String>,

    /// Root package of the generated managed types
    #[arg(long, default_value = idl_codegen::DEFAULT_PACKAGE_ROOT)]
    package_root: String,

    /// Stop recording errors after this many (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    error_limit: usize,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    jobs: usize,
}

impl From<Cli> for GeneratorConfig {
    fn from(cli: Cli) -> Self {
        GeneratorConfig::new(cli.input)
            .with_interfaces(cli.interfaces)
            .with_package_root(cli.package_root)
            .with_error_limit(cli.error_limit)
            .with_jobs(cli.jobs)
    }
}

/// Install the tracing subscriber. Safe to call more than once.
///
/// Filter comes from `RUST_LOG` and defaults to `warn`. The tree layer writes
/// to stderr, so stdout carries only the report.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::default()
                    .with_indent_amount(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .init();
    });
}

fn main() -> ExitCode {
    init_tracing();
    let config = GeneratorConfig::from(Cli::parse());

    let output = match run(&config) {
        Ok(output) => output,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", render_report(&output.bindings));
    for diagnostic in &output.diagnostics {
        eprintln!("{diagnostic}");
    }
    if output.summary.suppressed > 0 {
        eprintln!(
            "{} more errors suppressed (--error-limit {})",
            output.summary.suppressed, config.error_limit
        );
    }
    if output.summary.skipped > 0 {
        eprintln!("{} interfaces skipped", output.summary.skipped);
    }
    eprintln!("{}", output.summary);

    if output.summary.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
