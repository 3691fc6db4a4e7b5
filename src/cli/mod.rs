//! Command-line entry point of a `dbc` test program.
//!
//! A test program hands its registration list to [`run`] (or lets [`test_main!`] generate
//! `main` for it). The process arguments are parsed for harness options and, independently,
//! forwarded verbatim to every test body.
//!
//! ## Options
//!
//! - `-v`, `--verbose` - announce each test and print its duration
//! - `-k <EXPR>` - run only tests whose name contains `EXPR`
//! - `--list` - print the registered test names and exit
//! - anything else, `-h` and `-V` included, is left for the test bodies
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//!
//! [`test_main!`]: crate::test_main

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod test_interfaces;
pub mod test_runner;

use std::env;
use std::fmt;
use std::io::{self, Write};
use std::process;

use clap::Parser;

use crate::{TestCase, TestRegistry};
use test_interfaces::InProcessExecutor;
use test_runner::{ConsoleReporter, run_tests};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Run the registered contract-checked tests
///
/// clap's `--help` and `--version` are turned off: the argument vector belongs to the test bodies,
/// and a flag meant for them must never end the run before any test executes.
#[derive(Parser, Debug)]
#[command(version = VERSION, disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Run the registered contract-checked tests", long_about = None)]
pub struct Cli {
    /// Announce each test as it starts and print its duration
    #[arg(short, long)]
    pub verbose: bool,

    /// Run only tests whose name contains EXPR
    #[arg(short = 'k', value_name = "EXPR")]
    pub filter: Option<String>,

    /// Print the registered test names and exit
    #[arg(long)]
    pub list: bool,

    /// Arguments meant for the test bodies (every argument is forwarded, not only these)
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub passthrough: Vec<String>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Install the `tracing` subscriber used by test programs.
///
/// Logs go to stderr so they never interleave with the summary on stdout. The filter comes from
/// `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();
}

/// Main harness entry point.
///
/// This is the only place where `process::exit` is called. Exits with status 0 when every
/// selected test passed and 1 otherwise.
pub fn run(cases: &[TestCase]) {
    let args: Vec<String> = env::args().collect();
    let cli = Cli::parse_from(&args);

    let result = TestRegistry::new(cases)
        .map_err(|e| CliError::failure(format!("invalid test list: {e}")))
        .and_then(|registry| execute(&cli, &registry, &args, io::stdout().lock()));

    match result {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute a parsed command line against `registry`, writing the report to `out`.
///
/// `args` is the complete argument vector (program name first); it reaches the test bodies
/// unchanged.
pub fn execute<W: Write>(cli: &Cli, registry: &TestRegistry, args: &[String], mut out: W) -> CliResult<ExitCode> {
    if cli.list {
        for name in registry.names() {
            writeln!(out, "{name}").map_err(report_error)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let selected = registry.select(cli.filter.as_deref());
    if selected.is_empty() && !registry.is_empty() {
        tracing::warn!(filter = cli.filter.as_deref(), "no registered test matches the filter");
    }

    let mut reporter = ConsoleReporter::new(out, cli.verbose);
    let result = run_tests(&selected, args, &InProcessExecutor, &mut reporter).map_err(report_error)?;
    Ok(result.exit_code())
}

fn report_error(e: io::Error) -> CliError {
    CliError::failure(format!("failed to write test report: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
