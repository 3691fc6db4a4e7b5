//! Design-by-contract checks and a small test harness.
//!
//! `dbc` re-exports the contract macros from `dbc_runtime` (which in turn carries the
//! [`ContractViolation`] type and [`soft_equiv`] from `dbc_core`) and adds the harness that runs an
//! ordered list of test functions and reports on them.
//!
//! ## Writing a test program
//!
//! ```rust,no_run
//! use dbc::{TestStatus, require, soft_equiv, test_assert};
//!
//! fn test_addition(_args: &[String]) -> TestStatus {
//!     test_assert!(1 + 1 == 2);
//!     Ok(0)
//! }
//!
//! fn test_tolerance(_args: &[String]) -> TestStatus {
//!     require!(soft_equiv(1.0_f64, 1.0 + 1e-10), "tolerance too tight");
//!     Ok(0)
//! }
//!
//! dbc::test_main!(test_addition, test_tolerance);
//! ```
//!
//! Each test runs inside its own failure boundary: a returned violation (or a panic) marks that
//! test failed and the run moves on. The summary goes to stdout and the process exits non-zero if
//! anything failed.

#![forbid(unsafe_code)]

pub mod cli;
pub mod registry;

pub use dbc_runtime::{
    ASSERTION_PREFIX, CONTRACTS_ENABLED, ContractViolation, DEFAULT_PREFIX, SoftFloat, SourceLocation,
    TEST_ASSERTION_PREFIX, as_string, diagnostics, soft_equiv, soft_equiv_with,
};
pub use dbc_runtime::{check, ensure, insist, raise, require, static_check, test_assert, test_assert_false};

pub use cli::test_interfaces::{InProcessExecutor, TestExecutor};
pub use cli::test_runner::{ConsoleReporter, TestOutcome, TestRecord, TestReporter, TestRunResult, run_tests};
pub use registry::{RegistryError, TestCase, TestFn, TestRegistry, TestStatus};
