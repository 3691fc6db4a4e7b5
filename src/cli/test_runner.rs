//! Test run orchestration.
//!
//! ## Flow
//!
//! Tests run one at a time, in registration order, on the calling thread. Each body goes through
//! a [`TestExecutor`] (the failure boundary); the outcome is appended to a [`TestRunResult`] and
//! the run moves on, so one failing test never stops the others. When the last test finishes the
//! reporter prints the summary and the result yields the exit code.
//!
//! ## TestReporter Trait
//!
//! Reporting is separated from execution. [`ConsoleReporter`] prints the plain summary to any
//! `io::Write`:
//!
//! ```text
//! PASS pass
//! FAILED fail: Assertion error
//!            on line: 12
//!            in file: tests/suite.rs
//!            message: 1 == 0
//! 1/2 passed
//! ```

use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::ExitCode;
use super::test_interfaces::TestExecutor;
use crate::TestCase;

// ============================================================================
// Test Reporter Trait
// ============================================================================

/// Trait for reporting test execution results.
pub trait TestReporter {
    /// Called once before the first test
    fn on_run_start(&mut self, _test_count: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called before each test body runs
    fn on_test_start(&mut self, _name: &str) -> io::Result<()> {
        Ok(())
    }

    /// Called after each test body returns
    fn on_test_complete(&mut self, _record: &TestRecord) -> io::Result<()> {
        Ok(())
    }

    /// Called once after the last test
    fn on_run_complete(&mut self, result: &TestRunResult) -> io::Result<()>;
}

/// Plain-text reporter.
///
/// The summary (one line per test, then `<passed>/<total> passed`) is always written at the end.
/// In verbose mode each test is also announced as it starts and timed when it finishes.
pub struct ConsoleReporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TestReporter for ConsoleReporter<W> {
    fn on_test_start(&mut self, name: &str) -> io::Result<()> {
        if self.verbose {
            writeln!(self.out, "RUN {name}")?;
        }
        Ok(())
    }

    fn on_test_complete(&mut self, record: &TestRecord) -> io::Result<()> {
        if self.verbose {
            let verdict = if record.outcome.is_passed() { "ok" } else { "failed" };
            writeln!(self.out, "    {} ({}ms)", verdict, record.duration.as_millis())?;
        }
        Ok(())
    }

    fn on_run_complete(&mut self, result: &TestRunResult) -> io::Result<()> {
        for record in result.records() {
            match &record.outcome {
                TestOutcome::Passed { .. } => writeln!(self.out, "PASS {}", record.name)?,
                TestOutcome::Failed { message } => writeln!(self.out, "FAILED {}: {}", record.name, message)?,
            }
        }
        writeln!(self.out, "{}/{} passed", result.passed(), result.total())?;
        self.out.flush()
    }
}

// ============================================================================
// Results
// ============================================================================

/// How a single test ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// The body returned without a contract violation. `status` is what it returned.
    Passed { status: i32 },
    /// The body raised a contract violation (or panicked).
    Failed { message: String },
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed { .. })
    }
}

/// One executed test.
#[derive(Debug, Clone)]
pub struct TestRecord {
    pub name: String,
    pub outcome: TestOutcome,
    pub duration: Duration,
}

/// Aggregate result of one run, in execution order.
///
/// Counts are derived from the records, so `passed() + failed() == total()` always holds.
#[derive(Debug, Clone, Default)]
pub struct TestRunResult {
    records: Vec<TestRecord>,
}

impl TestRunResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: TestRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn passed(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// `(name, message)` of every failed test, in execution order.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.records.iter().filter_map(|r| match &r.outcome {
            TestOutcome::Failed { message } => Some((r.name.as_str(), message.as_str())),
            TestOutcome::Passed { .. } => None,
        })
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// `SUCCESS` when nothing failed, `FAILURE` otherwise.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Run `cases` in order, forwarding `args` verbatim to every body.
///
/// ## Errors
/// - Only reporter write failures; test failures are part of the returned result.
#[tracing::instrument(skip_all, fields(test_count = cases.len()))]
pub fn run_tests(
    cases: &[TestCase],
    args: &[String],
    executor: &dyn TestExecutor,
    reporter: &mut dyn TestReporter,
) -> io::Result<TestRunResult> {
    let mut result = TestRunResult::new();
    reporter.on_run_start(cases.len())?;

    for case in cases {
        tracing::debug!(test = case.name(), "running test");
        reporter.on_test_start(case.name())?;

        let start = Instant::now();
        let outcome = executor.execute(case, args);
        let duration = start.elapsed();

        match &outcome {
            TestOutcome::Passed { status } if *status != 0 => {
                // Pass/fail follows the violation alone; the status does not turn this into a failure.
                tracing::warn!(
                    test = case.name(),
                    status = *status,
                    "test returned a non-zero status without a contract violation"
                );
            }
            TestOutcome::Failed { .. } => tracing::debug!(test = case.name(), "test failed"),
            TestOutcome::Passed { .. } => {}
        }

        let record = TestRecord {
            name: case.name().to_string(),
            outcome,
            duration,
        };
        reporter.on_test_complete(&record)?;
        result.record(record);
    }

    reporter.on_run_complete(&result)?;
    Ok(result)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::test_interfaces::InProcessExecutor;
    use crate::{ContractViolation, TestStatus};

    fn passes(_args: &[String]) -> TestStatus {
        Ok(0)
    }

    fn fails(_args: &[String]) -> TestStatus {
        Err(ContractViolation::at(5, "suite.rs", "nope"))
    }

    fn nonzero(_args: &[String]) -> TestStatus {
        Ok(7)
    }

    fn run(cases: &[TestCase]) -> (TestRunResult, String) {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);
        let result = run_tests(cases, &[], &InProcessExecutor, &mut reporter).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        (result, text)
    }

    #[test]
    fn test_counts_and_exit_code() {
        let (result, _) = run(&[
            TestCase::new("a", passes),
            TestCase::new("b", fails),
            TestCase::new("c", passes),
        ]);
        assert_eq!(result.total(), 3);
        assert_eq!(result.passed(), 2);
        assert_eq!(result.failed(), 1);
        assert_eq!(result.exit_code(), ExitCode::FAILURE);
        assert_eq!(result.failures().map(|(name, _)| name).collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn test_nonzero_status_still_passes() {
        let (result, text) = run(&[TestCase::new("odd", nonzero)]);
        assert!(result.all_passed());
        assert_eq!(result.exit_code(), ExitCode::SUCCESS);
        assert_eq!(result.records()[0].outcome, TestOutcome::Passed { status: 7 });
        assert_eq!(text, "PASS odd\n1/1 passed\n");
    }

    #[test]
    fn test_empty_run_succeeds() {
        let (result, text) = run(&[]);
        assert_eq!(result.total(), 0);
        assert_eq!(result.exit_code(), ExitCode::SUCCESS);
        assert_eq!(text, "0/0 passed\n");
    }

    #[test]
    fn test_summary_lists_in_registration_order() {
        let (_, text) = run(&[TestCase::new("second", fails), TestCase::new("first", passes)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "FAILED second: dbc exception: ");
        assert_eq!(lines.last().copied(), Some("1/2 passed"));
        assert!(text.find("FAILED second").unwrap() < text.find("PASS first").unwrap());
    }

    #[test]
    fn test_verbose_announces_tests() {
        let mut reporter = ConsoleReporter::new(Vec::new(), true);
        run_tests(&[TestCase::new("a", passes)], &[], &InProcessExecutor, &mut reporter).unwrap();
        let text = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(text.starts_with("RUN a\n    ok ("));
        assert!(text.ends_with("PASS a\n1/1 passed\n"));
    }
}
