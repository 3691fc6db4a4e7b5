//! The per-test failure boundary.
//!
//! Executing a body and turning what happened into a [`TestOutcome`] sits behind the
//! [`TestExecutor`] trait so the runner's bookkeeping does not depend on how a body is invoked.
//! [`InProcessExecutor`] is the boundary every harness run uses today.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use super::test_runner::TestOutcome;
use crate::TestCase;

/// Run one test body in isolation and classify the result.
///
/// Implementations must contain every failure of the body: nothing a body does may escape into
/// the runner and affect another test's accounting.
pub trait TestExecutor {
    fn execute(&self, case: &TestCase, args: &[String]) -> TestOutcome;
}

/// Call the body directly on the current thread.
///
/// - `Ok(status)` → passed, whatever the status.
/// - `Err(violation)` → failed with the violation's message.
/// - a panic → failed with `panicked: <payload>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InProcessExecutor;

impl TestExecutor for InProcessExecutor {
    fn execute(&self, case: &TestCase, args: &[String]) -> TestOutcome {
        let body = case.body();
        match panic::catch_unwind(AssertUnwindSafe(|| body(args))) {
            Ok(Ok(status)) => TestOutcome::Passed { status },
            Ok(Err(violation)) => TestOutcome::Failed {
                message: violation.into_message(),
            },
            Err(payload) => TestOutcome::Failed {
                message: format!("panicked: {}", panic_message(payload.as_ref())),
            },
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<non-string panic payload>"
    }
}
