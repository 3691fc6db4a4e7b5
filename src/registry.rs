//! The ordered list of named tests a harness run executes.
//!
//! Registration is explicit: a program builds a `&[TestCase]` (usually with [`test_list!`]) before
//! the entry point runs, and the harness executes it in exactly that order. Names must be
//! unique and non-empty; [`TestRegistry::new`] enforces this.
//!
//! [`test_list!`]: crate::test_list

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::ContractViolation;

/// What a test body returns.
///
/// `Ok(status)` means the body ran to completion; the status is informational only and does not
/// decide pass/fail. `Err(violation)` means a contract check failed inside the body.
pub type TestStatus = Result<i32, ContractViolation>;

/// A test body. It receives the process arguments verbatim.
pub type TestFn = fn(&[String]) -> TestStatus;

/// Errors building a [`TestRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate test name '{0}'")]
    DuplicateName(String),

    #[error("test at position {index} has an empty name")]
    EmptyName { index: usize },
}

/// One registered test.
#[derive(Clone, Copy)]
pub struct TestCase {
    name: &'static str,
    body: TestFn,
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish_non_exhaustive()
    }
}

impl TestCase {
    pub const fn new(name: &'static str, body: TestFn) -> Self {
        Self { name, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn body(&self) -> TestFn {
        self.body
    }
}

/// A validated, ordered list of tests.
#[derive(Debug, Clone)]
pub struct TestRegistry {
    cases: Vec<TestCase>,
}

impl TestRegistry {
    /// Validate `cases` and keep them in the given order.
    ///
    /// ## Errors
    /// - [`RegistryError::EmptyName`] if a name is empty.
    /// - [`RegistryError::DuplicateName`] for the first name seen twice.
    pub fn new(cases: &[TestCase]) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(cases.len());
        for (index, case) in cases.iter().enumerate() {
            if case.name.is_empty() {
                return Err(RegistryError::EmptyName { index });
            }
            if !seen.insert(case.name) {
                return Err(RegistryError::DuplicateName(case.name.to_string()));
            }
        }
        Ok(Self { cases: cases.to_vec() })
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cases.iter().map(|case| case.name)
    }

    /// Tests whose name contains `keyword` (all tests when `None`), in registration order.
    pub fn select(&self, keyword: Option<&str>) -> Vec<TestCase> {
        self.cases
            .iter()
            .filter(|case| keyword.is_none_or(|k| case.name.contains(k)))
            .copied()
            .collect()
    }
}

/// Build a `&[TestCase]` from test function names; each test is named after its function.
///
/// ```rust
/// use dbc::{TestCase, TestStatus, test_list};
///
/// fn test_one(_args: &[String]) -> TestStatus {
///     Ok(0)
/// }
///
/// static TESTS: &[TestCase] = test_list![test_one];
/// assert_eq!(TESTS[0].name(), "test_one");
/// ```
#[macro_export]
macro_rules! test_list {
    ($($test:ident),* $(,)?) => {
        &[$($crate::TestCase::new(::core::stringify!($test), $test)),*]
    };
}

/// Generate `fn main` for a test program: install logging, then run the listed tests through the
/// harness CLI and exit with its status.
#[macro_export]
macro_rules! test_main {
    ($($test:ident),* $(,)?) => {
        fn main() {
            $crate::cli::init_tracing();
            $crate::cli::run($crate::test_list![$($test),*]);
        }
    };
}
