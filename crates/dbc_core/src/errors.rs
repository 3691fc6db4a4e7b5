//! The single failure kind raised by every contract check.
//!
//! A [`ContractViolation`] carries one fully composed, human-readable message and, when it was
//! raised from a check site, the line and file of that site. Precondition, postcondition,
//! assertion and always-on failures all produce this same type: the macro that raised it says who
//! is at fault, the value does not.
//!
//! ## Message layout
//!
//! ```text
//! <prefix>
//!            on line: <line>
//!            in file: <file>
//!            message: <message>
//! ```

use std::fmt;

use thiserror::Error;

/// Prefix of a violation built without a more specific prefix.
pub const DEFAULT_PREFIX: &str = "dbc exception: ";

/// Prefix used by `require!`, `ensure!`, `check!` and `insist!`.
pub const ASSERTION_PREFIX: &str = "Assertion error";

/// Prefix used by the test-body assertions (`test_assert!`, `test_assert_false!`).
pub const TEST_ASSERTION_PREFIX: &str = "Test assertion failed";

/// Indentation of the detail lines under the prefix.
const DETAIL_INDENT: &str = "           ";

/// Source position of the check that raised a violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line of the check.
    pub line: u32,
    /// Path of the file as `file!()` reports it.
    pub file: String,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A failed contract check.
///
/// Immutable once built; the composed message is never empty. The value is moved from the
/// raising site to whichever boundary handles it (normally the harness's per-test wrapper).
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ContractViolation {
    message: String,
    location: Option<SourceLocation>,
}

impl Default for ContractViolation {
    fn default() -> Self {
        Self {
            message: DEFAULT_PREFIX.to_string(),
            location: None,
        }
    }
}

impl ContractViolation {
    /// Create a violation carrying only the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a violation raised at `line` of `file` with the default prefix.
    ///
    /// ## Parameters
    /// - `line`: line of the failing check.
    /// - `file`: file containing the failing check.
    /// - `message`: caller-supplied detail, placed on the `message:` line.
    pub fn at(line: u32, file: impl Into<String>, message: impl AsRef<str>) -> Self {
        Self::with_prefix(DEFAULT_PREFIX, line, file, message)
    }

    /// Create a violation with an explicit first line.
    ///
    /// ## Returns
    /// - (`ContractViolation`): a located violation whose message follows the layout in the module
    ///   docs.
    pub fn with_prefix(prefix: &str, line: u32, file: impl Into<String>, message: impl AsRef<str>) -> Self {
        let file = file.into();
        let message = format!(
            "{prefix}\n{DETAIL_INDENT}on line: {line}\n{DETAIL_INDENT}in file: {file}\n{DETAIL_INDENT}message: {}",
            message.as_ref()
        );
        Self {
            message,
            location: Some(SourceLocation { line, file }),
        }
    }

    /// Create the violation produced by a failed `require!`/`ensure!`/`check!`/`insist!`.
    ///
    /// `detail` is the stringified condition, optionally followed by `", "` and the caller's message.
    pub fn assertion(line: u32, file: impl Into<String>, detail: impl AsRef<str>) -> Self {
        Self::with_prefix(ASSERTION_PREFIX, line, file, detail)
    }

    /// Create a violation located at the caller of the current function.
    #[track_caller]
    pub fn here(message: impl AsRef<str>) -> Self {
        let caller = std::panic::Location::caller();
        Self::at(caller.line(), caller.file(), message)
    }

    /// Return the composed message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Return the line of the raising check, if the violation is located.
    pub fn line(&self) -> Option<u32> {
        self.location.as_ref().map(|loc| loc.line)
    }

    /// Return the file of the raising check, if the violation is located.
    pub fn file(&self) -> Option<&str> {
        self.location.as_ref().map(|loc| loc.file.as_str())
    }

    /// Return the full location of the raising check, if the violation is located.
    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    /// Consume the violation and return its message.
    pub fn into_message(self) -> String {
        self.message
    }
}
