//! Assertions for test bodies run by the `dbc` harness.
//!
//! Unlike `check!`, these are never compiled out: a test suite built without contracts still has
//! to test something.
//!
//! ## Examples
//!
//! ```rust
//! use dbc_runtime::{ContractViolation, test_assert, test_assert_false};
//!
//! fn test_arithmetic(_args: &[String]) -> Result<i32, ContractViolation> {
//!     test_assert!(1 + 1 == 2);
//!     test_assert_false!(1 == 0);
//!     Ok(0)
//! }
//!
//! assert!(test_arithmetic(&[]).is_ok());
//! ```

/// Fail the current test unless `cond` holds.
#[macro_export]
macro_rules! test_assert {
    ($cond:expr $(,)?) => {
        if !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::with_prefix(
                    $crate::TEST_ASSERTION_PREFIX,
                    ::core::line!(),
                    ::core::file!(),
                    ::core::stringify!($cond),
                ),
            ));
        }
    };
}

/// Fail the current test if `cond` holds.
#[macro_export]
macro_rules! test_assert_false {
    ($cond:expr $(,)?) => {
        if $cond {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::with_prefix(
                    $crate::TEST_ASSERTION_PREFIX,
                    ::core::line!(),
                    ::core::file!(),
                    ::core::concat!("expected false: ", ::core::stringify!($cond)),
                ),
            ));
        }
    };
}
