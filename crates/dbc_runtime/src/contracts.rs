//! Precondition, postcondition and assertion checks.
//!
//! `require!`, `ensure!` and `check!` share one mechanism; the name only documents who broke the
//! contract. All three, plus `static_check!`, are controlled by the `contracts` cargo feature:
//!
//! - **enabled** (default): a false condition returns a [`ContractViolation`] from the enclosing
//!   function.
//! - **disabled**: the condition is never evaluated and nothing is returned. The condition is
//!   still type-checked.
//!
//! `insist!` is the exception: it always evaluates its condition, writes its message to the
//! diagnostic stream (see [`crate::diagnostics`]) and then returns the violation.
//!
//! ## Examples
//!
//! ```rust
//! use dbc_runtime::{ContractViolation, ensure, require};
//!
//! fn halve(n: u32) -> Result<u32, ContractViolation> {
//!     require!(n % 2 == 0, "{n} is odd");
//!     let half = n / 2;
//!     ensure!(half * 2 == n);
//!     Ok(half)
//! }
//!
//! assert_eq!(halve(8).ok(), Some(4));
//! ```
//!
//! [`ContractViolation`]: dbc_core::ContractViolation

/// Whether `require!`, `ensure!`, `check!` and `static_check!` are compiled in.
pub const CONTRACTS_ENABLED: bool = cfg!(feature = "contracts");

#[doc(hidden)]
#[macro_export]
macro_rules! __gated_check {
    (@detail $cond:expr, $msg:expr) => {
        if $crate::CONTRACTS_ENABLED && !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::assertion(
                    ::core::line!(),
                    ::core::file!(),
                    ::std::format!("{}, {}", ::core::stringify!($cond), $msg),
                ),
            ));
        }
    };
    ($cond:expr $(,)?) => {
        if $crate::CONTRACTS_ENABLED && !($cond) {
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::assertion(::core::line!(), ::core::file!(), ::core::stringify!($cond)),
            ));
        }
    };
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__gated_check!(@detail $cond, ::std::format_args!($fmt $(, $arg)*))
    };
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::__gated_check!(@detail $cond, $msg)
    };
}

/// Check a precondition. The caller is at fault if it fails.
///
/// `require!(cond)`, `require!(cond, "format {}", args)` or `require!(cond, message)` where
/// `message` is any `Display` value such as a `String`.
#[macro_export]
macro_rules! require {
    ($($tt:tt)+) => {
        $crate::__gated_check!($($tt)+)
    };
}

/// Check a postcondition. The function itself is at fault if it fails.
#[macro_export]
macro_rules! ensure {
    ($($tt:tt)+) => {
        $crate::__gated_check!($($tt)+)
    };
}

/// General assertion.
#[macro_export]
macro_rules! check {
    ($($tt:tt)+) => {
        $crate::__gated_check!($($tt)+)
    };
}

/// Check a condition that must hold even when contracts are compiled out.
///
/// On failure the formatted message goes to the diagnostic stream first, then the violation
/// (carrying the stringified condition) is returned.
#[macro_export]
macro_rules! insist {
    (@emit $cond:expr, $msg:expr) => {
        if !($cond) {
            $crate::diagnostics::emit(::std::format_args!("{}", $msg));
            return ::core::result::Result::Err(::core::convert::From::from(
                $crate::ContractViolation::assertion(::core::line!(), ::core::file!(), ::core::stringify!($cond)),
            ));
        }
    };
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::insist!(@emit $cond, ::std::format_args!($fmt $(, $arg)*))
    };
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::insist!(@emit $cond, $msg)
    };
}

/// Compile-time assertion over a constant expression.
///
/// Expands to a `const` item, so a false condition fails the build and nothing runs at runtime.
#[macro_export]
macro_rules! static_check {
    ($cond:expr $(,)?) => {
        const _: () = ::core::assert!(!$crate::CONTRACTS_ENABLED || $cond);
    };
    ($cond:expr, $msg:literal $(,)?) => {
        const _: () = ::core::assert!(!$crate::CONTRACTS_ENABLED || $cond, $msg);
    };
}

/// Return a located violation unconditionally.
#[macro_export]
macro_rules! raise {
    ($($arg:tt)+) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::ContractViolation::at(
            ::core::line!(),
            ::core::file!(),
            ::std::format!($($arg)+),
        )))
    };
}
