//! Value-to-text conversion that reports failure as a contract violation.

use std::any::type_name;
use std::fmt::{self, Write as _};

use dbc_core::ContractViolation;

/// Render `value` with its `Display` implementation.
///
/// ## Returns
/// - (`Result<String, ContractViolation>`): the text, or a violation located at the caller when the
///   `Display` implementation reports an error.
#[track_caller]
pub fn as_string<T: fmt::Display + ?Sized>(value: &T) -> Result<String, ContractViolation> {
    let mut out = String::new();
    if write!(out, "{value}").is_err() {
        return Err(ContractViolation::here(format!(
            "Error converting to string from {}",
            type_name::<T>()
        )));
    }
    Ok(out)
}

/// Macro form of [`as_string`]: `as_string!(value)?`.
#[macro_export]
macro_rules! as_string {
    ($value:expr $(,)?) => {
        $crate::strings::as_string(&$value)
    };
}
