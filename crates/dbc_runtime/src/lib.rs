//! Contract checks for code linked against `dbc`.
//!
//! This crate provides the check macros, the switch that compiles them in or out, and the side
//! channel `insist!` writes to. The failure value itself lives in `dbc_core`.
//!
//! | Macro               | Intent                             | Gated by `contracts` |
//! |---------------------|------------------------------------|----------------------|
//! | `require!`          | precondition, caller at fault      | yes                  |
//! | `ensure!`           | postcondition, callee at fault     | yes                  |
//! | `check!`            | general assertion                  | yes                  |
//! | `static_check!`     | compile-time assertion             | yes                  |
//! | `insist!`           | invariant that must always hold    | no                   |
//! | `raise!`            | unconditional failure              | no                   |
//! | `test_assert!`      | test-body assertion                | no                   |
//! | `test_assert_false!`| test-body negative assertion       | no                   |
//!
//! Every runtime check expands to an early `return Err(From::from(violation))`, so the enclosing
//! function must return `Result<_, E>` where `E: From<ContractViolation>`.

#![deny(clippy::unwrap_used)]

pub mod contracts;
pub mod diagnostics;
pub mod strings;
pub mod testing;

pub use contracts::CONTRACTS_ENABLED;
pub use dbc_core::{
    ASSERTION_PREFIX, ContractViolation, DEFAULT_PREFIX, SoftFloat, SourceLocation, TEST_ASSERTION_PREFIX, soft_equiv,
    soft_equiv_with,
};
pub use strings::as_string;
