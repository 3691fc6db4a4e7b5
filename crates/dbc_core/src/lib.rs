//! Provide the pure building blocks shared by the contract runtime and the test harness.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - [`ContractViolation`], the one failure kind every contract check produces, and
//! - [`soft_equiv`] / [`soft_equiv_with`], tolerance-based floating-point comparison for test bodies.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state. Writing diagnostics and deciding
//!   whether contracts are compiled in belong to `dbc_runtime`.

pub mod errors;
pub mod soft_equiv;

pub use errors::{ASSERTION_PREFIX, ContractViolation, DEFAULT_PREFIX, SourceLocation, TEST_ASSERTION_PREFIX};
pub use soft_equiv::{SoftFloat, soft_equiv, soft_equiv_with};
