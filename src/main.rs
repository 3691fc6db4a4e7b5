//! `dbc-selftest`: the harness running its own checks.
//!
//! Every test here is expected to pass; a failure means the contract macros or the harness are
//! broken. Useful as a smoke test of a build with or without the `contracts` feature.

use dbc::diagnostics::capture;
use dbc::{ContractViolation, TestStatus, as_string, insist, require, soft_equiv, test_assert, test_assert_false};

fn test_testing_pass(_args: &[String]) -> TestStatus {
    test_assert!(1 == 1);
    Ok(0)
}

fn test_testing_fail(_args: &[String]) -> TestStatus {
    test_assert_false!(1 == 0);
    Ok(0)
}

fn test_soft_equiv(_args: &[String]) -> TestStatus {
    test_assert!(soft_equiv(1.0_f64, 1.0 + 1e-10));
    test_assert_false!(soft_equiv(1.0_f64, 1.0 + 1e-3));
    test_assert!(soft_equiv(0.0_f64, 0.0));
    test_assert!(soft_equiv(1.0_f32, 1.0 + 1e-5));
    Ok(0)
}

fn guarded_sqrt(x: f64) -> Result<f64, ContractViolation> {
    require!(x >= 0.0, "negative input {x}");
    Ok(x.sqrt())
}

fn test_require_reports_violation(_args: &[String]) -> TestStatus {
    test_assert!(guarded_sqrt(4.0).is_ok());
    let rejected = guarded_sqrt(-1.0);
    if dbc::CONTRACTS_ENABLED {
        test_assert!(rejected.as_ref().is_err_and(|e| e.message().contains("x >= 0.0, negative input -1")));
    } else {
        test_assert!(rejected.is_ok());
    }
    Ok(0)
}

fn checked_index(len: usize, index: usize) -> Result<usize, ContractViolation> {
    insist!(index < len, "index {index} out of range for length {len}");
    Ok(index)
}

fn test_insist_always_on(_args: &[String]) -> TestStatus {
    let (result, written) = capture(|| checked_index(3, 5));
    test_assert!(result.is_err());
    test_assert!(written == "index 5 out of range for length 3\n");
    Ok(0)
}

fn test_as_string(_args: &[String]) -> TestStatus {
    let text = as_string!(42)?;
    test_assert!(text == "42");
    Ok(0)
}

fn test_receives_program_name(args: &[String]) -> TestStatus {
    test_assert!(!args.is_empty());
    Ok(0)
}

dbc::test_main!(
    test_testing_pass,
    test_testing_fail,
    test_soft_equiv,
    test_require_reports_violation,
    test_insist_always_on,
    test_as_string,
    test_receives_program_name,
);
