//! Property-based tests for the harness accounting and soft equivalence.
//!
//! These tests use proptest to verify invariants across many randomly generated inputs.

use dbc::cli::ExitCode;
use dbc::{
    ConsoleReporter, ContractViolation, InProcessExecutor, TestCase, TestFn, TestStatus, run_tests, soft_equiv,
    soft_equiv_with,
};
use proptest::prelude::*;

fn passing(_args: &[String]) -> TestStatus {
    Ok(0)
}

fn failing(_args: &[String]) -> TestStatus {
    Err(ContractViolation::at(1, "generated.rs", "generated failure"))
}

const NAMES: [&str; 12] = [
    "t00", "t01", "t02", "t03", "t04", "t05", "t06", "t07", "t08", "t09", "t10", "t11",
];

// =============================================================================
// Harness Properties
// =============================================================================

#[cfg(test)]
mod harness_tests {
    use super::*;

    proptest! {
        /// Property: N tests with k failures give N - k passed, k failed, and success iff k == 0
        #[test]
        fn counts_match_outcomes(verdicts in prop::collection::vec(any::<bool>(), 0..NAMES.len())) {
            let cases: Vec<TestCase> = verdicts
                .iter()
                .zip(NAMES)
                .map(|(&ok, name)| {
                    let body: TestFn = if ok { passing } else { failing };
                    TestCase::new(name, body)
                })
                .collect();
            let k = verdicts.iter().filter(|ok| !**ok).count();

            let mut reporter = ConsoleReporter::new(Vec::new(), false);
            let result = run_tests(&cases, &[], &InProcessExecutor, &mut reporter).unwrap();
            let out = String::from_utf8(reporter.into_inner()).unwrap();

            prop_assert_eq!(result.total(), verdicts.len());
            prop_assert_eq!(result.failed(), k);
            prop_assert_eq!(result.passed(), verdicts.len() - k);
            prop_assert_eq!(result.exit_code() == ExitCode::SUCCESS, k == 0);
            let summary = format!("{}/{} passed", verdicts.len() - k, verdicts.len());
            prop_assert_eq!(out.lines().last(), Some(summary.as_str()));
        }

        /// Property: records come back in registration order
        #[test]
        fn records_keep_registration_order(len in 0..NAMES.len()) {
            let cases: Vec<TestCase> = NAMES[..len].iter().map(|&name| TestCase::new(name, passing)).collect();
            let mut reporter = ConsoleReporter::new(std::io::sink(), false);
            let result = run_tests(&cases, &[], &InProcessExecutor, &mut reporter).unwrap();
            let names: Vec<&str> = result.records().iter().map(|r| r.name.as_str()).collect();
            prop_assert_eq!(names, NAMES[..len].to_vec());
        }
    }
}

// =============================================================================
// Soft Equivalence Properties
// =============================================================================

#[cfg(test)]
mod soft_equiv_tests {
    use super::*;

    proptest! {
        /// Property: every finite value is softly equivalent to itself
        #[test]
        fn reflexive(x in -1.0e300_f64..1.0e300, p in 1.0e-12_f64..1.0) {
            prop_assert!(soft_equiv_with(x, x, p));
        }

        /// Property: a perturbation well inside sqrt(eps) is accepted (reference away from zero)
        #[test]
        fn tiny_relative_perturbation_accepted(y in 1.0e-6_f64..1.0e100) {
            prop_assert!(soft_equiv(y * (1.0 + 1.0e-12), y));
        }

        /// Property: a perturbation well outside sqrt(eps) is rejected
        #[test]
        fn large_relative_perturbation_rejected(y in 1.0e-6_f64..1.0e100) {
            prop_assert!(!soft_equiv(y * (1.0 + 1.0e-3), y));
        }
    }
}
