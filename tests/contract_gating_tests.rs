//! The `contracts` feature decides whether `require!`, `ensure!` and `check!` exist at runtime.
//! `insist!`, `raise!` and the test-body assertions ignore it.
//!
//! Run with `--no-default-features` to exercise the disabled half.

use std::cell::Cell;

use dbc::diagnostics::capture;
use dbc::{CONTRACTS_ENABLED, ContractViolation, check, ensure, insist, raise, require, static_check};

static_check!(dbc::DEFAULT_PREFIX.len() > 1);

fn divide(a: i32, b: i32) -> Result<i32, ContractViolation> {
    require!(b != 0, "cannot divide {} by zero", a);
    let q = a / b.max(1);
    ensure!(q <= a.abs());
    Ok(q)
}

fn observe(hits: &Cell<u32>, outcome: bool) -> Result<(), ContractViolation> {
    require!({
        hits.set(hits.get() + 1);
        outcome
    });
    ensure!({
        hits.set(hits.get() + 1);
        outcome
    });
    check!({
        hits.set(hits.get() + 1);
        outcome
    });
    Ok(())
}

fn labelled(label: String, value: i32) -> Result<i32, ContractViolation> {
    check!(value >= 0, label);
    Ok(value)
}

fn always(ok: bool) -> Result<(), ContractViolation> {
    insist!(ok, "always-on check tripped");
    Ok(())
}

fn bail() -> Result<(), ContractViolation> {
    raise!("gave up after {} tries", 3);
}

#[test]
fn test_switch_reflects_feature() {
    assert_eq!(CONTRACTS_ENABLED, cfg!(feature = "contracts"));
}

#[cfg(feature = "contracts")]
mod enabled {
    use super::*;

    #[test]
    fn test_require_raises_with_verbose_detail() {
        let err = divide(5, 0).unwrap_err();
        let lines: Vec<&str> = err.message().lines().collect();
        assert_eq!(lines[0], "Assertion error");
        assert_eq!(lines[2].trim(), format!("in file: {}", file!()));
        assert_eq!(lines[3].trim(), "message: b != 0, cannot divide 5 by zero");
    }

    #[test]
    fn test_location_fields_follow_layout_order() {
        let err = divide(1, 0).unwrap_err();
        let msg = err.message();
        let line = err.line().unwrap().to_string();
        let at_line = msg.find(&line).unwrap();
        let at_file = msg.find(file!()).unwrap();
        let at_message = msg.find("cannot divide").unwrap();
        assert!(at_line < at_file && at_file < at_message);
    }

    #[test]
    fn test_message_may_be_runtime_string() {
        let err = labelled(format!("reading #{}", 3), -1).unwrap_err();
        assert!(err.message().ends_with("message: value >= 0, reading #3"));
    }

    #[test]
    fn test_first_failing_check_short_circuits() {
        let hits = Cell::new(0);
        assert!(observe(&hits, false).is_err());
        assert_eq!(hits.get(), 1);

        hits.set(0);
        assert!(observe(&hits, true).is_ok());
        assert_eq!(hits.get(), 3);
    }
}

#[cfg(not(feature = "contracts"))]
mod disabled {
    use super::*;

    static_check!(u8::BITS == 0, "compile-time checks are stripped with contracts");

    #[test]
    fn test_gated_checks_do_not_raise() {
        assert_eq!(divide(5, 0).unwrap(), 5);
    }

    #[test]
    fn test_gated_checks_with_runtime_message_do_not_raise() {
        assert_eq!(labelled(String::from("negative"), -1).unwrap(), -1);
    }

    #[test]
    fn test_gated_conditions_are_not_evaluated() {
        let hits = Cell::new(0);
        assert!(observe(&hits, false).is_ok());
        assert_eq!(hits.get(), 0);
    }
}

#[test]
fn test_insist_ignores_switch() {
    let (result, written) = capture(|| always(false));
    let err = result.unwrap_err();
    assert_eq!(written, "always-on check tripped\n");
    assert!(err.message().ends_with("message: ok"));

    let (result, written) = capture(|| always(true));
    assert!(result.is_ok());
    assert!(written.is_empty());
}

#[test]
fn test_raise_ignores_switch() {
    let err = bail().unwrap_err();
    assert!(err.message().starts_with(dbc::DEFAULT_PREFIX));
    assert!(err.message().ends_with("message: gave up after 3 tries"));
}
