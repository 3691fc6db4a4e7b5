//! `dbc-demo`: one passing and one failing test.
//!
//! Shows what a failing run looks like: the `FAILED` block on stdout, the `insist!` message on
//! stderr, and a non-zero exit status.

use dbc::{TestStatus, insist};

fn pass(_args: &[String]) -> TestStatus {
    Ok(0)
}

fn fail(_args: &[String]) -> TestStatus {
    insist!(1 == 0, "one is not zero");
    Ok(0)
}

dbc::test_main!(pass, fail);
