//! End-to-end tests driving the demo binary and checking transcripts and
//! process exit codes.

#![allow(clippy::panic_in_result_fn)]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn demo() -> Result<Command> {
    Ok(Command::cargo_bin("attest-demo")?)
}

#[test]
fn passing_scenario_exits_zero() -> Result<()> {
    demo()?
        .arg("pass")
        .assert()
        .success()
        .stdout(predicate::str::contains("=> Math"))
        .stdout(predicate::str::contains("add passed"))
        .stdout(predicate::str::contains("Result: 1/1 tests passed"));

    Ok(())
}

#[test]
fn failing_scenario_reports_message_and_exits_nonzero() -> Result<()> {
    demo()?
        .arg("fail")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("bad failed"))
        .stdout(predicate::str::contains(" Expected 4 to be 5"))
        .stdout(predicate::str::contains("Result: 0/1 tests passed"));

    Ok(())
}

#[test]
fn mixed_scenario_orders_suites_and_tallies() -> Result<()> {
    let output = demo()?.arg("mixed").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(!output.status.success());

    // Suites and tests appear in declaration order, summary last.
    let math_at = stdout.find("=> Math").unwrap();
    let add_at = stdout.find("add passed").unwrap();
    let strings_at = stdout.find("=> Strings").unwrap();
    let concat_at = stdout.find("concat passed").unwrap();
    let mismatch_at = stdout.find("mismatch failed").unwrap();
    let summary_at = stdout.find("Result: 2/3 tests passed").unwrap();

    assert!(math_at < add_at);
    assert!(add_at < strings_at);
    assert!(strings_at < concat_at);
    assert!(concat_at < mismatch_at);
    assert!(mismatch_at < summary_at);

    Ok(())
}

#[test]
fn delayed_scenario_waits_for_async_tests() -> Result<()> {
    let output = demo()?.arg("delayed").output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(output.status.success());

    let test_at = stdout.find("add, eventually passed").unwrap();
    let summary_at = stdout.find("Result: 1/1 tests passed").unwrap();
    assert!(test_at < summary_at);

    Ok(())
}

#[test]
fn default_scenario_is_pass() -> Result<()> {
    demo()?
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 1/1 tests passed"));

    Ok(())
}
