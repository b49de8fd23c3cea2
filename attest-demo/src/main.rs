//! Demonstration scenarios for the `attest` harness.
//!
//! Each scenario declares a fixed set of suites and runs them; the process
//! exit code reflects the aggregate outcome. The end-to-end tests in
//! `tests/` drive this binary to validate transcripts and exit codes.

use attest::{Harness, expect};
use clap::Parser;
use std::process::ExitCode;

/// Built-in scenarios.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Scenario {
    /// One suite with a single passing test.
    Pass,
    /// One suite with a single failing assertion.
    Fail,
    /// Two suites mixing passing and failing tests.
    Mixed,
    /// One suite whose test settles asynchronously after a delay.
    Delayed,
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[clap(version, about, disable_help_subcommand = true)]
struct CommandLineArgs {
    /// Scenario to declare and run.
    #[arg(value_enum, default_value = "pass")]
    scenario: Scenario,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLineArgs::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args.scenario)) {
        Ok(results) => results.exit_code(),
        Err(e) => {
            tracing::error!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(scenario: Scenario) -> Result<attest::RunResults, attest::Error> {
    let mut harness = Harness::new();
    declare(&mut harness, scenario)?;
    harness.run().await
}

fn declare(harness: &mut Harness, scenario: Scenario) -> Result<(), attest::Error> {
    match scenario {
        Scenario::Pass => harness.describe("Math", |h| {
            h.test("add", || expect(2 + 3).to_be(5))
        }),
        Scenario::Fail => harness.describe("Math", |h| {
            h.test("bad", || expect(2 + 2).to_be(5))
        }),
        Scenario::Mixed => {
            harness.describe("Math", |h| {
                h.test("add", || expect(2 + 3).to_be(5))
            })?;
            harness.describe("Strings", |h| {
                h.test("concat", || {
                    let greeting = ["Hello", "World"].join(" ");
                    expect(greeting.as_str()).to_be("Hello World")
                })?;
                h.test("mismatch", || expect("Hello").to_be("Goodbye"))
            })
        }
        Scenario::Delayed => harness.describe("Async Math", |h| {
            h.async_test("add, eventually", || async {
                tokio::time::sleep(std::time::Duration::from_millis(25)).await;
                expect(2 + 3).to_be(5)
            })
        }),
    }
}
