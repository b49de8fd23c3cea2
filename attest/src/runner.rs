//! Sequential test execution.

use crate::error::Error;
use crate::harness::Harness;
use crate::reporting::{self, RunResults, SuiteResults, TestCaseResult, TestOutcome};
use crate::testcase::TestAction;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;

impl Harness {
    /// Runs every registered suite and test against standard output.
    ///
    /// See [`run_with_writer`](Self::run_with_writer) for the execution and
    /// reporting contract. Callers signal the aggregate outcome to the host
    /// process via [`RunResults::exit_code`].
    pub async fn run(&self) -> Result<RunResults, Error> {
        let mut stdout = std::io::stdout();
        self.run_with_writer(&mut stdout).await
    }

    /// Runs every registered suite and test, writing the transcript to the
    /// given writer.
    ///
    /// Suites run in declaration order, tests within a suite in declaration
    /// order, strictly sequentially: an asynchronous action is awaited to
    /// completion before the next test starts. Output is interleaved
    /// exactly with execution. A failing test never aborts the run; its
    /// message is reported and execution continues.
    ///
    /// Running again re-executes every registered test.
    pub async fn run_with_writer<W: std::io::Write>(
        &self,
        writer: &mut W,
    ) -> Result<RunResults, Error> {
        let mut passed = 0u32;
        let mut total = 0u32;
        let mut suite_results = Vec::with_capacity(self.suites().len());

        for suite in self.suites() {
            tracing::debug!(suite = %suite.name, tests = suite.tests().len(), "running suite");
            reporting::write_suite_header(writer, &suite.name)?;

            let mut test_results = Vec::with_capacity(suite.tests().len());
            for test in suite.tests() {
                total += 1;

                let outcome = execute_action(&test.action).await;
                if outcome.is_passed() {
                    passed += 1;
                }

                let result = TestCaseResult {
                    name: test.name.clone(),
                    outcome,
                };
                reporting::write_test_result(writer, &result)?;
                test_results.push(result);
            }

            suite_results.push(SuiteResults {
                name: suite.name.clone(),
                test_results,
            });
        }

        reporting::write_summary(writer, passed, total)?;
        tracing::debug!(passed, total, "run complete");

        Ok(RunResults {
            suites: suite_results,
            passed,
            total,
        })
    }
}

/// Invokes a test action, converting panics into failures so that a raised
/// panic and a returned failure report identically.
async fn execute_action(action: &TestAction) -> TestOutcome {
    let settled = match action {
        TestAction::Sync(action) => std::panic::catch_unwind(AssertUnwindSafe(|| action())),
        TestAction::Async(action) => AssertUnwindSafe(action()).catch_unwind().await,
    };

    match settled {
        Ok(Ok(())) => TestOutcome::Passed,
        Ok(Err(failure)) => TestOutcome::Failed {
            message: failure.message().to_owned(),
        },
        Err(payload) => TestOutcome::Failed {
            message: panic_message(payload.as_ref()),
        },
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_owned()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("test panicked")
    }
}
