//! Result types and console output for test runs.

use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;

/// Outcome of a single executed test case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestOutcome {
    /// The action completed without failure.
    Passed,
    /// The action returned a failure or panicked.
    Failed {
        /// Human-readable description of the failure.
        message: String,
    },
}

impl TestOutcome {
    /// Returns whether this outcome is a pass.
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Result of running a single test case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TestCaseResult {
    /// Name of the test case.
    pub name: String,
    /// The test's outcome.
    pub outcome: TestOutcome,
}

/// Results from running one suite.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuiteResults {
    /// Name of the suite.
    pub name: String,
    /// Per-test results, in execution (= declaration) order.
    pub test_results: Vec<TestCaseResult>,
}

/// Aggregate results from a full run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunResults {
    /// Per-suite results, in execution (= declaration) order.
    pub suites: Vec<SuiteResults>,
    /// Number of tests that passed.
    pub passed: u32,
    /// Number of tests executed. Always at least `passed`.
    pub total: u32,
}

impl RunResults {
    /// Returns whether every executed test passed.
    pub const fn succeeded(&self) -> bool {
        self.passed == self.total
    }

    /// Returns the process exit code for this run: success iff every test
    /// passed.
    pub const fn exit_code(&self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Writes the header line announcing a suite.
pub(crate) fn write_suite_header<W: Write>(writer: &mut W, name: &str) -> std::io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "=> {name}")
}

/// Writes the result line for a test, plus its failure message if any.
pub(crate) fn write_test_result<W: Write>(
    writer: &mut W,
    result: &TestCaseResult,
) -> std::io::Result<()> {
    match &result.outcome {
        TestOutcome::Passed => writeln!(writer, "{} {}", result.name, "passed".green()),
        TestOutcome::Failed { message } => {
            writeln!(writer, "{} {}", result.name, "failed".bright_red())?;
            writeln!(writer, " {message}")
        }
    }
}

/// Writes the final pass/total summary line.
pub(crate) fn write_summary<W: Write>(
    writer: &mut W,
    passed: u32,
    total: u32,
) -> std::io::Result<()> {
    let tally = if passed == total {
        format!("{passed}/{total}").green()
    } else {
        format!("{passed}/{total}").bright_red()
    };

    writeln!(writer)?;
    writeln!(writer, "Result: {tally} tests passed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render<F: Fn(&mut Vec<u8>) -> std::io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn suite_header_format() {
        let rendered = render(|w| write_suite_header(w, "Math"));
        assert_eq!(rendered, "\n=> Math\n");
    }

    #[test]
    fn passing_test_format() {
        let result = TestCaseResult {
            name: String::from("add"),
            outcome: TestOutcome::Passed,
        };
        let rendered = render(|w| write_test_result(w, &result));
        assert_eq!(rendered, "add passed\n");
    }

    #[test]
    fn failing_test_format_includes_message() {
        let result = TestCaseResult {
            name: String::from("bad"),
            outcome: TestOutcome::Failed {
                message: String::from("Expected 4 to be 5"),
            },
        };
        let rendered = render(|w| write_test_result(w, &result));
        assert_eq!(rendered, "bad failed\n Expected 4 to be 5\n");
    }

    #[test]
    fn summary_format() {
        assert_eq!(
            render(|w| write_summary(w, 2, 3)),
            "\nResult: 2/3 tests passed\n"
        );
        assert_eq!(
            render(|w| write_summary(w, 3, 3)),
            "\nResult: 3/3 tests passed\n"
        );
    }

    #[test]
    fn exit_code_tracks_success() {
        let passing = RunResults {
            suites: vec![],
            passed: 1,
            total: 1,
        };
        assert!(passing.succeeded());

        let failing = RunResults {
            suites: vec![],
            passed: 0,
            total: 1,
        };
        assert!(!failing.succeeded());
    }
}
