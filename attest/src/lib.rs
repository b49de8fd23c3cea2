//! Minimal suite-based unit-test harness.
//!
//! Tests are grouped into named suites, declared up front on a [`Harness`],
//! then executed strictly sequentially (awaiting asynchronous tests) with a
//! plain-text pass/fail transcript and an aggregate exit signal.
//!
//! ```
//! use attest::{Harness, expect};
//!
//! # fn main() -> Result<(), attest::Error> {
//! let mut harness = Harness::new();
//!
//! harness.describe("Math", |h| {
//!     h.test("add", || expect(2 + 3).to_be(5))?;
//!     h.async_test("add, eventually", || async { expect(4 * 4).to_be(16) })
//! })?;
//!
//! let results = futures::executor::block_on(harness.run())?;
//! assert!(results.succeeded());
//! // A binary would end with: std::process::exit via results.exit_code()
//! # Ok(())
//! # }
//! ```

mod assert;
mod error;
mod harness;
mod reporting;
mod runner;
mod testcase;

pub use assert::{Expectation, SameValue, TestFailure, TestResult, expect};
pub use error::Error;
pub use harness::Harness;
pub use reporting::{RunResults, SuiteResults, TestCaseResult, TestOutcome};
pub use testcase::{Suite, TestCase};
