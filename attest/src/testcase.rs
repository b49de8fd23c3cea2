//! Test case and suite definitions.

use crate::assert::TestResult;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;

/// The action behind a test case.
///
/// Actions are `Fn` rather than `FnOnce`: re-running a harness re-executes
/// every registered action.
pub(crate) enum TestAction {
    /// A synchronous action.
    Sync(Box<dyn Fn() -> TestResult + Send + Sync>),
    /// An asynchronous action; invoking it yields the future to await.
    Async(Box<dyn Fn() -> BoxFuture<'static, TestResult> + Send + Sync>),
}

impl fmt::Debug for TestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("TestAction::Sync"),
            Self::Async(_) => f.write_str("TestAction::Async"),
        }
    }
}

/// A single named test case. Immutable once created; owned by its suite.
#[derive(Debug)]
pub struct TestCase {
    /// Name of the test case.
    pub name: String,
    pub(crate) action: TestAction,
}

impl TestCase {
    pub(crate) fn sync(
        name: String,
        action: impl Fn() -> TestResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            action: TestAction::Sync(Box::new(action)),
        }
    }

    pub(crate) fn asynchronous<F, Fut>(name: String, action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TestResult> + Send + 'static,
    {
        Self {
            name,
            action: TestAction::Async(Box::new(move || action().boxed())),
        }
    }
}

/// A named, ordered group of test cases.
#[derive(Debug)]
pub struct Suite {
    /// Name of the suite.
    pub name: String,
    pub(crate) tests: Vec<TestCase>,
}

impl Suite {
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            tests: Vec::new(),
        }
    }

    /// Returns the suite's test cases, in declaration order.
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }
}
