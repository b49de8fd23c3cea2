//! The harness context object and its declaration API.

use crate::assert::TestResult;
use crate::error::Error;
use crate::testcase::{Suite, TestCase};

/// Declaration-phase state: either no suite is open, or exactly one is.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum DeclarationState {
    /// No suite body is currently executing.
    #[default]
    Idle,
    /// The suite at this index in the registry is open for test declaration.
    DeclaringSuite(usize),
}

/// A test harness: an ordered registry of suites plus the declaration state.
///
/// A `Harness` is an explicit context object: multiple independent harnesses
/// may coexist in one process. Declaration requires `&mut self` while
/// running requires `&self`, so suites cannot be declared once a run has
/// started.
///
/// ```
/// use attest::{Harness, expect};
///
/// # fn main() -> Result<(), attest::Error> {
/// let mut harness = Harness::new();
/// harness.describe("Math", |h| {
///     h.test("add", || expect(2 + 3).to_be(5))
/// })?;
///
/// let results = futures::executor::block_on(harness.run())?;
/// assert!(results.succeeded());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Harness {
    suites: Vec<Suite>,
    state: DeclarationState,
}

/// Resets the declaration state when the suite body exits, whether normally,
/// by error, or by unwinding.
struct OpenSuiteGuard<'a> {
    harness: &'a mut Harness,
}

impl Drop for OpenSuiteGuard<'_> {
    fn drop(&mut self) {
        self.harness.state = DeclarationState::Idle;
    }
}

impl Harness {
    /// Creates an empty harness.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a suite with the given name, invoking `body` synchronously
    /// to populate it with tests.
    ///
    /// The suite is appended to the registry before `body` runs; suites run
    /// and report in declaration order. Returns [`Error::NestedSuite`] if a
    /// suite is already open (in which case the registry is unchanged). Any
    /// error or panic from `body` propagates to the caller, but the open
    /// suite is closed first on every exit path.
    pub fn describe(
        &mut self,
        name: impl Into<String>,
        body: impl FnOnce(&mut Self) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let name = name.into();
        if self.state != DeclarationState::Idle {
            return Err(Error::NestedSuite(name));
        }

        tracing::debug!(suite = %name, "declaring suite");

        let index = self.suites.len();
        self.suites.push(Suite::new(name));
        self.state = DeclarationState::DeclaringSuite(index);

        let guard = OpenSuiteGuard { harness: self };
        body(&mut *guard.harness)
    }

    /// Declares a synchronous test in the currently open suite.
    ///
    /// The action is stored, not invoked. Returns
    /// [`Error::TestOutsideSuite`] (and registers nothing) when called
    /// outside a [`describe`](Self::describe) body.
    pub fn test(
        &mut self,
        name: impl Into<String>,
        action: impl Fn() -> TestResult + Send + Sync + 'static,
    ) -> Result<(), Error> {
        let name = name.into();
        let Some(suite) = self.open_suite() else {
            return Err(Error::TestOutsideSuite(name));
        };

        tracing::trace!(suite = %suite.name, test = %name, "registering test");
        suite.tests.push(TestCase::sync(name, action));
        Ok(())
    }

    /// Declares an asynchronous test in the currently open suite.
    ///
    /// The runner awaits the action's future to completion before moving on
    /// to the next test; actions never run concurrently.
    pub fn async_test<F, Fut>(&mut self, name: impl Into<String>, action: F) -> Result<(), Error>
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TestResult> + Send + 'static,
    {
        let name = name.into();
        let Some(suite) = self.open_suite() else {
            return Err(Error::TestOutsideSuite(name));
        };

        tracing::trace!(suite = %suite.name, test = %name, "registering async test");
        suite.tests.push(TestCase::asynchronous(name, action));
        Ok(())
    }

    /// Returns the registered suites, in declaration order.
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Returns whether no suites have been registered.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Clears all registered suites, returning the harness to its initial
    /// state.
    pub fn reset(&mut self) {
        self.suites.clear();
        self.state = DeclarationState::Idle;
    }

    fn open_suite(&mut self) -> Option<&mut Suite> {
        match self.state {
            DeclarationState::Idle => None,
            DeclarationState::DeclaringSuite(index) => self.suites.get_mut(index),
        }
    }
}
