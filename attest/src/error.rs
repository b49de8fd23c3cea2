/// Monolithic error type for the test harness.
///
/// Covers usage errors raised at declaration time; assertion failures are
/// not errors at this level (they are per-test outcomes consumed by the
/// runner).
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A test was declared while no suite was open.
    #[error("test `{0}` declared outside a suite")]
    TestOutsideSuite(String),

    /// A suite was declared inside another suite's body.
    #[error("suite `{0}` declared inside another suite")]
    NestedSuite(String),

    /// An error occurred while writing test output.
    #[error("failed to write test output: {0}")]
    Io(#[from] std::io::Error),
}
