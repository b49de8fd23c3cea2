//! Assertion entry point and same-value equality.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// The outcome of a test action: success, or a failure describing what went
/// wrong.
pub type TestResult = Result<(), TestFailure>;

/// A failed assertion (or any other reported test failure).
///
/// The runner treats a returned `TestFailure` and a panic inside a test
/// action identically; returning one is the preferred way for a test to
/// fail.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
#[error("{message}")]
pub struct TestFailure {
    message: String,
}

impl TestFailure {
    /// Creates a failure with the given human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure's message text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Same-value equality, as used by [`Expectation::to_be`].
///
/// This is stricter than `PartialEq` for floating-point values: `NaN` equals
/// `NaN`, while `+0.0` and `-0.0` are distinct. For shared pointers
/// (`Rc`/`Arc`) it means pointer identity, not contents equality.
pub trait SameValue {
    /// Returns whether `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;
}

/// Implements [`SameValue`] for types whose `==` already has same-value
/// semantics (i.e. types implementing [`Eq`]).
///
/// ```
/// #[derive(Debug, PartialEq, Eq)]
/// struct Color(u8, u8, u8);
///
/// attest::impl_same_value_via_eq!(Color);
///
/// assert!(attest::expect(Color(1, 2, 3)).to_be(Color(1, 2, 3)).is_ok());
/// ```
#[macro_export]
macro_rules! impl_same_value_via_eq {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SameValue for $ty {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

impl_same_value_via_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), &str, String,
);

impl SameValue for f32 {
    fn same_value(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl SameValue for f64 {
    fn same_value(&self, other: &Self) -> bool {
        (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
    }
}

impl<T: ?Sized> SameValue for Rc<T> {
    fn same_value(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameValue for Arc<T> {
    fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// Wraps a received value pending comparison against an expected one.
#[derive(Clone, Debug)]
pub struct Expectation<T> {
    received: T,
}

/// Starts an assertion on the given received value.
///
/// No side effects; the comparison happens in [`Expectation::to_be`].
pub fn expect<T>(value: T) -> Expectation<T> {
    Expectation { received: value }
}

impl<T: SameValue + fmt::Debug> Expectation<T> {
    /// Asserts that the received value is the same value as `expected`.
    ///
    /// Returns `Ok(())` on a match; otherwise returns a [`TestFailure`]
    /// whose message names both values.
    pub fn to_be(self, expected: T) -> TestResult {
        if self.received.same_value(&expected) {
            Ok(())
        } else {
            Err(TestFailure::new(format!(
                "Expected {:?} to be {:?}",
                self.received, expected
            )))
        }
    }
}
