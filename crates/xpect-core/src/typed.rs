//! Typed check methods
//!
//! These are thin wrappers over [`Checks::check`] that only exist for the
//! bound types they make sense for, so calling a numeric check on a string
//! is a compile error rather than an `UnsupportedValue` at run time. Every
//! value gets the fallback checks.
//!
//! Extensions add typed methods the same way, through their own extension
//! traits over [`Checks`].

use crate::binder::Checks;
use crate::errors::Result;
use crate::matchers::names;
use crate::value::{Deferred, Value};
use std::future::Future;

/// Bound types that get the ordering checks
pub trait Numeric: Into<Value> {}

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(impl Numeric for $ty {})*
    };
}

impl_numeric!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Bound types that get the sequence checks
pub trait Sequence: Into<Value> {
    type Item: Into<Value>;
}

impl<E: Into<Value>> Sequence for Vec<E> {
    type Item = E;
}

impl<E: Into<Value>, const N: usize> Sequence for [E; N] {
    type Item = E;
}

impl<E: Clone + Into<Value>> Sequence for &[E] {
    type Item = E;
}

impl<'e, T: Numeric> Checks<'e, T> {
    /// # Errors
    ///
    /// `AssertionFailed` unless the value is greater than `expected`.
    pub fn to_be_greater_than(&self, expected: impl Numeric) -> Result<()> {
        self.check_now(names::TO_BE_GREATER_THAN, &[expected.into()])
            .map(drop)
    }

    /// # Errors
    ///
    /// `AssertionFailed` if the value is less than `expected`.
    pub fn to_be_greater_than_or_equal(&self, expected: impl Numeric) -> Result<()> {
        self.check_now(names::TO_BE_GREATER_THAN_OR_EQUAL, &[expected.into()])
            .map(drop)
    }

    /// # Errors
    ///
    /// `AssertionFailed` unless the value is less than `expected`.
    pub fn to_be_less_than(&self, expected: impl Numeric) -> Result<()> {
        self.check_now(names::TO_BE_LESS_THAN, &[expected.into()])
            .map(drop)
    }

    /// # Errors
    ///
    /// `AssertionFailed` if the value is greater than `expected`.
    pub fn to_be_less_than_or_equal(&self, expected: impl Numeric) -> Result<()> {
        self.check_now(names::TO_BE_LESS_THAN_OR_EQUAL, &[expected.into()])
            .map(drop)
    }
}

impl<'e> Checks<'e, bool> {
    /// # Errors
    ///
    /// `AssertionFailed` unless the value is exactly `true`.
    pub fn to_be_true(&self) -> Result<bool> {
        self.check_now(names::TO_BE_TRUE, &[])
    }

    /// # Errors
    ///
    /// `AssertionFailed` unless the value is exactly `false`.
    pub fn to_be_false(&self) -> Result<bool> {
        self.check_now(names::TO_BE_FALSE, &[])
    }
}

impl<'e, S: Sequence> Checks<'e, S> {
    /// # Errors
    ///
    /// `AssertionFailed` naming the first pair of strictly equal items.
    pub fn to_have_unique_values(&self) -> Result<()> {
        self.check_now(names::TO_HAVE_UNIQUE_VALUES, &[]).map(drop)
    }

    /// Membership by deep equality
    ///
    /// # Errors
    ///
    /// `AssertionFailed` if no item is deep-equal to `item`.
    pub fn to_contain(&self, item: S::Item) -> Result<()> {
        self.check_now(names::TO_CONTAIN, &[item.into()]).map(drop)
    }

    /// # Errors
    ///
    /// `AssertionFailed` if the sequence does not have exactly `expected` items.
    pub fn to_have_length(&self, expected: usize) -> Result<()> {
        self.check_now(names::TO_HAVE_LENGTH, &[Value::from(expected)])
            .map(drop)
    }
}

impl<'e> Checks<'e, Deferred> {
    /// Await the deferred value and deep-compare the result with `expected`
    ///
    /// The returned future does not borrow the check set.
    ///
    /// # Errors
    ///
    /// `AssertionFailed` with a diff on mismatch; `Rejected` carrying the
    /// deferred value's own error if it rejects.
    pub fn to_await_to_equal(
        &self,
        expected: impl Into<Value>,
    ) -> impl Future<Output = Result<()>> + Send + 'static {
        let outcome = self.check(names::TO_AWAIT_TO_EQUAL, &[expected.into()]);
        async move { outcome?.settle().await }
    }
}

impl<'e, T: Into<Value>> Checks<'e, T> {
    /// Reference equality: same primitive, or the same container
    ///
    /// # Errors
    ///
    /// `AssertionFailed` with a diff of both values.
    pub fn to_reference_equal(&self, expected: T) -> Result<()> {
        self.check_now(names::TO_REFERENCE_EQUAL, &[expected.into()])
            .map(drop)
    }

    /// Deep structural equality
    ///
    /// # Errors
    ///
    /// `AssertionFailed` with a diff of both values.
    pub fn to_equal(&self, expected: T) -> Result<()> {
        self.check_now(names::TO_EQUAL, &[expected.into()]).map(drop)
    }

    /// Equality one level down; record fields are compared loosely
    ///
    /// # Errors
    ///
    /// `AssertionFailed` with a diff of both values.
    pub fn to_shallow_equal(&self, expected: T) -> Result<()> {
        self.check_now(names::TO_SHALLOW_EQUAL, &[expected.into()])
            .map(drop)
    }

    /// # Errors
    ///
    /// `AssertionFailed` if the value is falsy.
    pub fn to_be_truthy(&self) -> Result<bool> {
        self.check_now(names::TO_BE_TRUTHY, &[])
    }

    /// # Errors
    ///
    /// `AssertionFailed` if the value is truthy.
    pub fn to_be_falsy(&self) -> Result<bool> {
        self.check_now(names::TO_BE_FALSY, &[])
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ExErrorKind;
    use crate::expect::expect;
    use crate::value::rejection;
    use crate::value::{Deferred, Value};

    #[test]
    fn test_numeric_methods() {
        expect(5).to_be_greater_than(3).unwrap();
        expect(2.5).to_be_less_than_or_equal(2.5).unwrap();
        let err = expect(1u8).to_be_greater_than_or_equal(2).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::AssertionFailed);
        assert_eq!(err.message(), "Value 1 is not greater than or equal to 2");
    }

    #[test]
    fn test_boolean_methods_return_flag() {
        assert!(expect(true).to_be_true().unwrap());
        assert!(expect(false).to_be_false().unwrap());
        assert!(expect(false).to_be_true().is_err());
    }

    #[test]
    fn test_sequence_methods() {
        expect(vec![1, 2, 3]).to_have_unique_values().unwrap();
        expect([1, 2, 3]).to_contain(2).unwrap();
        let items: &[&str] = &["a", "b"];
        expect(items).to_have_length(2).unwrap();
    }

    #[test]
    fn test_fallback_methods_for_any_type() {
        expect("x").to_equal("x").unwrap();
        assert!(expect("").to_be_falsy().unwrap());
        let shared = Value::array([1]);
        expect(shared.clone()).to_reference_equal(shared).unwrap();
    }

    #[test]
    fn test_await_to_equal() {
        futures::executor::block_on(async {
            expect(Deferred::resolved(3))
                .to_await_to_equal(3)
                .await
                .unwrap();
            let err = expect(Deferred::rejected(rejection(std::fmt::Error)))
                .to_await_to_equal(3)
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ExErrorKind::Rejected);
        });
    }
}
