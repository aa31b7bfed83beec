//! Testing helpers for code that returns `Validation`
//!
//! Assertion macros that print the unexpected side on failure, plus
//! `proptest` strategies for [`NonEmptyVec`](crate::NonEmptyVec) and
//! [`Validation`](crate::Validation) behind the `proptest` feature.
//!
//! ```rust
//! use accrue::{assert_failure, assert_success, assert_validation_errors, Validation};
//!
//! assert_success!(Validation::<String, _>::success(42));
//! assert_failure!(Validation::<_, i32>::failure("error"));
//! assert_validation_errors!(Validation::<_, i32>::failure_many("a", ["b"]), ["a", "b"]);
//! ```

#[cfg(feature = "proptest")]
use crate::{NonEmptyVec, Validation};

/// Assert that a validation succeeds, returning the value.
///
/// Panics with the errors if the validation is a failure.
///
/// ```rust
/// use accrue::{assert_success, Validation};
///
/// let value = assert_success!(Validation::<String, _>::success(7));
/// assert_eq!(value, 7);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        $crate::Validation::fold(
            $validation,
            |errors| panic!("Expected Success, got Failure: {:?}", errors),
            |value| value,
        )
    };
}

/// Assert that a validation fails, returning the errors.
///
/// Panics with the value if the validation is a success.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        $crate::Validation::fold(
            $validation,
            |errors| errors,
            |value| panic!("Expected Failure, got Success: {:?}", value),
        )
    };
}

/// Assert that a validation fails with exactly the given errors, in order.
///
/// `$expected` is anything that converts into a `Vec` of the error type.
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {{
        let expected: ::std::vec::Vec<_> = ::std::iter::IntoIterator::into_iter($expected).collect();
        $crate::Validation::fold(
            $validation,
            |errors| assert_eq!(errors.into_vec(), expected),
            |value| {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    expected, value
                )
            },
        )
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for NonEmptyVec<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any_with::<T>(args), 1..8)
            .prop_filter_map("at least one element", NonEmptyVec::from_vec)
            .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E, T> Arbitrary for Validation<E, T>
where
    E: Arbitrary + 'static,
    T: Arbitrary + 'static,
{
    type Parameters = (E::Parameters, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (e_params, t_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<NonEmptyVec<E>>(e_params).prop_map(Validation::from_errors),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Validation;

    #[test]
    fn assert_success_macro_returns_value() {
        let value = assert_success!(Validation::<String, _>::success(42));
        assert_eq!(value, 42);
    }

    #[test]
    fn assert_failure_macro_returns_errors() {
        let errors = assert_failure!(Validation::<_, i32>::failure("error"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let val = Validation::<_, i32>::failure_many("error1", ["error2"]);
        assert_validation_errors!(val, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Validation::<_, i32>::failure("error".to_string()));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Validation::<String, _>::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Failure with errors")]
    fn assert_validation_errors_panics_on_success() {
        assert_validation_errors!(Validation::<String, _>::success(42), vec!["error".to_string()]);
    }

    #[test]
    #[should_panic]
    fn assert_validation_errors_panics_on_wrong_order() {
        let val = Validation::<_, i32>::failure_many("b", ["a"]);
        assert_validation_errors!(val, ["a", "b"]);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::{NonEmptyVec, Validation};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn nonempty_arbitrary_is_never_empty(nev in any::<NonEmptyVec<u8>>()) {
                prop_assert!(nev.len() >= 1);
            }

            #[test]
            fn validation_arbitrary_has_one_variant(val in any::<Validation<String, i32>>()) {
                prop_assert_ne!(val.is_success(), val.is_failure());
            }
        }
    }
}
