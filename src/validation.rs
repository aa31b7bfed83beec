//! Validation type for accumulating errors
//!
//! `Validation<E, T>` is either a success holding one `T`, or a failure holding
//! one or more `E`s in the order they were reported. It plays the role of
//! `Result` in validation code, except that combining two failures keeps the
//! errors of both instead of stopping at the first.
//!
//! The variant is private. [`Validation::fold`] and [`Validation::fold_ref`]
//! are the only ways to look inside, and every other operation is built on
//! them.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use accrue::Validation;
//!
//! let ok = Validation::<&str, _>::success(42);
//! let bad = Validation::<_, i32>::failure("negative");
//!
//! assert!(ok.is_success());
//! assert!(bad.is_failure());
//! ```
//!
//! ## Accumulating errors
//!
//! ```
//! use accrue::{nonempty, Validation};
//!
//! let name = Validation::<_, String>::failure("name is empty");
//! let age = Validation::<_, u8>::failure("age is missing");
//!
//! let person = name.and(age);
//! assert_eq!(person.into_errors(), Some(nonempty!["name is empty", "age is missing"]));
//! ```

use std::fmt;

use crate::lift::{map2, map3, map4};
use crate::{EmptyVecError, NonEmptyVec, Semigroup};

#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
enum Repr<E, T> {
    Success(T),
    Failure(NonEmptyVec<E>),
}

/// A success value or a non-empty, ordered list of errors.
///
/// # Type Parameters
///
/// * `E` - The error type. No bounds are required.
/// * `T` - The success value type.
///
/// # Examples
///
/// ```
/// use accrue::Validation;
///
/// fn positive(n: i32) -> Validation<String, i32> {
///     if n > 0 {
///         Validation::success(n)
///     } else {
///         Validation::failure(format!("{} is not positive", n))
///     }
/// }
///
/// assert_eq!(positive(3).get_or_else(|| 0), 3);
/// assert_eq!(positive(-1).get_or_else(|| 0), 0);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Validation<E, T> {
    repr: Repr<E, T>,
}

impl<E, T> Validation<E, T> {
    /// Create a successful validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Self {
            repr: Repr::Success(value),
        }
    }

    /// Create a failed validation with a single error.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<_, i32>::failure("missing field");
    /// assert_eq!(v.errors().map(|e| e.len()), Some(1));
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::from_errors(NonEmptyVec::singleton(error))
    }

    /// Create a failed validation from a first error and any number of
    /// further errors, kept in the given order.
    ///
    /// ```
    /// use accrue::{nonempty, Validation};
    ///
    /// let v = Validation::<_, ()>::failure_many("a", ["b", "c"]);
    /// assert_eq!(v.into_errors(), Some(nonempty!["a", "b", "c"]));
    /// ```
    pub fn failure_many<I>(first: E, rest: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::from_errors(NonEmptyVec::new(first, rest.into_iter().collect()))
    }

    /// Create a failed validation from an existing error list.
    #[inline]
    pub fn from_errors(errors: NonEmptyVec<E>) -> Self {
        Self {
            repr: Repr::Failure(errors),
        }
    }

    /// Create a failed validation from a `Vec` of errors.
    ///
    /// A failure without errors is not a valid state, so an empty vector is
    /// rejected with [`EmptyVecError`].
    ///
    /// ```
    /// use accrue::{EmptyVecError, Validation};
    ///
    /// assert!(Validation::<_, i32>::try_from_errors(vec!["bad"]).is_ok());
    /// assert_eq!(
    ///     Validation::<&str, i32>::try_from_errors(vec![]),
    ///     Err(EmptyVecError)
    /// );
    /// ```
    pub fn try_from_errors(errors: Vec<E>) -> Result<Self, EmptyVecError> {
        NonEmptyVec::try_from(errors).map(Self::from_errors)
    }

    /// Create a validation from a `Result`, treating `Err` as a single error.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::from_result("42".parse::<i32>());
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Run exactly one of the two functions, depending on the variant, and
    /// return its result.
    ///
    /// `if_failure` receives the error list, `if_success` the value. The other
    /// function is never called.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<&str, _>::success(2);
    /// let text = v.fold(|errors| format!("{} errors", errors.len()), |n| format!("got {}", n));
    /// assert_eq!(text, "got 2");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, if_failure: F, if_success: G) -> U
    where
        F: FnOnce(NonEmptyVec<E>) -> U,
        G: FnOnce(T) -> U,
    {
        match self.repr {
            Repr::Success(value) => if_success(value),
            Repr::Failure(errors) => if_failure(errors),
        }
    }

    /// Borrowing version of [`fold`](Self::fold).
    #[inline]
    pub fn fold_ref<'a, U, F, G>(&'a self, if_failure: F, if_success: G) -> U
    where
        F: FnOnce(&'a NonEmptyVec<E>) -> U,
        G: FnOnce(&'a T) -> U,
    {
        match &self.repr {
            Repr::Success(value) => if_success(value),
            Repr::Failure(errors) => if_failure(errors),
        }
    }

    /// Check if this validation is successful.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.fold_ref(|_| false, |_| true)
    }

    /// Check if this validation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.fold_ref(|_| None, Some)
    }

    /// Borrow the error list, if any.
    #[inline]
    pub fn errors(&self) -> Option<&NonEmptyVec<E>> {
        self.fold_ref(Some, |_| None)
    }

    /// Take the success value, discarding any errors.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        self.fold(|_| None, Some)
    }

    /// Take the error list, discarding any success value.
    #[inline]
    pub fn into_errors(self) -> Option<NonEmptyVec<E>> {
        self.fold(Some, |_| None)
    }

    /// Convert into a `Result` carrying the whole error list.
    ///
    /// ```
    /// use accrue::{nonempty, Validation};
    ///
    /// let v = Validation::<_, i32>::failure_many("a", ["b"]);
    /// assert_eq!(v.into_result(), Err(nonempty!["a", "b"]));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, NonEmptyVec<E>> {
        self.fold(Err, Ok)
    }

    /// Return the success value, or the result of `default` on failure.
    ///
    /// `default` is only called for a failure.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.fold(|_| default(), |value| value)
    }

    /// Return this validation if it succeeded, otherwise the one produced by
    /// `default`.
    ///
    /// `default` is only called for a failure.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let primary = Validation::<_, u16>::failure("no port configured");
    /// let port = primary.or_else(|| Validation::success(8080));
    /// assert_eq!(port.into_value(), Some(8080));
    /// ```
    #[inline]
    pub fn or_else<F>(self, default: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        self.fold(|_| default(), Self::success)
    }

    /// Run `effect` with the value if this is a success.
    #[inline]
    pub fn if_success<F>(&self, effect: F)
    where
        F: FnOnce(&T),
    {
        self.fold_ref(|_| (), effect)
    }

    /// Run `effect` with the errors if this is a failure.
    #[inline]
    pub fn if_failure<F>(&self, effect: F)
    where
        F: FnOnce(&NonEmptyVec<E>),
    {
        self.fold_ref(effect, |_| ())
    }

    /// Transform the success value.
    ///
    /// A failure passes through with the same errors, and `f` is not called.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let v = Validation::<&str, _>::success(5).map(|x| x * 2);
    /// assert_eq!(v.into_value(), Some(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        self.fold(Validation::from_errors, |value| Validation::success(f(value)))
    }

    /// Transform every error, keeping their order.
    ///
    /// ```
    /// use accrue::{nonempty, Validation};
    ///
    /// let v = Validation::<_, ()>::failure_many("a", ["bc"]).map_errors(str::len);
    /// assert_eq!(v.into_errors(), Some(nonempty![1, 2]));
    /// ```
    pub fn map_errors<E2, F>(self, f: F) -> Validation<E2, T>
    where
        F: FnMut(E) -> E2,
    {
        self.fold(
            |errors| Validation::from_errors(errors.map(f)),
            Validation::success,
        )
    }

    /// Chain a dependent validation.
    ///
    /// On success the result of `f` is returned as is; on failure `f` is not
    /// called and the errors are kept.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let half = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Validation::success(n / 2)
    ///     } else {
    ///         Validation::failure("odd")
    ///     }
    /// };
    ///
    /// assert_eq!(Validation::success(8).flat_map(half).into_value(), Some(4));
    /// assert!(Validation::success(7).flat_map(half).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Validation<E, U>,
    {
        self.fold(Validation::from_errors, f)
    }

    /// Apply a validated function to this validated value.
    ///
    /// | `self`      | `function`  | result               |
    /// |-------------|-------------|----------------------|
    /// | success `a` | success `f` | success `f(a)`       |
    /// | success `a` | failure `y` | failure `y`          |
    /// | failure `x` | success `f` | failure `x`          |
    /// | failure `x` | failure `y` | failure `x` then `y` |
    ///
    /// The function is only called when both sides succeed.
    ///
    /// ```
    /// use accrue::{nonempty, Validation};
    ///
    /// let doubled = Validation::<&str, _>::success(5).apply(Validation::success(|n| n * 2));
    /// assert_eq!(doubled.into_value(), Some(10));
    ///
    /// let failed = Validation::<_, i32>::failure("x")
    ///     .apply(Validation::<_, fn(i32) -> i32>::failure("y"));
    /// assert_eq!(failed.into_errors(), Some(nonempty!["x", "y"]));
    /// ```
    pub fn apply<U, F>(self, function: Validation<E, F>) -> Validation<E, U>
    where
        F: FnOnce(T) -> U,
    {
        // Both sides are owned; two `FnOnce` arms of `fold` could not both move them.
        match (self.into_result(), function.into_result()) {
            (Ok(value), Ok(f)) => Validation::success(f(value)),
            (Err(left), Err(right)) => Validation::from_errors(left.combine(right)),
            (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Validation::from_errors(errors),
        }
    }

    /// Pair this validation with another, accumulating errors from both.
    ///
    /// ```
    /// use accrue::Validation;
    ///
    /// let pair = Validation::<&str, _>::success(1).and(Validation::success("one"));
    /// assert_eq!(pair.into_value(), Some((1, "one")));
    /// ```
    pub fn and<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        map2(self, other, |a, b| (a, b))
    }

    /// Combine a tuple of validations into a validation of a tuple.
    ///
    /// See [`ValidateAll`] for the supported tuple sizes.
    ///
    /// ```
    /// use accrue::{nonempty, Validation};
    ///
    /// let result = Validation::all((
    ///     Validation::<_, i32>::failure("bad id"),
    ///     Validation::success("alice"),
    ///     Validation::<_, u8>::failure("bad age"),
    /// ));
    /// assert_eq!(result.into_errors(), Some(nonempty!["bad id", "bad age"]));
    /// ```
    pub fn all<V>(validations: V) -> Self
    where
        V: ValidateAll<E, Output = T>,
    {
        validations.validate_all()
    }
}

impl<E: fmt::Debug, T: fmt::Debug> fmt::Debug for Validation<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, field): (&str, &dyn fmt::Debug) = self.fold_ref(
            |errors| ("Failure", errors as &dyn fmt::Debug),
            |value| ("Success", value as &dyn fmt::Debug),
        );
        f.debug_tuple(name).field(field).finish()
    }
}

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

/// Combine a tuple of validations that share an error type.
///
/// Implemented for tuples of two, three and four validations. Every element
/// is inspected, and errors come out in tuple order.
pub trait ValidateAll<E> {
    /// The tuple of success values.
    type Output;

    /// Combine all validations, accumulating errors.
    fn validate_all(self) -> Validation<E, Self::Output>;
}

impl<E, A, B> ValidateAll<E> for (Validation<E, A>, Validation<E, B>) {
    type Output = (A, B);

    fn validate_all(self) -> Validation<E, Self::Output> {
        let (a, b) = self;
        map2(a, b, |a, b| (a, b))
    }
}

impl<E, A, B, C> ValidateAll<E> for (Validation<E, A>, Validation<E, B>, Validation<E, C>) {
    type Output = (A, B, C);

    fn validate_all(self) -> Validation<E, Self::Output> {
        let (a, b, c) = self;
        map3(a, b, c, |a, b, c| (a, b, c))
    }
}

impl<E, A, B, C, D> ValidateAll<E>
    for (
        Validation<E, A>,
        Validation<E, B>,
        Validation<E, C>,
        Validation<E, D>,
    )
{
    type Output = (A, B, C, D);

    fn validate_all(self) -> Validation<E, Self::Output> {
        let (a, b, c, d) = self;
        map4(a, b, c, d, |a, b, c, d| (a, b, c, d))
    }
}
