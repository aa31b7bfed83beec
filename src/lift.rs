//! Lifting plain functions over several validations
//!
//! `map2`, `map3` and `map4` call an ordinary function with the success values
//! of two, three or four validations. If any operand failed, the function is
//! not called and the result carries the errors of *every* failed operand, in
//! argument order.
//!
//! ```
//! use accrue::{lift::map3, nonempty, Validation};
//!
//! #[derive(Debug, PartialEq)]
//! struct Signup {
//!     name: String,
//!     email: String,
//!     age: u8,
//! }
//!
//! let signup = map3(
//!     Validation::<&str, _>::success("ada".to_string()),
//!     Validation::failure("email is missing"),
//!     Validation::failure("age must be a number"),
//!     |name, email, age| Signup { name, email, age },
//! );
//!
//! assert_eq!(
//!     signup.into_errors(),
//!     Some(nonempty!["email is missing", "age must be a number"])
//! );
//! ```

use crate::{NonEmptyVec, Semigroup, Validation};

/// Append the errors of the remaining operands to `first`, left to right.
///
/// `None` entries stand for operands that succeeded and are skipped. This is
/// the reducer behind [`map3`] and [`map4`], exposed for lifting helpers of
/// other arities.
///
/// ```
/// use accrue::{lift::reduce_errors, nonempty, Validation};
///
/// let first = nonempty!["name is missing"];
/// let merged = reduce_errors(
///     first,
///     [
///         Validation::<_, u8>::success(1).into_errors(),
///         Validation::<_, u8>::failure_many("age is negative", ["age is not a number"]).into_errors(),
///     ],
/// );
/// assert_eq!(
///     merged.into_vec(),
///     vec!["name is missing", "age is negative", "age is not a number"]
/// );
/// ```
pub fn reduce_errors<E, I>(first: NonEmptyVec<E>, rest: I) -> NonEmptyVec<E>
where
    I: IntoIterator<Item = Option<NonEmptyVec<E>>>,
{
    rest.into_iter().flatten().fold(first, Semigroup::combine)
}

/// Combine two validations with a binary function.
///
/// ```
/// use accrue::{lift::map2, Validation};
///
/// let sum = map2(
///     Validation::<&str, _>::success(2),
///     Validation::success(3),
///     |a, b| a + b,
/// );
/// assert_eq!(sum.into_value(), Some(5));
/// ```
pub fn map2<E, A, B, R, F>(va: Validation<E, A>, vb: Validation<E, B>, f: F) -> Validation<E, R>
where
    F: FnOnce(A, B) -> R,
{
    va.apply(vb.map(|b| move |a| f(a, b)))
}

/// Combine three validations with a ternary function.
pub fn map3<E, A, B, C, R, F>(
    va: Validation<E, A>,
    vb: Validation<E, B>,
    vc: Validation<E, C>,
    f: F,
) -> Validation<E, R>
where
    F: FnOnce(A, B, C) -> R,
{
    // `fold` would need both arms to own `vb` and `vc`.
    match va.into_result() {
        Ok(a) => map2(vb, vc, move |b, c| f(a, b, c)),
        Err(errors) => Validation::from_errors(reduce_errors(
            errors,
            [vb.into_errors(), vc.into_errors()],
        )),
    }
}

/// Combine four validations with a four-argument function.
///
/// ```
/// use accrue::{lift::map4, nonempty, Validation};
///
/// let rgba = map4(
///     Validation::<String, u8>::success(255),
///     Validation::failure("green out of range".to_string()),
///     Validation::success(0),
///     Validation::failure("alpha out of range".to_string()),
///     |r, g, b, a| [r, g, b, a],
/// );
///
/// assert_eq!(
///     rgba.into_errors(),
///     Some(nonempty![
///         "green out of range".to_string(),
///         "alpha out of range".to_string()
///     ])
/// );
/// ```
pub fn map4<E, A, B, C, D, R, F>(
    va: Validation<E, A>,
    vb: Validation<E, B>,
    vc: Validation<E, C>,
    vd: Validation<E, D>,
    f: F,
) -> Validation<E, R>
where
    F: FnOnce(A, B, C, D) -> R,
{
    // Same ownership constraint as `map3`.
    match va.into_result() {
        Ok(a) => map3(vb, vc, vd, move |b, c, d| f(a, b, c, d)),
        Err(errors) => Validation::from_errors(reduce_errors(
            errors,
            [vb.into_errors(), vc.into_errors(), vd.into_errors()],
        )),
    }
}
