//! Sequence and traverse for collections of validations
//!
//! - **`sequence`**: `Vec<Validation<E, T>>` → `Validation<E, Vec<T>>`, visiting
//!   every item and collecting every error.
//! - **`traverse`**: like `sequence` followed by a transform of the values, but
//!   the transform only runs once the whole collection is known to be valid.
//! - **`map_inputs`** / **`flat_map_inputs`**: element-wise helpers that build
//!   a list of independent validations, ready to be sequenced.
//!
//! # Examples
//!
//! ```
//! use accrue::{nonempty, traverse::{map_inputs, sequence}, Validation};
//!
//! fn parse(s: &str) -> Validation<String, i32> {
//!     s.parse()
//!         .map(Validation::success)
//!         .unwrap_or_else(|_| Validation::failure(format!("invalid number: {}", s)))
//! }
//!
//! let parsed = sequence(map_inputs(vec!["1", "x", "3", "y"], parse));
//! assert_eq!(
//!     parsed.into_errors(),
//!     Some(nonempty![
//!         "invalid number: x".to_string(),
//!         "invalid number: y".to_string()
//!     ])
//! );
//! ```

use crate::{NonEmptyVec, Semigroup, Validation};

/// Turn a collection of validations into a validation of a collection.
///
/// Every item is visited. If all succeed, the values are returned in input
/// order. Otherwise the result holds the errors of every failed item, earlier
/// items first, each item's own errors in their original order. An empty
/// input is a success with an empty `Vec`.
///
/// ```
/// use accrue::{nonempty, traverse::sequence, Validation};
///
/// let items = vec![
///     Validation::success(1),
///     Validation::failure("a"),
///     Validation::success(2),
///     Validation::failure("b"),
/// ];
/// assert_eq!(sequence(items).into_errors(), Some(nonempty!["a", "b"]));
/// ```
pub fn sequence<E, T, I>(items: I) -> Validation<E, Vec<T>>
where
    I: IntoIterator<Item = Validation<E, T>>,
{
    let mut values = Vec::new();
    let mut errors: Option<NonEmptyVec<E>> = None;
    #[cfg(feature = "tracing")]
    let (mut total, mut failed) = (0usize, 0usize);

    for item in items {
        #[cfg(feature = "tracing")]
        {
            total += 1;
            failed += usize::from(item.is_failure());
        }
        item.fold(
            |found| {
                errors = Some(match errors.take() {
                    Some(acc) => acc.combine(found),
                    None => found,
                })
            },
            |value| values.push(value),
        );
    }

    match errors {
        None => Validation::success(values),
        Some(errors) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                items = total,
                failed,
                errors = errors.len(),
                "sequence accumulated validation failures"
            );
            Validation::from_errors(errors)
        }
    }
}

/// Sequence `items`, then apply `f` to each value.
///
/// `f` is only called after every item has been checked and the overall
/// result is known to be a success. If any item failed, `f` is never called.
///
/// ```
/// use accrue::{traverse::traverse, Validation};
///
/// let items = vec![Validation::<&str, _>::success(1), Validation::success(2)];
/// assert_eq!(traverse(items, |n| n + 1).into_value(), Some(vec![2, 3]));
/// ```
pub fn traverse<E, T, R, I, F>(items: I, f: F) -> Validation<E, Vec<R>>
where
    I: IntoIterator<Item = Validation<E, T>>,
    F: FnMut(T) -> R,
{
    sequence(items).map(|values| {
        #[cfg(feature = "tracing")]
        tracing::trace!(values = values.len(), "traverse applying transform");
        values.into_iter().map(f).collect()
    })
}

/// Apply a validating function to every input, keeping the order.
///
/// Each result stands alone; nothing is accumulated.
pub fn map_inputs<E, A, B, I, F>(inputs: I, f: F) -> Vec<Validation<E, B>>
where
    I: IntoIterator<Item = A>,
    F: FnMut(A) -> Validation<E, B>,
{
    inputs.into_iter().map(f).collect()
}

/// [`flat_map`](Validation::flat_map) every validation in a list, keeping the
/// order.
///
/// ```
/// use accrue::{traverse::flat_map_inputs, Validation};
///
/// let checked = flat_map_inputs(
///     vec![Validation::success(4), Validation::failure("missing"), Validation::success(-1)],
///     |n: i32| if n >= 0 { Validation::success(n) } else { Validation::failure("negative") },
/// );
///
/// assert!(checked[0].is_success());
/// assert_eq!(checked[1], Validation::failure("missing"));
/// assert_eq!(checked[2], Validation::failure("negative"));
/// ```
pub fn flat_map_inputs<E, A, B, I, F>(inputs: I, mut f: F) -> Vec<Validation<E, B>>
where
    I: IntoIterator<Item = Validation<E, A>>,
    F: FnMut(A) -> Validation<E, B>,
{
    inputs
        .into_iter()
        .map(|validation| validation.flat_map(&mut f))
        .collect()
}

/// Collecting an iterator of validations behaves like [`sequence`].
///
/// ```
/// use accrue::{nonempty, Validation};
///
/// let ages: Validation<String, Vec<u8>> = ["31", "x", "300"]
///     .iter()
///     .map(|s| Validation::from_result(s.parse::<u8>().map_err(|e| format!("{}: {}", s, e))))
///     .collect();
///
/// assert_eq!(ages.errors().map(|e| e.len()), Some(2));
/// ```
impl<E, T> FromIterator<Validation<E, T>> for Validation<E, Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, T>>>(iter: I) -> Self {
        sequence(iter)
    }
}
