//! Semigroup trait for combining error collections
//!
//! When two failed validations meet, their error collections are merged with
//! [`Semigroup::combine`]. The operation must be associative and must keep the
//! left operand's contents before the right operand's, which is what makes the
//! reported error order match the order the validations were combined in.
//!
//! ```
//! use accrue::{nonempty, Semigroup};
//!
//! let merged = nonempty!["a"].combine(nonempty!["b", "c"]);
//! assert_eq!(merged.into_vec(), vec!["a", "b", "c"]);
//! ```

/// A type with an associative binary operation.
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes both operands by value; clone first if the originals are
/// still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another.
    fn combine(self, other: Self) -> Self;
}

// The tail of a `NonEmptyVec` is merged through this impl.
impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
