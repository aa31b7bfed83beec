//! Non-empty vector used to carry validation errors
//!
//! A failed [`Validation`](crate::Validation) always holds at least one error.
//! `NonEmptyVec<T>` makes that a property of the type: it is a head element
//! plus a (possibly empty) tail, so there is no way to build an empty one.
//!
//! # Examples
//!
//! ```
//! use accrue::{nonempty, NonEmptyVec};
//!
//! let errors = NonEmptyVec::new("too short", vec!["missing digit"]);
//! assert_eq!(errors.head(), &"too short");
//! assert_eq!(errors.len(), 2);
//!
//! let same = nonempty!["too short", "missing digit"];
//! assert_eq!(errors, same);
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Semigroup;

/// Returned when a non-empty collection is requested from an empty `Vec`.
///
/// # Examples
///
/// ```
/// use accrue::{EmptyVecError, NonEmptyVec};
///
/// let result = NonEmptyVec::<i32>::try_from(Vec::new());
/// assert_eq!(result, Err(EmptyVecError));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyVecError;

impl fmt::Display for EmptyVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected at least one element, got an empty sequence")
    }
}

impl StdError for EmptyVecError {}

/// A vector guaranteed to contain at least one element.
///
/// Elements keep their insertion order. The only mutating operations append,
/// so the non-empty invariant can never be broken after construction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty vector from a first element and the rest.
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let nev = NonEmptyVec::new(1, vec![2, 3]);
    /// assert_eq!(nev.into_vec(), vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty vector holding a single element.
    #[inline]
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Try to build a non-empty vector from a `Vec`.
    ///
    /// Returns `None` for an empty vector. See also the `TryFrom<Vec<T>>`
    /// impl, which reports [`EmptyVecError`] instead.
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(vec![1, 2]).is_some());
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// ```
    pub fn from_vec(vec: Vec<T>) -> Option<Self> {
        let mut iter = vec.into_iter();
        let head = iter.next()?;
        Some(Self::new(head, iter.collect()))
    }

    /// The first element.
    #[inline]
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append an element.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Apply `f` to every element, keeping the order.
    ///
    /// ```
    /// use accrue::NonEmptyVec;
    ///
    /// let lengths = NonEmptyVec::new("ab", vec!["cde"]).map(str::len);
    /// assert_eq!(lengths.into_vec(), vec![2, 3]);
    /// ```
    pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        let head = f(self.head);
        let tail = self.tail.into_iter().map(f).collect();
        NonEmptyVec::new(head, tail)
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

impl<T: fmt::Debug> fmt::Debug for NonEmptyVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Concatenation, left elements first.
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(self, other: Self) -> Self {
        Self::new(self.head, self.tail.combine(other.into_vec()))
    }
}

impl<T> Extend<T> for NonEmptyVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tail.extend(iter);
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
    type Error = EmptyVecError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(vec).ok_or(EmptyVecError)
    }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
    fn from(nev: NonEmptyVec<T>) -> Self {
        nev.into_vec()
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
    type Item = &'a T;
    type IntoIter = std::iter::Chain<std::iter::Once<&'a T>, std::slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T> std::ops::Index<usize> for NonEmptyVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            n => &self.tail[n - 1],
        }
    }
}

/// Build a [`NonEmptyVec`] from one or more expressions.
///
/// ```
/// use accrue::nonempty;
///
/// let nev = nonempty![1, 2, 3];
/// assert_eq!(nev.len(), 3);
/// assert_eq!(nev.head(), &1);
/// ```
#[macro_export]
macro_rules! nonempty {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::NonEmptyVec::new($head, ::std::vec![$($tail),*])
    };
}
