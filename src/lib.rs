//! # Accrue
//!
//! A validation type that collects every error instead of stopping at the
//! first one.
//!
//! `Validation<E, T>` is either a success holding a `T`, or a failure holding a
//! non-empty, ordered list of `E`s. Independent checks can be combined with
//! [`Validation::apply`], [`lift::map2`]..[`lift::map4`], [`traverse::sequence`]
//! and friends; when several of them fail, all of their errors are reported
//! together, in the order the checks were combined.
//!
//! ## Quick Example
//!
//! ```rust
//! use accrue::{lift::map2, nonempty, Validation};
//!
//! fn validate_email(email: &str) -> Validation<String, String> {
//!     if email.contains('@') {
//!         Validation::success(email.to_string())
//!     } else {
//!         Validation::failure("Email must contain @".to_string())
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<String, i32> {
//!     if age >= 18 {
//!         Validation::success(age)
//!     } else {
//!         Validation::failure("Must be 18 or older".to_string())
//!     }
//! }
//!
//! let ok = map2(validate_email("user@example.com"), validate_age(25), |email, age| (email, age));
//! assert!(ok.is_success());
//!
//! let bad = map2(validate_email("nope"), validate_age(12), |email, age| (email, age));
//! assert_eq!(
//!     bad.into_errors(),
//!     Some(nonempty![
//!         "Email must contain @".to_string(),
//!         "Must be 18 or older".to_string()
//!     ])
//! );
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events when list combinators accumulate failures
//! - `serde`: `Serialize`/`Deserialize` for `Validation` and `NonEmptyVec`
//! - `proptest`: `Arbitrary` implementations for property tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod lift;
pub mod nonempty;
pub mod semigroup;
pub mod testing;
pub mod traverse;
pub mod validation;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use lift::{map2, map3, map4, reduce_errors};
pub use nonempty::{EmptyVecError, NonEmptyVec};
pub use semigroup::Semigroup;
pub use traverse::{flat_map_inputs, map_inputs, sequence, traverse};
pub use validation::{ValidateAll, Validation};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::lift::{map2, map3, map4, reduce_errors};
    pub use crate::nonempty::{EmptyVecError, NonEmptyVec};
    pub use crate::semigroup::Semigroup;
    pub use crate::traverse::{flat_map_inputs, map_inputs, sequence, traverse};
    pub use crate::validation::{ValidateAll, Validation};
}
