//! # setwise
//!
//! Unique-element collections over an arbitrary element type.
//!
//! ## Overview
//!
//! Sets come in two representations:
//!
//! - **Sorted**: a sorted, deduplicated `Vec`, either ordered by the element's
//!   own [`Ord`] ([`SortedSet`]) or by a caller-supplied ordering function with
//!   a separate identity predicate ([`SortedSetBy`]).
//! - **Hashed**: a thin wrapper around [`std::collections::HashSet`]
//!   ([`HashedSet`], feature `hashed`).
//!
//! Every representation implements the same capability traits from
//! [`view`]: the read-only [`View`], the in-place [`Mutable`] and the
//! value-returning [`Immutable`]. Algebra (`union`, `intersection`, ...) and
//! bulk mutation (`insert_set`, `remove_set`) accept any `&dyn View`, and
//! take a linear two-pointer path when both operands share a sorted
//! representation.
//!
//! ## Feature Flags
//!
//! - `hashed` (default): the hash-backed set
//! - `fxhash`: use `rustc_hash::FxBuildHasher` as the default hasher
//! - `ahash`: use `ahash::RandomState` as the default hasher
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut primes: SortedSet<i32> = [7, 2, 5, 3, 2].into_iter().collect();
//! assert_eq!(primes.as_slice(), &[2, 3, 5, 7]);
//!
//! let odds = SortedSet::from_iter([1, 3, 5, 7, 9]);
//! let odd_primes = primes.intersection(&odds);
//! assert_eq!(odd_primes.as_slice(), &[3, 5, 7]);
//!
//! primes.insert_all([11, 13]);
//! primes.remove_set(&odds);
//! assert_eq!(primes.elems(), vec![2, 11, 13]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits and every concrete set type.
///
/// # Usage
///
/// ```rust
/// use setwise::prelude::*;
/// ```
pub mod prelude {
    pub use crate::view::*;

    pub use crate::sorted::*;

    #[cfg(feature = "hashed")]
    pub use crate::hashed::*;

    pub use crate::error::SequenceError;
}

pub mod error;
pub mod sequence;
pub mod sorted;
pub mod view;

#[cfg(feature = "hashed")]
pub mod hashed;

pub use error::SequenceError;
pub use sorted::{
    Comparator, FrozenSortedSet, FrozenSortedSetBy, SortedSet, SortedSetBy,
};
pub use view::{
    Immutable, Layout, Mutable, MutableOperations, SetOperations, SortedImmutable, SortedMutable,
    SortedView, Unsorted, View,
};

#[cfg(feature = "hashed")]
pub use hashed::{DefaultHashBuilder, FrozenHashedSet, HashedSet};
