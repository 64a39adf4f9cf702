//! Error type for checked construction from pre-sorted input.
//!
//! Set operations themselves never fail. The only fallible entry points are
//! the `try_from_sorted_vec` constructors, which validate that the supplied
//! vector already satisfies the sorted sequence invariant instead of sorting
//! it.

use thiserror::Error;

/// A violation of the sorted sequence invariant.
///
/// # Examples
///
/// ```
/// use setwise::{SequenceError, SortedSet};
///
/// let error = SortedSet::try_from_sorted_vec(vec![1, 3, 2]).unwrap_err();
/// assert_eq!(error, SequenceError::OutOfOrder { index: 2 });
/// assert_eq!(
///     error.to_string(),
///     "element at index 2 orders before its predecessor"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum SequenceError {
    /// The element at `index` orders before the element preceding it.
    #[error("element at index {index} orders before its predecessor")]
    OutOfOrder {
        /// Position of the offending element.
        index: usize,
    },
    /// The element at `index` has the same identity as an earlier element.
    #[error("element at index {index} duplicates an earlier element")]
    Duplicate {
        /// Position of the offending element.
        index: usize,
    },
}

impl SequenceError {
    /// Returns the position of the element that broke the invariant.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::OutOfOrder { index } | Self::Duplicate { index } => *index,
        }
    }
}
