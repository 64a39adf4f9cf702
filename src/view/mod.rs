//! Capability traits shared by every set representation.
//!
//! The hierarchy separates what a caller may do with a set from how the set
//! stores its elements:
//!
//! - [`View`]: read-only queries. Object safe, so every multi-set operation
//!   accepts `&dyn View<E>` and works across representations.
//! - [`SetOperations`]: algebra returning a new value of the receiver's own
//!   type.
//! - [`MutableOperations`]: in-place insertion and removal.
//! - [`Mutable`] and [`Immutable`]: the two complete capabilities, each able
//!   to produce a deep copy of the other.
//! - [`SortedView`], [`SortedMutable`] and [`SortedImmutable`]: the sorted
//!   refinements, with [`Unsorted`] to hide the sorted contract again.
//!
//! Multi-set operations first ask the other operand for its [`Layout`].
//! When both operands are sorted the same way, a linear two-pointer
//! algorithm is used; otherwise the operation falls back to the other
//! operand's [`View::contains`] and [`View::range`].
//!
//! # Examples
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! fn count_shared(left: &dyn View<u32>, right: &dyn View<u32>) -> usize {
//!     let mut shared = 0;
//!     left.range(&mut |element| {
//!         if right.contains(element) {
//!             shared += 1;
//!         }
//!         std::ops::ControlFlow::Continue(())
//!     });
//!     shared
//! }
//!
//! let sorted = SortedSet::from_iter([1, 2, 3, 4]);
//! let by_parity = SortedSetBy::by(|a: &u32, b: &u32| (a % 2).cmp(&(b % 2)).then(a.cmp(b)), [2, 4, 6]);
//! assert_eq!(count_shared(&sorted, &by_parity), 2);
//! ```

mod unsorted;

use std::fmt;
use std::ops::ControlFlow;

use crate::sorted::Comparator;

pub use unsorted::Unsorted;

/// How a set lays out its elements, as seen by another set.
///
/// Only the sorted representations of this crate can report a sorted
/// layout, so a sorted slice obtained from a `Layout` is guaranteed to hold
/// the sorted sequence invariant. Every other implementation of [`View`]
/// reports [`Layout::opaque`].
pub struct Layout<'a, E>(pub(crate) LayoutKind<'a, E>);

pub(crate) enum LayoutKind<'a, E> {
    /// Strictly ascending by `Ord`.
    Natural(&'a [E]),
    /// Sorted by the comparator's order with unique identities.
    Comparator(&'a [E], &'a Comparator<E>),
    Opaque,
}

impl<'a, E> Layout<'a, E> {
    /// The layout of a set whose storage is not visible to other sets.
    #[must_use]
    pub const fn opaque() -> Self {
        Self(LayoutKind::Opaque)
    }

    pub(crate) const fn natural(elements: &'a [E]) -> Self {
        Self(LayoutKind::Natural(elements))
    }

    pub(crate) const fn comparator(elements: &'a [E], comparator: &'a Comparator<E>) -> Self {
        Self(LayoutKind::Comparator(elements, comparator))
    }

    /// Returns `true` if the set exposes no sorted storage.
    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        matches!(self.0, LayoutKind::Opaque)
    }

    /// The sorted elements, if the set exposes them.
    #[must_use]
    pub const fn sorted_elements(&self) -> Option<&'a [E]> {
        match self.0 {
            LayoutKind::Natural(elements) | LayoutKind::Comparator(elements, _) => Some(elements),
            LayoutKind::Opaque => None,
        }
    }
}

impl<E> Clone for Layout<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Layout<'_, E> {}

impl<E> Clone for LayoutKind<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for LayoutKind<'_, E> {}

impl<E> fmt::Debug for Layout<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            LayoutKind::Natural(elements) => formatter
                .debug_struct("Natural")
                .field("len", &elements.len())
                .finish(),
            LayoutKind::Comparator(elements, _) => formatter
                .debug_struct("Comparator")
                .field("len", &elements.len())
                .finish(),
            LayoutKind::Opaque => formatter.write_str("Opaque"),
        }
    }
}

/// Read-only access to a set of unique elements.
///
/// This trait is object safe; every operation that combines two sets takes
/// the other one as `&dyn View<E>`.
pub trait View<E> {
    /// Returns `true` if the set holds an element with the identity of
    /// `element`.
    fn contains(&self, element: &E) -> bool;

    /// Returns `true` if the set contains every element of `elements`.
    fn contains_all(&self, elements: &[E]) -> bool {
        elements.iter().all(|element| self.contains(element))
    }

    /// Returns `true` if the set contains every element of `other`.
    fn contains_set(&self, other: &dyn View<E>) -> bool {
        if other.len() > self.len() {
            return false;
        }
        let mut contained = true;
        other.range(&mut |element| {
            contained = self.contains(element);
            if contained {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
        contained
    }

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a freshly allocated copy of the elements.
    ///
    /// Sorted sets return them in ascending order.
    fn elems(&self) -> Vec<E>;

    /// Calls `visit` with each element until it returns
    /// [`ControlFlow::Break`].
    ///
    /// Sorted sets visit in ascending order.
    fn range(&self, visit: &mut dyn FnMut(&E) -> ControlFlow<()>);

    /// Reports how the elements are stored, enabling linear fast paths
    /// between compatible sets.
    fn layout(&self) -> Layout<'_, E> {
        Layout::opaque()
    }
}

/// Set algebra producing a new set of the receiver's type.
pub trait SetOperations<E>: View<E> + Sized {
    /// Elements present in both `self` and `other`.
    #[must_use]
    fn intersection(&self, other: &dyn View<E>) -> Self;

    /// Elements present in `self`, `other` or both.
    ///
    /// Where both hold the same identity the value from `other` is kept,
    /// matching `self.clone()` followed by `insert_set(other)`.
    #[must_use]
    fn union(&self, other: &dyn View<E>) -> Self;

    /// Elements of `self` that are not in `other`.
    #[must_use]
    fn difference(&self, other: &dyn View<E>) -> Self;

    /// Elements present in exactly one of `self` and `other`.
    #[must_use]
    fn symmetric_difference(&self, other: &dyn View<E>) -> Self;
}

/// In-place insertion and removal.
///
/// Bulk operations have the same effect as applying the single-element
/// operation to each element in turn.
pub trait MutableOperations<E>: View<E> {
    /// Inserts `element`, replacing the stored value with the same identity.
    ///
    /// Returns `true` if the identity was not present before.
    fn insert(&mut self, element: E) -> bool;

    /// Inserts every element of `elements`.
    ///
    /// When `elements` repeats an identity, the last value wins.
    fn insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        Self: Sized;

    /// Inserts every element of `other`.
    fn insert_set(&mut self, other: &dyn View<E>);

    /// Removes the element with the identity of `element`.
    ///
    /// Returns `true` if it was present.
    fn remove(&mut self, element: &E) -> bool;

    /// Removes every element of `elements`.
    fn remove_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        Self: Sized;

    /// Removes every element of `other`.
    fn remove_set(&mut self, other: &dyn View<E>);
}

/// A set that is modified in place.
pub trait Mutable<E>: SetOperations<E> + MutableOperations<E> + Clone {
    /// The immutable capability over the same representation.
    type Immutable: Immutable<E>;

    /// Returns an immutable deep copy.
    fn immutable_copy(&self) -> Self::Immutable;
}

/// A set whose modifying operations return a new set.
pub trait Immutable<E>: SetOperations<E> + Clone {
    /// The mutable capability over the same representation.
    type Mutable: Mutable<E>;

    /// Returns a mutable deep copy.
    fn mutable_copy(&self) -> Self::Mutable;

    /// Returns a copy of the set with `element` inserted.
    #[must_use]
    fn insert(&self, element: E) -> Self;

    /// Returns a copy of the set with every element of `elements` inserted.
    #[must_use]
    fn insert_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>;

    /// Returns a copy of the set without `element`.
    #[must_use]
    fn remove(&self, element: &E) -> Self;

    /// Returns a copy of the set without any element of `elements`.
    #[must_use]
    fn remove_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>;
}

/// Ordered access to a sorted set.
pub trait SortedView<E>: View<E> {
    /// The elements in ascending order.
    fn as_slice(&self) -> &[E];

    /// The smallest element.
    fn first(&self) -> Option<&E> {
        self.as_slice().first()
    }

    /// The largest element.
    fn last(&self) -> Option<&E> {
        self.as_slice().last()
    }

    /// Iterates over the elements in ascending order.
    fn iter(&self) -> std::slice::Iter<'_, E> {
        self.as_slice().iter()
    }
}

/// A mutable sorted set.
pub trait SortedMutable<E>: Mutable<E> + SortedView<E> {
    /// Reinterprets the set as a plain [`Mutable`] without the sorted
    /// contract.
    fn mutable(self) -> Unsorted<Self> {
        Unsorted::new(self)
    }
}

/// An immutable sorted set.
pub trait SortedImmutable<E>: Immutable<E> + SortedView<E> {
    /// Reinterprets the set as a plain [`Immutable`] without the sorted
    /// contract.
    fn immutable(self) -> Unsorted<Self> {
        Unsorted::new(self)
    }
}

/// Writes a set as `{a, b, c}` in the order `range` visits it.
pub(crate) fn debug_set<E: fmt::Debug>(
    set: &dyn View<E>,
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut entries = formatter.debug_set();
    set.range(&mut |element| {
        entries.entry(element);
        ControlFlow::Continue(())
    });
    entries.finish()
}
