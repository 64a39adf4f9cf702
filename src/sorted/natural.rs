//! Sorted sets ordered by the element's own [`Ord`].
//!
//! [`SortedSet`] and [`FrozenSortedSet`] store their elements in a strictly
//! ascending `Vec`. Single-element operations use binary search. Bulk and
//! algebra operations against another natural-order set run in linear time
//! over both slices; against any other [`View`] they fall back to the other
//! set's `contains` and `range`.

use std::ops::ControlFlow;

use super::{sorted_capabilities, trace_dispatch};
use crate::error::SequenceError;
use crate::sequence::{
    check_sorted_unique, delete_unique, difference_unique, includes_unique, intersection_unique,
    merge_unique, stable_sort_dedup, symmetric_difference_unique, union_unique,
};
use crate::view::{Layout, LayoutKind, View};

const SORTED_INVARIANT_PANIC_MESSAGE: &str = "elements must be strictly ascending";

// =============================================================================
// Sequence
// =============================================================================

/// A strictly ascending `Vec` and every operation over it.
#[derive(Clone, Hash)]
struct NaturalSequence<E>(Vec<E>);

impl<E: Ord + Clone> NaturalSequence<E> {
    fn from_unsorted(mut elements: Vec<E>) -> Self {
        stable_sort_dedup(&mut elements);
        Self(elements)
    }

    fn from_sorted_vec(elements: Vec<E>) -> Self {
        debug_assert!(
            check_sorted_unique(&elements).is_ok(),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self(elements)
    }

    fn try_from_sorted_vec(elements: Vec<E>) -> Result<Self, SequenceError> {
        check_sorted_unique(&elements)?;
        Ok(Self(elements))
    }

    fn as_slice(&self) -> &[E] {
        &self.0
    }

    fn into_vec(self) -> Vec<E> {
        self.0
    }

    fn layout(&self) -> Layout<'_, E> {
        Layout::natural(&self.0)
    }

    fn same_elements(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn contains(&self, element: &E) -> bool {
        self.0.binary_search(element).is_ok()
    }

    fn contains_set(&self, other: &dyn View<E>) -> bool {
        if other.len() > self.0.len() {
            return false;
        }
        match other.layout().0 {
            LayoutKind::Natural(elements) => {
                trace_dispatch("contains_set", true);
                includes_unique(&self.0, elements)
            }
            LayoutKind::Comparator(elements, _) => {
                trace_dispatch("contains_set", false);
                elements.iter().all(|element| self.contains(element))
            }
            LayoutKind::Opaque => {
                trace_dispatch("contains_set", false);
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
        }
    }

    fn intersection(&self, other: &dyn View<E>) -> Self {
        if let LayoutKind::Natural(elements) = other.layout().0 {
            trace_dispatch("intersection", true);
            return Self(intersection_unique(&self.0, elements));
        }
        trace_dispatch("intersection", false);
        Self(
            self.0
                .iter()
                .filter(|element| other.contains(element))
                .cloned()
                .collect(),
        )
    }

    fn union(&self, other: &dyn View<E>) -> Self {
        if let LayoutKind::Natural(elements) = other.layout().0 {
            trace_dispatch("union", true);
            return Self(union_unique(&self.0, elements));
        }
        let mut result = self.clone();
        result.insert_set(other);
        result
    }

    fn difference(&self, other: &dyn View<E>) -> Self {
        if let LayoutKind::Natural(elements) = other.layout().0 {
            trace_dispatch("difference", true);
            return Self(difference_unique(&self.0, elements));
        }
        trace_dispatch("difference", false);
        Self(
            self.0
                .iter()
                .filter(|element| !other.contains(element))
                .cloned()
                .collect(),
        )
    }

    fn symmetric_difference(&self, other: &dyn View<E>) -> Self {
        if let LayoutKind::Natural(elements) = other.layout().0 {
            trace_dispatch("symmetric_difference", true);
            return Self(symmetric_difference_unique(&self.0, elements));
        }
        trace_dispatch("symmetric_difference", false);
        let mut result: Vec<E> = self
            .0
            .iter()
            .filter(|element| !other.contains(element))
            .cloned()
            .collect();
        let mut only_other = Vec::new();
        other.range(&mut |element| {
            if !self.contains(element) {
                only_other.push(element.clone());
            }
            ControlFlow::Continue(())
        });
        stable_sort_dedup(&mut only_other);
        merge_unique(&mut result, only_other);
        Self(result)
    }

    fn insert(&mut self, element: E) -> bool {
        match self.0.binary_search(&element) {
            Ok(index) => {
                self.0[index] = element;
                false
            }
            Err(index) => {
                self.0.insert(index, element);
                true
            }
        }
    }

    fn insert_all<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        let batch = Self::from_unsorted(elements.into_iter().collect());
        merge_unique(&mut self.0, batch.0);
    }

    fn insert_set(&mut self, other: &dyn View<E>) {
        let layout = other.layout();
        if let LayoutKind::Natural(elements) = layout.0 {
            trace_dispatch("insert_set", true);
            merge_unique(&mut self.0, elements.to_vec());
            return;
        }
        trace_dispatch("insert_set", false);
        let batch = Self::from_unsorted(
            layout
                .sorted_elements()
                .map_or_else(|| other.elems(), <[E]>::to_vec),
        );
        merge_unique(&mut self.0, batch.0);
    }

    fn remove(&mut self, element: &E) -> bool {
        match self.0.binary_search(element) {
            Ok(index) => {
                self.0.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    fn remove_all<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        let batch = Self::from_unsorted(elements.into_iter().collect());
        delete_unique(&mut self.0, &batch.0);
    }

    fn remove_set(&mut self, other: &dyn View<E>) {
        let layout = other.layout();
        if let LayoutKind::Natural(elements) = layout.0 {
            trace_dispatch("remove_set", true);
            delete_unique(&mut self.0, elements);
            return;
        }
        trace_dispatch("remove_set", false);
        let batch = Self::from_unsorted(
            layout
                .sorted_elements()
                .map_or_else(|| other.elems(), <[E]>::to_vec),
        );
        delete_unique(&mut self.0, &batch.0);
    }
}

// =============================================================================
// SortedSet
// =============================================================================

/// A mutable set ordered by the element's [`Ord`].
///
/// Elements are kept in a strictly ascending `Vec`. [`Ord`] defines both the
/// position of an element and its identity: inserting a value equal to a
/// stored one replaces the stored value.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let mut set: SortedSet<i32> = [3, 1, 4, 1, 5, 9, 2, 6].into_iter().collect();
/// assert_eq!(set.len(), 7);
/// assert_eq!(set.elems(), vec![1, 2, 3, 4, 5, 6, 9]);
///
/// assert!(set.insert(7));
/// assert!(!set.insert(7));
/// set.remove_all([1, 9]);
/// assert_eq!(set.first(), Some(&2));
/// assert_eq!(set.last(), Some(&7));
/// ```
#[derive(Clone, Hash)]
pub struct SortedSet<E> {
    inner: NaturalSequence<E>,
}

impl<E> SortedSet<E> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: NaturalSequence(Vec::new()),
        }
    }
}

impl<E: Ord + Clone> SortedSet<E> {
    /// Creates a set from a strictly ascending `Vec` without sorting it.
    ///
    /// # Preconditions
    ///
    /// `elements` must be strictly ascending. This is checked with
    /// `debug_assert!` only; in release builds unsorted input yields a set
    /// with wrong membership results but never undefined behavior.
    ///
    /// # Complexity
    ///
    /// O(1) in release builds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setwise::prelude::*;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![1, 2, 3]);
    /// assert!(set.contains(&2));
    /// ```
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<E>) -> Self {
        Self {
            inner: NaturalSequence::from_sorted_vec(elements),
        }
    }

    /// Creates a set from a `Vec` after checking that it is strictly
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns the first [`SequenceError`] found in `elements`.
    pub fn try_from_sorted_vec(elements: Vec<E>) -> Result<Self, SequenceError> {
        NaturalSequence::try_from_sorted_vec(elements).map(|inner| Self { inner })
    }

    /// Consumes the set, returning its elements in ascending order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.inner.into_vec()
    }
}

impl<E> Default for SortedSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord + Clone> FromIterator<E> for SortedSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: NaturalSequence::from_unsorted(iter.into_iter().collect()),
        }
    }
}

impl<E: Ord + Clone> Eq for SortedSet<E> {}

// =============================================================================
// FrozenSortedSet
// =============================================================================

/// An immutable set ordered by the element's [`Ord`].
///
/// Every modifying operation leaves the receiver untouched and returns a new
/// set.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let base = FrozenSortedSet::from_iter([1, 2, 3]);
/// let grown = base.insert(4);
/// assert_eq!(base.len(), 3);
/// assert_eq!(grown.as_slice(), &[1, 2, 3, 4]);
///
/// let mut editable = grown.mutable_copy();
/// editable.remove(&1);
/// assert_eq!(editable.elems(), vec![2, 3, 4]);
/// ```
#[derive(Clone, Hash)]
pub struct FrozenSortedSet<E> {
    inner: NaturalSequence<E>,
}

impl<E> FrozenSortedSet<E> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: NaturalSequence(Vec::new()),
        }
    }
}

impl<E: Ord + Clone> FrozenSortedSet<E> {
    /// Creates a set from a strictly ascending `Vec` without sorting it.
    ///
    /// See [`SortedSet::from_sorted_vec`] for the preconditions.
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<E>) -> Self {
        Self {
            inner: NaturalSequence::from_sorted_vec(elements),
        }
    }

    /// Creates a set from a `Vec` after checking that it is strictly
    /// ascending.
    ///
    /// # Errors
    ///
    /// Returns the first [`SequenceError`] found in `elements`.
    pub fn try_from_sorted_vec(elements: Vec<E>) -> Result<Self, SequenceError> {
        NaturalSequence::try_from_sorted_vec(elements).map(|inner| Self { inner })
    }

    /// Consumes the set, returning its elements in ascending order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.inner.into_vec()
    }
}

impl<E> Default for FrozenSortedSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord + Clone> FromIterator<E> for FrozenSortedSet<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            inner: NaturalSequence::from_unsorted(iter.into_iter().collect()),
        }
    }
}

impl<E: Ord + Clone> Eq for FrozenSortedSet<E> {}

sorted_capabilities! {
    bounds: [Ord + Clone],
    mutable: SortedSet,
    immutable: FrozenSortedSet,
}

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(FrozenSortedSet<String>: Send, Sync);
