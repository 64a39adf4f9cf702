use std::fmt;
use std::ops::ControlFlow;

use super::{Immutable, Layout, Mutable, MutableOperations, SetOperations, View};

/// A sorted set seen only through the unsorted capabilities.
///
/// Produced by [`SortedMutable::mutable`](super::SortedMutable::mutable) and
/// [`SortedImmutable::immutable`](super::SortedImmutable::immutable). The
/// wrapped set keeps its storage, so operations between an `Unsorted` and
/// another sorted set still take the linear fast paths, but
/// [`SortedView`](super::SortedView) is no longer available.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let mut plain = SortedSet::from_iter([3, 1, 2]).mutable();
/// plain.insert(0);
/// assert_eq!(plain.len(), 4);
/// assert!(plain.contains(&0));
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Unsorted<S>(S);

impl<S> Unsorted<S> {
    pub(crate) const fn new(set: S) -> Self {
        Self(set)
    }

    /// Unwraps the sorted set.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: fmt::Debug> fmt::Debug for Unsorted<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, formatter)
    }
}

impl<E, S: View<E>> View<E> for Unsorted<S> {
    #[inline]
    fn contains(&self, element: &E) -> bool {
        self.0.contains(element)
    }

    fn contains_all(&self, elements: &[E]) -> bool {
        self.0.contains_all(elements)
    }

    fn contains_set(&self, other: &dyn View<E>) -> bool {
        self.0.contains_set(other)
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    fn elems(&self) -> Vec<E> {
        self.0.elems()
    }

    fn range(&self, visit: &mut dyn FnMut(&E) -> ControlFlow<()>) {
        self.0.range(visit);
    }

    fn layout(&self) -> Layout<'_, E> {
        self.0.layout()
    }
}

impl<E, S: SetOperations<E>> SetOperations<E> for Unsorted<S> {
    fn intersection(&self, other: &dyn View<E>) -> Self {
        Self(self.0.intersection(other))
    }

    fn union(&self, other: &dyn View<E>) -> Self {
        Self(self.0.union(other))
    }

    fn difference(&self, other: &dyn View<E>) -> Self {
        Self(self.0.difference(other))
    }

    fn symmetric_difference(&self, other: &dyn View<E>) -> Self {
        Self(self.0.symmetric_difference(other))
    }
}

impl<E, S: MutableOperations<E>> MutableOperations<E> for Unsorted<S> {
    fn insert(&mut self, element: E) -> bool {
        self.0.insert(element)
    }

    fn insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        self.0.insert_all(elements);
    }

    fn insert_set(&mut self, other: &dyn View<E>) {
        self.0.insert_set(other);
    }

    fn remove(&mut self, element: &E) -> bool {
        self.0.remove(element)
    }

    fn remove_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
        Self: Sized,
    {
        self.0.remove_all(elements);
    }

    fn remove_set(&mut self, other: &dyn View<E>) {
        self.0.remove_set(other);
    }
}

impl<E, S: Mutable<E>> Mutable<E> for Unsorted<S> {
    type Immutable = Unsorted<S::Immutable>;

    fn immutable_copy(&self) -> Self::Immutable {
        Unsorted(self.0.immutable_copy())
    }
}

impl<E, S: Immutable<E>> Immutable<E> for Unsorted<S> {
    type Mutable = Unsorted<S::Mutable>;

    fn mutable_copy(&self) -> Self::Mutable {
        Unsorted(self.0.mutable_copy())
    }

    fn insert(&self, element: E) -> Self {
        Self(self.0.insert(element))
    }

    fn insert_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self(self.0.insert_all(elements))
    }

    fn remove(&self, element: &E) -> Self {
        Self(self.0.remove(element))
    }

    fn remove_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self(self.0.remove_all(elements))
    }
}
