//! Sorted set representations.
//!
//! Two families share one layout (a sorted, deduplicated `Vec`) and one set
//! of capabilities:
//!
//! | Family | Mutable | Immutable | Order | Identity |
//! |--------|---------|-----------|-------|----------|
//! | natural | [`SortedSet`] | [`FrozenSortedSet`] | [`Ord`] | [`Ord`] |
//! | comparator | [`SortedSetBy`] | [`FrozenSortedSetBy`] | [`Comparator`] | [`Comparator`] |
//!
//! Each family keeps its operations on a private sequence type. The public
//! types wrap that sequence and only decide which capability traits are
//! exposed.

/// Records whether a multi-set operation took the linear path.
#[inline]
fn trace_dispatch(operation: &'static str, fast_path: bool) {
    tracing::trace!(operation, fast_path, "set operation dispatched");
}

/// Implements the capability traits for a mutable and an immutable sorted
/// set type that both wrap the same sequence type in a field named `inner`.
///
/// The sequence type provides the operations; this only forwards them and
/// wraps algebra results back into the calling type.
macro_rules! sorted_capabilities {
    (
        bounds: [$($bound:tt)+],
        mutable: $mutable:ident,
        immutable: $immutable:ident $(,)?
    ) => {
        sorted_capabilities!(@shared [$($bound)+] $mutable);
        sorted_capabilities!(@shared [$($bound)+] $immutable);

        impl<E: $($bound)+> $crate::view::MutableOperations<E> for $mutable<E> {
            #[inline]
            fn insert(&mut self, element: E) -> bool {
                self.inner.insert(element)
            }

            fn insert_all<I>(&mut self, elements: I)
            where
                I: IntoIterator<Item = E>,
            {
                self.inner.insert_all(elements);
            }

            fn insert_set(&mut self, other: &dyn $crate::view::View<E>) {
                self.inner.insert_set(other);
            }

            #[inline]
            fn remove(&mut self, element: &E) -> bool {
                self.inner.remove(element)
            }

            fn remove_all<I>(&mut self, elements: I)
            where
                I: IntoIterator<Item = E>,
            {
                self.inner.remove_all(elements);
            }

            fn remove_set(&mut self, other: &dyn $crate::view::View<E>) {
                self.inner.remove_set(other);
            }
        }

        impl<E: $($bound)+> $crate::view::Mutable<E> for $mutable<E> {
            type Immutable = $immutable<E>;

            fn immutable_copy(&self) -> $immutable<E> {
                $immutable {
                    inner: self.inner.clone(),
                }
            }
        }

        impl<E: $($bound)+> $crate::view::SortedMutable<E> for $mutable<E> {}

        impl<E: $($bound)+> $crate::view::Immutable<E> for $immutable<E> {
            type Mutable = $mutable<E>;

            fn mutable_copy(&self) -> $mutable<E> {
                $mutable {
                    inner: self.inner.clone(),
                }
            }

            fn insert(&self, element: E) -> Self {
                let mut inner = self.inner.clone();
                inner.insert(element);
                Self { inner }
            }

            fn insert_all<I>(&self, elements: I) -> Self
            where
                I: IntoIterator<Item = E>,
            {
                let mut inner = self.inner.clone();
                inner.insert_all(elements);
                Self { inner }
            }

            fn remove(&self, element: &E) -> Self {
                let mut inner = self.inner.clone();
                inner.remove(element);
                Self { inner }
            }

            fn remove_all<I>(&self, elements: I) -> Self
            where
                I: IntoIterator<Item = E>,
            {
                let mut inner = self.inner.clone();
                inner.remove_all(elements);
                Self { inner }
            }
        }

        impl<E: $($bound)+> $crate::view::SortedImmutable<E> for $immutable<E> {}

        impl<E: $($bound)+> Extend<E> for $mutable<E> {
            fn extend<I: IntoIterator<Item = E>>(&mut self, elements: I) {
                self.inner.insert_all(elements);
            }
        }

        impl<'a, E: $($bound)+ + Copy + 'a> Extend<&'a E> for $mutable<E> {
            fn extend<I: IntoIterator<Item = &'a E>>(&mut self, elements: I) {
                self.inner.insert_all(elements.into_iter().copied());
            }
        }
    };

    (@shared [$($bound:tt)+] $set:ident) => {
        impl<E: $($bound)+> $crate::view::View<E> for $set<E> {
            #[inline]
            fn contains(&self, element: &E) -> bool {
                self.inner.contains(element)
            }

            fn contains_set(&self, other: &dyn $crate::view::View<E>) -> bool {
                self.inner.contains_set(other)
            }

            #[inline]
            fn len(&self) -> usize {
                self.inner.as_slice().len()
            }

            fn elems(&self) -> Vec<E> {
                self.inner.as_slice().to_vec()
            }

            fn range(&self, visit: &mut dyn FnMut(&E) -> std::ops::ControlFlow<()>) {
                let _ = self.inner.as_slice().iter().try_for_each(visit);
            }

            fn layout(&self) -> $crate::view::Layout<'_, E> {
                self.inner.layout()
            }
        }

        impl<E: $($bound)+> $crate::view::SetOperations<E> for $set<E> {
            fn intersection(&self, other: &dyn $crate::view::View<E>) -> Self {
                Self {
                    inner: self.inner.intersection(other),
                }
            }

            fn union(&self, other: &dyn $crate::view::View<E>) -> Self {
                Self {
                    inner: self.inner.union(other),
                }
            }

            fn difference(&self, other: &dyn $crate::view::View<E>) -> Self {
                Self {
                    inner: self.inner.difference(other),
                }
            }

            fn symmetric_difference(&self, other: &dyn $crate::view::View<E>) -> Self {
                Self {
                    inner: self.inner.symmetric_difference(other),
                }
            }
        }

        impl<E: $($bound)+> $crate::view::SortedView<E> for $set<E> {
            #[inline]
            fn as_slice(&self) -> &[E] {
                self.inner.as_slice()
            }
        }

        impl<E: $($bound)+ + std::fmt::Debug> std::fmt::Debug for $set<E> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::view::debug_set(self, formatter)
            }
        }

        impl<E: $($bound)+> PartialEq for $set<E> {
            fn eq(&self, other: &Self) -> bool {
                self.inner.same_elements(&other.inner)
            }
        }

        impl<E: $($bound)+> IntoIterator for $set<E> {
            type Item = E;
            type IntoIter = std::vec::IntoIter<E>;

            fn into_iter(self) -> Self::IntoIter {
                self.inner.into_vec().into_iter()
            }
        }

        impl<'a, E: $($bound)+> IntoIterator for &'a $set<E> {
            type Item = &'a E;
            type IntoIter = std::slice::Iter<'a, E>;

            fn into_iter(self) -> Self::IntoIter {
                self.inner.as_slice().iter()
            }
        }
    };
}

use sorted_capabilities;

mod comparator;
mod natural;

pub use comparator::{Comparator, FrozenSortedSetBy, SortedSetBy};
pub use natural::{FrozenSortedSet, SortedSet};
