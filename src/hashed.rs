//! Hash-backed sets.
//!
//! [`HashedSet`] and [`FrozenHashedSet`] wrap [`std::collections::HashSet`]
//! and implement the same capabilities as the sorted sets. Element identity
//! is [`Eq`] together with [`Hash`].
//!
//! A hashed set never exposes a sorted layout, so algebra against it always
//! goes through [`View::contains`] and [`View::range`]. Each operation
//! iterates whichever operand is smaller where the result allows it.
//!
//! # Hasher
//!
//! The default hasher is chosen by feature flag:
//!
//! | Feature | [`DefaultHashBuilder`] |
//! |---------|------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher` |
//! | `ahash` (without `fxhash`) | `ahash::RandomState` |
//! | neither | `std::collections::hash_map::RandomState` |
//!
//! # Examples
//!
//! ```rust
//! use setwise::prelude::*;
//!
//! let mut seen: HashedSet<&str> = ["red", "green"].into_iter().collect();
//! assert!(seen.insert("blue"));
//! assert!(!seen.insert("red"));
//!
//! let warm = SortedSet::from_iter(["orange", "red", "yellow"]);
//! let shared = seen.intersection(&warm);
//! assert_eq!(shared.elems(), vec!["red"]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::ControlFlow;

use crate::view::{Immutable, Mutable, MutableOperations, SetOperations, View, debug_set};

/// The hasher used when none is named.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used when none is named.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used when none is named.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// HashedSet
// =============================================================================

/// A mutable set backed by a [`HashSet`].
///
/// # Complexity
///
/// | Operation | Expected cost |
/// |-----------|---------------|
/// | `contains`, `insert`, `remove` | O(1) |
/// | `insert_set`, `remove_set` | O(m) |
/// | `intersection` | O(min(n, m)) lookups |
/// | `union`, `difference`, `symmetric_difference` | O(n + m) |
#[derive(Clone)]
pub struct HashedSet<E, S = DefaultHashBuilder> {
    inner: HashSet<E, S>,
}

impl<E> HashedSet<E> {
    /// Creates an empty set with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }
}

impl<E, S> HashedSet<E, S> {
    /// Creates an empty set using `hasher`.
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, E> {
        self.inner.iter()
    }

    /// Consumes the set, returning the underlying [`HashSet`].
    pub fn into_inner(self) -> HashSet<E, S> {
        self.inner
    }
}

impl<E, S> HashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// An empty set sharing this set's hasher.
    fn empty_like(&self) -> Self {
        Self::with_hasher(self.inner.hasher().clone())
    }

    fn filtered(&self, keep: impl Fn(&E) -> bool) -> Self {
        let mut result = self.empty_like();
        result
            .inner
            .extend(self.inner.iter().filter(|&element| keep(element)).cloned());
        result
    }
}

impl<E> Default for HashedSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> View<E> for HashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn contains(&self, element: &E) -> bool {
        self.inner.contains(element)
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn elems(&self) -> Vec<E> {
        self.inner.iter().cloned().collect()
    }

    fn range(&self, visit: &mut dyn FnMut(&E) -> ControlFlow<()>) {
        let _ = self.inner.iter().try_for_each(visit);
    }
}

impl<E, S> SetOperations<E> for HashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn intersection(&self, other: &dyn View<E>) -> Self {
        if other.len() >= self.inner.len() {
            return self.filtered(|element| other.contains(element));
        }
        let mut result = self.empty_like();
        other.range(&mut |element| {
            if let Some(kept) = self.inner.get(element) {
                result.inner.insert(kept.clone());
            }
            ControlFlow::Continue(())
        });
        result
    }

    fn union(&self, other: &dyn View<E>) -> Self {
        let mut result = self.clone();
        result.insert_set(other);
        result
    }

    fn difference(&self, other: &dyn View<E>) -> Self {
        self.filtered(|element| !other.contains(element))
    }

    fn symmetric_difference(&self, other: &dyn View<E>) -> Self {
        let mut result = self.filtered(|element| !other.contains(element));
        other.range(&mut |element| {
            if !self.inner.contains(element) {
                result.inner.insert(element.clone());
            }
            ControlFlow::Continue(())
        });
        result
    }
}

impl<E, S> MutableOperations<E> for HashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn insert(&mut self, element: E) -> bool {
        self.inner.replace(element).is_none()
    }

    fn insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.inner.replace(element);
        }
    }

    fn insert_set(&mut self, other: &dyn View<E>) {
        self.inner.reserve(other.len());
        other.range(&mut |element| {
            self.inner.replace(element.clone());
            ControlFlow::Continue(())
        });
    }

    #[inline]
    fn remove(&mut self, element: &E) -> bool {
        self.inner.remove(element)
    }

    fn remove_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.inner.remove(&element);
        }
    }

    fn remove_set(&mut self, other: &dyn View<E>) {
        if other.len() > self.inner.len() {
            self.inner.retain(|element| !other.contains(element));
            return;
        }
        other.range(&mut |element| {
            self.inner.remove(element);
            ControlFlow::Continue(())
        });
    }
}

impl<E, S> Mutable<E> for HashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Immutable = FrozenHashedSet<E, S>;

    fn immutable_copy(&self) -> FrozenHashedSet<E, S> {
        FrozenHashedSet {
            inner: self.clone(),
        }
    }
}

impl<E, S> FromIterator<E> for HashedSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(elements: I) -> Self {
        let mut inner = HashSet::with_hasher(S::default());
        for element in elements {
            inner.replace(element);
        }
        Self { inner }
    }
}

impl<E, S> Extend<E> for HashedSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        for element in elements {
            self.inner.replace(element);
        }
    }
}

impl<E, S> IntoIterator for HashedSet<E, S> {
    type Item = E;
    type IntoIter = std::collections::hash_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E, S> IntoIterator for &'a HashedSet<E, S> {
    type Item = &'a E;
    type IntoIter = std::collections::hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E, S> fmt::Debug for HashedSet<E, S>
where
    E: Eq + Hash + Clone + fmt::Debug,
    S: BuildHasher + Clone,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_set(self, formatter)
    }
}

impl<E: Eq + Hash, S: BuildHasher> PartialEq for HashedSet<E, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Eq + Hash, S: BuildHasher> Eq for HashedSet<E, S> {}

// =============================================================================
// FrozenHashedSet
// =============================================================================

/// An immutable set backed by a [`HashSet`].
///
/// Every modifying operation copies the set. Prefer [`HashedSet`] when
/// building a set up element by element.
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let base: FrozenHashedSet<u8> = [1, 2].into_iter().collect();
/// let grown = base.insert(3);
/// assert_eq!(base.len(), 2);
/// assert_eq!(grown.len(), 3);
/// ```
#[derive(Clone)]
pub struct FrozenHashedSet<E, S = DefaultHashBuilder> {
    inner: HashedSet<E, S>,
}

impl<E> FrozenHashedSet<E> {
    /// Creates an empty set with the default hasher.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashedSet::new(),
        }
    }
}

impl<E, S> FrozenHashedSet<E, S> {
    /// Creates an empty set using `hasher`.
    pub const fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashedSet::with_hasher(hasher),
        }
    }

    /// Iterates over the elements in unspecified order.
    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, E> {
        self.inner.iter()
    }
}

impl<E> Default for FrozenHashedSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> View<E> for FrozenHashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    #[inline]
    fn contains(&self, element: &E) -> bool {
        self.inner.contains(element)
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn elems(&self) -> Vec<E> {
        self.inner.elems()
    }

    fn range(&self, visit: &mut dyn FnMut(&E) -> ControlFlow<()>) {
        self.inner.range(visit);
    }
}

impl<E, S> SetOperations<E> for FrozenHashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn intersection(&self, other: &dyn View<E>) -> Self {
        Self {
            inner: self.inner.intersection(other),
        }
    }

    fn union(&self, other: &dyn View<E>) -> Self {
        Self {
            inner: self.inner.union(other),
        }
    }

    fn difference(&self, other: &dyn View<E>) -> Self {
        Self {
            inner: self.inner.difference(other),
        }
    }

    fn symmetric_difference(&self, other: &dyn View<E>) -> Self {
        Self {
            inner: self.inner.symmetric_difference(other),
        }
    }
}

impl<E, S> Immutable<E> for FrozenHashedSet<E, S>
where
    E: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Mutable = HashedSet<E, S>;

    fn mutable_copy(&self) -> HashedSet<E, S> {
        self.inner.clone()
    }

    fn insert(&self, element: E) -> Self {
        let mut inner = self.inner.clone();
        MutableOperations::insert(&mut inner, element);
        Self { inner }
    }

    fn insert_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut inner = self.inner.clone();
        MutableOperations::insert_all(&mut inner, elements);
        Self { inner }
    }

    fn remove(&self, element: &E) -> Self {
        let mut inner = self.inner.clone();
        MutableOperations::remove(&mut inner, element);
        Self { inner }
    }

    fn remove_all<I>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut inner = self.inner.clone();
        MutableOperations::remove_all(&mut inner, elements);
        Self { inner }
    }
}

impl<E, S> FromIterator<E> for FrozenHashedSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(elements: I) -> Self {
        Self {
            inner: elements.into_iter().collect(),
        }
    }
}

impl<E, S> IntoIterator for FrozenHashedSet<E, S> {
    type Item = E;
    type IntoIter = std::collections::hash_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, E, S> IntoIterator for &'a FrozenHashedSet<E, S> {
    type Item = &'a E;
    type IntoIter = std::collections::hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<E, S> fmt::Debug for FrozenHashedSet<E, S>
where
    E: Eq + Hash + Clone + fmt::Debug,
    S: BuildHasher + Clone,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}

impl<E: Eq + Hash, S: BuildHasher> PartialEq for FrozenHashedSet<E, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Eq + Hash, S: BuildHasher> Eq for FrozenHashedSet<E, S> {}

static_assertions::assert_impl_all!(HashedSet<i32>: Send, Sync);
static_assertions::assert_impl_all!(FrozenHashedSet<String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorted::SortedSet;
    use rstest::rstest;

    /// Hashed and compared by `key` only.
    #[derive(Clone, Copy, Debug)]
    struct Keyed {
        key: u8,
        version: u8,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl Hash for Keyed {
        fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
            self.key.hash(state);
        }
    }

    fn sorted<E: Ord + Clone>(set: &impl View<E>) -> Vec<E> {
        let mut elements = set.elems();
        elements.sort();
        elements
    }

    #[rstest]
    #[case::new_element(4, true)]
    #[case::existing_element(2, false)]
    fn insert_reports_new_identities(#[case] element: i32, #[case] expected: bool) {
        let mut set: HashedSet<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(set.insert(element), expected);
        assert!(set.contains(&element));
    }

    #[rstest]
    fn insert_replaces_the_stored_value() {
        let mut set = HashedSet::new();
        set.insert(Keyed { key: 1, version: 0 });
        assert!(!set.insert(Keyed { key: 1, version: 5 }));
        assert_eq!(set.len(), 1);
        assert_eq!(set.elems()[0].version, 5);
    }

    #[rstest]
    fn from_iter_keeps_the_last_duplicate() {
        let set: HashedSet<Keyed> = [
            Keyed { key: 7, version: 1 },
            Keyed { key: 7, version: 2 },
        ]
        .into_iter()
        .collect();
        assert_eq!(set.elems()[0].version, 2);
    }

    #[rstest]
    #[case::smaller_other(vec![2, 9])]
    #[case::larger_other(vec![0, 2, 4, 6, 8, 9, 10])]
    fn intersection_keeps_receiver_values(#[case] other: Vec<u8>) {
        let set: HashedSet<Keyed> = [2, 4, 5]
            .into_iter()
            .map(|key| Keyed { key, version: 1 })
            .collect();
        let other: HashedSet<Keyed> = other
            .into_iter()
            .map(|key| Keyed { key, version: 0 })
            .collect();
        let shared = set.intersection(&other);
        assert!(shared.contains(&Keyed { key: 2, version: 0 }));
        assert!(shared.iter().all(|element| element.version == 1));
    }

    #[rstest]
    fn algebra_against_sorted_set() {
        let set: HashedSet<i32> = [1, 2, 3, 4].into_iter().collect();
        let other = SortedSet::from_iter([3, 4, 5]);

        assert_eq!(sorted(&set.union(&other)), vec![1, 2, 3, 4, 5]);
        assert_eq!(sorted(&set.intersection(&other)), vec![3, 4]);
        assert_eq!(sorted(&set.difference(&other)), vec![1, 2]);
        assert_eq!(sorted(&set.symmetric_difference(&other)), vec![1, 2, 5]);
        assert!(!set.contains_set(&other));
        assert!(set.contains_set(&SortedSet::from_iter([1, 4])));
    }

    #[rstest]
    #[case::fewer_to_remove(vec![2, 3])]
    #[case::more_to_remove(vec![0, 2, 3, 7, 8, 9, 10])]
    fn remove_set_drops_shared_elements(#[case] doomed: Vec<i32>) {
        let mut set: HashedSet<i32> = [1, 2, 3, 4].into_iter().collect();
        set.remove_set(&SortedSet::from_iter(doomed));
        assert_eq!(sorted(&set), vec![1, 4]);
    }

    #[rstest]
    fn frozen_operations_leave_the_receiver_untouched() {
        let base: FrozenHashedSet<i32> = [1, 2, 3].into_iter().collect();
        let changed = base.remove(&2).insert_all([7, 8]).remove_all([1]);
        assert_eq!(sorted(&base), vec![1, 2, 3]);
        assert_eq!(sorted(&changed), vec![3, 7, 8]);
    }

    #[rstest]
    fn copies_are_independent() {
        let mut set: HashedSet<i32> = [1].into_iter().collect();
        let frozen = set.immutable_copy();
        let mut thawed = frozen.mutable_copy();
        set.insert(2);
        thawed.insert(3);
        assert_eq!(frozen.len(), 1);
        assert_eq!(sorted(&set), vec![1, 2]);
        assert_eq!(sorted(&thawed), vec![1, 3]);
    }

    #[rstest]
    fn range_stops_on_break() {
        let set: HashedSet<i32> = (0..10).collect();
        let mut visited = 0;
        set.range(&mut |_| {
            visited += 1;
            if visited == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(visited, 3);
    }

    #[rstest]
    fn debug_lists_elements() {
        let set: HashedSet<i32> = [5].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{5}");
    }
}
