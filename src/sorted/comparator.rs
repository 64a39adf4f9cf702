//! Sorted sets ordered by a caller-supplied [`Comparator`].
//!
//! A comparator carries two functions. The order function places elements
//! and groups equal keys into runs; the identity function decides which
//! members of a run are the same element. Several distinct elements may
//! therefore share one order key.
//!
//! Linear fast paths apply only between sets that share the same
//! comparator handle, since two independently built comparators may order
//! elements differently.

use std::cmp::Ordering;
use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::{sorted_capabilities, trace_dispatch};
use crate::error::SequenceError;
use crate::sequence::{
    check_sorted_unique_by, delete_from_by, difference_by, includes_by, intersection_by,
    merge_into_by, stable_sort_by, stable_sort_dedup_by, symmetric_difference_by,
};
use crate::view::{Layout, LayoutKind, View};

const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "elements must be sorted by the comparator with unique identities";

type OrderFn<E> = dyn Fn(&E, &E) -> Ordering;
type IdentityFn<E> = dyn Fn(&E, &E) -> bool;

// =============================================================================
// Comparator
// =============================================================================

struct Functions<E> {
    order: Box<OrderFn<E>>,
    identity: Option<Box<IdentityFn<E>>>,
}

/// A shared ordering and identity pair for [`SortedSetBy`].
///
/// Cloning a comparator is cheap and yields a handle to the same functions.
/// Sets built from clones of one comparator recognize each other and use the
/// linear algorithms for bulk and algebra operations.
///
/// # Contract
///
/// `order` must be a total order. The identity function must only report
/// `true` for elements that `order` considers equal. Breaking either rule
/// yields wrong membership results but never a panic.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use setwise::Comparator;
///
/// let by_length = Comparator::with_identity(
///     |a: &String, b: &String| a.len().cmp(&b.len()),
///     |a: &String, b: &String| a == b,
/// );
/// let (ab, cd) = ("ab".to_string(), "cd".to_string());
/// assert_eq!(by_length.order(&ab, &cd), Ordering::Equal);
/// assert!(!by_length.identical(&ab, &cd));
/// assert!(by_length.same_as(&by_length.clone()));
/// ```
pub struct Comparator<E> {
    functions: Rc<Functions<E>>,
}

impl<E> Comparator<E> {
    /// Creates a comparator whose identity is order equality.
    pub fn new<F>(order: F) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
    {
        Self {
            functions: Rc::new(Functions {
                order: Box::new(order),
                identity: None,
            }),
        }
    }

    /// Creates a comparator with an identity function separate from the
    /// order.
    pub fn with_identity<F, G>(order: F, identity: G) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
        G: Fn(&E, &E) -> bool + 'static,
    {
        Self {
            functions: Rc::new(Functions {
                order: Box::new(order),
                identity: Some(Box::new(identity)),
            }),
        }
    }

    /// Compares two elements by order key.
    #[inline]
    pub fn order(&self, left: &E, right: &E) -> Ordering {
        (self.functions.order)(left, right)
    }

    /// Returns `true` if two elements are the same element.
    #[inline]
    pub fn identical(&self, left: &E, right: &E) -> bool {
        match &self.functions.identity {
            Some(identity) => identity(left, right),
            None => self.order(left, right) == Ordering::Equal,
        }
    }

    /// Returns `true` if both handles refer to the same functions.
    #[inline]
    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.functions, &other.functions)
    }
}

impl<E> Clone for Comparator<E> {
    fn clone(&self) -> Self {
        Self {
            functions: Rc::clone(&self.functions),
        }
    }
}

impl<E> fmt::Debug for Comparator<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Comparator")
            .field("distinct_identity", &self.functions.identity.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// A `Vec` sorted by `comparator` with unique identities, and every
/// operation over it.
#[derive(Clone)]
struct ComparatorSequence<E> {
    elements: Vec<E>,
    comparator: Comparator<E>,
}

impl<E: Clone> ComparatorSequence<E> {
    const fn empty(comparator: Comparator<E>) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    fn from_unsorted(comparator: Comparator<E>, mut elements: Vec<E>) -> Self {
        stable_sort_dedup_by(
            &mut elements,
            |left, right| comparator.order(left, right),
            |left, right| comparator.identical(left, right),
        );
        Self {
            elements,
            comparator,
        }
    }

    fn check(comparator: &Comparator<E>, elements: &[E]) -> Result<(), SequenceError> {
        check_sorted_unique_by(
            elements,
            |left, right| comparator.order(left, right),
            |left, right| comparator.identical(left, right),
        )
    }

    fn from_sorted_vec(comparator: Comparator<E>, elements: Vec<E>) -> Self {
        debug_assert!(
            Self::check(&comparator, &elements).is_ok(),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self {
            elements,
            comparator,
        }
    }

    fn try_from_sorted_vec(
        comparator: Comparator<E>,
        elements: Vec<E>,
    ) -> Result<Self, SequenceError> {
        Self::check(&comparator, &elements)?;
        Ok(Self {
            elements,
            comparator,
        })
    }

    fn as_slice(&self) -> &[E] {
        &self.elements
    }

    fn into_vec(self) -> Vec<E> {
        self.elements
    }

    fn layout(&self) -> Layout<'_, E> {
        Layout::comparator(&self.elements, &self.comparator)
    }

    /// Returns the elements of `other` if it is sorted by this comparator.
    fn shared_layout<'a>(&self, other: &'a dyn View<E>) -> Option<&'a [E]> {
        match other.layout().0 {
            LayoutKind::Comparator(elements, comparator) if comparator.same_as(&self.comparator) => {
                Some(elements)
            }
            _ => None,
        }
    }

    fn same_elements(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self.elements.iter().all(|element| other.contains(element))
    }

    /// Locates `element`: `Ok` with its index, or `Err` with the end of the
    /// run its order key belongs to.
    fn search(&self, element: &E) -> Result<usize, usize> {
        let start = self
            .elements
            .partition_point(|probe| self.comparator.order(probe, element) == Ordering::Less);
        for (offset, candidate) in self.elements[start..].iter().enumerate() {
            if self.comparator.order(element, candidate) != Ordering::Equal {
                return Err(start + offset);
            }
            if self.comparator.identical(element, candidate) {
                return Ok(start + offset);
            }
        }
        Err(self.elements.len())
    }

    fn contains(&self, element: &E) -> bool {
        self.search(element).is_ok()
    }

    fn contains_set(&self, other: &dyn View<E>) -> bool {
        if other.len() > self.elements.len() {
            return false;
        }
        if let Some(elements) = self.shared_layout(other) {
            trace_dispatch("contains_set", true);
            let comparator = &self.comparator;
            return includes_by(
                &self.elements,
                elements,
                |left, right| comparator.order(left, right),
                |left, right| comparator.identical(left, right),
            );
        }
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

    fn with_elements(&self, elements: Vec<E>) -> Self {
        Self {
            elements,
            comparator: self.comparator.clone(),
        }
    }

    fn intersection(&self, other: &dyn View<E>) -> Self {
        if let Some(elements) = self.shared_layout(other) {
            trace_dispatch("intersection", true);
            let comparator = &self.comparator;
            return self.with_elements(intersection_by(
                &self.elements,
                elements,
                |left, right| comparator.order(left, right),
                |left, right| comparator.identical(left, right),
            ));
        }
        trace_dispatch("intersection", false);
        self.with_elements(
            self.elements
                .iter()
                .filter(|element| other.contains(element))
                .cloned()
                .collect(),
        )
    }

    fn union(&self, other: &dyn View<E>) -> Self {
        let mut result = self.clone();
        result.insert_set(other);
        result
    }

    fn difference(&self, other: &dyn View<E>) -> Self {
        if let Some(elements) = self.shared_layout(other) {
            trace_dispatch("difference", true);
            let comparator = &self.comparator;
            return self.with_elements(difference_by(
                &self.elements,
                elements,
                |left, right| comparator.order(left, right),
                |left, right| comparator.identical(left, right),
            ));
        }
        trace_dispatch("difference", false);
        self.with_elements(
            self.elements
                .iter()
                .filter(|element| !other.contains(element))
                .cloned()
                .collect(),
        )
    }

    fn symmetric_difference(&self, other: &dyn View<E>) -> Self {
        if let Some(elements) = self.shared_layout(other) {
            trace_dispatch("symmetric_difference", true);
            let comparator = &self.comparator;
            return self.with_elements(symmetric_difference_by(
                &self.elements,
                elements,
                |left, right| comparator.order(left, right),
                |left, right| comparator.identical(left, right),
            ));
        }
        trace_dispatch("symmetric_difference", false);
        let mut result = self.with_elements(
            self.elements
                .iter()
                .filter(|element| !other.contains(element))
                .cloned()
                .collect(),
        );
        let mut only_other = Vec::new();
        other.range(&mut |element| {
            if !self.contains(element) {
                only_other.push(element.clone());
            }
            ControlFlow::Continue(())
        });
        result.insert_all(only_other);
        result
    }

    fn insert(&mut self, element: E) -> bool {
        match self.search(&element) {
            Ok(index) => {
                self.elements[index] = element;
                false
            }
            Err(index) => {
                self.elements.insert(index, element);
                true
            }
        }
    }

    fn insert_all<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        let batch = Self::from_unsorted(self.comparator.clone(), elements.into_iter().collect());
        self.merge(batch.elements);
    }

    fn merge(&mut self, batch: Vec<E>) {
        let comparator = &self.comparator;
        merge_into_by(
            &mut self.elements,
            batch,
            |left, right| comparator.order(left, right),
            |left, right| comparator.identical(left, right),
        );
    }

    fn insert_set(&mut self, other: &dyn View<E>) {
        if let Some(elements) = self.shared_layout(other) {
            trace_dispatch("insert_set", true);
            self.merge(elements.to_vec());
            return;
        }
        trace_dispatch("insert_set", false);
        let layout = other.layout();
        self.insert_all(
            layout
                .sorted_elements()
                .map_or_else(|| other.elems(), <[E]>::to_vec),
        );
    }

    fn remove(&mut self, element: &E) -> bool {
        match self.search(element) {
            Ok(index) => {
                self.elements.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    fn delete(&mut self, batch: &[E]) {
        let comparator = &self.comparator;
        delete_from_by(
            &mut self.elements,
            batch,
            |left, right| comparator.order(left, right),
            |left, right| comparator.identical(left, right),
        );
    }

    fn remove_all<I: IntoIterator<Item = E>>(&mut self, elements: I) {
        let mut batch: Vec<E> = elements.into_iter().collect();
        let comparator = &self.comparator;
        stable_sort_by(&mut batch, |left, right| comparator.order(left, right));
        self.delete(&batch);
    }

    fn remove_set(&mut self, other: &dyn View<E>) {
        if let Some(elements) = self.shared_layout(other) {
            trace_dispatch("remove_set", true);
            self.delete(elements);
            return;
        }
        trace_dispatch("remove_set", false);
        let layout = other.layout();
        self.remove_all(
            layout
                .sorted_elements()
                .map_or_else(|| other.elems(), <[E]>::to_vec),
        );
    }
}

// =============================================================================
// SortedSetBy
// =============================================================================

/// A mutable set ordered by a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let mut words = SortedSetBy::by_identity(
///     |a: &&str, b: &&str| a.len().cmp(&b.len()),
///     |a: &&str, b: &&str| a == b,
///     ["ab", "cd"],
/// );
/// assert!(words.contains(&"ab"));
/// assert!(words.contains(&"cd"));
/// assert_eq!(words.len(), 2);
///
/// words.insert("e");
/// assert_eq!(words.as_slice(), &["e", "ab", "cd"]);
/// ```
#[derive(Clone)]
pub struct SortedSetBy<E> {
    inner: ComparatorSequence<E>,
}

impl<E: Clone> SortedSetBy<E> {
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub const fn new(comparator: Comparator<E>) -> Self {
        Self {
            inner: ComparatorSequence::empty(comparator),
        }
    }

    /// Creates a set ordered by `comparator` holding `elements`.
    ///
    /// When `elements` repeats an identity, the last value wins.
    pub fn from_elements<I>(comparator: Comparator<E>, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            inner: ComparatorSequence::from_unsorted(comparator, elements.into_iter().collect()),
        }
    }

    /// Creates a set ordered by `order`, with order equality as identity.
    pub fn by<F, I>(order: F, elements: I) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
        I: IntoIterator<Item = E>,
    {
        Self::from_elements(Comparator::new(order), elements)
    }

    /// Creates a set ordered by `order` with a separate `identity`.
    pub fn by_identity<F, G, I>(order: F, identity: G, elements: I) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
        G: Fn(&E, &E) -> bool + 'static,
        I: IntoIterator<Item = E>,
    {
        Self::from_elements(Comparator::with_identity(order, identity), elements)
    }

    /// Creates a set from a `Vec` already sorted by `comparator`, without
    /// sorting it.
    ///
    /// # Preconditions
    ///
    /// `elements` must be sorted by the comparator's order with no repeated
    /// identity. This is checked with `debug_assert!` only.
    #[must_use]
    pub fn from_sorted_vec(comparator: Comparator<E>, elements: Vec<E>) -> Self {
        Self {
            inner: ComparatorSequence::from_sorted_vec(comparator, elements),
        }
    }

    /// Creates a set from a `Vec` after checking that it is sorted by
    /// `comparator` with unique identities.
    ///
    /// # Errors
    ///
    /// Returns the first [`SequenceError`] found in `elements`.
    pub fn try_from_sorted_vec(
        comparator: Comparator<E>,
        elements: Vec<E>,
    ) -> Result<Self, SequenceError> {
        ComparatorSequence::try_from_sorted_vec(comparator, elements).map(|inner| Self { inner })
    }

    /// The comparator shared by this set and every set derived from it.
    #[must_use]
    pub const fn comparator(&self) -> &Comparator<E> {
        &self.inner.comparator
    }

    /// Consumes the set, returning its elements in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.inner.into_vec()
    }
}

// =============================================================================
// FrozenSortedSetBy
// =============================================================================

/// An immutable set ordered by a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use setwise::prelude::*;
///
/// let by_tens = Comparator::new(|a: &u32, b: &u32| (a / 10).cmp(&(b / 10)));
/// let decades = FrozenSortedSetBy::from_elements(by_tens, [31, 12, 15, 40]);
/// // 15 replaces 12: both order as the same decade.
/// assert_eq!(decades.as_slice(), &[15, 31, 40]);
///
/// let fewer = decades.remove(&39);
/// assert_eq!(fewer.as_slice(), &[15, 40]);
/// assert_eq!(decades.len(), 3);
/// ```
#[derive(Clone)]
pub struct FrozenSortedSetBy<E> {
    inner: ComparatorSequence<E>,
}

impl<E: Clone> FrozenSortedSetBy<E> {
    /// Creates an empty set ordered by `comparator`.
    #[must_use]
    pub const fn new(comparator: Comparator<E>) -> Self {
        Self {
            inner: ComparatorSequence::empty(comparator),
        }
    }

    /// Creates a set ordered by `comparator` holding `elements`.
    pub fn from_elements<I>(comparator: Comparator<E>, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            inner: ComparatorSequence::from_unsorted(comparator, elements.into_iter().collect()),
        }
    }

    /// Creates a set ordered by `order`, with order equality as identity.
    pub fn by<F, I>(order: F, elements: I) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
        I: IntoIterator<Item = E>,
    {
        Self::from_elements(Comparator::new(order), elements)
    }

    /// Creates a set ordered by `order` with a separate `identity`.
    pub fn by_identity<F, G, I>(order: F, identity: G, elements: I) -> Self
    where
        F: Fn(&E, &E) -> Ordering + 'static,
        G: Fn(&E, &E) -> bool + 'static,
        I: IntoIterator<Item = E>,
    {
        Self::from_elements(Comparator::with_identity(order, identity), elements)
    }

    /// See [`SortedSetBy::from_sorted_vec`].
    #[must_use]
    pub fn from_sorted_vec(comparator: Comparator<E>, elements: Vec<E>) -> Self {
        Self {
            inner: ComparatorSequence::from_sorted_vec(comparator, elements),
        }
    }

    /// See [`SortedSetBy::try_from_sorted_vec`].
    ///
    /// # Errors
    ///
    /// Returns the first [`SequenceError`] found in `elements`.
    pub fn try_from_sorted_vec(
        comparator: Comparator<E>,
        elements: Vec<E>,
    ) -> Result<Self, SequenceError> {
        ComparatorSequence::try_from_sorted_vec(comparator, elements).map(|inner| Self { inner })
    }

    /// The comparator shared by this set and every set derived from it.
    #[must_use]
    pub const fn comparator(&self) -> &Comparator<E> {
        &self.inner.comparator
    }

    /// Consumes the set, returning its elements in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.inner.into_vec()
    }
}

sorted_capabilities! {
    bounds: [Clone],
    mutable: SortedSetBy,
    immutable: FrozenSortedSetBy,
}

static_assertions::assert_not_impl_any!(SortedSetBy<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(FrozenSortedSetBy<String>: Send, Sync);
