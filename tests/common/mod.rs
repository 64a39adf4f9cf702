//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::cmp::Ordering;
use std::ops::ControlFlow;

use setwise::prelude::*;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output to the test harness.
///
/// Set `RUST_LOG=setwise=trace` to see which operations took the linear
/// path.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

// =============================================================================
// ExternalSet
// =============================================================================

/// A set implemented outside the crate, visible only through [`View`].
///
/// Lookups are linear scans; it exists to force every operation onto the
/// generic path.
#[derive(Clone, Debug)]
pub struct ExternalSet<E>(Vec<E>);

impl<E: PartialEq + Clone> ExternalSet<E> {
    pub fn new(elements: &[E]) -> Self {
        let mut kept: Vec<E> = Vec::with_capacity(elements.len());
        for element in elements {
            if !kept.contains(element) {
                kept.push(element.clone());
            }
        }
        Self(kept)
    }
}

impl<E: PartialEq + Clone> View<E> for ExternalSet<E> {
    fn contains(&self, element: &E) -> bool {
        self.0.contains(element)
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn elems(&self) -> Vec<E> {
        self.0.clone()
    }

    fn range(&self, visit: &mut dyn FnMut(&E) -> ControlFlow<()>) {
        let _ = self.0.iter().try_for_each(visit);
    }
}

// =============================================================================
// Tagged elements
// =============================================================================

/// An element ordered by `letter` and identified by `letter` and `serial`.
///
/// Several tagged elements can share a letter, so a comparator set ordered
/// by letter holds runs of distinct elements with equal order keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tagged {
    pub letter: char,
    pub serial: u8,
}

/// Tags each letter of `letters` with its position.
pub fn tagged(letters: &str) -> Vec<Tagged> {
    letters
        .chars()
        .zip(0_u8..)
        .map(|(letter, serial)| Tagged { letter, serial })
        .collect()
}

pub fn by_letter(left: &Tagged, right: &Tagged) -> Ordering {
    left.letter.cmp(&right.letter)
}

/// Orders by letter, identifies by the whole element.
pub fn letter_comparator() -> Comparator<Tagged> {
    Comparator::with_identity(by_letter, |left: &Tagged, right: &Tagged| left == right)
}

/// Reorders `elements` by visiting every `stride`-th position.
///
/// `stride` must be coprime with `elements.len()`.
pub fn scatter<E: Clone>(elements: &[E], stride: usize) -> Vec<E> {
    let count = elements.len();
    (0..count)
        .map(|index| elements[(index * stride) % count].clone())
        .collect()
}

/// Asserts that `set` holds exactly the identities in `expected`.
#[track_caller]
pub fn assert_holds<E, V>(set: &V, expected: &[E])
where
    E: std::fmt::Debug,
    V: View<E> + ?Sized,
{
    assert_eq!(set.len(), expected.len(), "length of {expected:?}");
    assert!(set.contains_all(expected), "missing some of {expected:?}");
}
