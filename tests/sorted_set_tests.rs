//! Integration tests for `SortedSet` and `FrozenSortedSet`.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{ExternalSet, assert_holds};
use rstest::{fixture, rstest};
use setwise::prelude::*;

#[fixture]
fn evens() -> SortedSet<i32> {
    (0..10).map(|value| value * 2).collect()
}

#[rstest]
fn test_new_creates_empty_set() {
    let set: SortedSet<i32> = SortedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
    assert_eq!(set, SortedSet::default());
}

#[rstest]
fn test_collect_sorts_and_deduplicates() {
    let set: SortedSet<&str> = ["pear", "apple", "fig", "apple"].into_iter().collect();
    assert_eq!(set.as_slice(), &["apple", "fig", "pear"]);
    assert_eq!(set.first(), Some(&"apple"));
    assert_eq!(set.last(), Some(&"pear"));
}

#[rstest]
fn test_scenario_from_unsorted_input() {
    let mut set = SortedSet::from_iter([5, 3, 1, 4, 2]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5]);

    set.insert_all([8, 2, 6]);
    assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 8]);

    set.remove_all([2, 4, 9]);
    assert_eq!(set.as_slice(), &[1, 3, 5, 6, 8]);
}

#[rstest]
#[case::insert_new(21, true, 11)]
#[case::insert_existing(4, false, 10)]
fn test_insert(evens: SortedSet<i32>, #[case] value: i32, #[case] added: bool, #[case] len: usize) {
    let mut set = evens;
    assert_eq!(set.insert(value), added);
    assert_eq!(set.len(), len);
    assert!(set.contains(&value));
}

#[rstest]
#[case::remove_existing(4, true, 9)]
#[case::remove_missing(5, false, 10)]
fn test_remove(evens: SortedSet<i32>, #[case] value: i32, #[case] removed: bool, #[case] len: usize) {
    let mut set = evens;
    assert_eq!(set.remove(&value), removed);
    assert_eq!(set.len(), len);
    assert!(!set.contains(&value));
}

#[rstest]
fn test_algebra_with_external_set(evens: SortedSet<i32>) {
    let threes = ExternalSet::new(&[0, 3, 6, 9, 12, 15, 18, 21]);

    assert_eq!(evens.intersection(&threes).as_slice(), &[0, 6, 12, 18]);
    assert_eq!(
        evens.difference(&threes).as_slice(),
        &[2, 4, 8, 10, 14, 16]
    );
    assert_eq!(
        evens.symmetric_difference(&threes).as_slice(),
        &[2, 3, 4, 8, 9, 10, 14, 15, 16, 21]
    );
    assert_holds(&evens.union(&threes), &[0, 2, 3, 4, 6, 8, 9, 10, 12, 14, 15, 16, 18, 21]);
}

#[rstest]
fn test_contains_set_checks_length_first(evens: SortedSet<i32>) {
    let larger: SortedSet<i32> = (0..40).collect();
    assert!(!evens.contains_set(&larger));
    assert!(larger.contains_set(&evens));
    assert!(evens.contains_set(&SortedSet::new()));
}

#[rstest]
fn test_union_keeps_the_other_value() {
    #[derive(Clone, Debug)]
    struct Versioned(u8, &'static str);

    impl PartialEq for Versioned {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Versioned {}
    impl PartialOrd for Versioned {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Versioned {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let old = SortedSet::from_iter([Versioned(1, "old"), Versioned(2, "old")]);
    let new = SortedSet::from_iter([Versioned(2, "new"), Versioned(3, "new")]);

    let merged = old.union(&new);
    let labels: Vec<&str> = merged.iter().map(|element| element.1).collect();
    assert_eq!(labels, vec!["old", "new", "new"]);

    let kept = old.intersection(&new);
    assert_eq!(kept.as_slice()[0].1, "old");
}

#[rstest]
fn test_frozen_set_returns_new_values(evens: SortedSet<i32>) {
    let frozen = evens.immutable_copy();
    let changed = frozen.insert(1).remove(&0).insert_all([3, 5]).remove_all([18]);

    assert_eq!(frozen.len(), 10);
    assert_eq!(changed.first(), Some(&1));
    assert_eq!(changed.len(), 11);
    assert!(!changed.contains(&18));

    let thawed = changed.mutable_copy();
    assert_eq!(thawed.as_slice(), changed.as_slice());
}

#[rstest]
fn test_unsorted_wrapper_keeps_fast_paths(evens: SortedSet<i32>) {
    let mut plain = evens.clone().mutable();
    plain.remove_set(&evens);
    assert!(plain.is_empty());

    let restored = plain.union(&evens).into_inner();
    assert_eq!(restored, evens);
}

#[rstest]
fn test_extend_and_iterate() {
    let mut set = SortedSet::from_iter([3, 1]);
    set.extend([2, 1]);
    set.extend(&[0, 4]);

    let borrowed: Vec<i32> = (&set).into_iter().copied().collect();
    let owned: Vec<i32> = set.into_iter().collect();
    assert_eq!(borrowed, owned);
    assert_eq!(owned, vec![0, 1, 2, 3, 4]);
}

#[rstest]
#[case::out_of_order(vec![1, 3, 2], Err(SequenceError::OutOfOrder { index: 2 }))]
#[case::duplicate(vec![1, 1], Err(SequenceError::Duplicate { index: 1 }))]
#[case::valid(vec![1, 2, 3], Ok(3))]
fn test_try_from_sorted_vec(#[case] input: Vec<i32>, #[case] expected: Result<usize, SequenceError>) {
    assert_eq!(
        FrozenSortedSet::try_from_sorted_vec(input).map(|set| set.len()),
        expected
    );
}

#[rstest]
fn test_debug_uses_set_notation() {
    let set = FrozenSortedSet::from_iter(["b", "a"]);
    assert_eq!(format!("{set:?}"), r#"{"a", "b"}"#);
}

// =============================================================================
// Dispatch tracing
// =============================================================================

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("poisoned"))?
            .extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn traced(operation: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, operation);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[rstest]
fn test_sorted_operands_take_the_linear_path(evens: SortedSet<i32>) {
    let odds: SortedSet<i32> = (0..10).map(|value| value * 2 + 1).collect();
    let output = traced(|| {
        let _ = evens.intersection(&odds);
    });
    assert!(output.contains("intersection"), "{output}");
    assert!(output.contains("fast_path=true"), "{output}");
}

#[rstest]
fn test_external_operands_take_the_generic_path(evens: SortedSet<i32>) {
    let external = ExternalSet::new(&[1, 2, 3]);
    let output = traced(|| {
        let _ = evens.difference(&external);
    });
    assert!(output.contains("difference"), "{output}");
    assert!(output.contains("fast_path=false"), "{output}");
}

#[rstest]
fn test_batched_insert_realizes_once(evens: SortedSet<i32>) {
    let output = traced(|| {
        let mut set = evens;
        set.insert_all([1, 5, 9, 41, 43]);
    });
    assert_eq!(output.matches("merge realized").count(), 1, "{output}");
}
