//! Integration tests for `HashedSet` and `FrozenHashedSet`.
//!
//! Covers the hasher selected by the `fxhash` and `ahash` feature flags as
//! well as the std default.

mod common;

use std::collections::HashSet;
use std::hash::{BuildHasherDefault, DefaultHasher};

use common::{ExternalSet, Tagged, assert_holds, letter_comparator, tagged};
use rstest::rstest;
use setwise::prelude::*;

#[rstest]
fn test_default_hasher_is_deterministic_within_a_set() {
    let left: HashedSet<String> = ["alpha", "beta"].iter().map(ToString::to_string).collect();
    let right: HashedSet<String> = ["beta", "alpha"].iter().map(ToString::to_string).collect();
    assert_eq!(left, right);
    assert!(left.contains(&"alpha".to_string()));
}

#[rstest]
fn test_custom_hasher() {
    let mut set: HashedSet<u32, BuildHasherDefault<DefaultHasher>> =
        HashedSet::with_hasher(BuildHasherDefault::default());
    set.insert_all(0..100);
    set.remove_all((0..100).filter(|value| value % 3 != 0));
    assert_eq!(set.len(), 34);

    let frozen = set.immutable_copy();
    let grown = frozen.insert(1000);
    assert_eq!(grown.len(), 35);
    assert_eq!(frozen.len(), 34);
}

#[rstest]
fn test_against_comparator_runs() {
    let elements = tagged("aabbbc");
    let runs = SortedSetBy::from_elements(letter_comparator(), elements.clone());
    let mut hashed: HashedSet<Tagged> = elements[..3].iter().copied().collect();

    assert!(runs.contains_set(&hashed));
    assert!(!hashed.contains_set(&runs));

    hashed.insert_set(&runs);
    assert_holds(&hashed, &elements);

    hashed.remove_set(&SortedSetBy::from_elements(letter_comparator(), elements[1..5].to_vec()));
    assert_holds(&hashed, &[elements[0], elements[5]]);
}

#[rstest]
#[case::empty(vec![], vec![1, 2], vec![1, 2])]
#[case::disjoint(vec![1, 2], vec![3], vec![1, 2, 3])]
#[case::overlapping(vec![1, 2, 3], vec![2, 3, 4], vec![1, 4])]
#[case::equal(vec![5, 6], vec![6, 5], vec![])]
fn test_symmetric_difference(
    #[case] left: Vec<i32>,
    #[case] right: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    let set: FrozenHashedSet<i32> = left.into_iter().collect();
    let result = set.symmetric_difference(&ExternalSet::new(&right));
    assert_holds(&result, &expected);
}

#[rstest]
fn test_into_inner_and_iteration() {
    let set: HashedSet<u8> = [3, 1, 2].into_iter().collect();
    let borrowed: HashSet<u8> = (&set).into_iter().copied().collect();
    let inner = set.into_inner();
    assert_eq!(borrowed, inner.into_iter().collect::<HashSet<u8>>());
}

#[rstest]
fn test_unsorted_wrapper_matches_hashed() {
    let sorted = SortedSet::from_iter([1, 2, 3]).mutable();
    let hashed: HashedSet<i32> = [1, 2, 3].into_iter().collect();
    assert!(sorted.contains_set(&hashed));
    assert!(hashed.contains_set(&sorted));
    assert_eq!(sorted.len(), hashed.len());
}
