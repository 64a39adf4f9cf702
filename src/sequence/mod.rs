//! Algorithms over sorted, deduplicated sequences.
//!
//! Every sorted set in this crate owns one `Vec<E>` that is ordered by an
//! order key and holds no two elements with the same identity. This module
//! provides the free functions that build and maintain such sequences:
//!
//! - [`stable_sort_dedup_by`] and [`stable_sort_dedup`] establish the
//!   invariant from arbitrary input, sorting with [`stable_sort_by`].
//! - [`merge_into_by`] and [`merge_unique`] insert a whole sorted batch with
//!   one linear scan and one realization pass.
//! - [`delete_from_by`] and [`delete_unique`] remove a whole sorted batch the
//!   same way.
//! - The `*_unique` and `*_by` algebra functions compute unions,
//!   intersections and differences of two sorted slices.
//!
//! The `*_by` forms take two independent functions. `order` places elements
//! and groups them into runs of equal order keys; `identity` decides whether
//! two elements of one run are the same element. The natural-order forms use
//! [`Ord`] for both and skip the run bookkeeping entirely.
//!
//! All functions assume their inputs already satisfy the documented
//! preconditions. Bad input, including an `order` that is not a total order,
//! produces an unspecified sequence, never a panic.
//!
//! # Examples
//!
//! ```rust
//! use setwise::sequence::{delete_unique, merge_unique, stable_sort_dedup};
//!
//! let mut list = vec![5, 3, 1, 3];
//! stable_sort_dedup(&mut list);
//! merge_unique(&mut list, vec![2, 4]);
//! delete_unique(&mut list, &[1, 5]);
//! assert_eq!(list, vec![2, 3, 4]);
//! ```

mod algebra;
mod delete;
mod merge;
mod sort;

pub use algebra::{
    difference_by, difference_unique, includes_by, includes_unique, intersection_by,
    intersection_unique, symmetric_difference_by, symmetric_difference_unique, union_unique,
};
pub use delete::{delete_from_by, delete_unique};
pub use merge::{merge_into_by, merge_unique};
pub use sort::{
    check_sorted_unique, check_sorted_unique_by, dedup_sorted, dedup_sorted_by, run_length,
    stable_sort_by, stable_sort_dedup, stable_sort_dedup_by,
};
