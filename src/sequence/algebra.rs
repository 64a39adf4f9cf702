//! Two-pointer set algebra over sorted slices.
//!
//! The `*_unique` functions take strictly ascending slices under the natural
//! order. The `*_by` functions take slices sorted by `order` with unique
//! identities and reconcile each shared run by pairwise `identity` tests.
//! All of them return freshly allocated sequences that satisfy the same
//! invariant as their inputs.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use super::sort::run_length;

/// Where `left` lies relative to `right` when their ranges do not overlap.
///
/// `Less` when every element of `left` orders strictly before every element
/// of `right`, `Greater` for the reverse, `None` when the ranges overlap. An
/// empty slice lies before anything.
fn disjoint_by<E, F>(left: &[E], right: &[E], order: F) -> Option<Ordering>
where
    F: Fn(&E, &E) -> Ordering,
{
    match (left.first(), left.last(), right.first(), right.last()) {
        (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) => {
            if order(left_last, right_first) == Ordering::Less {
                Some(Ordering::Less)
            } else if order(right_last, left_first) == Ordering::Less {
                Some(Ordering::Greater)
            } else {
                None
            }
        }
        (None, ..) => Some(Ordering::Less),
        _ => Some(Ordering::Greater),
    }
}

/// Sorted union of two strictly ascending slices.
///
/// When an element occurs in both, the value from `right` is kept.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::union_unique;
///
/// assert_eq!(union_unique(&[1, 3, 5], &[2, 3, 4]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn union_unique<E: Ord + Clone>(left: &[E], right: &[E]) -> Vec<E> {
    if left.is_empty() {
        return right.to_vec();
    }
    if right.is_empty() {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len() + right.len());

    if let Some(position) = disjoint_by(left, right, E::cmp) {
        let (lower, upper) = if position == Ordering::Less {
            (left, right)
        } else {
            (right, left)
        };
        result.extend_from_slice(lower);
        result.extend_from_slice(upper);
        return result;
    }

    let mut left_index = 0;
    let mut right_index = 0;
    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(right[right_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }
    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Elements of `left` that also occur in `right`, with values from `left`.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::intersection_unique;
///
/// assert_eq!(intersection_unique(&[1, 2, 3, 4], &[2, 4, 6]), vec![2, 4]);
/// ```
pub fn intersection_unique<E: Ord + Clone>(left: &[E], right: &[E]) -> Vec<E> {
    if disjoint_by(left, right, E::cmp).is_some() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;
    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }
    result
}

/// Elements of `left` that do not occur in `right`.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::difference_unique;
///
/// assert_eq!(difference_unique(&[1, 2, 3, 4], &[2, 4, 6]), vec![1, 3]);
/// ```
pub fn difference_unique<E: Ord + Clone>(left: &[E], right: &[E]) -> Vec<E> {
    if disjoint_by(left, right, E::cmp).is_some() {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;
    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }
    result.extend_from_slice(&left[left_index..]);
    result
}

/// Elements that occur in exactly one of the two slices.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::symmetric_difference_unique;
///
/// assert_eq!(
///     symmetric_difference_unique(&[1, 2, 3, 4], &[2, 4, 6]),
///     vec![1, 3, 6]
/// );
/// ```
pub fn symmetric_difference_unique<E: Ord + Clone>(left: &[E], right: &[E]) -> Vec<E> {
    if disjoint_by(left, right, E::cmp).is_some() {
        return union_unique(left, right);
    }

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;
    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }
    result.extend_from_slice(&left[left_index..]);
    result.extend_from_slice(&right[right_index..]);
    result
}

/// Returns `true` if every element of `subset` occurs in `superset`.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::includes_unique;
///
/// assert!(includes_unique(&[1, 2, 3, 4], &[2, 4]));
/// assert!(!includes_unique(&[1, 2, 3, 4], &[2, 5]));
/// ```
pub fn includes_unique<E: Ord>(superset: &[E], subset: &[E]) -> bool {
    if subset.len() > superset.len() {
        return false;
    }

    let mut super_index = 0;
    let mut sub_index = 0;
    while super_index < superset.len() && sub_index < subset.len() {
        match superset[super_index].cmp(&subset[sub_index]) {
            Ordering::Less => super_index += 1,
            Ordering::Equal => {
                super_index += 1;
                sub_index += 1;
            }
            Ordering::Greater => return false,
        }
    }
    sub_index == subset.len()
}

/// One step of a paired walk over two sorted sequences.
enum Step<'a, E> {
    /// An element only `left` has an order key for.
    Left(&'a E),
    /// An element only `right` has an order key for.
    Right(&'a E),
    /// The two runs sharing one order key.
    Shared(&'a [E], &'a [E]),
}

/// Walks two sorted sequences in step, stopping as soon as `visit` breaks.
fn walk_runs<'a, E, F>(
    left: &'a [E],
    right: &'a [E],
    order: F,
    mut visit: impl FnMut(Step<'a, E>) -> ControlFlow<()>,
) -> ControlFlow<()>
where
    F: Fn(&E, &E) -> Ordering,
{
    let mut left_index = 0;
    let mut right_index = 0;
    while left_index < left.len() && right_index < right.len() {
        match order(&left[left_index], &right[right_index]) {
            Ordering::Less => {
                visit(Step::Left(&left[left_index]))?;
                left_index += 1;
            }
            Ordering::Greater => {
                visit(Step::Right(&right[right_index]))?;
                right_index += 1;
            }
            Ordering::Equal => {
                let left_end = left_index + run_length(&left[left_index..], &order);
                let right_end = right_index + run_length(&right[right_index..], &order);
                visit(Step::Shared(
                    &left[left_index..left_end],
                    &right[right_index..right_end],
                ))?;
                left_index = left_end;
                right_index = right_end;
            }
        }
    }
    left[left_index..]
        .iter()
        .try_for_each(|element| visit(Step::Left(element)))?;
    right[right_index..]
        .iter()
        .try_for_each(|element| visit(Step::Right(element)))
}

/// Walks two sorted sequences in step, visiting every step.
fn for_each_step<'a, E, F>(
    left: &'a [E],
    right: &'a [E],
    order: F,
    mut visit: impl FnMut(Step<'a, E>),
) where
    F: Fn(&E, &E) -> Ordering,
{
    let flow = walk_runs(left, right, order, |step| {
        visit(step);
        ControlFlow::Continue(())
    });
    debug_assert!(flow.is_continue());
}

/// Elements of `left` whose identity occurs in `right`, with values from
/// `left`.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::intersection_by;
///
/// let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let shared = intersection_by(&["a", "bb", "cc"], &["cc", "dd"], by_length, |a, b| a == b);
/// assert_eq!(shared, vec!["cc"]);
/// ```
pub fn intersection_by<E, F, G>(left: &[E], right: &[E], order: F, identity: G) -> Vec<E>
where
    E: Clone,
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    let mut result = Vec::new();
    if disjoint_by(left, right, &order).is_some() {
        return result;
    }

    for_each_step(left, right, order, |step| {
        if let Step::Shared(left_run, right_run) = step {
            result.extend(
                left_run
                    .iter()
                    .filter(|&element| right_run.iter().any(|other| identity(element, other)))
                    .cloned(),
            );
        }
    });
    result
}

/// Elements of `left` whose identity does not occur in `right`.
pub fn difference_by<E, F, G>(left: &[E], right: &[E], order: F, identity: G) -> Vec<E>
where
    E: Clone,
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    if disjoint_by(left, right, &order).is_some() {
        return left.to_vec();
    }

    let mut result = Vec::with_capacity(left.len());
    for_each_step(left, right, order, |step| match step {
        Step::Left(element) => result.push(element.clone()),
        Step::Right(_) => {}
        Step::Shared(left_run, right_run) => result.extend(
            left_run
                .iter()
                .filter(|&element| !right_run.iter().any(|other| identity(element, other)))
                .cloned(),
        ),
    });
    result
}

/// Elements whose identity occurs in exactly one of the two sequences.
///
/// Within a shared run, the unmatched elements of `left` precede the
/// unmatched elements of `right`.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::symmetric_difference_by;
///
/// let by_length = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// let odd_ones = symmetric_difference_by(&["a", "bb", "cc"], &["cc", "dd"], by_length, |a, b| a == b);
/// assert_eq!(odd_ones, vec!["a", "bb", "dd"]);
/// ```
pub fn symmetric_difference_by<E, F, G>(left: &[E], right: &[E], order: F, identity: G) -> Vec<E>
where
    E: Clone,
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    for_each_step(left, right, order, |step| match step {
        Step::Left(element) | Step::Right(element) => result.push(element.clone()),
        Step::Shared(left_run, right_run) => {
            let unmatched = |run: &[E], against: &[E]| {
                run.iter()
                    .filter(|&element| !against.iter().any(|other| identity(element, other)))
                    .cloned()
                    .collect::<Vec<_>>()
            };
            result.extend(unmatched(left_run, right_run));
            result.extend(unmatched(right_run, left_run));
        }
    });
    result
}

/// Returns `true` if every identity in `subset` occurs in `superset`.
pub fn includes_by<E, F, G>(superset: &[E], subset: &[E], order: F, identity: G) -> bool
where
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    if subset.len() > superset.len() {
        return false;
    }

    walk_runs(superset, subset, order, |step| match step {
        Step::Left(_) => ControlFlow::Continue(()),
        Step::Right(_) => ControlFlow::Break(()),
        Step::Shared(super_run, sub_run) => {
            if sub_run
                .iter()
                .all(|element| super_run.iter().any(|other| identity(other, element)))
            {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        }
    })
    .is_continue()
}
