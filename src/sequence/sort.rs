//! Stable sorting, run detection and in-place deduplication.

use std::cmp::Ordering;

use crate::error::SequenceError;

/// Returns the length of the run of elements that order equal to `elements[0]`.
///
/// An empty slice has a run length of zero.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::run_length;
///
/// let words = ["ab", "cd", "ef", "ghi", "jk"];
/// assert_eq!(run_length(&words, |a, b| a.len().cmp(&b.len())), 3);
/// assert_eq!(run_length(&words[3..], |a, b| a.len().cmp(&b.len())), 1);
/// ```
pub fn run_length<E, F>(elements: &[E], order: F) -> usize
where
    F: Fn(&E, &E) -> Ordering,
{
    let Some(head) = elements.first() else {
        return 0;
    };
    1 + elements[1..]
        .iter()
        .take_while(|element| order(head, element) == Ordering::Equal)
        .count()
}

/// Stable sorts `list` by `order`.
///
/// A bottom-up merge sort over element indices followed by one in-place
/// permutation. Only `order` is consulted, so an ordering that is not a
/// total order yields some permutation of the input instead of a panic.
/// Input that is already sorted is detected in one linear pass.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::stable_sort_by;
///
/// let mut words = vec!["ccc", "a", "bb", "d"];
/// stable_sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, vec!["a", "d", "bb", "ccc"]);
/// ```
pub fn stable_sort_by<E, F>(list: &mut [E], order: F)
where
    F: Fn(&E, &E) -> Ordering,
{
    let length = list.len();
    if list
        .windows(2)
        .all(|pair| order(&pair[0], &pair[1]) != Ordering::Greater)
    {
        return;
    }

    let mut sorted: Vec<usize> = (0..length).collect();
    let mut merged = vec![0; length];
    let mut width = 1;
    while width < length {
        for start in (0..length).step_by(2 * width) {
            let middle = (start + width).min(length);
            let end = (start + 2 * width).min(length);
            let (mut left, mut right) = (start, middle);
            for slot in &mut merged[start..end] {
                let take_left = left < middle
                    && (right == end
                        || order(&list[sorted[left]], &list[sorted[right]]) != Ordering::Greater);
                if take_left {
                    *slot = sorted[left];
                    left += 1;
                } else {
                    *slot = sorted[right];
                    right += 1;
                }
            }
        }
        std::mem::swap(&mut sorted, &mut merged);
        width *= 2;
    }

    permute(&mut sorted, |target, source| list.swap(target, source));
}

/// Rearranges slots so that slot `j` receives what slot `source[j]` held.
///
/// `source` must be a permutation of `0..source.len()`; it is left as the
/// identity. Every displaced slot costs one call to `swap`.
pub(crate) fn permute(source: &mut [usize], mut swap: impl FnMut(usize, usize)) {
    for start in 0..source.len() {
        let mut current = start;
        loop {
            let from = source[current];
            source[current] = current;
            if from == current || from == start {
                break;
            }
            swap(current, from);
            current = from;
        }
    }
}

/// Stable sorts `list` by `order`, then removes duplicate identities in place.
///
/// Within each run of equal order keys, at most one element is kept per
/// identity as decided by `identity`. When an identity repeats, the later
/// value overwrites the earlier one, which keeps its position: distinct
/// identities stay in the order they were first seen.
///
/// # Complexity
///
/// O(n log n) compares for the sort. O(n) compares and up to O(k²) identity
/// tests per run of length k for the deduplication.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::stable_sort_dedup_by;
///
/// let mut words = vec!["bb", "a", "cc", "bb", "d"];
/// stable_sort_dedup_by(&mut words, |a, b| a.len().cmp(&b.len()), |a, b| a == b);
/// assert_eq!(words, vec!["a", "d", "bb", "cc"]);
/// ```
pub fn stable_sort_dedup_by<E, F, G>(list: &mut Vec<E>, order: F, identity: G)
where
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    stable_sort_by(list, &order);
    dedup_sorted_by(list, order, identity);
}

/// Stable sorts `list` by its natural order and removes duplicates in place.
///
/// Of several equal elements, the value of the last one is kept.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::stable_sort_dedup;
///
/// let mut numbers = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// stable_sort_dedup(&mut numbers);
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn stable_sort_dedup<E: Ord>(list: &mut Vec<E>) {
    stable_sort_by(list, E::cmp);
    dedup_sorted(list);
}

/// Removes duplicate identities from a list already sorted by `order`.
///
/// See [`stable_sort_dedup_by`] for which value survives.
pub fn dedup_sorted_by<E, F, G>(list: &mut Vec<E>, order: F, identity: G)
where
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    let length = list.len();
    if length < 2 {
        return;
    }

    // [0, write) is the deduplicated prefix, [write, read) holds consumed
    // slots that are truncated at the end.
    let mut write = 0;
    let mut run_start = 0;
    while run_start < length {
        let run_end = run_start + run_length(&list[run_start..], &order);
        let kept_start = write;
        for read in run_start..run_end {
            let duplicate =
                (kept_start..write).find(|&kept| identity(&list[kept], &list[read]));
            match duplicate {
                Some(kept) => list.swap(kept, read),
                None => {
                    list.swap(write, read);
                    write += 1;
                }
            }
        }
        run_start = run_end;
    }
    list.truncate(write);
}

/// Removes duplicates from a list already sorted by its natural order.
///
/// Of several equal elements, the value of the last one is kept in the
/// position of the first.
pub fn dedup_sorted<E: Ord>(list: &mut Vec<E>) {
    list.dedup_by(|later, kept| {
        if later == kept {
            std::mem::swap(later, kept);
            true
        } else {
            false
        }
    });
}

/// Checks that `list` is sorted by `order` with no repeated identity.
///
/// # Errors
///
/// Returns [`SequenceError::OutOfOrder`] for the first element that orders
/// before its predecessor, or [`SequenceError::Duplicate`] for the first
/// element whose identity already occurs earlier in its run.
pub fn check_sorted_unique_by<E, F, G>(
    list: &[E],
    order: F,
    identity: G,
) -> Result<(), SequenceError>
where
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    let mut run_start = 0;
    for index in 1..list.len() {
        match order(&list[index - 1], &list[index]) {
            Ordering::Less => run_start = index,
            Ordering::Greater => return Err(SequenceError::OutOfOrder { index }),
            Ordering::Equal => {
                if list[run_start..index]
                    .iter()
                    .any(|earlier| identity(earlier, &list[index]))
                {
                    return Err(SequenceError::Duplicate { index });
                }
            }
        }
    }
    Ok(())
}

/// Checks that `list` is strictly ascending by its natural order.
///
/// # Errors
///
/// See [`check_sorted_unique_by`].
pub fn check_sorted_unique<E: Ord>(list: &[E]) -> Result<(), SequenceError> {
    list.windows(2)
        .enumerate()
        .find_map(|(offset, pair)| match pair[0].cmp(&pair[1]) {
            Ordering::Less => None,
            Ordering::Equal => Some(SequenceError::Duplicate { index: offset + 1 }),
            Ordering::Greater => Some(SequenceError::OutOfOrder { index: offset + 1 }),
        })
        .map_or(Ok(()), Err)
}
