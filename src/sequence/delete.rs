//! Batched deletion from a sorted sequence.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::sort::run_length;

/// Removes from `list` every element whose identity occurs in `other`.
///
/// Both sequences are scanned once in step. When the order keys match, the
/// two runs sharing that key are compared pairwise by `identity` and each
/// matching element of `list` is marked. The marked positions are then
/// closed in a single left-compaction pass.
///
/// # Preconditions
///
/// `list` must be sorted by `order` with no repeated identity, and `other`
/// must be sorted by `order`. `other` may repeat identities.
///
/// # Complexity
///
/// O(n + m) order comparisons plus the identity tests of each shared run, and
/// O(n) element moves no matter how many elements are removed.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::delete_from_by;
///
/// let mut words = vec!["a", "bb", "cc", "ddd"];
/// delete_from_by(&mut words, &["cc", "ddd"], |a, b| a.len().cmp(&b.len()), |a, b| a == b);
/// assert_eq!(words, vec!["a", "bb"]);
/// ```
pub fn delete_from_by<E, F, G>(list: &mut Vec<E>, other: &[E], order: F, identity: G)
where
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    let mut doomed: SmallVec<[usize; 16]> = SmallVec::new();
    let mut cursor = 0;
    let mut probe = 0;

    while cursor < list.len() && probe < other.len() {
        match order(&list[cursor], &other[probe]) {
            Ordering::Less => cursor += 1,
            Ordering::Greater => probe += 1,
            Ordering::Equal => {
                let run_end = cursor + run_length(&list[cursor..], &order);
                let probe_end = probe + run_length(&other[probe..], &order);
                let removing = &other[probe..probe_end];
                doomed.extend((cursor..run_end).filter(|&index| {
                    removing
                        .iter()
                        .any(|element| identity(&list[index], element))
                }));
                cursor = run_end;
                probe = probe_end;
            }
        }
    }

    compact(list, &doomed);
}

/// Removes every element of the strictly ascending `other` from the strictly
/// ascending `list`.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::delete_unique;
///
/// let mut list = vec![1, 2, 3, 4, 5];
/// delete_unique(&mut list, &[2, 4]);
/// assert_eq!(list, vec![1, 3, 5]);
/// ```
pub fn delete_unique<E: Ord>(list: &mut Vec<E>, other: &[E]) {
    let mut doomed: SmallVec<[usize; 16]> = SmallVec::new();
    let mut cursor = 0;
    let mut probe = 0;

    while cursor < list.len() && probe < other.len() {
        match list[cursor].cmp(&other[probe]) {
            Ordering::Less => cursor += 1,
            Ordering::Greater => probe += 1,
            Ordering::Equal => {
                doomed.push(cursor);
                cursor += 1;
                probe += 1;
            }
        }
    }

    compact(list, &doomed);
}

/// Drops the elements at the ascending positions in `doomed`.
///
/// Kept elements slide left over the gaps in one pass and the vector is
/// truncated to its new length.
fn compact<E>(list: &mut Vec<E>, doomed: &[usize]) {
    let Some(&first) = doomed.first() else {
        return;
    };

    tracing::trace!(deletions = doomed.len(), "delete realized");

    let mut write = first;
    for (rank, &index) in doomed.iter().enumerate() {
        let block_end = doomed.get(rank + 1).copied().unwrap_or(list.len());
        for read in index + 1..block_end {
            list.swap(write, read);
            write += 1;
        }
    }
    list.truncate(write);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nothing_to_delete(vec![1, 2, 3], vec![], vec![1, 2, 3])]
    #[case::from_empty(vec![], vec![1, 2], vec![])]
    #[case::alternating(vec![1, 2, 3, 4, 5], vec![2, 4], vec![1, 3, 5])]
    #[case::everything(vec![1, 2, 3], vec![1, 2, 3], vec![])]
    #[case::first_and_last(vec![1, 2, 3, 4], vec![1, 4], vec![2, 3])]
    #[case::absent_values(vec![1, 3, 5], vec![0, 2, 4, 6], vec![1, 3, 5])]
    #[case::adjacent_block(vec![1, 2, 3, 4, 5, 6], vec![2, 3, 4], vec![1, 5, 6])]
    fn delete_unique_removes_matching_elements(
        #[case] mut list: Vec<i32>,
        #[case] other: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        delete_unique(&mut list, &other);
        assert_eq!(list, expected);
    }

    #[rstest]
    fn compact_drops_scattered_positions() {
        let mut list: Vec<char> = "abcdefghijklmnop".chars().collect();
        compact(&mut list, &[1, 6, 9, 10, 13, 14, 15]);
        assert_eq!(list.into_iter().collect::<String>(), "acdefhilm");
    }

    #[rstest]
    fn delete_from_by_only_removes_matching_identities_in_a_run() {
        let mut list = vec!["aa", "bb", "cc", "d", "eee"];
        list.sort_by_key(|word| word.len());
        // Stable sort keeps the run "aa", "bb", "cc" in input order.
        delete_from_by(
            &mut list,
            &["bb", "zz", "eee"],
            |left, right| left.len().cmp(&right.len()),
            |left, right| left == right,
        );
        assert_eq!(list, vec!["d", "aa", "cc"]);
    }

    #[rstest]
    fn delete_from_by_ignores_keys_missing_from_list() {
        let mut list = vec![10_u32, 20, 30];
        delete_from_by(&mut list, &[5, 15, 25, 35], u32::cmp, |left, right| left == right);
        assert_eq!(list, vec![10, 20, 30]);
    }

    #[rstest]
    fn delete_from_by_with_repeated_identities_in_other() {
        let mut list = vec![1_u32, 2, 3];
        delete_from_by(&mut list, &[2, 2, 2], u32::cmp, |left, right| left == right);
        assert_eq!(list, vec![1, 3]);
    }
}
