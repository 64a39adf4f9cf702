//! Batched merge-insertion into a sorted sequence.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::vec;

use smallvec::{SmallVec, smallvec};

use super::sort::{permute, run_length};

/// A value waiting to be placed in front of `list[position]`.
struct Insertion<E> {
    position: usize,
    value: E,
}

type Insertions<E> = SmallVec<[Insertion<E>; 8]>;

/// Merges the sorted unique `other` into the sorted unique `list`.
///
/// The result is the sorted unique union of both sequences. When an element
/// of `other` has the same identity as an element of `list`, the value from
/// `other` replaces it in place.
///
/// Elements of `other` that share an order key with a run of `list` but match
/// no identity in it are placed after that run.
///
/// # Preconditions
///
/// Both inputs must already be sorted by `order` with no repeated identity.
/// Violating this yields an unspecified sequence but never panics.
///
/// # Complexity
///
/// O(n + m) order comparisons plus the identity tests of each shared run.
/// `list` grows once to its final length, reusing its buffer when the
/// capacity suffices, and realization takes O(n + m) swaps regardless of how
/// many insertions are batched together.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::merge_into_by;
///
/// let mut words = vec!["a", "bb", "dddd"];
/// merge_into_by(
///     &mut words,
///     vec!["cc", "eee"],
///     |a, b| a.len().cmp(&b.len()),
///     |a, b| a == b,
/// );
/// assert_eq!(words, vec!["a", "bb", "cc", "eee", "dddd"]);
/// ```
pub fn merge_into_by<E, F, G>(list: &mut Vec<E>, other: Vec<E>, order: F, identity: G)
where
    F: Fn(&E, &E) -> Ordering,
    G: Fn(&E, &E) -> bool,
{
    let mut incoming = other.into_iter();
    let mut insertions = Insertions::new();
    let mut cursor = 0;

    while cursor < list.len() {
        let Some(next) = incoming.as_slice().first() else {
            break;
        };
        match order(&list[cursor], next) {
            Ordering::Less => cursor += 1,
            Ordering::Greater => {
                let Some(value) = incoming.next() else {
                    break;
                };
                insertions.push(Insertion {
                    position: cursor,
                    value,
                });
            }
            Ordering::Equal => {
                let run_end = cursor + run_length(&list[cursor..], &order);
                let incoming_run = run_length(incoming.as_slice(), &order);
                for value in incoming.by_ref().take(incoming_run) {
                    let matching = list[cursor..run_end]
                        .iter()
                        .position(|existing| identity(existing, &value));
                    match matching {
                        Some(offset) => list[cursor + offset] = value,
                        None => insertions.push(Insertion {
                            position: run_end,
                            value,
                        }),
                    }
                }
                cursor = run_end;
            }
        }
    }

    realize(list, insertions, incoming);
}

/// Merges the strictly ascending `other` into the strictly ascending `list`.
///
/// The natural-order form of [`merge_into_by`]: equal elements are
/// overwritten by the value from `other` and no run bookkeeping is needed.
///
/// # Examples
///
/// ```rust
/// use setwise::sequence::merge_unique;
///
/// let mut list = vec![1, 2, 3, 4, 5];
/// merge_unique(&mut list, vec![2, 6, 8]);
/// assert_eq!(list, vec![1, 2, 3, 4, 5, 6, 8]);
/// ```
pub fn merge_unique<E: Ord>(list: &mut Vec<E>, other: Vec<E>) {
    let mut incoming = other.into_iter();
    let mut insertions = Insertions::new();
    let mut cursor = 0;

    while cursor < list.len() {
        let Some(next) = incoming.as_slice().first() else {
            break;
        };
        match list[cursor].cmp(next) {
            Ordering::Less => cursor += 1,
            Ordering::Greater => {
                let Some(value) = incoming.next() else {
                    break;
                };
                insertions.push(Insertion {
                    position: cursor,
                    value,
                });
            }
            Ordering::Equal => {
                if let Some(value) = incoming.next() {
                    list[cursor] = value;
                }
                cursor += 1;
            }
        }
    }

    realize(list, insertions, incoming);
}

/// Places every pending insertion and then the unconsumed `tail`.
///
/// The backing storage grows once to its final length: the inserted values
/// and the tail are pushed onto the end, then the kept blocks are walked from
/// the back and each is swapped into its final slot. The inserted values ride
/// along in the gap between the walked blocks and land in the slots the
/// blocks leave behind, in rotated order; one permutation pass over those
/// slots puts each value where it belongs.
fn realize<E>(list: &mut Vec<E>, insertions: Insertions<E>, tail: vec::IntoIter<E>) {
    if insertions.is_empty() {
        if !tail.as_slice().is_empty() {
            tracing::trace!(appended = tail.len(), "merge appended tail");
        }
        list.extend(tail);
        return;
    }

    tracing::trace!(
        insertions = insertions.len(),
        appended = tail.len(),
        "merge realized"
    );

    let kept = list.len();
    let count = insertions.len();
    list.reserve(count + tail.len());
    let mut positions: SmallVec<[usize; 8]> = SmallVec::with_capacity(count);
    for Insertion { position, value } in insertions {
        positions.push(position);
        list.push(value);
    }
    list.extend(tail);

    // The gap [block_end, gap_end) holds the inserted values not yet placed;
    // `parked` names them front to back.
    let mut parked: VecDeque<usize> = (0..count).collect();
    let mut occupants: SmallVec<[usize; 8]> = smallvec![0; count];
    let mut block_end = kept;
    let mut gap_end = kept + count;
    for (index, &position) in positions.iter().enumerate().rev() {
        for moved in (position..block_end).rev() {
            gap_end -= 1;
            list.swap(moved, gap_end);
            if let Some(label) = parked.pop_back() {
                parked.push_front(label);
            }
        }
        block_end = position;
        gap_end -= 1;
        occupants[index] = parked.pop_back().unwrap_or(index);
    }

    let mut source: SmallVec<[usize; 8]> = smallvec![0; count];
    for (slot, &label) in occupants.iter().enumerate() {
        source[label] = slot;
    }
    permute(&mut source, |target, from| {
        list.swap(positions[target] + target, positions[from] + from);
    });
}
