//! Instrumented sorting and searching.
//!
//! Three classic quadratic sorts, each bound to one record key, and a binary search
//! over names:
//! - **Bubble Sort** by name, with the early exit after a pass without swaps.
//! - **Insertion Sort** by type, stable on equal types.
//! - **Selection Sort** by priority, at most one swap per outer step. Not stable.
//! - **Binary Search** by name over a name-sorted slice.
//!
//! Every routine resets its own counter on entry and returns the number of key
//! comparisons it performed. The generic `*_by` forms work over any slice with a
//! comparison closure; the record wrappers fix the comparator.
//!
//! None of these functions look at whether a slice is already sorted by name. Keeping
//! that fact is the job of [`crate::session::Session`].

use crate::core::{ByName, ByPriority, ByType, Record, RecordOrder, SortKey};
use std::cmp::Ordering;

/// Sorts `v` ascending with bubble sort and returns the comparison count.
///
/// One comparison is counted per adjacent pair examined, whether or not a swap
/// follows. A pass that makes no swap ends the sort, so an already sorted slice of
/// length `n` costs exactly `n - 1` comparisons.
///
/// # Examples
///
/// ```
/// use invsort::algo::bubble_sort_by;
///
/// let mut data = vec![3, 1, 2];
/// let comparisons = bubble_sort_by(&mut data, |a, b| a.cmp(b));
///
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(comparisons, 3);
/// ```
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;
    let len = v.len();

    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            comparisons += 1;
            if compare(&v[j], &v[j + 1]) == Ordering::Greater {
                v.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    comparisons
}

/// Sorts `v` ascending with insertion sort and returns the comparison count.
///
/// For each element from the second onward, one comparison is counted per placed
/// element examined while walking left. The walk stops at the first placed element that
/// is not strictly greater than the key, so equal elements keep their relative order.
///
/// # Examples
///
/// ```
/// use invsort::algo::insertion_sort_by;
///
/// let mut data = vec![(1, 'b'), (0, 'x'), (1, 'a')];
/// insertion_sort_by(&mut data, |a, b| a.0.cmp(&b.0));
///
/// assert_eq!(data, vec![(0, 'x'), (1, 'b'), (1, 'a')]);
/// ```
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;

    for i in 1..v.len() {
        // The key travels down by swaps, so `v` stays a permutation after every step.
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if compare(&v[j - 1], &v[j]) == Ordering::Greater {
                v.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }

    comparisons
}

/// Sorts `v` ascending with selection sort and returns the comparison count.
///
/// For each position but the last, the unplaced suffix is scanned once against the
/// minimum so far (one comparison per scanned element). Only a strictly smaller element
/// replaces the minimum, so the leftmost occurrence wins. At most one swap is made per
/// position, none when the minimum is already in place.
///
/// This is not a stable sort.
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F) -> u64
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut comparisons = 0;
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            comparisons += 1;
            if compare(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }

    comparisons
}

/// Binary search over a slice sorted ascending by `f`.
///
/// `f` compares an element against the sought key. The search narrows a half-open
/// range `[lo, hi)` and counts one comparison per midpoint examined. Returns the index of
/// *some* matching element along with the comparison count; when several elements
/// match, which one is returned depends only on the sequence of midpoints.
///
/// An unsorted slice is not detected; the result is then meaningless.
///
/// # Examples
///
/// ```
/// use invsort::algo::binary_search_by;
///
/// let data = [1, 3, 5, 7];
/// let (index, comparisons) = binary_search_by(&data, |x| x.cmp(&5));
///
/// assert_eq!(index, Some(2));
/// assert_eq!(comparisons, 1);
/// ```
pub fn binary_search_by<T, F>(v: &[T], mut f: F) -> (Option<usize>, u64)
where
    F: FnMut(&T) -> Ordering,
{
    let mut comparisons = 0;
    let mut lo = 0;
    let mut hi = v.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        comparisons += 1;
        match f(&v[mid]) {
            Ordering::Equal => return (Some(mid), comparisons),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    (None, comparisons)
}

/// Bubble sort by [`Record::name`].
pub fn bubble_sort_by_name(records: &mut [Record]) -> u64 {
    bubble_sort_by(records, ByName::compare)
}

/// Insertion sort by [`Record::kind`].
pub fn insertion_sort_by_type(records: &mut [Record]) -> u64 {
    insertion_sort_by(records, ByType::compare)
}

/// Selection sort by [`Record::priority`].
pub fn selection_sort_by_priority(records: &mut [Record]) -> u64 {
    selection_sort_by(records, ByPriority::compare)
}

/// Binary search for `key` among names. `records` must be sorted by name.
///
/// # Examples
///
/// ```
/// use invsort::algo::{binary_search_by_name, bubble_sort_by_name};
/// use invsort::core::Record;
///
/// let mut records = vec![
///     Record::new("Zeta", "core", 3),
///     Record::new("Alpha", "core", 7),
///     Record::new("Mid", "aux", 1),
/// ];
/// bubble_sort_by_name(&mut records);
///
/// let (index, _) = binary_search_by_name(&records, "Mid");
/// assert_eq!(index, Some(1));
/// ```
pub fn binary_search_by_name(records: &[Record], key: &str) -> (Option<usize>, u64) {
    binary_search_by(records, |record| {
        record.name.as_bytes().cmp(key.as_bytes())
    })
}

/// Sorts `records` by `key` with the algorithm bound to it.
pub fn sort_by(records: &mut [Record], key: SortKey) -> u64 {
    match key {
        SortKey::Name => bubble_sort_by_name(records),
        SortKey::Type => insertion_sort_by_type(records),
        SortKey::Priority => selection_sort_by_priority(records),
    }
}
