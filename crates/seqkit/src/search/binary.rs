//! Binary search over sorted and partitioned sequences.
//!
//! ## Purpose
//!
//! This module provides the two logarithmic lookups the rest of the crate is
//! built on: comparator-driven `binary_search` over a sorted sequence and
//! predicate-driven `find_first` over a partitioned sequence.
//!
//! ## Design notes
//!
//! * **Half-open bounds**: Both searches keep a `[low, high)` window, so no
//!   signed arithmetic is needed and empty input falls out naturally.
//! * **Unchecked preconditions**: Sortedness and monotonicity are the caller's
//!   responsibility. Violations produce an unspecified index, never a panic.
//!
//! ## Key concepts
//!
//! * **Insertion point**: The index at which an absent key would be inserted
//!   to keep the sequence sorted. `to_signed_index` renders it as `-(p + 1)`.
//! * **Partition point**: The first index whose element satisfies a monotonic
//!   predicate.
//!
//! ## Invariants
//!
//! * `binary_search` returns `Ok(i)` only when `cmp(&seq[i], key)` is `Equal`.
//! * `find_first` returns a value in `0..=seq.len()`.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Comparator Search
// ============================================================================

/// Search a sorted sequence for `key`.
///
/// The comparator is called as `cmp(element, key)`. Returns `Ok(index)` of a
/// matching element, or `Err(insertion_point)` when no element compares equal.
#[inline]
pub fn binary_search<T, K, F>(seq: &[T], key: &K, mut cmp: F) -> Result<usize, usize>
where
    K: ?Sized,
    F: FnMut(&T, &K) -> Ordering,
{
    let mut low = 0;
    let mut high = seq.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match cmp(&seq[mid], key) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => return Ok(mid),
        }
    }

    Err(low)
}

/// Render a search result with the signed convention: the index when found,
/// `-(insertion_point + 1)` when absent.
///
/// Positions beyond `isize::MAX` (only reachable with zero-sized elements)
/// saturate at `isize::MAX` and `isize::MIN` respectively.
#[inline]
pub fn to_signed_index(result: Result<usize, usize>) -> isize {
    match result {
        Ok(found) => isize::try_from(found).unwrap_or(isize::MAX),
        Err(insertion) => isize::try_from(insertion)
            .ok()
            .and_then(|p| p.checked_neg())
            .and_then(|p| p.checked_sub(1))
            .unwrap_or(isize::MIN),
    }
}

// ============================================================================
// Partition Search
// ============================================================================

/// Find the first index whose element satisfies `predicate`.
///
/// `seq` must be partitioned so that every failing element precedes every
/// passing one. Returns `seq.len()` when nothing passes, and `0` for an empty
/// sequence.
#[inline]
pub fn find_first<T, P>(seq: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut low = 0;
    let mut high = seq.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if predicate(&seq[mid]) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}
