//! First-occurrence deduplication.
//!
//! ## Design notes
//!
//! * **Equality scan**: `distinct` and `distinct_by` compare each element
//!   against the already-kept ones. This is O(n²) but works for any
//!   equality, including ones no hash can express (e.g. float tolerance).
//! * **Hashed keys**: `distinct_by_key` is O(n) and requires `K: Hash + Eq`.
//!
//! ## Invariants
//!
//! * Output preserves the order of first occurrences.
//! * The input is never mutated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::hash::Hash;

// Internal dependencies
use crate::dedup::unique::UniqueFilter;

/// Keep the first occurrence of every `PartialEq`-distinct element, in order.
#[inline]
pub fn distinct<T>(seq: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    distinct_by(seq, |a, b| a == b)
}

/// Keep each element that is not `equals` to an earlier kept element.
pub fn distinct_by<T, F>(seq: &[T], mut equals: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut kept: Vec<T> = Vec::new();
    for element in seq {
        if !kept.iter().any(|k| equals(k, element)) {
            kept.push(element.clone());
        }
    }
    kept
}

/// Keep the first element for every key produced by `key_fn`.
pub fn distinct_by_key<T, K, F>(seq: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut filter = UniqueFilter::new(key_fn);
    seq.iter().filter(|e| filter.check(*e)).cloned().collect()
}
