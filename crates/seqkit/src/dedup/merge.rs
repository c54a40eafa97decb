//! Concatenation, keyed merge and falsy-element removal.
//!
//! ## Invariants
//!
//! * Element order follows the input: sequence by sequence, front to back.
//! * `merge_by_key` keeps the first element per key across all inputs.
//! * `coalesce` passes an absent sequence through unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::hash::Hash;

// Internal dependencies
use crate::dedup::unique::UniqueFilter;
use crate::primitives::falsy::Falsy;
use crate::primitives::trace::debug_event;

/// Concatenate every sequence, keeping duplicates.
pub fn merge<T, S>(seqs: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    flatten(seqs)
}

/// Concatenate every sequence, keeping only the first element per key.
pub fn merge_by_key<T, S, K, F>(seqs: &[S], key_fn: F) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut filter = UniqueFilter::new(key_fn);
    let mut result = Vec::new();
    let mut skipped = 0usize;

    for item in seqs.iter().flat_map(|s| s.as_ref()) {
        if filter.check(item) {
            result.push(item.clone());
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug_event!(skipped, kept = result.len(), "merge_by_key: dropped duplicate keys");
    }
    result
}

/// Concatenate a sequence of sequences, preserving order.
pub fn flatten<T, S>(seqs: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let total = seqs.iter().map(|s| s.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for seq in seqs {
        result.extend_from_slice(seq.as_ref());
    }
    result
}

/// Copy of `seq` without its falsy elements; `None` stays `None`.
pub fn coalesce<T>(seq: Option<&[T]>) -> Option<Vec<T>>
where
    T: Falsy + Clone,
{
    seq.map(|s| s.iter().filter(|e| !e.is_falsy()).cloned().collect())
}
