//! Difference of two sorted sequences.
//!
//! ## Purpose
//!
//! `sorted_diff` walks two sequences sorted by the same comparator in lockstep
//! and describes how to turn `before` into `after` as a list of splices.
//! `delta` flattens those splices into removed and added elements.
//!
//! ## Invariants
//!
//! * Splice `start` positions refer to `before` and are strictly increasing.
//! * Adjacent edits are coalesced: no splice starts where the previous one's
//!   deleted range ends.
//! * No splice is empty (it deletes or inserts at least one element).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Data Structures
// ============================================================================

/// A single edit on `before`: delete `delete_count` elements at `start`, then
/// insert `inserted` there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice<T> {
    /// Position in `before` where the edit applies.
    pub start: usize,

    /// Number of elements of `before` removed from `start`.
    pub delete_count: usize,

    /// Elements inserted at `start`.
    pub inserted: Vec<T>,
}

/// Elements removed from and added to a sorted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta<T> {
    /// Elements present in `before` only.
    pub removed: Vec<T>,

    /// Elements present in `after` only.
    pub added: Vec<T>,
}

// ============================================================================
// Diff Functions
// ============================================================================

/// Compute the splices turning sorted `before` into sorted `after`.
pub fn sorted_diff<T, F>(before: &[T], after: &[T], mut compare: F) -> Vec<Splice<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut splices: Vec<Splice<T>> = Vec::new();
    let mut before_idx = 0;
    let mut after_idx = 0;

    loop {
        if before_idx == before.len() {
            push_splice(&mut splices, before_idx, 0, &after[after_idx..]);
            break;
        }
        if after_idx == after.len() {
            push_splice(&mut splices, before_idx, before.len() - before_idx, &[]);
            break;
        }

        let after_element = &after[after_idx];
        match compare(&before[before_idx], after_element) {
            Ordering::Equal => {
                before_idx += 1;
                after_idx += 1;
            }
            Ordering::Less => {
                push_splice(&mut splices, before_idx, 1, &[]);
                before_idx += 1;
            }
            Ordering::Greater => {
                push_splice(
                    &mut splices,
                    before_idx,
                    0,
                    core::slice::from_ref(after_element),
                );
                after_idx += 1;
            }
        }
    }

    splices
}

/// Elements removed from and added to sorted `before` to obtain sorted `after`.
pub fn delta<T, F>(before: &[T], after: &[T], compare: F) -> Delta<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut removed = Vec::new();
    let mut added = Vec::new();

    for splice in sorted_diff(before, after, compare) {
        removed.extend_from_slice(&before[splice.start..splice.start + splice.delete_count]);
        added.extend(splice.inserted);
    }

    Delta { removed, added }
}

// Append an edit, merging it into the previous splice when contiguous.
fn push_splice<T: Clone>(
    splices: &mut Vec<Splice<T>>,
    start: usize,
    delete_count: usize,
    inserted: &[T],
) {
    if delete_count == 0 && inserted.is_empty() {
        return;
    }

    if let Some(latest) = splices.last_mut() {
        if latest.start + latest.delete_count == start {
            latest.delete_count += delete_count;
            latest.inserted.extend_from_slice(inserted);
            return;
        }
    }

    splices.push(Splice {
        start,
        delete_count,
        inserted: inserted.to_vec(),
    });
}
