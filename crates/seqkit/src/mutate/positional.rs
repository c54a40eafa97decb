//! In-place positional helpers.
//!
//! ## Purpose
//!
//! Exchange, relocate and address elements by position without panicking on
//! bad positions.
//!
//! ## Design notes
//!
//! * **No panics**: Out-of-range positions yield `SeqError::IndexOutOfBounds`
//!   (mutators) or `None` (accessors) and leave the sequence untouched.
//! * **Splice semantics for `move_item`**: The destination is interpreted
//!   against the sequence after removal; a destination past the end appends.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SeqError;
use crate::primitives::trace::debug_event;

/// Exchange the elements at `i` and `j`.
pub fn swap<T>(seq: &mut [T], i: usize, j: usize) -> Result<(), SeqError> {
    let len = seq.len();
    SeqError::check_index(i, len)
        .and_then(|()| SeqError::check_index(j, len))
        .inspect_err(|_err| debug_event!(i, j, len, "swap: position out of range"))?;

    seq.swap(i, j);
    Ok(())
}

/// Remove the element at `from` and reinsert it at `to`.
///
/// `to` is a position in the shortened sequence; values past its end append.
pub fn move_item<T>(seq: &mut Vec<T>, from: usize, to: usize) -> Result<(), SeqError> {
    SeqError::check_index(from, seq.len())
        .inspect_err(|_err| debug_event!(from, to, len = seq.len(), "move_item: source out of range"))?;

    let element = seq.remove(from);
    let to = to.min(seq.len());
    seq.insert(to, element);
    Ok(())
}

/// Element `n` positions before the last one (`tail(seq, 0)` is the last).
#[inline]
pub fn tail<T>(seq: &[T], n: usize) -> Option<&T> {
    let index = seq.len().checked_sub(n.checked_add(1)?)?;
    seq.get(index)
}

/// Mutable counterpart of [`tail`].
#[inline]
pub fn tail_mut<T>(seq: &mut [T], n: usize) -> Option<&mut T> {
    let index = seq.len().checked_sub(n.checked_add(1)?)?;
    seq.get_mut(index)
}
