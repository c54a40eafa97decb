//! Positional comparison of two sequences.
//!
//! ## Design notes
//!
//! * Each operation comes in two forms: a `PartialEq` default and a `_by`
//!   variant taking an explicit equality predicate.
//! * `equals_by` short-circuits when both arguments are the very same slice.

/// Count leading positions where `a` and `b` hold equal elements.
#[inline]
pub fn common_prefix_length<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    common_prefix_length_by(a, b, |x, y| x == y)
}

/// Count leading positions where `equals` holds, stopping at the first
/// mismatch or at the end of the shorter sequence.
pub fn common_prefix_length_by<T, U, F>(a: &[T], b: &[U], mut equals: F) -> usize
where
    F: FnMut(&T, &U) -> bool,
{
    a.iter()
        .zip(b.iter())
        .take_while(|&(x, y)| equals(x, y))
        .count()
}

/// Whether `a` and `b` have the same length and pairwise equal elements.
#[inline]
pub fn equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    equals_by(a, b, |x, y| x == y)
}

/// Whether `a` and `b` have the same length and every positional pair
/// satisfies `item_equals`.
pub fn equals_by<T, F>(a: &[T], b: &[T], mut item_equals: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    if core::ptr::eq(a, b) {
        return true;
    }

    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| item_equals(x, y))
}
