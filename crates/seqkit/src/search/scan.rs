//! Linear membership and search helpers.
//!
//! These make no assumption about ordering and visit elements front to back
//! (or back to front for `last_index`), stopping at the first hit.

/// Index of the first element satisfying `predicate`.
#[inline]
pub fn first_index<T, P>(seq: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().position(predicate)
}

/// Index of the last element satisfying `predicate`.
#[inline]
pub fn last_index<T, P>(seq: &[T], predicate: P) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    seq.iter().rposition(predicate)
}

/// First element satisfying `predicate`.
#[inline]
pub fn first<T, P>(seq: &[T], predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    first_index(seq, predicate).map(|i| &seq[i])
}

/// First element satisfying `predicate`, or `not_found` when none does.
#[inline]
pub fn first_or<T, P>(seq: &[T], predicate: P, not_found: T) -> T
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    first(seq, predicate).cloned().unwrap_or(not_found)
}

/// Whether any element equals `value`.
#[inline]
pub fn contains<T: PartialEq>(seq: &[T], value: &T) -> bool {
    first_index(seq, |e| e == value).is_some()
}
