//! Sequence generation.
//!
//! Integer ranges are generic over `num_traits::PrimInt`, so the same helper
//! serves `u8` offsets and `i64` positions alike.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

/// Integers `0, 1, …, to - 1`. Empty when `to <= 0`.
#[inline]
pub fn range<I: PrimInt>(to: I) -> Vec<I> {
    if to <= I::zero() {
        return Vec::new();
    }
    range_from(I::zero(), to)
}

/// Integers from `from` towards `to`, excluding `to`.
///
/// Ascending when `from <= to`, descending (`from, from - 1, …, to + 1`)
/// otherwise.
pub fn range_from<I: PrimInt>(from: I, to: I) -> Vec<I> {
    let ascending = from <= to;
    let span = if ascending {
        to.checked_sub(&from)
    } else {
        from.checked_sub(&to)
    };
    let mut result = Vec::with_capacity(span.and_then(|s| s.to_usize()).unwrap_or(0));

    let mut current = from;
    if ascending {
        while current < to {
            result.push(current);
            current = current + I::one();
        }
    } else {
        while current > to {
            result.push(current);
            current = current - I::one();
        }
    }

    result
}

/// `n` freshly computed values.
#[inline]
pub fn fill<T, F>(n: usize, value_fn: F) -> Vec<T>
where
    F: FnMut() -> T,
{
    fill_into(Vec::with_capacity(n), n, value_fn)
}

/// Overwrite positions `0..n` of `seq` with fresh values, extending it when
/// shorter. Elements past `n` are kept.
pub fn fill_into<T, F>(mut seq: Vec<T>, n: usize, mut value_fn: F) -> Vec<T>
where
    F: FnMut() -> T,
{
    for i in 0..n {
        let value = value_fn();
        match seq.get_mut(i) {
            Some(slot) => *slot = value,
            None => seq.push(value),
        }
    }
    seq
}
