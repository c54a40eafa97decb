//! Stateful first-occurrence filter.
//!
//! ## Purpose
//!
//! `UniqueFilter` answers "have I seen this key before?" across any number of
//! calls. It is the building block for `distinct_by_key` and `merge_by_key`,
//! and can be handed to `Iterator::filter` through [`unique_filter`].
//!
//! ## Invariants
//!
//! * The first `check` for a key returns `true`; every later one returns
//!   `false` until `reset` is called.
//! * State lives exactly as long as the filter value.

// External dependencies
use core::hash::Hash;
use hashbrown::HashSet;

/// Filter remembering every key it has accepted.
#[derive(Debug, Clone)]
pub struct UniqueFilter<K, F> {
    seen: HashSet<K>,
    key_fn: F,
}

impl<K, F> UniqueFilter<K, F>
where
    K: Hash + Eq,
{
    /// Create a filter deriving keys with `key_fn`.
    pub fn new(key_fn: F) -> Self {
        Self {
            seen: HashSet::new(),
            key_fn,
        }
    }

    /// Returns `true` the first time `item`'s key is seen.
    #[inline]
    pub fn check<T>(&mut self, item: &T) -> bool
    where
        T: ?Sized,
        F: FnMut(&T) -> K,
    {
        self.seen.insert((self.key_fn)(item))
    }

    /// Forget every key seen so far.
    pub fn reset(&mut self) {
        self.seen.clear();
    }

    /// Number of distinct keys accepted.
    #[inline]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }
}

/// Closure form of [`UniqueFilter`], suitable for `Iterator::filter`.
pub fn unique_filter<T, K, F>(key_fn: F) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut filter = UniqueFilter::new(key_fn);
    move |item: &T| filter.check(item)
}
