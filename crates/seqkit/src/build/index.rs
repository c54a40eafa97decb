//! Keyed indexing of a sequence.
//!
//! ## Design notes
//!
//! * Keys are any `Hash + Eq` type; the map is a `hashbrown::HashMap`, so
//!   iteration order of the result is unspecified.
//! * Collisions are resolved in iteration order: each element is merged with
//!   whatever the earlier elements produced for its key.

// External dependencies
use core::hash::Hash;
use hashbrown::HashMap;

/// Map each element's key to the last element producing it.
#[inline]
pub fn index<T, K, F>(seq: &[T], indexer: F) -> HashMap<K, T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    index_with(seq, indexer, |element, _| element.clone())
}

/// Map each element's key to a value built by `merger`.
///
/// `merger` receives the element and the value already stored for its key
/// (`None` the first time the key appears) and returns the new value.
pub fn index_with<T, K, V, F, M>(seq: &[T], mut indexer: F, mut merger: M) -> HashMap<K, V>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
    M: FnMut(&T, Option<V>) -> V,
{
    let mut map = HashMap::new();
    for element in seq {
        let key = indexer(element);
        let previous = map.remove(&key);
        map.insert(key, merger(element, previous));
    }
    map
}
