//! Grouping of equal-ranked elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

/// Sort a copy of `seq` and split it into runs of elements comparing equal.
///
/// Groups appear in ascending order; within a group, elements keep their
/// input order (the sort is stable).
pub fn group_by<T, F>(seq: &[T], mut compare: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = seq.to_vec();
    sorted.sort_by(&mut compare);

    let mut groups: Vec<Vec<T>> = Vec::new();
    for element in sorted {
        if let Some(group) = groups.last_mut() {
            if compare(&group[0], &element) == Ordering::Equal {
                group.push(element);
                continue;
            }
        }
        groups.push(vec![element]);
    }

    groups
}
