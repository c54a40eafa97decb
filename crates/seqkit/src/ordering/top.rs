//! Bounded top-N selection.
//!
//! ## Purpose
//!
//! This module selects the `n` smallest elements of an unsorted sequence, in
//! ascending order, without sorting the whole input.
//!
//! ## Design notes
//!
//! * **Bounded buffer**: Candidates live in a sorted `Vec` of at most `n`
//!   elements. A new element is only considered when it beats the current
//!   largest candidate.
//! * **Binary insertion**: The insertion position is found with `find_first`
//!   (O(log n)); the shift costs O(n). For `m` inputs the expected cost is
//!   O(m log n) when few elements qualify, against O(m log m) for a full sort.
//! * **Stability**: New elements are placed after candidates that compare
//!   equal, so ties keep encounter order.
//!
//! ## Invariants
//!
//! * Candidates are always sorted ascending per the comparator.
//! * `len() <= capacity()`.
//! * After feeding a whole sequence, the candidates equal the first `n`
//!   elements of a stable full sort of that sequence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::trace::trace_event;
use crate::search::binary::find_first;

// ============================================================================
// Bounded Candidate Buffer
// ============================================================================

/// Sorted buffer holding the `capacity` smallest elements pushed so far.
#[derive(Debug, Clone)]
pub struct TopN<T, F> {
    items: Vec<T>,
    capacity: usize,
    compare: F,
}

impl<T, F> TopN<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Create an empty buffer keeping at most `capacity` elements.
    ///
    /// Storage grows with the candidates actually held, so `capacity` may
    /// exceed any realistic input length.
    pub fn new(capacity: usize, compare: F) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            compare,
        }
    }

    /// Offer an element. Returns `true` if it entered the candidate set.
    pub fn push(&mut self, item: T) -> bool {
        if self.capacity == 0 {
            return false;
        }

        let compare = &mut self.compare;
        if self.items.len() == self.capacity {
            let beats_largest = self
                .items
                .last()
                .is_some_and(|largest| compare(&item, largest) == Ordering::Less);
            if !beats_largest {
                return false;
            }
        }

        self.accept(item);
        true
    }

    /// Number of candidates currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no candidate is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of candidates.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Candidates in ascending order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the buffer, returning the candidates in ascending order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // Insert an element already known to qualify, evicting the largest
    // candidate when full.
    fn accept(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop();
        }

        let compare = &mut self.compare;
        let position = find_first(&self.items, |e| compare(&item, e) == Ordering::Less);
        trace_event!(position, len = self.items.len(), "top: accepted candidate");
        self.items.insert(position, item);
    }

    // Fill an empty buffer from the head of the input with one stable sort.
    fn seed(&mut self, head: &[T])
    where
        T: Clone,
    {
        debug_assert!(self.items.is_empty(), "seed: buffer must be empty");
        debug_assert!(head.len() <= self.capacity, "seed: head exceeds capacity");

        self.items.extend_from_slice(head);
        let compare = &mut self.compare;
        self.items.sort_by(|a, b| compare(a, b));
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Return the `n` smallest elements of `seq` in ascending order.
///
/// The result has `min(n, seq.len())` elements and matches the first `n`
/// elements of a stable sort of `seq` by `compare`.
pub fn top<T, F>(seq: &[T], compare: F, n: usize) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if n == 0 {
        return Vec::new();
    }

    let split = n.min(seq.len());
    let (head, rest) = seq.split_at(split);

    let mut buffer = TopN::new(n, compare);
    buffer.seed(head);
    for item in rest {
        // Cheap reject before cloning.
        if let Some(largest) = buffer.items.last() {
            if (buffer.compare)(item, largest) != Ordering::Less {
                continue;
            }
        }
        buffer.accept(item.clone());
    }

    buffer.into_vec()
}
