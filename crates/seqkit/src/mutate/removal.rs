//! Removal handles and removal-safe iteration.
//!
//! ## Purpose
//!
//! `insert` appends an element and hands back a [`Removal`] that can later
//! take that element out again. `for_each` visits every element and lets the
//! callback remove the current one through a [`Cursor`].
//!
//! ## Design notes
//!
//! * **Explicit sequence argument**: A handle cannot hold `&mut Vec<T>` while
//!   the caller keeps using the vector, so `Removal::remove` takes the
//!   sequence as an argument instead of capturing it.
//! * **Value identity**: Removal targets the first element equal to the
//!   inserted value.
//!
//! ## Invariants
//!
//! * A `Removal` removes at most one element over its whole lifetime.
//! * `for_each` calls the callback exactly once per element present at the
//!   start, in order, whether or not earlier elements were removed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Insert / Remove
// ============================================================================

/// Handle that removes a previously inserted element.
///
/// The handle is not `Clone`, so one insertion removes at most one element:
///
/// ```compile_fail
/// let mut seq = vec![5];
/// let handle = seqkit::insert(&mut seq, 5);
/// let _copy = handle.clone();
/// ```
#[derive(Debug)]
#[must_use = "dropping the handle makes the element impossible to remove through it"]
pub struct Removal<T> {
    element: T,
    spent: bool,
}

impl<T: PartialEq> Removal<T> {
    /// Remove the first element of `seq` equal to the inserted one.
    ///
    /// Returns `true` if an element was removed. Only the first successful
    /// call removes anything; later calls are no-ops.
    pub fn remove(&mut self, seq: &mut Vec<T>) -> bool {
        if self.spent {
            return false;
        }

        match seq.iter().position(|e| *e == self.element) {
            Some(index) => {
                seq.remove(index);
                self.spent = true;
                true
            }
            None => false,
        }
    }

    /// Whether this handle has already removed its element.
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.spent
    }

    /// The element this handle removes.
    #[inline]
    pub fn element(&self) -> &T {
        &self.element
    }
}

/// Append `element` to `seq` and return a handle that removes it again.
pub fn insert<T>(seq: &mut Vec<T>, element: T) -> Removal<T>
where
    T: Clone + PartialEq,
{
    seq.push(element.clone());
    Removal {
        element,
        spent: false,
    }
}

// ============================================================================
// Removal-Safe Iteration
// ============================================================================

/// Position of the element currently visited by [`for_each`].
#[derive(Debug)]
pub struct Cursor {
    index: usize,
    remove: bool,
}

impl Cursor {
    /// Request removal of the current element once the callback returns.
    #[inline]
    pub fn remove(&mut self) {
        self.remove = true;
    }

    /// Current position in the (possibly shortened) sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Visit every element, letting `callback` remove the current one.
pub fn for_each<T, F>(seq: &mut Vec<T>, mut callback: F)
where
    F: FnMut(&T, &mut Cursor),
{
    let mut index = 0;
    while index < seq.len() {
        let mut cursor = Cursor {
            index,
            remove: false,
        };
        callback(&seq[index], &mut cursor);

        if cursor.remove {
            seq.remove(index);
        } else {
            index += 1;
        }
    }
}
