//! Error types for positional sequence operations.
//!
//! ## Purpose
//!
//! Most helpers in this crate never fail: malformed input produces a
//! degenerate result (an empty vector, `None`, an unspecified index). The
//! positional mutators (`swap`, `move_item`) cannot express an "undefined
//! slot" in Rust, so they report out-of-range positions through this type
//! instead of panicking.
//!
//! ## Invariants
//!
//! * A failed operation leaves the sequence untouched.
//! * Every variant carries the offending position and the sequence length.
//!
//! ## Non-goals
//!
//! * Precondition violations (unsorted input to `binary_search`) are not
//!   detected and have no variant here.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for positional sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// A position does not address an element of the sequence.
    IndexOutOfBounds {
        /// The position that was requested.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

impl SeqError {
    /// Check `index < len`, producing `IndexOutOfBounds` otherwise.
    #[inline]
    pub fn check_index(index: usize, len: usize) -> core::result::Result<(), Self> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfBounds { index, len })
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SeqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "Index out of bounds: {index} (sequence length is {len})")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SeqError {}
