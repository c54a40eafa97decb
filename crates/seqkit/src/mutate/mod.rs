//! Layer 5: Mutate
//!
//! This layer holds the helpers that change a caller-supplied sequence in
//! place: positional exchange and relocation, removal handles, and
//! iteration that tolerates removing the current element.

// In-place positional helpers.
pub mod positional;

// Removal handles and removal-safe iteration.
pub mod removal;
