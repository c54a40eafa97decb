//! Layer 4: Dedup
//!
//! This layer removes repeated or empty elements and joins sequences:
//! first-occurrence deduplication, the stateful unique filter, keyed merge,
//! flattening and coalescing.

// Stateful first-occurrence filter.
pub mod unique;

// First-occurrence deduplication.
pub mod distinct;

// Concatenation, keyed merge and falsy-element removal.
pub mod merge;
