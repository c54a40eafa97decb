//! Layer 6: Build
//!
//! This layer constructs new collections: keyed maps indexed from a sequence,
//! integer ranges and sequences of computed values.

// Keyed indexing of a sequence.
pub mod index;

// Sequence generation.
pub mod generate;
