//! Layer 2: Search
//!
//! This layer provides lookups over sequences: logarithmic searches that rely
//! on sortedness or partitioning, linear scans, and positional comparison of
//! two sequences. Higher layers (`top`, `sorted_diff`) build on it.

// Binary search and partition-point lookup.
pub mod binary;

// Linear membership and search.
pub mod scan;

// Positional comparison of two sequences.
pub mod compare;
