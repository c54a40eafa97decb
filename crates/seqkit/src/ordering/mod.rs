//! Layer 3: Ordering
//!
//! This layer holds the comparator-driven algorithms: bounded top-N
//! selection, grouping of equal-ranked elements, and the difference of two
//! sorted sequences. It builds on the partition search from Layer 2.

// Bounded top-N selection.
pub mod top;

// Grouping of equal-ranked elements.
pub mod group;

// Difference of two sorted sequences.
pub mod diff;
