//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type, the falsiness trait and the
//! diagnostic macros used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: Build
//!   ↓
//! Layer 5: Mutate
//!   ↓
//! Layer 4: Dedup
//!   ↓
//! Layer 3: Ordering
//!   ↓
//! Layer 2: Search
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Falsiness of element values.
pub mod falsy;

/// Diagnostic event macros.
pub(crate) mod trace;
