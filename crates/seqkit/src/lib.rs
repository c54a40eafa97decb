//! # seqkit — Sequence Utilities for Rust
//!
//! Search, dedup, merge, partial-sort, indexing and mutation helpers over
//! slices and vectors. Every function is an independent algorithm over an
//! in-memory sequence; none of them panic on malformed input.
//!
//! ## Quick Start
//!
//! ### Top-N Selection
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let scores = vec![5, 3, 8, 1, 9, 2];
//!
//! // The three smallest elements, without sorting the whole input
//! let best = top(&scores, |a, b| a.cmp(b), 3);
//! assert_eq!(best, vec![1, 2, 3]);
//! ```
//!
//! ### Search
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let sorted = vec![1, 3, 5, 7];
//!
//! assert_eq!(binary_search(&sorted, &5, |e, k| e.cmp(k)), Ok(2));
//! assert_eq!(binary_search(&sorted, &4, |e, k| e.cmp(k)), Err(2));
//! assert_eq!(to_signed_index(Err(2)), -3);
//!
//! // First element >= 4 in a partitioned sequence
//! assert_eq!(find_first(&sorted, |&e| e >= 4), 2);
//! ```
//!
//! ### Dedup and Merge
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! assert_eq!(distinct(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
//!
//! let merged = merge_by_key(&[vec![1, 2], vec![2, 3]], |x: &i32| x.to_string());
//! assert_eq!(merged, vec![1, 2, 3]);
//!
//! let mut seen = unique_filter(|s: &str| s.len());
//! assert!(seen("ab"));
//! assert!(!seen("cd"));
//! ```
//!
//! ### Mutation
//!
//! ```rust
//! use seqkit::prelude::*;
//!
//! let mut items = vec![1, 2, 3, 4];
//! move_item(&mut items, 0, 2)?;
//! assert_eq!(items, vec![2, 3, 1, 4]);
//!
//! let mut handle = insert(&mut items, 7);
//! assert!(contains(&items, &7));
//! assert!(handle.remove(&mut items));
//! assert!(!handle.remove(&mut items));
//!
//! // Out-of-range positions are reported, not panicked on
//! assert!(swap(&mut items, 0, 10).is_err());
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `std` (default): implements `std::error::Error` for [`SeqError`].
//!   Without it the crate is `no_std` and only needs `alloc`.
//! * `tracing`: emits diagnostic events (target `seqkit`) through `tracing`.
//! * `dev`: exposes the layer modules under `seqkit::internals`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, falsiness, diagnostics.
mod primitives;

// Layer 2: Search - binary search, scans, comparison.
mod search;

// Layer 3: Ordering - top-N, grouping, sorted diff.
mod ordering;

// Layer 4: Dedup - distinct, unique filter, merge, coalesce.
mod dedup;

// Layer 5: Mutate - in-place positional helpers and removal.
mod mutate;

// Layer 6: Build - indexing and generation.
mod build;

pub use crate::build::generate::{fill, fill_into, range, range_from};
pub use crate::build::index::{index, index_with};
pub use crate::dedup::distinct::{distinct, distinct_by, distinct_by_key};
pub use crate::dedup::merge::{coalesce, flatten, merge, merge_by_key};
pub use crate::dedup::unique::{UniqueFilter, unique_filter};
pub use crate::mutate::positional::{move_item, swap, tail, tail_mut};
pub use crate::mutate::removal::{Cursor, Removal, for_each, insert};
pub use crate::ordering::diff::{Delta, Splice, delta, sorted_diff};
pub use crate::ordering::group::group_by;
pub use crate::ordering::top::{TopN, top};
pub use crate::primitives::errors::SeqError;
pub use crate::primitives::falsy::{Falsy, is_falsy_or_empty};
pub use crate::search::binary::{binary_search, find_first, to_signed_index};
pub use crate::search::compare::{
    common_prefix_length, common_prefix_length_by, equals, equals_by,
};
pub use crate::search::scan::{contains, first, first_index, first_or, last_index};

// Standard seqkit prelude.
pub mod prelude {
    pub use crate::{
        Cursor, Delta, Falsy, Removal, SeqError, Splice, TopN, UniqueFilter, binary_search,
        coalesce, common_prefix_length, common_prefix_length_by, contains, delta, distinct,
        distinct_by, distinct_by_key, equals, equals_by, fill, fill_into, find_first, first,
        first_index, first_or, flatten, for_each, group_by, index, index_with, insert,
        is_falsy_or_empty, last_index, merge, merge_by_key, move_item, range, range_from,
        sorted_diff, swap, tail, tail_mut, to_signed_index, top, unique_filter,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod search {
        pub use crate::search::*;
    }
    pub mod ordering {
        pub use crate::ordering::*;
    }
    pub mod dedup {
        pub use crate::dedup::*;
    }
    pub mod mutate {
        pub use crate::mutate::*;
    }
    pub mod build {
        pub use crate::build::*;
    }
}
