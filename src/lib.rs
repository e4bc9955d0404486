//! # iterset
//!
//! Set operations over already-sorted iterators, computed lazily with
//! linear-time merge-joins instead of hash sets.
//!
//! ## Overview
//!
//! Every operation takes inputs that are non-decreasing under some key
//! and walks them with one comparison at a time:
//!
//! - **Cursor**: [`Lookahead`], a one-element lookahead that caches each
//!   element's key
//! - **Joins**: `merge`, `union`, `intersection`, `difference`,
//!   `symmetric_difference`, each a lazy iterator
//! - **Predicates**: `includes`, `is_subset`, `is_superset`, which stop at
//!   the first proof
//! - **K-way merge**: `merge_all` over any number of inputs
//! - **Fallible inputs**: `try_*` forms that surface the first `Err`
//!
//! Inputs are never sorted, deduplicated or validated. Duplicates within
//! one input are kept and matched one-to-one against the other input.
//!
//! ## Feature Flags
//!
//! - `join`: the five producing merge-joins
//! - `predicate`: inclusion tests
//! - `kmerge`: k-way merge
//! - `fallible`: `try_*` operations over `Result` items
//! - `ext`: [`SortedIteratorExt`](ext::SortedIteratorExt) method syntax
//! - `tracing`: `tracing` events at exhaustion and short-circuit points
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use iterset::prelude::*;
//!
//! let a = [5, 10, 15, 20, 25];
//! let b = [10, 20, 30, 40, 50];
//!
//! assert_eq!(union(a, b).collect::<Vec<_>>(), [5, 10, 15, 20, 25, 30, 40, 50]);
//! assert_eq!(intersection(a, b).collect::<Vec<_>>(), [10, 20]);
//! assert!(includes([5, 10, 15, 20], [10, 20]));
//!
//! let by_id: Vec<_> = merge_by_key([(1, "x"), (3, "x")], [(2, "y")], |pair| pair.0).collect();
//! assert_eq!(by_id, [(1, "x"), (2, "y"), (3, "x")]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the functions and traits of every enabled feature.
///
/// # Usage
///
/// ```rust
/// use iterset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cursor::Lookahead;
    pub use crate::error::EndOfSequence;
    pub use crate::key::{ByKey, Identity, KeyFn, Keyed};

    #[cfg(feature = "join")]
    pub use crate::join::{
        MergeJoin, difference, difference_by_key, intersection, intersection_by_key, merge,
        merge_by_key, symmetric_difference, symmetric_difference_by_key, union, union_by_key,
    };

    #[cfg(feature = "predicate")]
    pub use crate::predicate::{
        includes, includes_by_key, includes_with, is_subset, is_subset_by_key, is_superset,
        is_superset_by_key,
    };

    #[cfg(feature = "kmerge")]
    pub use crate::kmerge::{merge_all, merge_all_by_key};

    #[cfg(feature = "fallible")]
    pub use crate::fallible::*;

    #[cfg(feature = "ext")]
    pub use crate::ext::SortedIteratorExt;
}

pub mod cursor;
pub mod error;
pub mod key;
mod trace;

#[cfg(feature = "join")]
pub mod join;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "kmerge")]
pub mod kmerge;

#[cfg(feature = "fallible")]
pub mod fallible;

#[cfg(feature = "ext")]
pub mod ext;

pub use cursor::Lookahead;
pub use error::EndOfSequence;
