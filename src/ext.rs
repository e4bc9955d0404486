//! Method syntax for sorted iterators.
//!
//! [`SortedIteratorExt`] is implemented for every [`Iterator`] and forwards
//! to the free functions in [`crate::join`] and [`crate::predicate`]. The
//! receiver plays the role of `a`, the argument that of `b`.
//!
//! # Examples
//!
//! ```rust
//! use iterset::ext::SortedIteratorExt;
//!
//! let primes = [2, 3, 5, 7, 11];
//! let odds = (1..12).step_by(2);
//!
//! let odd_primes: Vec<i32> = primes.into_iter().intersection_sorted(odds).collect();
//! assert_eq!(odd_primes, vec![3, 5, 7, 11]);
//! assert!([3, 5].into_iter().is_subset_sorted(primes));
//! ```

use crate::join::{self, Difference, Intersection, Merge, SymmetricDifference, Union};
use crate::key::Identity;
use crate::predicate;

/// Set operations on sorted iterators, in method form.
///
/// Both the receiver and the argument must be sorted.
pub trait SortedIteratorExt: Iterator + Sized {
    /// Same as [`join::merge(self, other)`](join::merge).
    fn merge_sorted<J>(self, other: J) -> Merge<Self, J::IntoIter, Identity>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        join::merge(self, other)
    }

    /// Same as [`join::union(self, other)`](join::union).
    fn union_sorted<J>(self, other: J) -> Union<Self, J::IntoIter, Identity>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        join::union(self, other)
    }

    /// Same as [`join::intersection(self, other)`](join::intersection).
    fn intersection_sorted<J>(self, other: J) -> Intersection<Self, J::IntoIter, Identity>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        join::intersection(self, other)
    }

    /// Same as [`join::difference(self, other)`](join::difference).
    fn difference_sorted<J>(self, other: J) -> Difference<Self, J::IntoIter, Identity>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        join::difference(self, other)
    }

    /// Same as [`join::symmetric_difference(self, other)`](join::symmetric_difference).
    fn symmetric_difference_sorted<J>(self, other: J) -> SymmetricDifference<Self, J::IntoIter, Identity>
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        join::symmetric_difference(self, other)
    }

    /// Same as [`predicate::includes(self, other)`](predicate::includes).
    fn includes_sorted<J>(self, other: J) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        predicate::includes(self, other)
    }

    /// Same as [`predicate::is_subset(self, other)`](predicate::is_subset).
    fn is_subset_sorted<J>(self, other: J) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        predicate::is_subset(self, other)
    }

    /// Same as [`predicate::is_superset(self, other)`](predicate::is_superset).
    fn is_superset_sorted<J>(self, other: J) -> bool
    where
        J: IntoIterator<Item = Self::Item>,
        Self::Item: Ord,
    {
        predicate::is_superset(self, other)
    }
}

impl<I: Iterator> SortedIteratorExt for I {}
