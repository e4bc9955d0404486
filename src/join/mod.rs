//! Lazy merge-joins over two sorted inputs.
//!
//! This module provides the five producing set operations:
//!
//! - [`merge()`]: every element of both inputs, duplicates kept
//! - [`union()`]: every key of either input, paired keys emitted once
//! - [`intersection()`]: keys paired across both inputs
//! - [`difference()`]: left keys not paired on the right
//! - [`symmetric_difference()`]: keys not paired on the other side
//!
//! Each operation has a `_by_key` form that orders elements by a caller
//! supplied key. All of them return a [`MergeJoin`] iterator driven by a
//! [`JoinPolicy`](policy::JoinPolicy): one comparison loop that runs while
//! both inputs have elements, followed by a drain of whichever input is
//! left. The policy alone decides what each comparison emits.
//!
//! # Pairing
//!
//! Duplicate keys are matched one-to-one in merge order, never as a cross
//! product. Two left `3`s against three right `3`s pair twice; the third
//! right `3` is then compared against whatever follows on the left.
//!
//! # Preconditions
//!
//! Both inputs must be non-decreasing under the key order. This is not
//! checked; unsorted inputs give unspecified (but memory safe) output.
//!
//! # Laziness
//!
//! Nothing is pulled from either input until the first call to `next`,
//! and each call pulls only what it needs to decide one output element.
//! Unbounded inputs are fine:
//!
//! ```rust
//! use iterset::join::union;
//!
//! let evens = (0..).step_by(2);
//! let threes = (0..).step_by(3);
//! let first: Vec<u32> = union(evens, threes).take(6).collect();
//! assert_eq!(first, vec![0, 2, 3, 4, 6, 8]);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use iterset::join::{difference, intersection, merge, symmetric_difference, union};
//!
//! let a = [5, 10, 15, 20, 25];
//! let b = [10, 20, 30, 40, 50];
//!
//! assert_eq!(merge(a, b).collect::<Vec<_>>(), [5, 10, 10, 15, 20, 20, 25, 30, 40, 50]);
//! assert_eq!(union(a, b).collect::<Vec<_>>(), [5, 10, 15, 20, 25, 30, 40, 50]);
//! assert_eq!(intersection(a, b).collect::<Vec<_>>(), [10, 20]);
//! assert_eq!(difference(a, b).collect::<Vec<_>>(), [5, 15, 25]);
//! assert_eq!(symmetric_difference(a, b).collect::<Vec<_>>(), [5, 15, 25, 30, 40, 50]);
//! ```

pub mod policy;

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::cursor::Lookahead;
use crate::key::{ByKey, Identity, KeyFn};
use policy::{JoinPolicy, Step};

/// A lazy merge-join of two sorted inputs under policy `P`.
///
/// Usually obtained through [`merge()`], [`union()`] and friends; use
/// [`MergeJoin::new`] directly to supply a custom [`KeyFn`] or
/// [`JoinPolicy`].
pub struct MergeJoin<A, B, F, P>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: KeyFn<A::Item>,
{
    left: Lookahead<A, F::Key>,
    right: Lookahead<B, F::Key>,
    key: F,
    policy: PhantomData<P>,
}

/// Output of [`merge()`].
pub type Merge<A, B, F> = MergeJoin<A, B, F, policy::Merge>;

/// Output of [`union()`].
pub type Union<A, B, F> = MergeJoin<A, B, F, policy::Union>;

/// Output of [`intersection()`].
pub type Intersection<A, B, F> = MergeJoin<A, B, F, policy::Intersection>;

/// Output of [`difference()`].
pub type Difference<A, B, F> = MergeJoin<A, B, F, policy::Difference>;

/// Output of [`symmetric_difference()`].
pub type SymmetricDifference<A, B, F> = MergeJoin<A, B, F, policy::SymmetricDifference>;

impl<A, B, F, P> MergeJoin<A, B, F, P>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: KeyFn<A::Item>,
    P: JoinPolicy,
{
    /// Creates a join of `left` and `right` ordered by `key`.
    ///
    /// Neither input is touched until the first call to `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterset::join::{policy, MergeJoin};
    /// use iterset::key::Identity;
    ///
    /// let join: MergeJoin<_, _, _, policy::Intersection> =
    ///     MergeJoin::new([1, 2, 3], [2, 3, 4], Identity);
    /// assert_eq!(join.collect::<Vec<_>>(), vec![2, 3]);
    /// ```
    pub fn new<L, R>(left: L, right: R, key: F) -> Self
    where
        L: IntoIterator<IntoIter = A>,
        R: IntoIterator<IntoIter = B>,
    {
        Self {
            left: Lookahead::new(left),
            right: Lookahead::new(right),
            key,
            policy: PhantomData,
        }
    }

    fn drain_left(&mut self) -> Option<A::Item> {
        if P::DRAIN_LEFT {
            self.left.advance_element(&mut self.key)
        } else {
            None
        }
    }

    fn drain_right(&mut self) -> Option<A::Item> {
        if P::DRAIN_RIGHT {
            self.right.advance_element(&mut self.key)
        } else {
            None
        }
    }
}

impl<A, B, F, P> Iterator for MergeJoin<A, B, F, P>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: KeyFn<A::Item>,
    P: JoinPolicy,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ordering = {
                let Ok(left) = self.left.peek(&mut self.key) else {
                    return self.drain_right();
                };
                let Ok(right) = self.right.peek(&mut self.key) else {
                    return self.drain_left();
                };
                F::compare(left, right)
            };

            match P::step(ordering) {
                Step::TakeLeft => return self.left.advance_element(&mut self.key),
                Step::TakeRight => return self.right.advance_element(&mut self.key),
                Step::DropLeft => self.left.discard(&mut self.key),
                Step::DropRight => self.right.discard(&mut self.key),
                Step::Pair => {
                    let element = self.left.advance_element(&mut self.key);
                    self.right.discard(&mut self.key);
                    return element;
                }
                Step::DropBoth => {
                    self.left.discard(&mut self.key);
                    self.right.discard(&mut self.key);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        P::size_hint(self.left.size_hint(), self.right.size_hint())
    }
}

impl<A, B, F, P> FusedIterator for MergeJoin<A, B, F, P>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
    F: KeyFn<A::Item>,
    P: JoinPolicy,
{
}

impl<A, B, F, P> Clone for MergeJoin<A, B, F, P>
where
    A: Iterator + Clone,
    B: Iterator<Item = A::Item> + Clone,
    A::Item: Clone,
    F: KeyFn<A::Item> + Clone,
    F::Key: Clone,
{
    fn clone(&self) -> Self {
        Self {
            left: self.left.clone(),
            right: self.right.clone(),
            key: self.key.clone(),
            policy: PhantomData,
        }
    }
}

impl<A, B, F, P> fmt::Debug for MergeJoin<A, B, F, P>
where
    A: Iterator + fmt::Debug,
    B: Iterator<Item = A::Item> + fmt::Debug,
    A::Item: fmt::Debug,
    F: KeyFn<A::Item> + fmt::Debug,
    F::Key: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MergeJoin")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("key", &self.key)
            .finish()
    }
}

/// Defines an identity-keyed constructor and its `_by_key` companion.
macro_rules! sorted_join {
    ($(#[$attribute:meta])* $name:ident => $output:ident) => {
        paste::paste! {
            $(#[$attribute])*
            pub fn $name<A, B>(a: A, b: B) -> $output<A::IntoIter, B::IntoIter, Identity>
            where
                A: IntoIterator,
                B: IntoIterator<Item = A::Item>,
                A::Item: Ord,
            {
                MergeJoin::new(a, b, Identity)
            }

            #[doc = "Like [`" $name "()`], ordering elements by the key that `key` extracts."]
            ///
            /// `key` runs exactly once per element pulled from either input.
            pub fn [<$name _by_key>]<A, B, K, F>(
                a: A,
                b: B,
                key: F,
            ) -> $output<A::IntoIter, B::IntoIter, ByKey<F>>
            where
                A: IntoIterator,
                B: IntoIterator<Item = A::Item>,
                F: FnMut(&A::Item) -> K,
                K: Ord,
            {
                MergeJoin::new(a, b, ByKey::new(key))
            }
        }
    };
}

sorted_join! {
    /// Merges two sorted inputs into one sorted stream, keeping every element.
    ///
    /// An element present in both inputs appears twice. On equal keys the
    /// element from `b` is emitted first; the output length is always
    /// `len(a) + len(b)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterset::join::merge;
    ///
    /// let merged: Vec<i32> = merge([1, 3, 5], [2, 3, 4]).collect();
    /// assert_eq!(merged, vec![1, 2, 3, 3, 4, 5]);
    /// ```
    merge => Merge
}

sorted_join! {
    /// Returns every element of `a` or `b` in sorted order.
    ///
    /// When the current heads have equal keys, the element from `a` is
    /// emitted once and both inputs advance. Duplicates within one input
    /// that are not paired with the other input are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterset::join::union;
    ///
    /// let all: Vec<i32> = union([1, 3, 3], [2, 3, 4]).collect();
    /// assert_eq!(all, vec![1, 2, 3, 3, 4]);
    /// ```
    union => Union
}

sorted_join! {
    /// Returns the elements of `a` whose key is paired with an equal key in `b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterset::join::intersection;
    ///
    /// let common: Vec<i32> = intersection([1, 2, 2, 3], [2, 2, 2, 3]).collect();
    /// assert_eq!(common, vec![2, 2, 3]);
    /// ```
    intersection => Intersection
}

sorted_join! {
    /// Returns the elements of `a` whose key is not paired in `b`.
    ///
    /// Stops as soon as `a` is exhausted; the rest of `b` is never pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterset::join::difference;
    ///
    /// let only_left: Vec<i32> = difference([1, 2, 2, 3], [2, 4]).collect();
    /// assert_eq!(only_left, vec![1, 2, 3]);
    /// ```
    difference => Difference
}

sorted_join! {
    /// Returns the elements of either input whose key is not paired on the other side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use iterset::join::symmetric_difference;
    ///
    /// let either: Vec<i32> = symmetric_difference([1, 2, 3], [2, 4]).collect();
    /// assert_eq!(either, vec![1, 3, 4]);
    /// ```
    symmetric_difference => SymmetricDifference
}

static_assertions::assert_impl_all!(
    Merge<std::vec::IntoIter<i32>, std::vec::IntoIter<i32>, Identity>:
        FusedIterator, Clone, fmt::Debug, Send, Sync
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    const A: [i32; 5] = [5, 10, 15, 20, 25];
    const B: [i32; 5] = [10, 20, 30, 40, 50];

    #[rstest]
    fn test_merge_example() {
        assert_eq!(merge(A, B).collect::<Vec<_>>(), vec![5, 10, 10, 15, 20, 20, 25, 30, 40, 50]);
    }

    #[rstest]
    fn test_union_example() {
        assert_eq!(union(A, B).collect::<Vec<_>>(), vec![5, 10, 15, 20, 25, 30, 40, 50]);
    }

    #[rstest]
    fn test_intersection_example() {
        assert_eq!(intersection(A, B).collect::<Vec<_>>(), vec![10, 20]);
    }

    #[rstest]
    fn test_difference_example() {
        assert_eq!(difference(A, B).collect::<Vec<_>>(), vec![5, 15, 25]);
    }

    #[rstest]
    fn test_symmetric_difference_example() {
        assert_eq!(
            symmetric_difference(A, B).collect::<Vec<_>>(),
            vec![5, 15, 25, 30, 40, 50]
        );
    }

    #[rstest]
    fn test_merge_tie_emits_right_first() {
        let left = [(1, 'a'), (2, 'a')];
        let right = [(1, 'b'), (2, 'b')];
        let merged: Vec<_> = merge_by_key(left, right, |pair| pair.0).collect();
        assert_eq!(merged, vec![(1, 'b'), (1, 'a'), (2, 'b'), (2, 'a')]);
    }

    #[rstest]
    fn test_union_tie_emits_left_copy() {
        let left = [(1, 'a')];
        let right = [(1, 'b'), (2, 'b')];
        let all: Vec<_> = union_by_key(left, right, |pair| pair.0).collect();
        assert_eq!(all, vec![(1, 'a'), (2, 'b')]);
    }

    #[rstest]
    fn test_intersection_pairs_duplicates_one_to_one() {
        let common: Vec<i32> = intersection([7, 7], [7, 7, 7]).collect();
        assert_eq!(common, vec![7, 7]);
    }

    #[rstest]
    fn test_difference_does_not_pull_right_after_left_ends() {
        let pulls = Cell::new(0);
        let right = (0..).inspect(|_| pulls.set(pulls.get() + 1));
        let only_left: Vec<i32> = difference(Vec::<i32>::new(), right).collect();
        assert!(only_left.is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[rstest]
    fn test_construction_pulls_nothing() {
        let pulls = Cell::new(0);
        let left = (0..10).inspect(|_| pulls.set(pulls.get() + 1));
        let join = merge(left, 0..10);
        assert_eq!(pulls.get(), 0);
        drop(join);
    }

    #[rstest]
    fn test_merge_size_hint_is_exact() {
        let mut join = merge(vec![1, 2, 3], vec![2, 4]);
        assert_eq!(join.size_hint(), (5, Some(5)));
        join.next();
        assert_eq!(join.size_hint(), (4, Some(4)));
    }

    #[rstest]
    fn test_fused_after_exhaustion() {
        let mut join = intersection(vec![1], vec![2]);
        assert_eq!(join.next(), None);
        assert_eq!(join.next(), None);
    }

    #[rstest]
    fn test_clone_resumes_from_the_same_position() {
        let mut join = union(vec![1, 3, 5], vec![2, 3, 6]);
        join.next();
        let rest: Vec<_> = join.clone().collect();
        assert_eq!(rest, join.collect::<Vec<_>>());
    }
}
