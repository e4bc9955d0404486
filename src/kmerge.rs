//! K-way merge of any number of sorted inputs.
//!
//! [`merge_all`] generalizes [`merge`](crate::join::merge) from two inputs to
//! many. It keeps a binary heap holding at most one keyed head per input,
//! so each output element costs `O(log k)` comparisons for `k` inputs.
//!
//! # Tie-breaking
//!
//! Among equal keys, the element from the input with the higher index is
//! emitted first. This is the order a left fold of two-way merges
//! produces, so `merge_all([a, b, c])` yields the same sequence as
//! `merge(merge(a, b), c)`. Within one input equal keys keep their order.
//!
//! # Examples
//!
//! ```rust
//! use iterset::kmerge::merge_all;
//!
//! let merged: Vec<i32> = merge_all([vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]).collect();
//! assert_eq!(merged, (1..=9).collect::<Vec<_>>());
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::key::{ByKey, Identity, KeyFn, Keyed};
use crate::trace::trace_event;

/// The current head of one input, ordered for a max-heap.
struct Head<T, F: KeyFn<T>> {
    item: Keyed<T, F::Key>,
    source: usize,
    key_fn: PhantomData<fn() -> F>,
}

impl<T, F: KeyFn<T>> Ord for Head<T, F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest key on top; among equal keys, the highest source index.
        F::compare(&other.item, &self.item).then_with(|| self.source.cmp(&other.source))
    }
}

impl<T, F: KeyFn<T>> PartialOrd for Head<T, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, F: KeyFn<T>> PartialEq for Head<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, F: KeyFn<T>> Eq for Head<T, F> {}

/// A lazy merge of many sorted inputs. Created by [`merge_all`].
pub struct KMerge<I, F>
where
    I: Iterator,
    F: KeyFn<I::Item>,
{
    sources: Vec<I>,
    heads: BinaryHeap<Head<I::Item, F>>,
    key: F,
    primed: bool,
}

impl<I, F> KMerge<I, F>
where
    I: Iterator,
    F: KeyFn<I::Item>,
{
    /// Creates a merge of `sources` ordered by `key`.
    ///
    /// No input is pulled until the first call to `next`.
    pub fn new<S>(sources: S, key: F) -> Self
    where
        S: IntoIterator,
        S::Item: IntoIterator<IntoIter = I>,
    {
        let sources: Vec<I> = sources.into_iter().map(IntoIterator::into_iter).collect();
        Self {
            heads: BinaryHeap::with_capacity(sources.len()),
            sources,
            key,
            primed: false,
        }
    }

    fn prime(&mut self) {
        for source in 0..self.sources.len() {
            self.refill(source);
        }
        self.primed = true;
        trace_event!(
            sources = self.sources.len(),
            live = self.heads.len(),
            "k-way merge primed"
        );
    }

    /// Pulls the next element of `source` into the heap, if there is one.
    ///
    /// A source that returned `None` has no head left and is never pulled again.
    fn refill(&mut self, source: usize) {
        if let Some(element) = self.sources[source].next() {
            self.heads.push(Head {
                item: Keyed::new(&mut self.key, element),
                source,
                key_fn: PhantomData,
            });
        }
    }
}

impl<I, F> Iterator for KMerge<I, F>
where
    I: Iterator,
    F: KeyFn<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.prime();
        }
        let head = self.heads.pop()?;
        self.refill(head.source);
        Some(head.item.into_element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let add = |(lower, upper): (usize, Option<usize>), (source_lower, source_upper): (usize, Option<usize>)| {
            (
                lower.saturating_add(source_lower),
                upper.zip(source_upper).and_then(|(upper, source_upper)| upper.checked_add(source_upper)),
            )
        };
        let buffered = (self.heads.len(), Some(self.heads.len()));

        if !self.primed {
            return self.sources.iter().map(Iterator::size_hint).fold(buffered, add);
        }
        // Every live source has exactly one head in the heap.
        self.heads
            .iter()
            .map(|head| self.sources[head.source].size_hint())
            .fold(buffered, add)
    }
}

impl<I, F> FusedIterator for KMerge<I, F>
where
    I: Iterator,
    F: KeyFn<I::Item>,
{
}

impl<I, F> fmt::Debug for KMerge<I, F>
where
    I: Iterator + fmt::Debug,
    F: KeyFn<I::Item> + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("KMerge")
            .field("sources", &self.sources)
            .field("heads", &self.heads.len())
            .field("key", &self.key)
            .field("primed", &self.primed)
            .finish()
    }
}

/// Merges any number of sorted inputs into one sorted stream.
///
/// Every element of every input is emitted once; see the
/// [module documentation](self) for the tie order.
pub fn merge_all<S>(sources: S) -> KMerge<<S::Item as IntoIterator>::IntoIter, Identity>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Ord,
{
    KMerge::new(sources, Identity)
}

/// Like [`merge_all`], ordering elements by the key that `key` extracts.
///
/// # Examples
///
/// ```rust
/// use iterset::kmerge::merge_all_by_key;
///
/// let logs = [vec![(1, "a"), (4, "a")], vec![(1, "b"), (2, "b")]];
/// let merged: Vec<_> = merge_all_by_key(logs, |entry| entry.0).collect();
/// assert_eq!(merged, vec![(1, "b"), (1, "a"), (2, "b"), (4, "a")]);
/// ```
pub fn merge_all_by_key<S, K, F>(sources: S, key: F) -> KMerge<<S::Item as IntoIterator>::IntoIter, ByKey<F>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    F: FnMut(&<S::Item as IntoIterator>::Item) -> K,
    K: Ord,
{
    KMerge::new(sources, ByKey::new(key))
}
