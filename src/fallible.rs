//! Set operations over inputs that can fail.
//!
//! Inputs backed by I/O or parsing usually yield `Result<T, E>`. The
//! functions here run the same merge-joins as [`crate::join`] and
//! [`crate::predicate`] over such inputs and report the first fault
//! unchanged:
//!
//! - The first `Err` pulled from either input is yielded as the next item.
//! - After that the stream ends; neither input is polled again.
//! - Elements yielded before the fault stay valid.
//!
//! # Examples
//!
//! ```rust
//! use iterset::fallible::try_union;
//!
//! let a: Vec<Result<i32, String>> = vec![Ok(1), Ok(3), Err("disk".to_string()), Ok(5)];
//! let b: Vec<Result<i32, String>> = vec![Ok(2), Ok(4)];
//!
//! let output: Vec<_> = try_union(a, b).collect();
//! assert_eq!(output, vec![Ok(1), Ok(2), Ok(3), Err("disk".to_string())]);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::join::{Difference, Intersection, Merge, MergeJoin, SymmetricDifference, Union};
use crate::key::{ByKey, Identity, KeyFn};
use crate::predicate::includes_with;
use crate::trace::trace_event;

/// The first fault seen by either input of one operation.
type FaultSlot<E> = Rc<RefCell<Option<E>>>;

/// Unwraps `Ok` items of a fallible input, parking the first `Err`.
///
/// Ends at the first `Err`, or as soon as any input sharing the same slot
/// has faulted.
pub struct Faults<I, E> {
    source: I,
    slot: FaultSlot<E>,
}

impl<I, T, E> Iterator for Faults<I, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.slot.borrow().is_some() {
            return None;
        }
        match self.source.next()? {
            Ok(element) => Some(element),
            Err(error) => {
                *self.slot.borrow_mut() = Some(error);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.slot.borrow().is_some() {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I: fmt::Debug, E> fmt::Debug for Faults<I, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Faults")
            .field("source", &self.source)
            .field("faulted", &self.slot.borrow().is_some())
            .finish()
    }
}

/// Yields `Ok` elements of an inner join until an input faults, then that fault.
pub struct TryJoin<J, E> {
    inner: J,
    slot: FaultSlot<E>,
    finished: bool,
}

impl<J, E> Iterator for TryJoin<J, E>
where
    J: Iterator,
{
    type Item = Result<J::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let element = self.inner.next();
        if let Some(error) = self.slot.borrow_mut().take() {
            trace_event!("input fault ended sorted join");
            self.finished = true;
            return Some(Err(error));
        }
        if element.is_none() {
            self.finished = true;
        }
        element.map(Ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            return (0, Some(0));
        }
        // A fault can replace any element and adds at most one item.
        let (_, upper) = self.inner.size_hint();
        (0, upper.and_then(|upper| upper.checked_add(1)))
    }
}

impl<J, E> FusedIterator for TryJoin<J, E> where J: Iterator {}

impl<J: fmt::Debug, E> fmt::Debug for TryJoin<J, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryJoin")
            .field("inner", &self.inner)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Wraps both inputs so they share one fault slot.
fn split<A, B, T, E>(a: A, b: B) -> (Faults<A::IntoIter, E>, Faults<B::IntoIter, E>, FaultSlot<E>)
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
{
    let slot: FaultSlot<E> = Rc::new(RefCell::new(None));
    let left = Faults {
        source: a.into_iter(),
        slot: Rc::clone(&slot),
    };
    let right = Faults {
        source: b.into_iter(),
        slot: Rc::clone(&slot),
    };
    (left, right, slot)
}

/// Runs the join policy `P` over two fallible inputs ordered by `key`.
///
/// # Examples
///
/// ```rust
/// use iterset::fallible::try_join;
/// use iterset::join::policy;
/// use iterset::key::Identity;
///
/// let a: Vec<Result<i32, ()>> = vec![Ok(1), Ok(2)];
/// let b: Vec<Result<i32, ()>> = vec![Ok(2)];
/// let common: Vec<_> = try_join::<_, _, _, _, _, policy::Intersection>(a, b, Identity).collect();
/// assert_eq!(common, vec![Ok(2)]);
/// ```
pub fn try_join<A, B, T, E, F, P>(
    a: A,
    b: B,
    key: F,
) -> TryJoin<MergeJoin<Faults<A::IntoIter, E>, Faults<B::IntoIter, E>, F, P>, E>
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
    F: KeyFn<T>,
    P: crate::join::policy::JoinPolicy,
{
    let (left, right, slot) = split(a, b);
    TryJoin {
        inner: MergeJoin::new(left, right, key),
        slot,
        finished: false,
    }
}

/// Defines `try_` forms of a join and its `_by_key` companion.
macro_rules! try_sorted_join {
    ($name:ident => $output:ident) => {
        paste::paste! {
            #[doc = "Like [`" $name "()`](crate::join::" $name "), over inputs that yield `Result`s."]
            ///
            /// The first `Err` from either input is yielded in place of the
            /// next element and ends the stream.
            pub fn [<try_ $name>]<A, B, T, E>(
                a: A,
                b: B,
            ) -> TryJoin<$output<Faults<A::IntoIter, E>, Faults<B::IntoIter, E>, Identity>, E>
            where
                A: IntoIterator<Item = Result<T, E>>,
                B: IntoIterator<Item = Result<T, E>>,
                T: Ord,
            {
                try_join(a, b, Identity)
            }

            #[doc = "Like [`try_" $name "()`], ordering elements by the key that `key` extracts."]
            pub fn [<try_ $name _by_key>]<A, B, T, E, K, F>(
                a: A,
                b: B,
                key: F,
            ) -> TryJoin<$output<Faults<A::IntoIter, E>, Faults<B::IntoIter, E>, ByKey<F>>, E>
            where
                A: IntoIterator<Item = Result<T, E>>,
                B: IntoIterator<Item = Result<T, E>>,
                F: FnMut(&T) -> K,
                K: Ord,
            {
                try_join(a, b, ByKey::new(key))
            }
        }
    };
}

try_sorted_join!(merge => Merge);
try_sorted_join!(union => Union);
try_sorted_join!(intersection => Intersection);
try_sorted_join!(difference => Difference);
try_sorted_join!(symmetric_difference => SymmetricDifference);

/// Like [`includes_with`], over inputs that yield `Result`s.
///
/// # Errors
///
/// Returns the first `Err` pulled from either input before the answer was
/// decided.
pub fn try_includes_with<A, B, T, E, F>(a: A, b: B, key: F) -> Result<bool, E>
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
    F: KeyFn<T>,
{
    let (left, right, slot) = split(a, b);
    let included = includes_with(left, right, key);
    let fault = slot.borrow_mut().take();
    fault.map_or(Ok(included), Err)
}

/// Like [`includes`](crate::predicate::includes), over inputs that yield `Result`s.
///
/// # Errors
///
/// Returns the first `Err` pulled from either input before the answer was
/// decided.
///
/// # Examples
///
/// ```rust
/// use iterset::fallible::try_includes;
///
/// let a: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2), Ok(3)];
/// assert_eq!(try_includes(a.clone(), vec![Ok(2)]), Ok(true));
/// assert_eq!(try_includes(a, vec![Ok(2), Err("truncated")]), Err("truncated"));
/// ```
pub fn try_includes<A, B, T, E>(a: A, b: B) -> Result<bool, E>
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
    T: Ord,
{
    try_includes_with(a, b, Identity)
}

/// Like [`try_includes`], comparing the keys that `key` extracts.
///
/// # Errors
///
/// Returns the first `Err` pulled from either input before the answer was
/// decided.
pub fn try_includes_by_key<A, B, T, E, K, F>(a: A, b: B, key: F) -> Result<bool, E>
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
    F: FnMut(&T) -> K,
    K: Ord,
{
    try_includes_with(a, b, ByKey::new(key))
}

/// Same as `try_includes(b, a)`.
///
/// # Errors
///
/// Returns the first `Err` pulled from either input before the answer was
/// decided.
pub fn try_is_subset<A, B, T, E>(a: A, b: B) -> Result<bool, E>
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
    T: Ord,
{
    try_includes(b, a)
}

/// Same as `try_includes(a, b)`.
///
/// # Errors
///
/// Returns the first `Err` pulled from either input before the answer was
/// decided.
pub fn try_is_superset<A, B, T, E>(a: A, b: B) -> Result<bool, E>
where
    A: IntoIterator<Item = Result<T, E>>,
    B: IntoIterator<Item = Result<T, E>>,
    T: Ord,
{
    try_includes(a, b)
}
