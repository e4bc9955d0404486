//! Inclusion tests between sorted inputs.
//!
//! [`includes`] decides whether the multiset of keys of one sorted input
//! contains that of another, in a single pass that stops at the first
//! proof either way. [`is_subset`] and [`is_superset`] are argument-order
//! aliases.
//!
//! Duplicates count: `[1, 2]` does not include `[2, 2]`.
//!
//! # Examples
//!
//! ```rust
//! use iterset::predicate::{includes, is_subset, is_superset};
//!
//! let multiples_of_five = [5, 10, 15, 20, 25, 30, 35, 40, 45, 50];
//! let multiples_of_ten = [10, 20, 30, 40];
//!
//! assert!(includes(multiples_of_five, multiples_of_ten));
//! assert!(!includes(multiples_of_ten, multiples_of_five));
//! assert!(is_subset(multiples_of_ten, multiples_of_five));
//! assert!(is_superset(multiples_of_five, multiples_of_ten));
//! ```

use std::cmp::Ordering;

use crate::cursor::Lookahead;
use crate::key::{ByKey, Identity, KeyFn};
use crate::trace::trace_event;

/// Returns `true` if every element of `b` is matched by an equal element of `a`.
///
/// Elements are matched one-to-one and counted with multiplicity. Both
/// inputs must be sorted. Returns as soon as the answer is known.
pub fn includes<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    includes_with(a, b, Identity)
}

/// Like [`includes`], comparing the keys that `key` extracts.
pub fn includes_by_key<A, B, K, F>(a: A, b: B, key: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item) -> K,
    K: Ord,
{
    includes_with(a, b, ByKey::new(key))
}

/// Like [`includes`], ordering elements with any [`KeyFn`].
///
/// # Examples
///
/// ```rust
/// use iterset::key::ByKey;
/// use iterset::predicate::includes_with;
///
/// let words = ["a", "bb", "ccc"];
/// let lengths = ["xx"];
/// assert!(includes_with(words, lengths, ByKey::new(|word: &&str| word.len())));
/// ```
pub fn includes_with<A, B, F>(a: A, b: B, mut key: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: KeyFn<A::Item>,
{
    let mut superset: Lookahead<A::IntoIter, F::Key> = Lookahead::new(a);
    let mut subset: Lookahead<B::IntoIter, F::Key> = Lookahead::new(b);

    loop {
        let Ok(needle) = subset.peek(&mut key) else {
            return true;
        };
        let Ok(candidate) = superset.peek(&mut key) else {
            trace_event!(matched = subset.pulled() - 1, "inclusion disproved: superset exhausted");
            return false;
        };

        match F::compare(candidate, needle) {
            Ordering::Less => superset.discard(&mut key),
            Ordering::Equal => {
                superset.discard(&mut key);
                subset.discard(&mut key);
            }
            Ordering::Greater => {
                trace_event!(matched = subset.pulled() - 1, "inclusion disproved: missing key");
                return false;
            }
        }
    }
}

/// Returns `true` if `b` includes every element of `a`.
///
/// Same as `includes(b, a)`.
pub fn is_subset<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    includes(b, a)
}

/// Like [`is_subset`], comparing the keys that `key` extracts.
pub fn is_subset_by_key<A, B, K, F>(a: A, b: B, key: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item) -> K,
    K: Ord,
{
    includes_by_key(b, a, key)
}

/// Returns `true` if `a` includes every element of `b`.
///
/// Same as `includes(a, b)`.
pub fn is_superset<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    includes(a, b)
}

/// Like [`is_superset`], comparing the keys that `key` extracts.
pub fn is_superset_by_key<A, B, K, F>(a: A, b: B, key: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item) -> K,
    K: Ord,
{
    includes_by_key(a, b, key)
}
