//! Key extraction for sorted inputs.
//!
//! Every algorithm in this crate orders elements by a *key* derived from
//! each element. [`KeyFn`] abstracts over how that key is produced and
//! compared:
//!
//! - [`Identity`]: the element is its own key (the default for all
//!   operations that take no key argument)
//! - [`ByKey`]: a caller supplied `FnMut(&T) -> K`
//!
//! A key is computed exactly once per element and cached next to it in a
//! [`Keyed`] item, no matter how often the item is compared afterwards.
//!
//! # Examples
//!
//! ```rust
//! use iterset::key::{ByKey, Identity, KeyFn, Keyed};
//! use std::cmp::Ordering;
//!
//! let mut identity = Identity;
//! let left = Keyed::new(&mut identity, 3);
//! let right = Keyed::new(&mut identity, 7);
//! assert_eq!(Identity::compare(&left, &right), Ordering::Less);
//!
//! let mut by_length = ByKey::new(|word: &&str| word.len());
//! let short = Keyed::new(&mut by_length, "ab");
//! assert_eq!(*short.key(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Produces and compares the keys that order a sorted input.
///
/// Implementors decide what gets cached per element ([`KeyFn::Key`]) and
/// how two cached items compare. Both inputs of a join share a single
/// `KeyFn`, so `compare` only ever sees items produced by the same
/// instance.
pub trait KeyFn<T> {
    /// The value cached alongside each element.
    type Key;

    /// Computes the key for `element`.
    ///
    /// Called exactly once per element pulled from an input.
    fn key(&mut self, element: &T) -> Self::Key;

    /// Compares two keyed items.
    ///
    /// Must be a total order consistent with the order of the inputs.
    fn compare(left: &Keyed<T, Self::Key>, right: &Keyed<T, Self::Key>) -> Ordering;
}

/// Uses each element as its own key.
///
/// The cached key is `()`; comparisons go straight to the elements, so
/// nothing is cloned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T: Ord> KeyFn<T> for Identity {
    type Key = ();

    #[inline]
    fn key(&mut self, _element: &T) -> Self::Key {}

    #[inline]
    fn compare(left: &Keyed<T, ()>, right: &Keyed<T, ()>) -> Ordering {
        left.element.cmp(&right.element)
    }
}

/// Orders elements by the key a closure extracts from them.
///
/// # Examples
///
/// ```rust
/// use iterset::key::{ByKey, KeyFn, Keyed};
///
/// let mut by_id = ByKey::new(|pair: &(u32, &str)| pair.0);
/// assert_eq!(by_id.key(&(7, "seven")), 7);
///
/// let first = Keyed::new(&mut by_id, (1, "one"));
/// assert_eq!(first.key(), &1);
/// assert_eq!(first.element(), &(1, "one"));
/// ```
#[derive(Clone, Copy)]
pub struct ByKey<F> {
    function: F,
}

impl<F> ByKey<F> {
    /// Wraps `function` as a key extractor.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Returns the wrapped closure.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<T, K, F> KeyFn<T> for ByKey<F>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    type Key = K;

    #[inline]
    fn key(&mut self, element: &T) -> Self::Key {
        (self.function)(element)
    }

    #[inline]
    fn compare(left: &Keyed<T, K>, right: &Keyed<T, K>) -> Ordering {
        left.key.cmp(&right.key)
    }
}

impl<F> fmt::Debug for ByKey<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("ByKey").finish_non_exhaustive()
    }
}

/// An element paired with its cached key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Keyed<T, K> {
    element: T,
    key: K,
}

impl<T, K> Keyed<T, K> {
    /// Computes the key of `element` with `key_fn` and caches it.
    #[inline]
    pub fn new<F>(key_fn: &mut F, element: T) -> Self
    where
        F: KeyFn<T, Key = K>,
    {
        let key = key_fn.key(&element);
        Self { element, key }
    }

    /// Returns a reference to the element.
    #[inline]
    pub const fn element(&self) -> &T {
        &self.element
    }

    /// Returns a reference to the cached key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the item and returns the element.
    #[inline]
    pub fn into_element(self) -> T {
        self.element
    }

    /// Consumes the item and returns `(element, key)`.
    #[inline]
    pub fn into_parts(self) -> (T, K) {
        (self.element, self.key)
    }
}
