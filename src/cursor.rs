//! One-element lookahead over a sorted input.
//!
//! [`Lookahead`] is the primitive every algorithm in this crate is built
//! on. It wraps one input and holds at most one pulled-but-unconsumed
//! element together with its cached key.
//!
//! # Laziness
//!
//! Constructing a cursor pulls nothing. An element is pulled the first
//! time [`has_next`](Lookahead::has_next), [`peek`](Lookahead::peek) or
//! [`advance`](Lookahead::advance) needs it, and its key is computed at
//! that moment, once.
//!
//! # Exhaustion
//!
//! The first `None` from the input is latched: the input is never polled
//! again and the cursor reports no next element forever after.
//!
//! # Examples
//!
//! ```rust
//! use iterset::cursor::Lookahead;
//! use iterset::key::Identity;
//!
//! let mut key = Identity;
//! let mut cursor = Lookahead::new([1, 2]);
//!
//! assert_eq!(cursor.pulled(), 0);
//! assert_eq!(cursor.peek(&mut key).map(|item| *item.element()), Ok(1));
//! assert_eq!(cursor.peek(&mut key).map(|item| *item.element()), Ok(1));
//! assert_eq!(cursor.pulled(), 1);
//!
//! assert_eq!(cursor.advance(&mut key).map(|item| item.into_element()), Ok(1));
//! assert_eq!(cursor.advance(&mut key).map(|item| item.into_element()), Ok(2));
//! assert!(!cursor.has_next(&mut key));
//! ```

use crate::error::EndOfSequence;
use crate::key::{KeyFn, Keyed};
use crate::trace::trace_event;

/// A sorted input with a single-slot lookahead buffer.
///
/// The key function is passed to each call rather than stored, so the two
/// cursors of a join share one key function.
#[derive(Debug, Clone)]
pub struct Lookahead<I: Iterator, K> {
    source: I,
    slot: Option<Keyed<I::Item, K>>,
    pulled: usize,
    exhausted: bool,
}

impl<I: Iterator, K> Lookahead<I, K> {
    /// Creates a cursor over `source` without pulling from it.
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            source: source.into_iter(),
            slot: None,
            pulled: 0,
            exhausted: false,
        }
    }

    /// Returns `true` if a following `peek` or `advance` would succeed.
    ///
    /// May pull one element into the buffer.
    #[inline]
    pub fn has_next<F>(&mut self, key: &mut F) -> bool
    where
        F: KeyFn<I::Item, Key = K>,
    {
        self.fill(key);
        self.slot.is_some()
    }

    /// Returns the next keyed item without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`EndOfSequence`] if the input is exhausted.
    #[inline]
    pub fn peek<F>(&mut self, key: &mut F) -> Result<&Keyed<I::Item, K>, EndOfSequence>
    where
        F: KeyFn<I::Item, Key = K>,
    {
        self.fill(key);
        self.slot.as_ref().ok_or(EndOfSequence)
    }

    /// Consumes and returns the next keyed item.
    ///
    /// # Errors
    ///
    /// Returns [`EndOfSequence`] if the input is exhausted.
    #[inline]
    pub fn advance<F>(&mut self, key: &mut F) -> Result<Keyed<I::Item, K>, EndOfSequence>
    where
        F: KeyFn<I::Item, Key = K>,
    {
        match self.slot.take() {
            Some(item) => Ok(item),
            None => self.pull(key).ok_or(EndOfSequence),
        }
    }

    /// Consumes the next element and returns it without its key.
    #[cfg(feature = "join")]
    #[inline]
    pub(crate) fn advance_element<F>(&mut self, key: &mut F) -> Option<I::Item>
    where
        F: KeyFn<I::Item, Key = K>,
    {
        self.advance(key).ok().map(Keyed::into_element)
    }

    /// Consumes the next element, discarding it.
    #[cfg(any(feature = "join", feature = "predicate"))]
    #[inline]
    pub(crate) fn discard<F>(&mut self, key: &mut F)
    where
        F: KeyFn<I::Item, Key = K>,
    {
        drop(self.advance(key));
    }

    /// Returns `true` if an element is currently buffered.
    #[inline]
    pub const fn is_buffered(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns how many elements have been pulled from the input so far.
    #[inline]
    pub const fn pulled(&self) -> usize {
        self.pulled
    }

    /// Returns bounds on the number of elements left, buffered one included.
    pub fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.slot.is_some());
        if self.exhausted {
            return (buffered, Some(buffered));
        }
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }

    fn fill<F>(&mut self, key: &mut F)
    where
        F: KeyFn<I::Item, Key = K>,
    {
        if self.slot.is_none() {
            self.slot = self.pull(key);
        }
    }

    fn pull<F>(&mut self, key: &mut F) -> Option<Keyed<I::Item, K>>
    where
        F: KeyFn<I::Item, Key = K>,
    {
        if self.exhausted {
            return None;
        }
        if let Some(element) = self.source.next() {
            self.pulled += 1;
            Some(Keyed::new(key, element))
        } else {
            self.exhausted = true;
            trace_event!(pulled = self.pulled, "sorted input exhausted");
            None
        }
    }
}
