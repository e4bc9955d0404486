//! Error types for cursor access.
//!
//! The algorithms in this crate never surface these errors: they check
//! [`Lookahead::has_next`](crate::cursor::Lookahead::has_next) before
//! touching an element. Direct users of the cursor see them when they
//! ask an exhausted cursor for an element.

/// Signals that a cursor has no further elements.
///
/// Returned by [`Lookahead::peek`](crate::cursor::Lookahead::peek) and
/// [`Lookahead::advance`](crate::cursor::Lookahead::advance) once the
/// underlying input is exhausted.
///
/// # Examples
///
/// ```rust
/// use iterset::EndOfSequence;
///
/// assert_eq!(
///     format!("{}", EndOfSequence),
///     "sorted input exhausted: no element to peek or advance"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EndOfSequence;

impl std::fmt::Display for EndOfSequence {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "sorted input exhausted: no element to peek or advance")
    }
}

impl std::error::Error for EndOfSequence {}
