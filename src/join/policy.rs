//! Decision tables for the merge-join engine.
//!
//! Each producing algorithm is a zero-sized policy type. A policy says,
//! for every comparison outcome between the two current heads, which
//! head to emit and which cursors to advance, and whether the leftover
//! tail of either input is drained once the other input ends.
//!
//! | Policy                  | left < right | left == right          | left > right | drains      |
//! |-------------------------|--------------|------------------------|--------------|-------------|
//! | [`Merge`]               | take left    | take right             | take right   | both        |
//! | [`Union`]               | take left    | emit left, skip both   | take right   | both        |
//! | [`Intersection`]        | drop left    | emit left, skip both   | drop right   | neither     |
//! | [`Difference`]          | take left    | drop both              | drop right   | left        |
//! | [`SymmetricDifference`] | take left    | drop both              | take right   | both        |

use std::cmp::Ordering;

/// What the engine does with the two current heads after comparing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Emit the left head and advance the left cursor.
    TakeLeft,
    /// Emit the right head and advance the right cursor.
    TakeRight,
    /// Advance the left cursor without emitting.
    DropLeft,
    /// Advance the right cursor without emitting.
    DropRight,
    /// Emit the left head and advance both cursors.
    Pair,
    /// Advance both cursors without emitting.
    DropBoth,
}

/// A merge-join decision table.
///
/// Implement this to define a new join over two sorted inputs; the five
/// policies in this module cover the classic set operations.
pub trait JoinPolicy {
    /// Whether the rest of the left input is emitted after the right one ends.
    const DRAIN_LEFT: bool;

    /// Whether the rest of the right input is emitted after the left one ends.
    const DRAIN_RIGHT: bool;

    /// Maps the ordering of `left` relative to `right` to a [`Step`].
    fn step(ordering: Ordering) -> Step;

    /// Bounds the output length from the bounds of the remaining inputs.
    fn size_hint(left: (usize, Option<usize>), right: (usize, Option<usize>)) -> (usize, Option<usize>);
}

/// Every element of both inputs; ties emit the right element first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Merge;

/// Every key of either input; a tie emits the left element once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Union;

/// Left elements whose key is paired with an equal right key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Intersection;

/// Left elements not paired with an equal right key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Difference;

/// Elements of either input not paired with an equal key on the other side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SymmetricDifference;

impl JoinPolicy for Merge {
    const DRAIN_LEFT: bool = true;
    const DRAIN_RIGHT: bool = true;

    #[inline]
    fn step(ordering: Ordering) -> Step {
        match ordering {
            Ordering::Less => Step::TakeLeft,
            Ordering::Equal | Ordering::Greater => Step::TakeRight,
        }
    }

    fn size_hint(left: (usize, Option<usize>), right: (usize, Option<usize>)) -> (usize, Option<usize>) {
        (left.0.saturating_add(right.0), sum_upper(left.1, right.1))
    }
}

impl JoinPolicy for Union {
    const DRAIN_LEFT: bool = true;
    const DRAIN_RIGHT: bool = true;

    #[inline]
    fn step(ordering: Ordering) -> Step {
        match ordering {
            Ordering::Less => Step::TakeLeft,
            Ordering::Equal => Step::Pair,
            Ordering::Greater => Step::TakeRight,
        }
    }

    fn size_hint(left: (usize, Option<usize>), right: (usize, Option<usize>)) -> (usize, Option<usize>) {
        // Each emitted element consumes at most one element per side.
        (left.0.max(right.0), sum_upper(left.1, right.1))
    }
}

impl JoinPolicy for Intersection {
    const DRAIN_LEFT: bool = false;
    const DRAIN_RIGHT: bool = false;

    #[inline]
    fn step(ordering: Ordering) -> Step {
        match ordering {
            Ordering::Less => Step::DropLeft,
            Ordering::Equal => Step::Pair,
            Ordering::Greater => Step::DropRight,
        }
    }

    fn size_hint(left: (usize, Option<usize>), right: (usize, Option<usize>)) -> (usize, Option<usize>) {
        let upper = match (left.1, right.1) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (bound, None) | (None, bound) => bound,
        };
        (0, upper)
    }
}

impl JoinPolicy for Difference {
    const DRAIN_LEFT: bool = true;
    const DRAIN_RIGHT: bool = false;

    #[inline]
    fn step(ordering: Ordering) -> Step {
        match ordering {
            Ordering::Less => Step::TakeLeft,
            Ordering::Equal => Step::DropBoth,
            Ordering::Greater => Step::DropRight,
        }
    }

    fn size_hint(left: (usize, Option<usize>), right: (usize, Option<usize>)) -> (usize, Option<usize>) {
        // Every right element cancels at most one left element.
        let lower = right.1.map_or(0, |right| left.0.saturating_sub(right));
        (lower, left.1)
    }
}

impl JoinPolicy for SymmetricDifference {
    const DRAIN_LEFT: bool = true;
    const DRAIN_RIGHT: bool = true;

    #[inline]
    fn step(ordering: Ordering) -> Step {
        match ordering {
            Ordering::Less => Step::TakeLeft,
            Ordering::Equal => Step::DropBoth,
            Ordering::Greater => Step::TakeRight,
        }
    }

    fn size_hint(left: (usize, Option<usize>), right: (usize, Option<usize>)) -> (usize, Option<usize>) {
        (0, sum_upper(left.1, right.1))
    }
}

#[inline]
fn sum_upper(left: Option<usize>, right: Option<usize>) -> Option<usize> {
    left.zip(right).and_then(|(left, right)| left.checked_add(right))
}
