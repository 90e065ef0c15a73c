//! A single contiguous interval with explicit boundary-inclusion flags.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Error raised when an atom's bounds cannot form an interval.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum IntervalError {
    /// The lower bound exceeds the upper bound (or a bound is NaN).
    #[error("interval bounds are reversed: lower {lower} exceeds upper {upper}")]
    ReversedBounds { lower: f64, upper: f64 },
}

/// One contiguous interval: bounds plus closed/open flags on each end.
///
/// Invariant: `lower <= upper`. A degenerate atom (`lower == upper`) is
/// non-empty only when both bounds are closed.
///
/// ## Example
///
/// ```
/// use strategos::interval::IntervalAtom;
///
/// let atom = IntervalAtom::closed_open(0.0, 1.0).unwrap();
/// assert!(atom.contains(0.0));
/// assert!(!atom.contains(1.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalAtom {
    lower: f64,
    upper: f64,
    lower_closed: bool,
    upper_closed: bool,
}

impl IntervalAtom {
    /// Create an atom from explicit bounds and inclusion flags.
    ///
    /// Fails with [`IntervalError::ReversedBounds`] unless `lower <= upper`.
    pub fn new(
        lower: f64,
        upper: f64,
        lower_closed: bool,
        upper_closed: bool,
    ) -> Result<Self, IntervalError> {
        if !(lower <= upper) {
            return Err(IntervalError::ReversedBounds { lower, upper });
        }
        Ok(Self {
            lower,
            upper,
            lower_closed,
            upper_closed,
        })
    }

    /// `[lower, upper]`.
    pub fn closed(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        Self::new(lower, upper, true, true)
    }

    /// `(lower, upper)`.
    pub fn open(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        Self::new(lower, upper, false, false)
    }

    /// `[lower, upper)`.
    pub fn closed_open(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        Self::new(lower, upper, true, false)
    }

    /// `(lower, upper]`.
    pub fn open_closed(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        Self::new(lower, upper, false, true)
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether the lower bound belongs to the atom.
    #[must_use]
    pub fn lower_closed(&self) -> bool {
        self.lower_closed
    }

    /// Whether the upper bound belongs to the atom.
    #[must_use]
    pub fn upper_closed(&self) -> bool {
        self.upper_closed
    }

    /// True when the atom contains no point: degenerate with an open end.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper && !(self.lower_closed && self.upper_closed)
    }

    /// Point-membership test.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.lower < x && x < self.upper)
            || (x == self.lower && self.lower_closed)
            || (x == self.upper && self.upper_closed)
    }

    /// The overlap of two atoms, or `None` when they share no point.
    ///
    /// A single shared boundary point counts as an overlap only when it is
    /// closed on both contributing sides.
    #[must_use]
    pub fn intersect(&self, other: &IntervalAtom) -> Option<IntervalAtom> {
        let (lower, lower_closed) = match self.lower.total_cmp(&other.lower) {
            Ordering::Less => (other.lower, other.lower_closed),
            Ordering::Greater => (self.lower, self.lower_closed),
            Ordering::Equal => (self.lower, self.lower_closed && other.lower_closed),
        };
        let (upper, upper_closed) = match self.upper.total_cmp(&other.upper) {
            Ordering::Less => (self.upper, self.upper_closed),
            Ordering::Greater => (other.upper, other.upper_closed),
            Ordering::Equal => (self.upper, self.upper_closed && other.upper_closed),
        };
        if lower > upper || (lower == upper && !(lower_closed && upper_closed)) {
            return None;
        }
        Some(IntervalAtom {
            lower,
            upper,
            lower_closed,
            upper_closed,
        })
    }

    /// Whether `other` can be merged into `self` as one contiguous atom.
    ///
    /// Callers must order the pair by lower bound: `self.lower <= other.lower`.
    /// Atoms merge when they overlap or when they touch at a boundary point
    /// closed on at least one of the two touching flags.
    pub(crate) fn mergeable(&self, other: &IntervalAtom) -> bool {
        other.lower < self.upper
            || (other.lower == self.upper && (self.upper_closed || other.lower_closed))
    }

    /// The contiguous hull of two mergeable atoms with `self.lower <= other.lower`.
    pub(crate) fn merge(&self, other: &IntervalAtom) -> IntervalAtom {
        let (lower, lower_closed) = if self.lower == other.lower {
            (self.lower, self.lower_closed || other.lower_closed)
        } else {
            (self.lower, self.lower_closed)
        };
        let (upper, upper_closed) = match self.upper.total_cmp(&other.upper) {
            Ordering::Less => (other.upper, other.upper_closed),
            Ordering::Greater => (self.upper, self.upper_closed),
            Ordering::Equal => (self.upper, self.upper_closed || other.upper_closed),
        };
        IntervalAtom {
            lower,
            upper,
            lower_closed,
            upper_closed,
        }
    }
}

impl fmt::Display for IntervalAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            if self.lower_closed { '[' } else { '(' },
            self.lower,
            self.upper,
            if self.upper_closed { ']' } else { ')' },
        )
    }
}
