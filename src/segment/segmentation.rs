//! Ordered breakpoints with inclusion sides, and point-to-segment lookup.
//!
//! N breakpoints split the real line into N+1 contiguous segments: segment 0
//! is the unbounded left ray, segment N the unbounded right ray. Each
//! breakpoint's [`Side`] decides which neighboring segment owns the exact
//! boundary value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::parse::{parse_segmentation, ParseError};

/// Error raised when breakpoints cannot form a segmentation.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum SegmentError {
    /// A breakpoint's value does not strictly exceed its predecessor's.
    #[error("breakpoint {index} does not strictly exceed its predecessor")]
    UnsortedOrDuplicatePoints { index: usize },

    /// A raw side flag was neither 0 nor 1.
    #[error("side must be 0 or 1, got {value}")]
    InvalidSide { value: u8 },

    /// Point and side sequences differ in length.
    #[error("{points} points paired with {sides} sides")]
    PointSideMismatch { points: usize, sides: usize },
}

/// Which neighboring segment owns a breakpoint's exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The point belongs to the segment below/left (written `]`).
    Below = 0,
    /// The point belongs to the segment above/right (written `)`).
    Above = 1,
}

impl TryFrom<u8> for Side {
    type Error = SegmentError;

    fn try_from(value: u8) -> Result<Self, SegmentError> {
        match value {
            0 => Ok(Side::Below),
            1 => Ok(Side::Above),
            value => Err(SegmentError::InvalidSide { value }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Below => write!(f, "]"),
            Side::Above => write!(f, ")"),
        }
    }
}

/// A segmentation boundary: a value plus the side that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Boundary value.
    pub point: f64,
    /// Owner of the exact boundary value.
    pub side: Side,
}

impl Breakpoint {
    /// Create a breakpoint.
    #[must_use]
    pub fn new(point: f64, side: Side) -> Self {
        Self { point, side }
    }

    /// Whether this breakpoint absorbs `x` during lookup: `x` lies at or
    /// below the boundary, on the side the breakpoint owns.
    #[must_use]
    pub fn absorbs(&self, x: f64) -> bool {
        match self.side {
            Side::Below => x <= self.point,
            Side::Above => x < self.point,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.point, self.side)
    }
}

/// A strictly increasing breakpoint sequence with segment lookup.
///
/// Immutable after construction: built once by [`Segmentation::new`] or by
/// the segmentation parser, then only read.
///
/// ## Example
///
/// ```
/// use strategos::segment::Segmentation;
///
/// let seg: Segmentation = "0]1)".parse().unwrap();
/// assert_eq!(seg.lookup(0.0), 0);
/// assert_eq!(seg.lookup(0.5), 1);
/// assert_eq!(seg.lookup(1.0), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    breakpoints: Vec<Breakpoint>,
}

impl Segmentation {
    /// Build a segmentation, validating strict breakpoint ordering.
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self, SegmentError> {
        for (index, pair) in breakpoints.windows(2).enumerate() {
            if !(pair[1].point > pair[0].point) {
                return Err(SegmentError::UnsortedOrDuplicatePoints { index: index + 1 });
            }
        }
        Ok(Self { breakpoints })
    }

    /// Build from parallel point and raw-side sequences (0 = below, 1 = above).
    pub fn from_raw(points: &[f64], sides: &[u8]) -> Result<Self, SegmentError> {
        if points.len() != sides.len() {
            return Err(SegmentError::PointSideMismatch {
                points: points.len(),
                sides: sides.len(),
            });
        }
        let breakpoints = points
            .iter()
            .zip(sides)
            .map(|(&point, &side)| Ok(Breakpoint::new(point, Side::try_from(side)?)))
            .collect::<Result<Vec<_>, SegmentError>>()?;
        Self::new(breakpoints)
    }

    /// The breakpoint sequence.
    #[must_use]
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Number of segments: breakpoint count plus one.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.breakpoints.len() + 1
    }

    /// Index of the segment containing `x`.
    ///
    /// Equivalent to the left-to-right scan for the first absorbing
    /// breakpoint: absorption is monotone in the breakpoint index, so a
    /// partition-point search returns the same answer. Falls through to the
    /// breakpoint count (the unbounded right ray) when nothing absorbs.
    #[must_use]
    pub fn lookup(&self, x: f64) -> usize {
        self.breakpoints.partition_point(|bp| !bp.absorbs(x))
    }
}

impl fmt::Display for Segmentation {
    /// Formats in the flat grammar accepted by the segmentation parser.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bp in &self.breakpoints {
            write!(f, "{bp}")?;
        }
        Ok(())
    }
}

impl FromStr for Segmentation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_segmentation(s)
    }
}
