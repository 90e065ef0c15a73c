//! Interval-set values over the real line.
//!
//! An [`IntervalValue`] is a normalized union of [`IntervalAtom`]s: sorted,
//! non-overlapping, and with no two adjacent atoms that could be merged into
//! one contiguous atom. Values are immutable once built; union and
//! intersection produce fresh normalized values.

pub mod atom;
pub mod value;

pub use atom::{IntervalAtom, IntervalError};
pub use value::IntervalValue;
