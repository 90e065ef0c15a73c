//! Parse error taxonomy.
//!
//! Every variant is terminal for the current parse: no partial result, no
//! recovery. Positions refer to the whitespace-stripped input.

use thiserror::Error;

use crate::interval::IntervalError;
use crate::segment::SegmentError;

/// Errors raised by the interval-expression and segmentation parsers.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum ParseError {
    /// Input ran out where a token was required.
    #[error("unexpected end of input at {at}")]
    EndOfInput { at: usize },

    /// An interval literal opened or closed with the wrong character.
    #[error("expected an interval bracket at {at}, found {found:?}")]
    BracketMismatch { at: usize, found: char },

    /// A brace group or interval literal was never closed.
    #[error("unterminated group at {at}")]
    UnterminatedGroup { at: usize },

    /// A character no production can start with, or a stray trailing one.
    #[error("unexpected token {found:?} at {at}")]
    UnexpectedToken { at: usize, found: char },

    /// A number with no digits, or with more than one decimal point.
    #[error("malformed number at {at}")]
    MalformedNumber { at: usize },

    /// An interval literal whose lower bound exceeds its upper bound.
    #[error("malformed interval: {0}")]
    MalformedInterval(#[from] IntervalError),

    /// A segmentation delimiter with no preceding point.
    #[error("delimiter {found:?} at {at} has no preceding point")]
    DelimiterMismatch { at: usize, found: char },

    /// Segmentation input ended without its mandatory trailing delimiter.
    #[error("missing closing delimiter at {at}")]
    MissingDelimiter { at: usize },

    /// Two numbers or two delimiters in a row in a segmentation.
    #[error("misplaced token {found:?} at {at}")]
    MisplacedToken { at: usize, found: char },

    /// The parsed breakpoints violated a segmentation invariant.
    #[error("invalid segmentation: {0}")]
    Segmentation(#[from] SegmentError),
}
