//! Strategy construction errors.

use thiserror::Error;

/// Errors raised when a strategy container's invariants fail at construction.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum StrategyError {
    /// A mixed strategy weight was negative (or NaN).
    #[error("weight at {index} must be non-negative")]
    NegativeWeight { index: usize },

    /// A mixed strategy over zero outcomes.
    #[error("distribution must not be empty")]
    EmptyDistribution,

    /// The action array does not cover every segment exactly once.
    #[error("expected {expected} actions for the segmentation, got {actual}")]
    ActionCountMismatch { expected: usize, actual: usize },
}
