//! # strategos
//!
//! A concurrent game-model engine with interval-set strategies.
//!
//! The core is a textual grammar for describing sets of real numbers as
//! interval-algebra expressions, plus segmentations that partition the real
//! line and answer "which region contains x" queries. Around it sit the
//! game-model collaborators that consume those values: payoff tables,
//! transition bookkeeping, strategies, and a constraint-formula evaluator.
//!
//! ## Design Principles
//!
//! 1. **Parse once, share freely**: parsed values are immutable, so one
//!    `IntervalValue` or `Segmentation` can back any number of readers
//!    without locking.
//!
//! 2. **One token of lookahead**: both grammars are parsed by plain
//!    recursive descent over a shared cursor; nothing ever backtracks.
//!
//! 3. **Fail at construction**: invariant violations (reversed bounds,
//!    unsorted breakpoints, mismatched shapes) surface as typed errors when
//!    a value is built, never during later lookups.
//!
//! ## Modules
//!
//! - `parse`: cursor, float lexer, both recursive-descent parsers
//! - `interval`: interval atoms and the normalized interval-set algebra
//! - `segment`: breakpoints and point-to-segment lookup
//! - `strategy`: mixed, state-based, and segmentation-driven strategies
//! - `formula`: Boolean formulas over linear constraints
//! - `games`: payoff tables and concurrent game models

pub mod formula;
pub mod games;
pub mod interval;
pub mod parse;
pub mod segment;
pub mod strategy;

// Re-export commonly used types
pub use crate::interval::{IntervalAtom, IntervalError, IntervalValue};

pub use crate::segment::{Breakpoint, SegmentError, Segmentation, Side};

pub use crate::parse::{parse_interval_expression, parse_segmentation, Cursor, ParseError};

pub use crate::strategy::{
    MixedStateBasedStrategy, MixedStrategy, SegmentationStrategy, StateBasedStrategy,
    StrategyError,
};

pub use crate::formula::{Formula, LinearConstraint};

pub use crate::games::{
    GameError, GameModel, GuardedGameModel, MoveProfile, MoveProfiles, PayoffTable,
    TransitionTable,
};
