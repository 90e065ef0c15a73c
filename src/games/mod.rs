//! Finite-game payoff containers and concurrent game models.
//!
//! - [`PayoffTable`]: a normal-form payoff tensor with per-profile lookup.
//! - [`TransitionTable`] / [`GameModel`]: transition bookkeeping for
//!   concurrent game models, with state and move histories.
//! - [`GuardedGameModel`]: a game model with per-state payoff tables and
//!   guard formulas.
//! - [`MoveProfiles`]: the n-dimensional iterator over joint move profiles.

pub mod concurrent;
pub mod error;
pub mod payoff;
pub mod profiles;

pub use concurrent::{GameModel, GuardedGameModel, TransitionTable};
pub use error::GameError;
pub use payoff::PayoffTable;
pub use profiles::{MoveProfile, MoveProfiles};
