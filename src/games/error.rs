//! Game container construction and lookup errors.

use thiserror::Error;

/// Errors raised by payoff tables, transition tables, and game models.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum GameError {
    /// A table over zero players.
    #[error("at least one player is required")]
    NoPlayers,

    /// A model with zero states.
    #[error("at least one state is required")]
    NoStates,

    /// Payoff data does not cover every profile/player pair exactly once.
    #[error("payoff data length {actual} does not match expected {expected}")]
    PayoffLengthMismatch { expected: usize, actual: usize },

    /// Transition data does not cover every profile exactly once.
    #[error("transition data length {actual} does not match expected {expected}")]
    TransitionLengthMismatch { expected: usize, actual: usize },

    /// A joint profile with the wrong number of players.
    #[error("profile length {actual} does not match player count {expected}")]
    ProfileLengthMismatch { expected: usize, actual: usize },

    /// A player's chosen move exceeds their move count.
    #[error("player {player} chose move {chosen}, limit {limit}")]
    MoveOutOfRange {
        player: usize,
        chosen: usize,
        limit: usize,
    },

    /// A state's table covers a different player count than the model.
    #[error("state {state} covers {actual} players, model has {expected}")]
    PlayerCountMismatch {
        state: usize,
        expected: usize,
        actual: usize,
    },

    /// A transition targets a state outside the model.
    #[error("state {state} transitions to {target}, model has {states} states")]
    TransitionOutOfRange {
        state: usize,
        target: usize,
        states: usize,
    },

    /// A state index outside the model.
    #[error("state {state} out of range, model has {states} states")]
    StateOutOfRange { state: usize, states: usize },

    /// The payoff-table count differs from the state count.
    #[error("expected {expected} payoff tables, got {actual}")]
    PayoffTableCountMismatch { expected: usize, actual: usize },

    /// The guard count differs from the state count.
    #[error("expected {expected} guards, got {actual}")]
    GuardCountMismatch { expected: usize, actual: usize },

    /// A state's payoff table shape differs from its transition table shape.
    #[error("state {state}: payoff table shape differs from transition table")]
    ShapeMismatch { state: usize },

    /// A fixed axis outside the profile shape.
    #[error("fixed axis {axis} out of range for {axes} axes")]
    FixedAxisOutOfRange { axis: usize, axes: usize },
}
