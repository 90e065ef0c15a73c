//! Concurrent game models: transition bookkeeping over joint moves.
//!
//! A [`GameModel`] holds one [`TransitionTable`] per state and a current
//! state, and appends to its state and move histories on every move. The
//! histories use `im::Vector`, so cloning a model snapshot is O(1).
//!
//! [`GuardedGameModel`] layers one payoff table and one guard formula per
//! state on top, recording the payoff vector of every move made.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::payoff::{flat_offset, PayoffTable};
use super::profiles::{MoveProfile, MoveProfiles};
use crate::formula::Formula;

/// One state's transition function: joint move profile to successor state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTable {
    moves: Vec<usize>,
    targets: Vec<usize>,
}

impl TransitionTable {
    /// Build from per-player move counts and flat successor data.
    ///
    /// `targets` must hold `n_1 * ... * n_m` entries; whether each target
    /// names an existing state is checked by the owning model.
    pub fn new(moves: Vec<usize>, targets: Vec<usize>) -> Result<Self, GameError> {
        if moves.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let expected = moves.iter().product::<usize>();
        if targets.len() != expected {
            return Err(GameError::TransitionLengthMismatch {
                expected,
                actual: targets.len(),
            });
        }
        Ok(Self { moves, targets })
    }

    /// Number of players.
    #[must_use]
    pub fn players(&self) -> usize {
        self.moves.len()
    }

    /// Per-player move counts.
    #[must_use]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// The successor state for a joint move profile.
    pub fn target(&self, profile: &[usize]) -> Result<usize, GameError> {
        Ok(self.targets[flat_offset(&self.moves, profile)?])
    }

    /// Every successor state, in flat profile order.
    #[must_use]
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Iterate over every joint move profile of this table.
    #[must_use]
    pub fn profiles(&self) -> MoveProfiles {
        MoveProfiles::new(self.moves.clone())
    }
}

/// A concurrent game model: per-state transitions plus move bookkeeping.
///
/// ## Example
///
/// ```
/// use strategos::games::{GameModel, TransitionTable};
///
/// let flip = TransitionTable::new(vec![2], vec![0, 1]).unwrap();
/// let stay = TransitionTable::new(vec![2], vec![1, 1]).unwrap();
/// let mut model = GameModel::new(vec![flip, stay]).unwrap();
///
/// model.make_move(&[1]).unwrap();
/// assert_eq!(model.current_state(), 1);
/// assert_eq!(model.state_history().len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameModel {
    transitions: Vec<TransitionTable>,
    current: usize,
    state_history: Vector<usize>,
    move_history: Vector<MoveProfile>,
}

impl GameModel {
    /// Build a model starting in state 0.
    pub fn new(transitions: Vec<TransitionTable>) -> Result<Self, GameError> {
        Self::with_initial(transitions, 0)
    }

    /// Build a model starting in `initial`.
    ///
    /// Validates that every state's table covers the same player count and
    /// that every transition targets an existing state.
    pub fn with_initial(
        transitions: Vec<TransitionTable>,
        initial: usize,
    ) -> Result<Self, GameError> {
        if transitions.is_empty() {
            return Err(GameError::NoStates);
        }
        let states = transitions.len();
        let players = transitions[0].players();
        for (state, table) in transitions.iter().enumerate() {
            if table.players() != players {
                return Err(GameError::PlayerCountMismatch {
                    state,
                    expected: players,
                    actual: table.players(),
                });
            }
            for &target in table.targets() {
                if target >= states {
                    return Err(GameError::TransitionOutOfRange {
                        state,
                        target,
                        states,
                    });
                }
            }
        }
        if initial >= states {
            return Err(GameError::StateOutOfRange {
                state: initial,
                states,
            });
        }
        Ok(Self {
            transitions,
            current: initial,
            state_history: Vector::new(),
            move_history: Vector::new(),
        })
    }

    /// Number of states.
    #[must_use]
    pub fn states(&self) -> usize {
        self.transitions.len()
    }

    /// Number of players.
    #[must_use]
    pub fn players(&self) -> usize {
        self.transitions[0].players()
    }

    /// The state the model is currently in.
    #[must_use]
    pub fn current_state(&self) -> usize {
        self.current
    }

    /// A state's transition table.
    pub fn transition(&self, state: usize) -> Result<&TransitionTable, GameError> {
        self.transitions.get(state).ok_or(GameError::StateOutOfRange {
            state,
            states: self.transitions.len(),
        })
    }

    /// Iterate over the joint move profiles available in `state`.
    pub fn profiles(&self, state: usize) -> Result<MoveProfiles, GameError> {
        Ok(self.transition(state)?.profiles())
    }

    /// States visited before each recorded move, oldest first.
    #[must_use]
    pub fn state_history(&self) -> &Vector<usize> {
        &self.state_history
    }

    /// Joint moves made, oldest first.
    #[must_use]
    pub fn move_history(&self) -> &Vector<MoveProfile> {
        &self.move_history
    }

    /// Make a joint move: record the departing state and the move, then
    /// advance to the successor. Returns the new current state.
    pub fn make_move(&mut self, profile: &[usize]) -> Result<usize, GameError> {
        let next = self.transitions[self.current].target(profile)?;
        self.state_history.push_back(self.current);
        self.move_history.push_back(MoveProfile::from_slice(profile));
        self.current = next;
        Ok(next)
    }

    /// Return to `initial` and clear both histories.
    pub fn reset(&mut self, initial: usize) -> Result<(), GameError> {
        if initial >= self.transitions.len() {
            return Err(GameError::StateOutOfRange {
                state: initial,
                states: self.transitions.len(),
            });
        }
        self.current = initial;
        self.state_history = Vector::new();
        self.move_history = Vector::new();
        Ok(())
    }
}

/// A concurrent game model with a strategic game in every state.
///
/// Each state carries a payoff table (whose shape must match the state's
/// transition table) and a guard formula evaluated against a continuous
/// observation vector. Every move records the payoff vector it produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuardedGameModel {
    model: GameModel,
    payoffs: Vec<PayoffTable>,
    guards: Vec<Formula>,
    payoff_history: Vector<Vec<f64>>,
}

impl GuardedGameModel {
    /// Pair a model with one payoff table per state.
    ///
    /// An empty `guards` vector defaults every state's guard to truth;
    /// otherwise one formula per state is required.
    pub fn new(
        model: GameModel,
        payoffs: Vec<PayoffTable>,
        guards: Vec<Formula>,
    ) -> Result<Self, GameError> {
        if payoffs.len() != model.states() {
            return Err(GameError::PayoffTableCountMismatch {
                expected: model.states(),
                actual: payoffs.len(),
            });
        }
        for (state, (table, transition)) in payoffs.iter().zip(&model.transitions).enumerate() {
            if table.moves() != transition.moves() {
                return Err(GameError::ShapeMismatch { state });
            }
        }
        let guards = if guards.is_empty() {
            vec![Formula::Constant(true); model.states()]
        } else if guards.len() == model.states() {
            guards
        } else {
            return Err(GameError::GuardCountMismatch {
                expected: model.states(),
                actual: guards.len(),
            });
        };
        Ok(Self {
            model,
            payoffs,
            guards,
            payoff_history: Vector::new(),
        })
    }

    /// The underlying game model.
    #[must_use]
    pub fn model(&self) -> &GameModel {
        &self.model
    }

    /// The state the model is currently in.
    #[must_use]
    pub fn current_state(&self) -> usize {
        self.model.current_state()
    }

    /// A state's payoff table.
    pub fn payoff_table(&self, state: usize) -> Result<&PayoffTable, GameError> {
        self.payoffs.get(state).ok_or(GameError::StateOutOfRange {
            state,
            states: self.payoffs.len(),
        })
    }

    /// A state's guard formula.
    pub fn guard(&self, state: usize) -> Result<&Formula, GameError> {
        self.guards.get(state).ok_or(GameError::StateOutOfRange {
            state,
            states: self.guards.len(),
        })
    }

    /// Evaluate the current state's guard against an observation vector.
    #[must_use]
    pub fn guard_passes(&self, observation: &[f64]) -> bool {
        self.guards[self.model.current_state()].eval(observation)
    }

    /// Payoff vectors recorded for each move, oldest first.
    #[must_use]
    pub fn payoff_history(&self) -> &Vector<Vec<f64>> {
        &self.payoff_history
    }

    /// Make a joint move: record the departing state's payoff vector, then
    /// advance the underlying model. Returns the new current state.
    pub fn make_move(&mut self, profile: &[usize]) -> Result<usize, GameError> {
        let outcome = self.payoffs[self.model.current_state()]
            .outcome(profile)?
            .to_vec();
        let next = self.model.make_move(profile)?;
        self.payoff_history.push_back(outcome);
        Ok(next)
    }

    /// Return to `initial` and clear every history.
    pub fn reset(&mut self, initial: usize) -> Result<(), GameError> {
        self.model.reset(initial)?;
        self.payoff_history = Vector::new();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_state_model() -> GameModel {
        // State 0: both players pick 0/1; state 1 is absorbing.
        let branch = TransitionTable::new(vec![2, 2], vec![0, 1, 1, 0]).unwrap();
        let sink = TransitionTable::new(vec![2, 2], vec![1, 1, 1, 1]).unwrap();
        GameModel::new(vec![branch, sink]).unwrap()
    }

    #[test]
    fn test_construction_validations() {
        assert_eq!(GameModel::new(vec![]), Err(GameError::NoStates));

        let t = TransitionTable::new(vec![2], vec![0, 2]).unwrap();
        assert_eq!(
            GameModel::new(vec![t]),
            Err(GameError::TransitionOutOfRange {
                state: 0,
                target: 2,
                states: 1
            })
        );

        let a = TransitionTable::new(vec![2], vec![0, 0]).unwrap();
        let b = TransitionTable::new(vec![2, 2], vec![0, 0, 0, 0]).unwrap();
        assert_eq!(
            GameModel::new(vec![a, b]),
            Err(GameError::PlayerCountMismatch {
                state: 1,
                expected: 1,
                actual: 2
            })
        );
    }

    #[test]
    fn test_move_bookkeeping() {
        let mut model = two_state_model();
        assert_eq!(model.current_state(), 0);

        assert_eq!(model.make_move(&[1, 0]).unwrap(), 1);
        assert_eq!(model.make_move(&[0, 0]).unwrap(), 1);

        assert_eq!(model.state_history().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(model.move_history().len(), 2);
        assert_eq!(model.move_history()[0].as_slice(), &[1, 0]);
    }

    #[test]
    fn test_move_validation() {
        let mut model = two_state_model();
        assert_eq!(
            model.make_move(&[2, 0]),
            Err(GameError::MoveOutOfRange {
                player: 0,
                chosen: 2,
                limit: 2
            })
        );
        // A rejected move leaves no trace.
        assert!(model.state_history().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut model = two_state_model();
        model.make_move(&[1, 0]).unwrap();
        model.reset(0).unwrap();

        assert_eq!(model.current_state(), 0);
        assert!(model.state_history().is_empty());
        assert!(model.move_history().is_empty());
        assert_eq!(model.reset(5), Err(GameError::StateOutOfRange { state: 5, states: 2 }));
    }

    #[test]
    fn test_guarded_model_shape_checks() {
        let model = two_state_model();
        let good = PayoffTable::new(vec![2, 2], vec![0.0; 8]).unwrap();
        let bad = PayoffTable::new(vec![3, 2], vec![0.0; 12]).unwrap();

        assert_eq!(
            GuardedGameModel::new(model.clone(), vec![good.clone()], vec![]).map(|_| ()),
            Err(GameError::PayoffTableCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            GuardedGameModel::new(model, vec![good, bad], vec![]).map(|_| ()),
            Err(GameError::ShapeMismatch { state: 1 })
        );
    }

    #[test]
    fn test_guarded_model_records_payoffs() {
        let model = two_state_model();
        let zero_sum = PayoffTable::new(
            vec![2, 2],
            vec![1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
        )
        .unwrap();
        let flat = PayoffTable::new(vec![2, 2], vec![0.0; 8]).unwrap();
        let mut guarded = GuardedGameModel::new(model, vec![zero_sum, flat], vec![]).unwrap();

        guarded.make_move(&[0, 0]).unwrap();
        guarded.make_move(&[1, 1]).unwrap();

        assert_eq!(guarded.payoff_history().len(), 2);
        assert_eq!(guarded.payoff_history()[0], vec![1.0, -1.0]);
        assert_eq!(guarded.payoff_history()[1], vec![0.0, 0.0]);

        guarded.reset(0).unwrap();
        assert!(guarded.payoff_history().is_empty());
    }

    #[test]
    fn test_default_guards_are_truth() {
        let model = two_state_model();
        let flat = PayoffTable::new(vec![2, 2], vec![0.0; 8]).unwrap();
        let guarded =
            GuardedGameModel::new(model, vec![flat.clone(), flat], vec![]).unwrap();
        assert!(guarded.guard_passes(&[123.0]));
        assert_eq!(guarded.guard(0).unwrap(), &Formula::Constant(true));
    }
}
