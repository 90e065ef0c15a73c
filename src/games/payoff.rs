//! Normal-form payoff containers.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::profiles::MoveProfiles;

/// A payoff tensor over per-player move counts.
///
/// Stores one payoff per player for every joint move profile, flattened with
/// the first player's move varying fastest and the per-player payoff vector
/// contiguous per profile. Pure container: payoff aggregation over mixed
/// profiles happens elsewhere.
///
/// ## Example
///
/// ```
/// use strategos::games::PayoffTable;
///
/// // Matching pennies: profiles (0,0), (1,0), (0,1), (1,1).
/// let game = PayoffTable::new(
///     vec![2, 2],
///     vec![1.0, -1.0, -1.0, 1.0, -1.0, 1.0, 1.0, -1.0],
/// )
/// .unwrap();
/// assert_eq!(game.outcome(&[0, 0]).unwrap(), &[1.0, -1.0]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoffTable {
    moves: Vec<usize>,
    payoffs: Vec<f64>,
}

impl PayoffTable {
    /// Build a payoff table from per-player move counts and flat payoff data.
    ///
    /// `payoffs` must hold `n_1 * ... * n_m * m` entries.
    pub fn new(moves: Vec<usize>, payoffs: Vec<f64>) -> Result<Self, GameError> {
        if moves.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let expected = moves.iter().product::<usize>() * moves.len();
        if payoffs.len() != expected {
            return Err(GameError::PayoffLengthMismatch {
                expected,
                actual: payoffs.len(),
            });
        }
        Ok(Self { moves, payoffs })
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

    /// The payoff vector (one entry per player) for a joint move profile.
    pub fn outcome(&self, profile: &[usize]) -> Result<&[f64], GameError> {
        let offset = flat_offset(&self.moves, profile)?;
        let players = self.players();
        Ok(&self.payoffs[offset * players..(offset + 1) * players])
    }

    /// Iterate over every joint move profile of this table.
    #[must_use]
    pub fn profiles(&self) -> MoveProfiles {
        MoveProfiles::new(self.moves.clone())
    }
}

/// Flat index of `profile` within `shape`, first axis fastest.
pub(super) fn flat_offset(shape: &[usize], profile: &[usize]) -> Result<usize, GameError> {
    if profile.len() != shape.len() {
        return Err(GameError::ProfileLengthMismatch {
            expected: shape.len(),
            actual: profile.len(),
        });
    }
    let mut offset = 0;
    let mut stride = 1;
    for (player, (&chosen, &limit)) in profile.iter().zip(shape).enumerate() {
        if chosen >= limit {
            return Err(GameError::MoveOutOfRange {
                player,
                chosen,
                limit,
            });
        }
        offset += chosen * stride;
        stride *= limit;
    }
    Ok(offset)
}
