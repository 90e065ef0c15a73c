//! Mixed and state-based strategies.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::StrategyError;

/// A mixed strategy: non-negative weights over a finite outcome set.
///
/// The cumulative distribution is precomputed at construction, with the
/// final bound pinned to 1.0 so the whole unit interval is covered. Weights
/// are assumed to sum to 1; only non-negativity is enforced.
///
/// ## Example
///
/// ```
/// use strategos::strategy::MixedStrategy;
///
/// let strategy = MixedStrategy::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(strategy.quantile(0.1), 0);
/// assert_eq!(strategy.quantile(0.5), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixedStrategy {
    weights: Vec<f64>,
    cumulative: Vec<f64>,
}

impl MixedStrategy {
    /// Build a mixed strategy, rejecting empty or negative weight vectors.
    pub fn new(weights: Vec<f64>) -> Result<Self, StrategyError> {
        if weights.is_empty() {
            return Err(StrategyError::EmptyDistribution);
        }
        for (index, &w) in weights.iter().enumerate() {
            if !(w >= 0.0) {
                return Err(StrategyError::NegativeWeight { index });
            }
        }

        let mut cumulative = Vec::with_capacity(weights.len() + 1);
        cumulative.push(0.0);
        for &w in &weights {
            let last = cumulative[cumulative.len() - 1];
            cumulative.push(last + w);
        }
        let last = cumulative.len() - 1;
        cumulative[last] = 1.0;

        Ok(Self { weights, cumulative })
    }

    /// Number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: empty distributions are rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// The weight vector.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The cumulative bounds, length `len() + 1`, ending at 1.0.
    #[must_use]
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// The outcome owning cumulative mass `t`.
    ///
    /// Outcome `k` owns `t` in `[cumulative[k], cumulative[k+1])`, so
    /// zero-weight outcomes own no mass. Saturates at the first and last
    /// outcome for `t` outside the unit interval; the caller supplies `t`
    /// (typically a uniform draw made elsewhere).
    #[must_use]
    pub fn quantile(&self, t: f64) -> usize {
        let idx = self.cumulative.partition_point(|&c| c <= t);
        idx.saturating_sub(1).min(self.weights.len() - 1)
    }
}

impl Index<usize> for MixedStrategy {
    type Output = f64;

    fn index(&self, outcome: usize) -> &f64 {
        &self.weights[outcome]
    }
}

/// A deterministic state-based strategy: one fixed move per state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateBasedStrategy {
    moves: Vec<usize>,
}

impl StateBasedStrategy {
    /// Build from one move index per state.
    #[must_use]
    pub fn new(moves: Vec<usize>) -> Self {
        Self { moves }
    }

    /// Number of states covered.
    #[must_use]
    pub fn states(&self) -> usize {
        self.moves.len()
    }

    /// The per-state move choices.
    #[must_use]
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }
}

impl Index<usize> for StateBasedStrategy {
    type Output = usize;

    fn index(&self, state: usize) -> &usize {
        &self.moves[state]
    }
}

/// A state-based mixed strategy: one mixed strategy per state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixedStateBasedStrategy {
    strategies: Vec<MixedStrategy>,
}

impl MixedStateBasedStrategy {
    /// Build from one mixed strategy per state.
    #[must_use]
    pub fn new(strategies: Vec<MixedStrategy>) -> Self {
        Self { strategies }
    }

    /// Number of states covered.
    #[must_use]
    pub fn states(&self) -> usize {
        self.strategies.len()
    }

    /// Iterate over the per-state strategies in state order.
    pub fn iter(&self) -> impl Iterator<Item = &MixedStrategy> {
        self.strategies.iter()
    }
}

impl Index<usize> for MixedStateBasedStrategy {
    type Output = MixedStrategy;

    fn index(&self, state: usize) -> &MixedStrategy {
        &self.strategies[state]
    }
}
