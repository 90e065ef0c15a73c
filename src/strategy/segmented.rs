//! A segmentation paired with one action per segment.

use serde::{Deserialize, Serialize};

use super::error::StrategyError;
use crate::segment::Segmentation;

/// Maps a continuous observation to a discrete action through a
/// [`Segmentation`]: the observation's segment index selects the action.
///
/// Owns exactly one segmentation and an action array of length
/// `segment_count()`; no state is shared across instances.
///
/// ## Example
///
/// ```
/// use strategos::segment::Segmentation;
/// use strategos::strategy::SegmentationStrategy;
///
/// let seg: Segmentation = "0]1)".parse().unwrap();
/// let strategy = SegmentationStrategy::new(seg, vec!["fold", "call", "raise"]).unwrap();
/// assert_eq!(*strategy.action_for(0.5), "call");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegmentationStrategy<A> {
    segmentation: Segmentation,
    actions: Vec<A>,
}

impl<A> SegmentationStrategy<A> {
    /// Pair a segmentation with its actions, one per segment.
    pub fn new(segmentation: Segmentation, actions: Vec<A>) -> Result<Self, StrategyError> {
        if actions.len() != segmentation.segment_count() {
            return Err(StrategyError::ActionCountMismatch {
                expected: segmentation.segment_count(),
                actual: actions.len(),
            });
        }
        Ok(Self {
            segmentation,
            actions,
        })
    }

    /// The underlying segmentation.
    #[must_use]
    pub fn segmentation(&self) -> &Segmentation {
        &self.segmentation
    }

    /// The per-segment actions.
    #[must_use]
    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    /// Index of the segment containing `x`.
    #[must_use]
    pub fn segment_of(&self, x: f64) -> usize {
        self.segmentation.lookup(x)
    }

    /// The action mapped to the segment containing `x`.
    #[must_use]
    pub fn action_for(&self, x: f64) -> &A {
        &self.actions[self.segmentation.lookup(x)]
    }
}
