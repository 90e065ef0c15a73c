//! Strategy containers consumed by the game-model layer.
//!
//! - [`MixedStrategy`]: a weight vector with a cumulative distribution and a
//!   deterministic quantile lookup.
//! - [`StateBasedStrategy`]: one fixed move per state.
//! - [`MixedStateBasedStrategy`]: one mixed strategy per state.
//! - [`SegmentationStrategy`]: a [`Segmentation`](crate::segment::Segmentation)
//!   plus one action per segment, mapping a continuous observation to a
//!   discrete action.

pub mod error;
pub mod mixed;
pub mod segmented;

pub use error::StrategyError;
pub use mixed::{MixedStateBasedStrategy, MixedStrategy, StateBasedStrategy};
pub use segmented::SegmentationStrategy;
