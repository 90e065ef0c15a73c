//! Segmentations: finitely many breakpoints partitioning the real line.

pub mod segmentation;

pub use segmentation::{Breakpoint, SegmentError, Segmentation, Side};
