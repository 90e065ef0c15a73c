//! Iteration over joint move profiles.

use smallvec::SmallVec;

use super::error::GameError;

/// A joint move profile: one move index per player.
/// SmallVec keeps the common small player counts off the heap.
pub type MoveProfile = SmallVec<[usize; 4]>;

/// An n-dimensional counting iterator over a shape `(n_1, ..., n_m)`.
///
/// Yields every profile from `(0, ..., 0)` to `(n_1-1, ..., n_m-1)`, first
/// axis fastest. Axes may be pinned to fixed values, in which case only the
/// free axes count. An empty shape yields exactly one empty profile; a zero
/// axis yields nothing.
///
/// ## Example
///
/// ```
/// use strategos::games::MoveProfiles;
///
/// let profiles: Vec<_> = MoveProfiles::new(vec![2, 2]).collect();
/// assert_eq!(profiles.len(), 4);
/// assert_eq!(profiles[0].as_slice(), &[0, 0]);
/// assert_eq!(profiles[1].as_slice(), &[1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct MoveProfiles {
    shape: Vec<usize>,
    fixed: Vec<Option<usize>>,
    pending: Option<MoveProfile>,
}

impl MoveProfiles {
    /// Iterate over every profile of `shape`.
    #[must_use]
    pub fn new(shape: Vec<usize>) -> Self {
        let fixed = vec![None; shape.len()];
        Self::build(shape, fixed)
    }

    /// Iterate over the profiles of `shape` with some axes pinned.
    ///
    /// Each `(axis, value)` pair fixes one axis; later pairs win on
    /// duplicates.
    pub fn with_fixed(shape: Vec<usize>, pins: &[(usize, usize)]) -> Result<Self, GameError> {
        let mut fixed = vec![None; shape.len()];
        for &(axis, value) in pins {
            if axis >= shape.len() {
                return Err(GameError::FixedAxisOutOfRange {
                    axis,
                    axes: shape.len(),
                });
            }
            if value >= shape[axis] {
                return Err(GameError::MoveOutOfRange {
                    player: axis,
                    chosen: value,
                    limit: shape[axis],
                });
            }
            fixed[axis] = Some(value);
        }
        Ok(Self::build(shape, fixed))
    }

    /// The shape being iterated.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn build(shape: Vec<usize>, fixed: Vec<Option<usize>>) -> Self {
        let exhausted_from_start = shape
            .iter()
            .zip(&fixed)
            .any(|(&n, pin)| pin.is_none() && n == 0);
        let pending = if exhausted_from_start {
            None
        } else {
            Some(
                fixed
                    .iter()
                    .map(|pin| pin.unwrap_or(0))
                    .collect::<MoveProfile>(),
            )
        };
        Self {
            shape,
            fixed,
            pending,
        }
    }
}

impl Iterator for MoveProfiles {
    type Item = MoveProfile;

    fn next(&mut self) -> Option<MoveProfile> {
        let current = self.pending.take()?;

        // Odometer step over the free axes, first axis fastest.
        let mut successor = current.clone();
        for axis in 0..self.shape.len() {
            if self.fixed[axis].is_some() {
                continue;
            }
            if successor[axis] + 1 < self.shape[axis] {
                successor[axis] += 1;
                self.pending = Some(successor);
                break;
            }
            successor[axis] = 0;
        }

        Some(current)
    }
}
