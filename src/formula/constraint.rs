//! Linear predicates over configuration vectors.

use serde::{Deserialize, Serialize};

use crate::interval::{IntervalAtom, IntervalError, IntervalValue};

/// A linear constraint: `A·x ∈ R`, where `R` is an interval-set value.
///
/// The classic two-sided bound `lb <= A·x <= ub` is the special case built
/// by [`LinearConstraint::bounded`]. Arbitrary ranges allow disjunctive
/// bounds without leaving the constraint.
///
/// ## Example
///
/// ```
/// use strategos::formula::LinearConstraint;
///
/// let constraint = LinearConstraint::bounded(vec![1.0, -1.0], 0.0, 2.0).unwrap();
/// assert!(constraint.eval(&[3.0, 1.5]));
/// assert!(!constraint.eval(&[0.0, 5.0]));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    coefficients: Vec<f64>,
    range: IntervalValue,
}

impl LinearConstraint {
    /// A constraint whose dot product must land in `range`.
    #[must_use]
    pub fn new(coefficients: Vec<f64>, range: IntervalValue) -> Self {
        Self {
            coefficients,
            range,
        }
    }

    /// The two-sided bound `lb <= A·x <= ub`.
    ///
    /// Fails with [`IntervalError::ReversedBounds`] when `lb > ub`.
    pub fn bounded(coefficients: Vec<f64>, lb: f64, ub: f64) -> Result<Self, IntervalError> {
        let range = IntervalValue::from_atom(IntervalAtom::closed(lb, ub)?);
        Ok(Self::new(coefficients, range))
    }

    /// The coefficient vector `A`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The admissible range `R`.
    #[must_use]
    pub fn range(&self) -> &IntervalValue {
        &self.range
    }

    /// Number of variables the constraint ranges over.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluate the constraint at configuration `x`.
    ///
    /// `x` must have length [`arity`](LinearConstraint::arity).
    #[must_use]
    pub fn eval(&self, x: &[f64]) -> bool {
        debug_assert_eq!(x.len(), self.coefficients.len());
        let dot: f64 = self.coefficients.iter().zip(x).map(|(a, v)| a * v).sum();
        self.range.contains(dot)
    }
}
