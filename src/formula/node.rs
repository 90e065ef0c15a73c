//! The Boolean formula tree.

use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr, Not};

use super::constraint::LinearConstraint;

/// A Boolean combination of linear constraints, checked exhaustively.
///
/// All constraints in one formula are assumed to range over the same
/// variables.
///
/// ## Example
///
/// ```
/// use strategos::formula::{Formula, LinearConstraint};
///
/// let lo = LinearConstraint::bounded(vec![1.0], 0.0, 1.0).unwrap();
/// let hi = LinearConstraint::bounded(vec![1.0], 2.0, 3.0).unwrap();
/// let either = Formula::from(lo) | Formula::from(hi);
/// assert!(either.eval(&[0.5]));
/// assert!(!either.eval(&[1.5]));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Formula {
    /// Truth or falsity.
    Constant(bool),
    /// Negation.
    Not(Box<Formula>),
    /// Conjunction.
    And(Box<Formula>, Box<Formula>),
    /// Disjunction.
    Or(Box<Formula>, Box<Formula>),
    /// A leaf linear constraint.
    Constraint(LinearConstraint),
}

impl Formula {
    /// Evaluate the formula at configuration `x`.
    #[must_use]
    pub fn eval(&self, x: &[f64]) -> bool {
        match self {
            Formula::Constant(value) => *value,
            Formula::Not(inner) => !inner.eval(x),
            Formula::And(lhs, rhs) => lhs.eval(x) && rhs.eval(x),
            Formula::Or(lhs, rhs) => lhs.eval(x) || rhs.eval(x),
            Formula::Constraint(constraint) => constraint.eval(x),
        }
    }

    /// Conjunction of two formulas.
    #[must_use]
    pub fn and(self, other: Formula) -> Formula {
        Formula::And(Box::new(self), Box::new(other))
    }

    /// Disjunction of two formulas.
    #[must_use]
    pub fn or(self, other: Formula) -> Formula {
        Formula::Or(Box::new(self), Box::new(other))
    }

    /// Negation of a formula.
    #[must_use]
    pub fn negate(self) -> Formula {
        Formula::Not(Box::new(self))
    }
}

impl From<bool> for Formula {
    fn from(value: bool) -> Self {
        Formula::Constant(value)
    }
}

impl From<LinearConstraint> for Formula {
    fn from(constraint: LinearConstraint) -> Self {
        Formula::Constraint(constraint)
    }
}

impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        self.and(rhs)
    }
}

impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        self.or(rhs)
    }
}

impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        self.negate()
    }
}
