//! Normalized unions of interval atoms.
//!
//! ## Normalization
//!
//! The atom sequence is kept sorted by lower bound, with every empty atom
//! dropped and every mergeable adjacent pair collapsed. Normalization makes
//! the representation canonical: two values describe the same point set
//! exactly when their atom sequences are equal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::str::FromStr;

use super::atom::IntervalAtom;
use crate::parse::{parse_interval_expression, ParseError};

/// A set of real numbers as a normalized union of atoms.
///
/// Immutable once built. Produced by parsing an interval expression or by
/// combining two values with [`union`](IntervalValue::union) /
/// [`intersection`](IntervalValue::intersection).
///
/// ## Example
///
/// ```
/// use strategos::interval::IntervalValue;
///
/// let value: IntervalValue = "[0,1]|[2,3]".parse().unwrap();
/// assert!(value.contains(0.5));
/// assert!(!value.contains(1.5));
/// assert_eq!(value.atoms().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalValue {
    atoms: SmallVec<[IntervalAtom; 2]>,
}

impl IntervalValue {
    /// The empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A value holding one atom. Empty atoms yield the empty value.
    #[must_use]
    pub fn from_atom(atom: IntervalAtom) -> Self {
        Self::from_atoms(vec![atom])
    }

    /// Build a normalized value from arbitrary atoms.
    #[must_use]
    pub fn from_atoms(atoms: Vec<IntervalAtom>) -> Self {
        let mut atoms: Vec<IntervalAtom> =
            atoms.into_iter().filter(|a| !a.is_empty()).collect();
        atoms.sort_by(|a, b| {
            a.lower()
                .total_cmp(&b.lower())
                .then_with(|| b.lower_closed().cmp(&a.lower_closed()))
        });

        let mut normalized: SmallVec<[IntervalAtom; 2]> = SmallVec::new();
        for atom in atoms {
            match normalized.last_mut() {
                Some(last) if last.mergeable(&atom) => *last = last.merge(&atom),
                _ => normalized.push(atom),
            }
        }
        Self { atoms: normalized }
    }

    /// The normalized atom sequence.
    #[must_use]
    pub fn atoms(&self) -> &[IntervalAtom] {
        &self.atoms
    }

    /// True when the value contains no point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Point-membership test.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.atoms.iter().any(|a| a.contains(x))
    }

    /// The union of two values, fully normalized.
    #[must_use]
    pub fn union(&self, other: &IntervalValue) -> IntervalValue {
        let mut atoms = Vec::with_capacity(self.atoms.len() + other.atoms.len());
        atoms.extend_from_slice(&self.atoms);
        atoms.extend_from_slice(&other.atoms);
        Self::from_atoms(atoms)
    }

    /// The intersection of two values: every non-empty pairwise overlap,
    /// normalized.
    #[must_use]
    pub fn intersection(&self, other: &IntervalValue) -> IntervalValue {
        let mut atoms = Vec::new();
        for a in &self.atoms {
            for b in &other.atoms {
                if let Some(overlap) = a.intersect(b) {
                    atoms.push(overlap);
                }
            }
        }
        Self::from_atoms(atoms)
    }
}

impl From<IntervalAtom> for IntervalValue {
    fn from(atom: IntervalAtom) -> Self {
        Self::from_atom(atom)
    }
}

impl BitOr for IntervalValue {
    type Output = IntervalValue;

    fn bitor(self, rhs: IntervalValue) -> IntervalValue {
        self.union(&rhs)
    }
}

impl BitAnd for IntervalValue {
    type Output = IntervalValue;

    fn bitand(self, rhs: IntervalValue) -> IntervalValue {
        self.intersection(&rhs)
    }
}

impl fmt::Display for IntervalValue {
    /// Formats the value in the expression grammar, so that reparsing the
    /// output yields an equal value. The empty set prints as `(0,0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.atoms.is_empty() {
            return write!(f, "(0,0)");
        }
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl FromStr for IntervalValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_interval_expression(s)
    }
}
