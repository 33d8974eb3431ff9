//! Linear constraint types for the transportation program.
//!
//! These are shared by the problem builder and the solver port, so a built
//! problem can be handed to any solver backend unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single labeled linear constraint: `sum(coeffs[k] * x[k]) {>=, <=} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Human-readable label, unique within a problem.
    pub label: String,
    /// Coefficients for each variable, indexed like the problem's variables.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>= or <=).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub fn geq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub fn leq(label: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            label: label.into(),
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Evaluate the left-hand side at `values`.
    #[must_use]
    pub fn lhs(&self, values: &[Decimal]) -> Decimal {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, v)| c * v)
            .sum()
    }

    /// Return `true` if `values` satisfy this constraint exactly.
    #[must_use]
    pub fn is_satisfied_by(&self, values: &[Decimal]) -> bool {
        self.sense.holds(self.lhs(values), self.rhs)
    }
}

/// Constraint sense (comparison operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    /// Greater than or equal (>=).
    GreaterEqual,
    /// Less than or equal (<=).
    LessEqual,
}

impl ConstraintSense {
    /// Compare `lhs` against `rhs` under this sense.
    #[must_use]
    pub fn holds(self, lhs: Decimal, rhs: Decimal) -> bool {
        match self {
            Self::GreaterEqual => lhs >= rhs,
            Self::LessEqual => lhs <= rhs,
        }
    }
}

impl fmt::Display for ConstraintSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreaterEqual => write!(f, ">="),
            Self::LessEqual => write!(f, "<="),
        }
    }
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_bounds_are_non_negative_and_open_above() {
        let bounds = VariableBounds::default();
        assert_eq!(bounds.lower, Some(Decimal::ZERO));
        assert_eq!(bounds.upper, None);
        assert_eq!(bounds, VariableBounds::non_negative());
    }

    #[test]
    fn constraint_evaluates_lhs() {
        let c = Constraint::leq("cap", vec![dec!(1), dec!(1), dec!(0)], dec!(10));
        assert_eq!(c.lhs(&[dec!(4), dec!(6), dec!(100)]), dec!(10));
        assert!(c.is_satisfied_by(&[dec!(4), dec!(6), dec!(100)]));
        assert!(!c.is_satisfied_by(&[dec!(5), dec!(6), dec!(0)]));
    }

    #[test]
    fn sense_display() {
        assert_eq!(ConstraintSense::GreaterEqual.to_string(), ">=");
        assert_eq!(ConstraintSense::LessEqual.to_string(), "<=");
    }

    #[test]
    fn cover_constraint_accepts_surplus() {
        let c = Constraint::geq("cover", vec![dec!(1), dec!(1)], dec!(4));
        assert!(c.is_satisfied_by(&[dec!(2), dec!(3)]));
        assert!(!c.is_satisfied_by(&[dec!(1), dec!(2)]));
    }
}
