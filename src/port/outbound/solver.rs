//! Solver port for integer linear programming.
//!
//! Defines the boundary between the transportation formulation and whatever
//! LP/MIP backend actually solves it. The formulation never depends on a
//! concrete backend; adapters implement [`Solver`].
//!
//! # Overview
//!
//! - [`Solver`]: Core ILP solver interface
//! - [`LpProblem`] / [`IlpProblem`]: Problem definitions
//! - [`LpSolution`]: Solution representation

use rust_decimal::Decimal;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::domain::SolutionStatus;
use crate::error::Result;

/// Integer linear programming solver.
///
/// Implementations wrap specific solver backends (HiGHS, CBC, GLPK, etc.)
/// and provide a unified interface for the transportation program.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so independent
/// problems can be solved from separate threads.
///
/// # Implementation Notes
///
/// - Report infeasible or unbounded problems through [`SolutionStatus`],
///   not through `Err`
/// - Leave a value as `None` when the backend cannot provide it
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Solve an integer linear programming problem.
    ///
    /// Minimizes the objective function with integer constraints on the
    /// variables listed in [`IlpProblem::integer_vars`].
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend fails internally in a way that
    /// cannot be expressed as a [`SolutionStatus`].
    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    ///
    /// The solver minimizes `c^T * x` where `c` is this vector.
    pub objective: Vec<Decimal>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with the specified number of variables.
    ///
    /// Initializes all objective coefficients to zero and all variable bounds
    /// to their defaults (non-negative, unbounded above).
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Integer linear programming problem definition.
///
/// Extends a linear programming problem with integer constraints on specified
/// variables.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Underlying linear programming problem.
    pub lp: LpProblem,

    /// Indices of variables constrained to integer values.
    ///
    /// Variables not in this list are continuous (relaxed).
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create an ILP with every variable constrained to integer values.
    #[must_use]
    pub fn all_integer(lp: LpProblem) -> Self {
        let integer_vars: Vec<usize> = (0..lp.num_vars()).collect();
        Self { lp, integer_vars }
    }

    /// Return `true` if variable `index` must take an integer value.
    #[must_use]
    pub fn is_integer(&self, index: usize) -> bool {
        self.integer_vars.contains(&index)
    }
}

/// Solution to an integer programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable, `None` where the backend had none.
    ///
    /// Empty unless `status` is [`SolutionStatus::Optimal`].
    pub values: Vec<Option<Decimal>>,

    /// Objective value; `None` unless optimal with every value present.
    pub objective: Option<Decimal>,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// A solution carrying only a non-optimal status.
    #[must_use]
    pub const fn without_values(status: SolutionStatus) -> Self {
        Self {
            values: Vec::new(),
            objective: None,
            status,
        }
    }

    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_problem_has_default_bounds() {
        let lp = LpProblem::new(3);
        assert_eq!(lp.num_vars(), 3);
        assert!(lp.constraints.is_empty());
        assert!(lp.bounds.iter().all(|b| *b == VariableBounds::default()));
    }

    #[test]
    fn all_integer_marks_every_variable() {
        let ilp = IlpProblem::all_integer(LpProblem::new(4));
        assert_eq!(ilp.integer_vars, vec![0, 1, 2, 3]);
        assert!(ilp.is_integer(3));
        assert!(!ilp.is_integer(4));
    }

    #[test]
    fn non_optimal_solution_has_no_values() {
        let solution = LpSolution::without_values(SolutionStatus::Infeasible);
        assert!(!solution.is_optimal());
        assert!(solution.values.is_empty());
        assert_eq!(solution.objective, None);
    }
}
