//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::constraint::ConstraintSense;
use crate::domain::SolutionStatus;
use crate::error::Result;
use crate::port::outbound::solver::{IlpProblem, LpSolution, Solver};

/// HiGHS-based ILP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver;

impl HiGHSSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        solve_with_good_lp(problem)
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &IlpProblem) -> Result<LpSolution> {
    let lp = &problem.lp;
    let n = lp.num_vars();

    // HiGHS rejects empty models; every constraint reduces to 0 <sense> rhs.
    if n == 0 {
        let feasible = lp
            .constraints
            .iter()
            .all(|c| c.sense.holds(Decimal::ZERO, c.rhs));
        if !feasible {
            return Ok(LpSolution::without_values(SolutionStatus::Infeasible));
        }
        return Ok(LpSolution {
            values: vec![],
            objective: Some(Decimal::ZERO),
            status: SolutionStatus::Optimal,
        });
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for (i, bounds) in lp.bounds.iter().enumerate() {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }
        if problem.is_integer(i) {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    let objective: Expression = var_list
        .iter()
        .zip(lp.objective.iter())
        .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
        .sum();

    let mut model = vars.minimise(&objective).using(highs);

    for constr in &lp.constraints {
        let lhs: Expression = var_list
            .iter()
            .zip(constr.coefficients.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        model = match constr.sense {
            ConstraintSense::GreaterEqual => model.with(constraint!(lhs >= rhs)),
            ConstraintSense::LessEqual => model.with(constraint!(lhs <= rhs)),
        };
    }

    debug!(
        variables = n,
        constraints = lp.constraints.len(),
        integer = problem.integer_vars.len(),
        "Model handed to HiGHS"
    );

    match model.solve() {
        Ok(solution) => {
            let values: Vec<Option<Decimal>> = var_list
                .iter()
                .enumerate()
                .map(|(i, v)| to_decimal(solution.value(*v), problem.is_integer(i)))
                .collect();

            // Re-evaluate the objective exactly from the returned values
            let objective = values
                .iter()
                .zip(lp.objective.iter())
                .map(|(v, c)| v.map(|v| v * c))
                .sum::<Option<Decimal>>();

            Ok(LpSolution {
                values,
                objective,
                status: SolutionStatus::Optimal,
            })
        }
        Err(err) => Ok(LpSolution::without_values(status_for(&err))),
    }
}

/// Map a good_lp failure onto a solver status.
fn status_for(err: &ResolutionError) -> SolutionStatus {
    match err {
        ResolutionError::Infeasible => SolutionStatus::Infeasible,
        ResolutionError::Unbounded => SolutionStatus::Unbounded,
        ResolutionError::Other("NotSet") => SolutionStatus::NotSolved,
        other => {
            warn!(error = %other, "HiGHS stopped without a usable status");
            SolutionStatus::Undefined
        }
    }
}

/// Convert a raw solver value; integer variables are rounded to the nearest
/// whole number to drop solver tolerance noise.
fn to_decimal(raw: f64, integer: bool) -> Option<Decimal> {
    if !raw.is_finite() {
        return None;
    }
    let value = Decimal::try_from(raw).ok()?;
    Some(if integer { value.round() } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::{Constraint, VariableBounds};
    use crate::port::outbound::solver::LpProblem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
    }

    #[test]
    fn test_simple_ilp() {
        // Minimize: x + 2y
        // Subject to: x + y >= 3
        //            x <= 2
        //            x, y >= 0 integer
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![Decimal::ONE, dec!(2)],
            constraints: vec![
                Constraint::geq("cover", vec![Decimal::ONE, Decimal::ONE], dec!(3)),
                Constraint::leq("cap", vec![Decimal::ONE, Decimal::ZERO], dec!(2)),
            ],
            bounds: vec![VariableBounds::non_negative(); 2],
        };

        let solution = solver.solve_ilp(&IlpProblem::all_integer(lp)).unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.values, vec![Some(dec!(2)), Some(dec!(1))]);
        assert_eq!(solution.objective, Some(dec!(4)));
    }

    #[test]
    fn test_infeasible() {
        // x <= 1 and x >= 2
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![Decimal::ONE],
            constraints: vec![
                Constraint::leq("upper", vec![Decimal::ONE], Decimal::ONE),
                Constraint::geq("lower", vec![Decimal::ONE], dec!(2)),
            ],
            bounds: vec![VariableBounds::non_negative()],
        };

        let solution = solver.solve_ilp(&IlpProblem::all_integer(lp)).unwrap();

        assert_eq!(solution.status, SolutionStatus::Infeasible);
        assert!(solution.values.is_empty());
        assert_eq!(solution.objective, None);
    }

    #[test]
    fn test_bounded_variable() {
        // Minimize: -x with 0 <= x <= 7
        let solver = HiGHSSolver::new();

        let lp = LpProblem {
            objective: vec![-Decimal::ONE],
            constraints: vec![],
            bounds: vec![VariableBounds {
                lower: Some(Decimal::ZERO),
                upper: Some(dec!(7)),
            }],
        };

        let solution = solver.solve_ilp(&IlpProblem::all_integer(lp)).unwrap();

        assert!(solution.is_optimal());
        assert_eq!(solution.values, vec![Some(dec!(7))]);
        assert_eq!(solution.objective, Some(dec!(-7)));
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let problem = IlpProblem::all_integer(LpProblem::new(0));
        let solution = solver.solve_ilp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
        assert_eq!(solution.objective, Some(Decimal::ZERO));
    }

    #[test]
    fn test_empty_problem_with_unmet_constraint() {
        let solver = HiGHSSolver::new();
        let mut lp = LpProblem::new(0);
        lp.constraints
            .push(Constraint::geq("demand", vec![], Decimal::ONE));
        let solution = solver.solve_ilp(&IlpProblem::all_integer(lp)).unwrap();

        assert_eq!(solution.status, SolutionStatus::Infeasible);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ResolutionError::Infeasible),
            SolutionStatus::Infeasible
        );
        assert_eq!(
            status_for(&ResolutionError::Unbounded),
            SolutionStatus::Unbounded
        );
        assert_eq!(
            status_for(&ResolutionError::Other("NotSet")),
            SolutionStatus::NotSolved
        );
        assert_eq!(
            status_for(&ResolutionError::Other("SolveError")),
            SolutionStatus::Undefined
        );
    }

    #[test]
    fn test_value_conversion() {
        assert_eq!(to_decimal(34999.999999, true), Some(dec!(35000)));
        assert_eq!(to_decimal(2.5, false), Some(dec!(2.5)));
        assert_eq!(to_decimal(f64::NAN, true), None);
        assert_eq!(to_decimal(f64::INFINITY, false), None);
    }
}
