//! Sequential planning pipeline.
//!
//! Runs construct, objective, supply constraints, demand constraints, solve
//! and report for one network, in that order, on the calling thread.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::{Constrained, Report, SolveResult, TransportNetwork, TransportProblem};
use crate::error::Result;
use crate::port::outbound::solver::Solver;

/// Outcome of planning one network.
#[derive(Debug, Clone)]
pub struct Plan {
    pub result: SolveResult,
    pub report: Report,
}

/// Drives a network through the build/solve/report pipeline.
pub struct Planner {
    solver: Arc<dyn Solver>,
}

impl Planner {
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        Self { solver }
    }

    #[must_use]
    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// Build the fully constrained problem without solving it.
    #[must_use]
    pub fn build(&self, network: TransportNetwork) -> TransportProblem<Constrained> {
        if !network.is_balanced_or_surplus() {
            warn!(
                capacity = %network.total_capacity(),
                demand = %network.total_demand(),
                "Total capacity is below total demand; expect an infeasible result"
            );
        }

        let problem = TransportProblem::construct(network)
            .add_objective()
            .add_supply_constraints()
            .add_demand_constraints();

        debug!(
            variables = problem.variable_names().len(),
            constraints = problem.constraints().len(),
            "Problem built"
        );
        problem
    }

    /// Solve a built problem and produce its report.
    ///
    /// # Errors
    ///
    /// Propagates solver-internal failures. Non-optimal statuses are part of
    /// the returned [`Plan`].
    pub fn solve(&self, problem: TransportProblem<Constrained>) -> Result<Plan> {
        let started = Instant::now();
        let result = problem.solve(self.solver.as_ref())?;
        let report = Report::from_result(&result);

        info!(
            status = %result.status(),
            objective = ?result.objective(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Plan complete"
        );
        if result.unavailable_count() > 0 {
            warn!(
                count = result.unavailable_count(),
                "Some variable values were unavailable"
            );
        }

        Ok(Plan { result, report })
    }

    /// Build, solve and report in one call.
    ///
    /// # Errors
    ///
    /// See [`Planner::solve`].
    pub fn plan(&self, network: TransportNetwork) -> Result<Plan> {
        let problem = self.build(network);
        self.solve(problem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SolutionStatus;
    use crate::port::outbound::solver::{IlpProblem, LpSolution};
    use rust_decimal_macros::dec;

    struct NotSolvedSolver;

    impl Solver for NotSolvedSolver {
        fn name(&self) -> &'static str {
            "never"
        }

        fn solve_ilp(&self, _problem: &IlpProblem) -> Result<LpSolution> {
            Ok(LpSolution::without_values(SolutionStatus::NotSolved))
        }
    }

    fn network() -> TransportNetwork {
        TransportNetwork::try_new(vec![vec![dec!(5)]], vec![dec!(100)], vec![dec!(50)]).unwrap()
    }

    #[test]
    fn build_produces_full_constraint_set() {
        let planner = Planner::new(Arc::new(NotSolvedSolver));
        let problem = planner.build(network());
        assert_eq!(problem.variable_names(), ["X_11"]);
        assert_eq!(problem.constraints().len(), 2);
        assert_eq!(planner.solver_name(), "never");
    }

    #[test]
    fn plan_carries_non_optimal_status() {
        let planner = Planner::new(Arc::new(NotSolvedSolver));
        let plan = planner.plan(network()).unwrap();
        assert_eq!(plan.result.status(), SolutionStatus::NotSolved);
        assert_eq!(plan.report.status, SolutionStatus::NotSolved);
        assert!(plan.report.routes.is_empty());
    }
}
