//! Staged builder for the transportation integer program.
//!
//! A [`TransportProblem`] moves strictly forward through its stages:
//!
//! ```text
//! construct -> add_objective -> add_supply_constraints -> add_demand_constraints -> solve
//! ```
//!
//! Each step consumes the previous stage, so a problem cannot be solved
//! before it is fully constrained, and cannot be reused after solving.
//!
//! # Example
//!
//! ```no_run
//! use supplyplan::adapter::outbound::solver::HiGHSSolver;
//! use supplyplan::domain::{TransportNetwork, TransportProblem};
//! use rust_decimal::Decimal;
//!
//! let network = TransportNetwork::try_new(
//!     vec![vec![Decimal::from(5)]],
//!     vec![Decimal::from(100)],
//!     vec![Decimal::from(50)],
//! )?;
//! let result = TransportProblem::construct(network)
//!     .add_objective()
//!     .add_supply_constraints()
//!     .add_demand_constraints()
//!     .solve(&HiGHSSolver::new())?;
//! assert!(result.is_optimal());
//! # Ok::<(), supplyplan::error::Error>(())
//! ```

use rust_decimal::Decimal;
use std::fmt::Write as _;
use std::marker::PhantomData;
use tracing::{debug, info};

use super::constraint::{Constraint, VariableBounds};
use super::network::TransportNetwork;
use super::solution::{SolutionStatus, SolveResult, VariableValue};
use crate::error::{Error, Result};
use crate::port::outbound::solver::{IlpProblem, LpProblem, Solver};

/// Decision variables created, nothing else.
#[derive(Debug)]
pub enum Variables {}

/// Objective set.
#[derive(Debug)]
pub enum Objective {}

/// Objective and supply constraints set.
#[derive(Debug)]
pub enum SupplyBound {}

/// Fully constrained and ready to solve.
#[derive(Debug)]
pub enum Constrained {}

/// Transportation problem at build stage `S`.
#[derive(Debug)]
pub struct TransportProblem<S> {
    network: TransportNetwork,
    variable_names: Vec<String>,
    lp: LpProblem,
    stage: PhantomData<S>,
}

/// Deterministic name of `x_ij` (0-indexed inputs, 1-indexed name).
///
/// Indices are concatenated (`X_11`) while both sides have at most nine
/// nodes, and separated (`X_1_10`) otherwise so names stay unique.
#[must_use]
pub fn variable_name(i: usize, j: usize, n_supply: usize, n_demand: usize) -> String {
    if n_supply <= 9 && n_demand <= 9 {
        format!("X_{}{}", i + 1, j + 1)
    } else {
        format!("X_{}_{}", i + 1, j + 1)
    }
}

impl<S> TransportProblem<S> {
    fn advance<T>(self) -> TransportProblem<T> {
        TransportProblem {
            network: self.network,
            variable_names: self.variable_names,
            lp: self.lp,
            stage: PhantomData,
        }
    }

    #[must_use]
    pub const fn network(&self) -> &TransportNetwork {
        &self.network
    }

    /// Variable names in row-major route order.
    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Constraints added so far, in insertion order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.lp.constraints
    }

    /// Objective coefficients (all zero until the objective is added).
    #[must_use]
    pub fn objective(&self) -> &[Decimal] {
        &self.lp.objective
    }

    /// Variable bounds, one per route.
    #[must_use]
    pub fn bounds(&self) -> &[VariableBounds] {
        &self.lp.bounds
    }

    /// Human-readable LP listing of the model built so far.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::from("MINIMIZE\n");
        let _ = writeln!(out, "{}", self.linear_expr(&self.lp.objective));
        out.push_str("SUBJECT TO\n");
        for c in &self.lp.constraints {
            let _ = writeln!(
                out,
                "{}: {} {} {}",
                c.label,
                self.linear_expr(&c.coefficients),
                c.sense,
                c.rhs.normalize()
            );
        }
        out.push_str("VARIABLES\n");
        for name in &self.variable_names {
            let _ = writeln!(out, "0 <= {name} Integer");
        }
        out
    }

    fn linear_expr(&self, coefficients: &[Decimal]) -> String {
        let terms: Vec<String> = coefficients
            .iter()
            .zip(&self.variable_names)
            .filter(|(c, _)| !c.is_zero())
            .map(|(c, name)| format!("{}*{name}", c.normalize()))
            .collect();
        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }

    fn unit_row(&self, selected: impl Fn(usize, usize) -> bool) -> Vec<Decimal> {
        let n_demand = self.network.n_demand();
        (0..self.network.n_routes())
            .map(|k| {
                if selected(k / n_demand, k % n_demand) {
                    Decimal::ONE
                } else {
                    Decimal::ZERO
                }
            })
            .collect()
    }
}

impl TransportProblem<Variables> {
    /// Create one integer variable `x_ij >= 0` per route, row-major.
    #[must_use]
    pub fn construct(network: TransportNetwork) -> Self {
        let (n_supply, n_demand) = (network.n_supply(), network.n_demand());
        let variable_names: Vec<String> = (0..n_supply)
            .flat_map(|i| (0..n_demand).map(move |j| variable_name(i, j, n_supply, n_demand)))
            .collect();
        let lp = LpProblem::new(variable_names.len());

        debug!(
            supply = n_supply,
            demand = n_demand,
            variables = variable_names.len(),
            "Decision variables created"
        );

        Self {
            network,
            variable_names,
            lp,
            stage: PhantomData,
        }
    }

    /// Minimize `sum cost_ij * x_ij`.
    #[must_use]
    pub fn add_objective(mut self) -> TransportProblem<Objective> {
        self.lp.objective = self.network.costs().to_vec();
        self.advance()
    }
}

impl TransportProblem<Objective> {
    /// Add `sum_j x_ij <= capacity_i` for every supply node.
    #[must_use]
    pub fn add_supply_constraints(mut self) -> TransportProblem<SupplyBound> {
        for (i, node) in self.network.supply().iter().enumerate() {
            let row = self.unit_row(|row, _| row == i);
            self.lp.constraints.push(Constraint::leq(
                format!("Supply Constraint {i}"),
                row,
                node.capacity,
            ));
        }
        self.advance()
    }
}

impl TransportProblem<SupplyBound> {
    /// Add `sum_i x_ij >= demand_j` for every demand node.
    #[must_use]
    pub fn add_demand_constraints(mut self) -> TransportProblem<Constrained> {
        for (j, node) in self.network.demand().iter().enumerate() {
            let row = self.unit_row(|_, col| col == j);
            self.lp.constraints.push(Constraint::geq(
                format!("Demand Constraint {j}"),
                row,
                node.demand,
            ));
        }
        self.advance()
    }
}

impl TransportProblem<Constrained> {
    /// The integer program handed to the solver.
    #[must_use]
    pub fn to_ilp(&self) -> IlpProblem {
        IlpProblem::all_integer(self.lp.clone())
    }

    /// Solve with `solver`, consuming the problem.
    ///
    /// A non-optimal status is returned as data in the [`SolveResult`].
    ///
    /// # Errors
    ///
    /// Returns an error if the solver fails internally, or returns a value
    /// vector whose length does not match the variable count.
    pub fn solve(self, solver: &dyn Solver) -> Result<SolveResult> {
        info!(
            solver = solver.name(),
            variables = self.lp.num_vars(),
            constraints = self.lp.constraints.len(),
            "Solving transportation problem"
        );

        let solution = solver.solve_ilp(&self.to_ilp())?;

        if solution.status != SolutionStatus::Optimal {
            info!(status = %solution.status, "Solver finished without an optimal solution");
            return Ok(SolveResult::new(
                self.network,
                self.variable_names,
                solution.status,
                None,
                Vec::new(),
            ));
        }

        if solution.values.len() != self.variable_names.len() {
            return Err(Error::Solver(format!(
                "expected {} values, solver returned {}",
                self.variable_names.len(),
                solution.values.len()
            )));
        }

        let values: Vec<VariableValue> = solution
            .values
            .into_iter()
            .map(VariableValue::from)
            .collect();

        info!(
            status = %solution.status,
            objective = ?solution.objective,
            "Solver finished"
        );

        Ok(SolveResult::new(
            self.network,
            self.variable_names,
            solution.status,
            solution.objective,
            values,
        ))
    }
}
