//! Solve results for the transportation program.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::network::TransportNetwork;

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolutionStatus {
    /// Solver found an optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,

    /// The solver never produced a result.
    NotSolved,

    /// The solver stopped for a reason that maps to none of the above.
    Undefined,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Optimal => write!(f, "Optimal"),
            Self::Infeasible => write!(f, "Infeasible"),
            Self::Unbounded => write!(f, "Unbounded"),
            Self::NotSolved => write!(f, "Not Solved"),
            Self::Undefined => write!(f, "Undefined"),
        }
    }
}

/// Value of one decision variable after an optimal solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// The solver returned a usable value.
    Resolved(Decimal),
    /// The solver reported optimal but had no usable value for this variable.
    Unavailable,
}

impl VariableValue {
    #[must_use]
    pub const fn as_decimal(self) -> Option<Decimal> {
        match self {
            Self::Resolved(v) => Some(v),
            Self::Unavailable => None,
        }
    }
}

impl From<Option<Decimal>> for VariableValue {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::Unavailable, Self::Resolved)
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(v) => write!(f, "{}", v.normalize()),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Outcome of solving one transportation problem.
///
/// Immutable once produced. Objective and variable values exist only when
/// the status is [`SolutionStatus::Optimal`].
#[derive(Debug, Clone)]
pub struct SolveResult {
    network: TransportNetwork,
    variable_names: Vec<String>,
    status: SolutionStatus,
    objective: Option<Decimal>,
    values: Option<Vec<VariableValue>>,
}

impl SolveResult {
    /// Assemble a result. Values are dropped unless `status` is optimal.
    ///
    /// Callers check that an optimal result carries exactly one value per
    /// variable name.
    #[must_use]
    pub(crate) fn new(
        network: TransportNetwork,
        variable_names: Vec<String>,
        status: SolutionStatus,
        objective: Option<Decimal>,
        values: Vec<VariableValue>,
    ) -> Self {
        let optimal = status == SolutionStatus::Optimal;
        debug_assert!(!optimal || values.len() == variable_names.len());
        Self {
            network,
            variable_names,
            status,
            objective: objective.filter(|_| optimal),
            values: optimal.then_some(values),
        }
    }

    #[must_use]
    pub const fn status(&self) -> SolutionStatus {
        self.status
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Total shipping cost; `None` unless optimal.
    #[must_use]
    pub const fn objective(&self) -> Option<Decimal> {
        self.objective
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

    /// All variable values in row-major route order; `None` unless optimal.
    #[must_use]
    pub fn values(&self) -> Option<&[VariableValue]> {
        self.values.as_deref()
    }

    /// Value shipped on route `(i, j)`; `None` unless optimal.
    #[must_use]
    pub fn value(&self, i: usize, j: usize) -> Option<VariableValue> {
        if i >= self.network.n_supply() || j >= self.network.n_demand() {
            return None;
        }
        let k = self.network.route_index(i, j);
        self.values.as_ref().map(|values| values[k])
    }

    /// Name and value of every variable; empty unless optimal.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, VariableValue)> + '_ {
        self.variable_names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().flatten().copied())
    }

    /// Outbound total per supply node (`sum_j x_ij`).
    ///
    /// A node with any unavailable route value has an unavailable total.
    #[must_use]
    pub fn supply_totals(&self) -> Option<Vec<VariableValue>> {
        self.values.as_ref()?;
        let totals = (0..self.network.n_supply())
            .map(|i| self.total_over((0..self.network.n_demand()).map(|j| (i, j))))
            .collect();
        Some(totals)
    }

    /// Inbound total per demand node (`sum_i x_ij`).
    ///
    /// A node with any unavailable route value has an unavailable total.
    #[must_use]
    pub fn demand_totals(&self) -> Option<Vec<VariableValue>> {
        self.values.as_ref()?;
        let totals = (0..self.network.n_demand())
            .map(|j| self.total_over((0..self.network.n_supply()).map(|i| (i, j))))
            .collect();
        Some(totals)
    }

    fn total_over(&self, routes: impl Iterator<Item = (usize, usize)>) -> VariableValue {
        routes
            .map(|(i, j)| self.value(i, j).and_then(VariableValue::as_decimal))
            .sum::<Option<Decimal>>()
            .into()
    }

    /// Indices of supply nodes known to ship exactly their capacity.
    #[must_use]
    pub fn binding_supply(&self) -> Vec<usize> {
        let Some(totals) = self.supply_totals() else {
            return Vec::new();
        };
        totals
            .iter()
            .zip(self.network.supply())
            .enumerate()
            .filter(|(_, (total, node))| total.as_decimal() == Some(node.capacity))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of variables whose value the solver could not provide.
    #[must_use]
    pub fn unavailable_count(&self) -> usize {
        self.values
            .iter()
            .flatten()
            .filter(|v| **v == VariableValue::Unavailable)
            .count()
    }
}
