//! Validated transportation network: supply nodes, demand nodes and routes.
//!
//! A [`TransportNetwork`] is the only way into the problem builder, so every
//! shape and sign invariant is checked exactly once, here.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;

/// A supply node (warehouse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplyNode {
    pub name: String,
    /// Hard upper bound on total outbound quantity.
    pub capacity: Decimal,
}

/// A demand node (customer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandNode {
    pub name: String,
    /// Hard lower bound on total inbound quantity.
    pub demand: Decimal,
}

/// Complete bipartite supply x demand network with per-route unit costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransportNetwork {
    supply: Vec<SupplyNode>,
    demand: Vec<DemandNode>,
    /// Row-major `n_supply x n_demand` unit costs.
    costs: Vec<Decimal>,
}

impl TransportNetwork {
    /// Build a network from a cost matrix and the capacity/demand vectors.
    ///
    /// Nodes get default names (`Warehouse 1`, `Customer 1`, ...).
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyNetwork`] if either side has no nodes.
    /// - [`DomainError::ShapeMismatch`] if the matrix is not
    ///   `capacities.len() x demands.len()`.
    /// - [`DomainError::NegativeValue`] for any negative entry.
    pub fn try_new(
        costs: Vec<Vec<Decimal>>,
        capacities: Vec<Decimal>,
        demands: Vec<Decimal>,
    ) -> Result<Self, DomainError> {
        if capacities.is_empty() {
            return Err(DomainError::EmptyNetwork { side: "supply" });
        }
        if demands.is_empty() {
            return Err(DomainError::EmptyNetwork { side: "demand" });
        }
        if costs.len() != capacities.len() {
            return Err(DomainError::ShapeMismatch {
                what: "cost matrix rows".into(),
                expected: capacities.len(),
                actual: costs.len(),
            });
        }
        for (i, row) in costs.iter().enumerate() {
            if row.len() != demands.len() {
                return Err(DomainError::ShapeMismatch {
                    what: format!("cost matrix row {i}"),
                    expected: demands.len(),
                    actual: row.len(),
                });
            }
        }

        let costs: Vec<Decimal> = costs.into_iter().flatten().collect();
        check_non_negative("costs", &costs)?;
        check_non_negative("capacities", &capacities)?;
        check_non_negative("demands", &demands)?;

        let supply = capacities
            .into_iter()
            .enumerate()
            .map(|(i, capacity)| SupplyNode {
                name: format!("Warehouse {}", i + 1),
                capacity,
            })
            .collect();
        let demand = demands
            .into_iter()
            .enumerate()
            .map(|(j, demand)| DemandNode {
                name: format!("Customer {}", j + 1),
                demand,
            })
            .collect();

        Ok(Self {
            supply,
            demand,
            costs,
        })
    }

    /// Replace the default supply node names.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ShapeMismatch`] if the name count differs from
    /// the number of supply nodes.
    pub fn with_supply_names(mut self, names: Vec<String>) -> Result<Self, DomainError> {
        if names.len() != self.supply.len() {
            return Err(DomainError::ShapeMismatch {
                what: "supply names".into(),
                expected: self.supply.len(),
                actual: names.len(),
            });
        }
        for (node, name) in self.supply.iter_mut().zip(names) {
            node.name = name;
        }
        Ok(self)
    }

    /// Replace the default demand node names.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ShapeMismatch`] if the name count differs from
    /// the number of demand nodes.
    pub fn with_demand_names(mut self, names: Vec<String>) -> Result<Self, DomainError> {
        if names.len() != self.demand.len() {
            return Err(DomainError::ShapeMismatch {
                what: "demand names".into(),
                expected: self.demand.len(),
                actual: names.len(),
            });
        }
        for (node, name) in self.demand.iter_mut().zip(names) {
            node.name = name;
        }
        Ok(self)
    }

    #[must_use]
    pub fn n_supply(&self) -> usize {
        self.supply.len()
    }

    #[must_use]
    pub fn n_demand(&self) -> usize {
        self.demand.len()
    }

    #[must_use]
    pub fn supply(&self) -> &[SupplyNode] {
        &self.supply
    }

    #[must_use]
    pub fn demand(&self) -> &[DemandNode] {
        &self.demand
    }

    /// Unit cost on route `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of range.
    #[must_use]
    pub fn cost(&self, i: usize, j: usize) -> Decimal {
        assert!(j < self.n_demand(), "demand index {j} out of range");
        self.costs[self.route_index(i, j)]
    }

    /// Row-major unit costs, one per route.
    #[must_use]
    pub fn costs(&self) -> &[Decimal] {
        &self.costs
    }

    /// Flat row-major index of route `(i, j)`.
    #[must_use]
    pub const fn route_index(&self, i: usize, j: usize) -> usize {
        i * self.demand.len() + j
    }

    /// Number of routes (decision variables).
    #[must_use]
    pub fn n_routes(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn total_capacity(&self) -> Decimal {
        self.supply.iter().map(|s| s.capacity).sum()
    }

    #[must_use]
    pub fn total_demand(&self) -> Decimal {
        self.demand.iter().map(|d| d.demand).sum()
    }

    /// Necessary feasibility condition: total capacity covers total demand.
    ///
    /// The solver remains the authority; this only pre-diagnoses the obvious
    /// infeasible case.
    #[must_use]
    pub fn is_balanced_or_surplus(&self) -> bool {
        self.total_capacity() >= self.total_demand()
    }
}

fn check_non_negative(what: &'static str, values: &[Decimal]) -> Result<(), DomainError> {
    match values.iter().position(|v| *v < Decimal::ZERO) {
        Some(index) => Err(DomainError::NegativeValue {
            what,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
