//! Randomized checks of solution validity on small networks.

use proptest::prelude::*;
use rust_decimal::Decimal;
use supplyplan::adapter::outbound::solver::HiGHSSolver;
use supplyplan::domain::{SolutionStatus, TransportNetwork, TransportProblem, VariableValue};

/// (costs, capacities, demands) with total capacity >= total demand.
fn covered_network() -> impl Strategy<Value = (Vec<Vec<u32>>, Vec<u32>, Vec<u32>)> {
    (1usize..=4, 1usize..=4).prop_flat_map(|(n_supply, n_demand)| {
        (
            prop::collection::vec(prop::collection::vec(0u32..20, n_demand), n_supply),
            prop::collection::vec(0u32..60, n_supply),
            prop::collection::vec(0u32..40, n_demand),
        )
            .prop_map(|(costs, mut capacities, demands)| {
                let supply: u32 = capacities.iter().sum();
                let demand: u32 = demands.iter().sum();
                if supply < demand {
                    capacities[0] += demand - supply;
                }
                (costs, capacities, demands)
            })
    })
}

fn decimals(values: &[u32]) -> Vec<Decimal> {
    values.iter().map(|&v| Decimal::from(v)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn covered_networks_solve_within_bounds((costs, capacities, demands) in covered_network()) {
        let network = TransportNetwork::try_new(
            costs.iter().map(|row| decimals(row)).collect(),
            decimals(&capacities),
            decimals(&demands),
        )
        .unwrap();

        let problem = TransportProblem::construct(network)
            .add_objective()
            .add_supply_constraints()
            .add_demand_constraints();
        let constraints = problem.to_ilp().lp.constraints;
        let result = problem.solve(&HiGHSSolver::new()).unwrap();

        prop_assert_eq!(result.status(), SolutionStatus::Optimal);

        let mut values = Vec::new();
        for value in result.values().unwrap() {
            let VariableValue::Resolved(v) = value else {
                return Err(TestCaseError::fail("missing value in optimal solution"));
            };
            prop_assert!(*v >= Decimal::ZERO);
            prop_assert_eq!(v.fract(), Decimal::ZERO);
            values.push(*v);
        }

        prop_assert_eq!(constraints.len(), capacities.len() + demands.len());
        for constraint in &constraints {
            prop_assert!(
                constraint.is_satisfied_by(&values),
                "{} violated: {} {} {}",
                constraint.label,
                constraint.lhs(&values),
                constraint.sense,
                constraint.rhs
            );
        }

        let shipped = result.supply_totals().unwrap();
        for (total, capacity) in shipped.iter().zip(&capacities) {
            prop_assert!(total.as_decimal().unwrap() <= Decimal::from(*capacity));
        }

        let received = result.demand_totals().unwrap();
        for (total, demand) in received.iter().zip(&demands) {
            prop_assert!(total.as_decimal().unwrap() >= Decimal::from(*demand));
        }

        // Serving every customer from its cheapest source, ignoring
        // capacities, bounds the optimum from below.
        let cheapest: Decimal = (0..demands.len())
            .map(|j| {
                let unit = costs.iter().map(|row| row[j]).min().unwrap_or(0);
                Decimal::from(unit) * Decimal::from(demands[j])
            })
            .sum();
        prop_assert!(result.objective().unwrap() >= cheapest);
    }
}
