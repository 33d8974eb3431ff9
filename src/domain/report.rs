//! Solution reporting.
//!
//! A [`Report`] is the structured record of one solve. It serializes to JSON
//! for scripting and renders to plain text for people.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::warn;

use super::solution::{SolutionStatus, SolveResult, VariableValue};

/// One decision variable in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteLine {
    pub name: String,
    pub from: String,
    pub to: String,
    pub value: VariableValue,
}

/// Aggregate for one node: shipped quantity against its bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeTotal {
    pub name: String,
    /// Unavailable when any route into or out of the node is.
    pub total: VariableValue,
    /// Capacity for supply nodes, demand for demand nodes.
    pub bound: Decimal,
}

impl NodeTotal {
    /// `bound - total` for supply (unused capacity), `total - bound` for
    /// demand (over-supply). Unavailable with the total.
    #[must_use]
    pub fn slack(&self, supply: bool) -> VariableValue {
        self.total
            .as_decimal()
            .map(|total| {
                if supply {
                    self.bound - total
                } else {
                    total - self.bound
                }
            })
            .into()
    }
}

/// Structured report of a solve.
///
/// Numeric sections are empty when the status is not optimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub status: SolutionStatus,
    pub total_cost: Option<Decimal>,
    pub routes: Vec<RouteLine>,
    pub supply_totals: Vec<NodeTotal>,
    pub demand_totals: Vec<NodeTotal>,
}

impl Report {
    /// Build a report from a solve result.
    ///
    /// Unavailable variable values are logged and kept as placeholders, and
    /// the node totals they feed are unavailable too. They never stop the
    /// rest of the report.
    #[must_use]
    pub fn from_result(result: &SolveResult) -> Self {
        if !result.is_optimal() {
            return Self {
                status: result.status(),
                total_cost: None,
                routes: Vec::new(),
                supply_totals: Vec::new(),
                demand_totals: Vec::new(),
            };
        }

        let network = result.network();
        let n_demand = network.n_demand();
        let routes: Vec<RouteLine> = result
            .assignments()
            .enumerate()
            .map(|(k, (name, value))| {
                if value == VariableValue::Unavailable {
                    warn!(variable = name, "Solver returned no value for variable");
                }
                RouteLine {
                    name: name.to_string(),
                    from: network.supply()[k / n_demand].name.clone(),
                    to: network.demand()[k % n_demand].name.clone(),
                    value,
                }
            })
            .collect();

        let supply_totals = result
            .supply_totals()
            .unwrap_or_default()
            .into_iter()
            .zip(network.supply())
            .map(|(total, node)| NodeTotal {
                name: node.name.clone(),
                total,
                bound: node.capacity,
            })
            .collect();

        let demand_totals = result
            .demand_totals()
            .unwrap_or_default()
            .into_iter()
            .zip(network.demand())
            .map(|(total, node)| NodeTotal {
                name: node.name.clone(),
                total,
                bound: node.demand,
            })
            .collect();

        Self {
            status: result.status(),
            total_cost: result.objective(),
            routes,
            supply_totals,
            demand_totals,
        }
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Routes with a non-zero (or unavailable) value.
    pub fn active_routes(&self) -> impl Iterator<Item = &RouteLine> {
        self.routes
            .iter()
            .filter(|r| r.value.as_decimal().map_or(true, |v| !v.is_zero()))
    }

    /// Plain-text rendering.
    ///
    /// With `show_zero_routes` false, routes shipping nothing are omitted.
    #[must_use]
    pub fn render_text(&self, show_zero_routes: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Status: {}", self.status);
        if !self.is_optimal() {
            return out;
        }

        match self.total_cost {
            Some(cost) => {
                let _ = writeln!(out, "Total Cost: {}", cost.normalize());
            }
            None => {
                let _ = writeln!(out, "Total Cost: unavailable");
            }
        }

        out.push_str("\nAllocations:\n");
        let routes: Vec<&RouteLine> = if show_zero_routes {
            self.routes.iter().collect()
        } else {
            self.active_routes().collect()
        };
        for route in routes {
            let _ = writeln!(
                out,
                "  {} = {}  ({} -> {})",
                route.name, route.value, route.from, route.to
            );
        }

        out.push_str("\nShipped per supply node:\n");
        for node in &self.supply_totals {
            let _ = writeln!(
                out,
                "  {}: {} of {} (unused {})",
                node.name,
                node.total,
                node.bound.normalize(),
                node.slack(true)
            );
        }

        out.push_str("\nReceived per demand node:\n");
        for node in &self.demand_totals {
            let _ = writeln!(
                out,
                "  {}: {} of {}",
                node.name,
                node.total,
                node.bound.normalize()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransportNetwork;
    use rust_decimal_macros::dec;

    fn result(status: SolutionStatus, values: Vec<VariableValue>) -> SolveResult {
        let network = TransportNetwork::try_new(
            vec![vec![dec!(1), dec!(2)], vec![dec!(3), dec!(4)]],
            vec![dec!(10), dec!(10)],
            vec![dec!(5), dec!(4)],
        )
        .unwrap();
        let names = ["X_11", "X_12", "X_21", "X_22"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        SolveResult::new(network, names, status, Some(dec!(13)), values)
    }

    fn resolved(values: [i64; 4]) -> Vec<VariableValue> {
        values
            .into_iter()
            .map(|v| VariableValue::Resolved(Decimal::from(v)))
            .collect()
    }

    #[test]
    fn optimal_report_has_routes_and_totals() {
        let report = Report::from_result(&result(SolutionStatus::Optimal, resolved([5, 4, 0, 0])));

        assert!(report.is_optimal());
        assert_eq!(report.total_cost, Some(dec!(13)));
        assert_eq!(report.routes.len(), 4);
        assert_eq!(report.routes[1].from, "Warehouse 1");
        assert_eq!(report.routes[1].to, "Customer 2");
        assert_eq!(report.supply_totals[0].total, VariableValue::Resolved(dec!(9)));
        assert_eq!(report.supply_totals[0].slack(true), VariableValue::Resolved(dec!(1)));
        assert_eq!(report.demand_totals[1].total, VariableValue::Resolved(dec!(4)));
        assert_eq!(report.demand_totals[1].slack(false), VariableValue::Resolved(dec!(0)));
        assert_eq!(report.active_routes().count(), 2);
    }

    #[test]
    fn text_report_lists_values() {
        let report = Report::from_result(&result(SolutionStatus::Optimal, resolved([5, 4, 0, 0])));
        let text = report.render_text(true);

        assert!(text.contains("Status: Optimal"));
        assert!(text.contains("Total Cost: 13"));
        assert!(text.contains("X_11 = 5"));
        assert!(text.contains("X_22 = 0"));
        assert!(text.contains("Warehouse 1: 9 of 10 (unused 1)"));

        let compact = report.render_text(false);
        assert!(!compact.contains("X_22"));
    }

    #[test]
    fn non_optimal_report_has_status_only() {
        let report = Report::from_result(&result(SolutionStatus::Infeasible, vec![]));
        assert_eq!(report.total_cost, None);
        assert!(report.routes.is_empty());
        assert!(report.supply_totals.is_empty());
        assert_eq!(report.render_text(true), "Status: Infeasible\n");
    }

    #[test]
    fn unavailable_value_gets_placeholder() {
        let mut values = resolved([5, 4, 0, 0]);
        values[2] = VariableValue::Unavailable;
        let report = Report::from_result(&result(SolutionStatus::Optimal, values));
        let text = report.render_text(false);

        assert!(text.contains("X_21 = unavailable"));
        assert!(text.contains("X_12 = 4"));
        assert_eq!(report.supply_totals[1].total, VariableValue::Unavailable);
        assert_eq!(report.demand_totals[0].total, VariableValue::Unavailable);
        assert_eq!(report.supply_totals[0].total, VariableValue::Resolved(dec!(9)));
        assert!(text.contains("Warehouse 2: unavailable of 10 (unused unavailable)"));
        assert!(text.contains("Customer 1: unavailable of 5"));
        assert!(text.contains("Customer 2: 4 of 4"));
    }

    #[test]
    fn serializes_to_json() {
        let mut values = resolved([5, 4, 0, 0]);
        values[3] = VariableValue::Unavailable;
        let report = Report::from_result(&result(SolutionStatus::Optimal, values));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "Optimal");
        assert_eq!(json["routes"][0]["name"], "X_11");
        assert!(json["routes"][3]["value"].is_null());
        assert!(json["supply_totals"][1]["total"].is_null());
        assert_eq!(json["supply_totals"].as_array().map(Vec::len), Some(2));
    }
}
