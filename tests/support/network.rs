use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use supplyplan::domain::TransportNetwork;

pub fn sample_costs() -> Vec<Vec<Decimal>> {
    vec![
        vec![dec!(1), dec!(3), dec!(0.5), dec!(0.4)],
        vec![dec!(2.5), dec!(5), dec!(1.5), dec!(2.5)],
    ]
}

pub fn sample_demands() -> Vec<Decimal> {
    vec![dec!(35000), dec!(22000), dec!(18000), dec!(30000)]
}

/// Two warehouses, four customers.
pub fn sample_network() -> TransportNetwork {
    TransportNetwork::try_new(
        sample_costs(),
        vec![dec!(60000), dec!(80000)],
        sample_demands(),
    )
    .expect("sample network is well-formed")
}

/// Same routes and demands, capacity far below demand.
pub fn starved_network() -> TransportNetwork {
    TransportNetwork::try_new(sample_costs(), vec![dec!(1000), dec!(1000)], sample_demands())
        .expect("starved network is well-formed")
}

pub const SAMPLE_TOML: &str = r#"
name = "Supply-Demand-Problem"
costs = [[1, 3, 0.5, 0.4], [2.5, 5, 1.5, 2.5]]
capacities = [60000, 80000]
demands = [35000, 22000, 18000, 30000]
"#;

pub const STARVED_TOML: &str = r#"
costs = [[1, 3, 0.5, 0.4], [2.5, 5, 1.5, 2.5]]
capacities = [1000, 1000]
demands = [35000, 22000, 18000, 30000]
"#;

pub const MISMATCHED_TOML: &str = r#"
costs = [[1, 3, 0.5, 0.4], [2.5, 5, 1.5, 2.5]]
capacities = [60000, 80000]
demands = [35000, 22000, 18000]
"#;
