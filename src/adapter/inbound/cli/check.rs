//! Handler for the `check` command.

use std::process::ExitCode;

use serde_json::json;

use super::command::ProblemArg;
use super::output;
use crate::adapter::inbound::file::ProblemFile;
use crate::error::Result;

/// Execute `check`: validate shapes and signs, report totals, do not solve.
pub fn execute(args: &ProblemArg) -> Result<ExitCode> {
    let file = ProblemFile::load(&args.problem)?;
    let name = file.display_name().to_string();
    let network = file.into_network()?;

    let capacity = network.total_capacity();
    let demand = network.total_demand();
    let covered = network.is_balanced_or_surplus();

    if output::is_json() {
        output::json_output(&json!({
            "command": "check",
            "problem": name,
            "supply_nodes": network.n_supply(),
            "demand_nodes": network.n_demand(),
            "routes": network.n_routes(),
            "total_capacity": capacity,
            "total_demand": demand,
            "capacity_covers_demand": covered,
        }));
        return Ok(ExitCode::SUCCESS);
    }

    output::section(&name);
    output::field("Supply nodes", network.n_supply());
    output::field("Demand nodes", network.n_demand());
    output::field("Routes", network.n_routes());
    output::field("Capacity", capacity.normalize());
    output::field("Demand", demand.normalize());

    if covered {
        output::success("Problem is well-formed");
    } else {
        output::warning(&format!(
            "Total capacity {} is below total demand {}; the solver will report Infeasible",
            capacity.normalize(),
            demand.normalize()
        ));
    }
    Ok(ExitCode::SUCCESS)
}
