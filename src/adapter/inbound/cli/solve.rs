//! Handler for the `solve` command.

use std::process::ExitCode;

use serde_json::json;

use super::command::SolveArgs;
use super::output;
use crate::adapter::inbound::file::ProblemFile;
use crate::application::Planner;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::build_solver;

/// Exit code for a solve that finished without an optimal solution.
pub const EXIT_NOT_OPTIMAL: u8 = 2;

/// Execute `solve`.
pub fn execute(args: &SolveArgs, config: &Config) -> Result<ExitCode> {
    let file = ProblemFile::load(&args.problem)?;
    let name = file.display_name().to_string();
    let network = file.into_network()?;

    let planner = Planner::new(build_solver(&config.solver));
    let problem = planner.build(network);

    let model = (args.show_model || config.report.show_model).then(|| problem.describe());
    if let Some(listing) = &model {
        output::section("Model");
        output::lines(listing);
    }

    let plan = planner.solve(problem)?;
    let report = &plan.report;

    if output::is_json() {
        let mut payload = json!({
            "command": "solve",
            "problem": name,
            "solver": planner.solver_name(),
            "report": serde_json::to_value(report)?,
        });
        if let Some(listing) = model {
            payload["model"] = json!(listing);
        }
        output::json_output(&payload);
    } else {
        output::header(env!("CARGO_PKG_VERSION"));
        output::section(&name);
        output::field("Solver", planner.solver_name());
        output::field("Routes", plan.result.variable_names().len());

        output::section("Result");
        let show_zero = config.report.show_zero_routes && !args.hide_zero;
        output::block(&report.render_text(show_zero));

        let binding = plan.result.binding_supply();
        if !binding.is_empty() {
            let names: Vec<&str> = binding
                .iter()
                .map(|&i| plan.result.network().supply()[i].name.as_str())
                .collect();
            output::note(&format!("At capacity: {}", names.join(", ")));
        }

        if report.is_optimal() {
            output::success("Optimal allocation found");
        } else {
            output::warning(&format!("Solver status: {}", report.status));
        }
    }

    Ok(if report.is_optimal() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NOT_OPTIMAL)
    })
}
