//! Handler for the `config` command group.

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Execute `config show`.
pub fn execute_show(config: &Config) -> Result<()> {
    if output::is_json() {
        output::json_output(&json!({
            "command": "config.show",
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Solver");
    output::field("Backend", config.solver.backend);

    output::section("Report");
    output::field("Zero routes", config.report.show_zero_routes);
    output::field("Show model", config.report.show_model);
    Ok(())
}
