//! Report rendering options.

use serde::{Deserialize, Serialize};

/// Report configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// List routes that ship nothing.
    pub show_zero_routes: bool,

    /// Print the LP model before solving.
    pub show_model: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_zero_routes: true,
            show_model: false,
        }
    }
}
