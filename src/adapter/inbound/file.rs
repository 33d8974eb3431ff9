//! TOML problem files.
//!
//! ```toml
//! name = "Supply-Demand-Problem"
//! costs = [[1, 3, 0.5, 0.4], [2.5, 5, 1.5, 2.5]]
//! capacities = [60000, 80000]
//! demands = [35000, 22000, 18000, 30000]
//! supply_names = ["Warehouse 1", "Warehouse 2"]
//! ```

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

use crate::domain::TransportNetwork;
use crate::error::{ConfigError, Result};

/// Raw problem tables as read from disk; not yet validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
    /// Optional problem name, used only for display.
    #[serde(default)]
    pub name: Option<String>,

    /// Unit cost per route, one row per supply node.
    pub costs: Vec<Vec<Decimal>>,

    pub capacities: Vec<Decimal>,

    pub demands: Vec<Decimal>,

    #[serde(default)]
    pub supply_names: Option<Vec<String>>,

    #[serde(default)]
    pub demand_names: Option<Vec<String>>,
}

impl ProblemFile {
    /// Parse a problem from TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or missing tables.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Load a problem from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Display name, falling back to a generic label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Transportation problem")
    }

    /// Validate the tables into a [`TransportNetwork`].
    ///
    /// # Errors
    ///
    /// Returns a domain error on shape mismatch, empty sides or negative
    /// values.
    pub fn into_network(self) -> Result<TransportNetwork> {
        let mut network = TransportNetwork::try_new(self.costs, self.capacities, self.demands)?;
        if let Some(names) = self.supply_names {
            network = network.with_supply_names(names)?;
        }
        if let Some(names) = self.demand_names {
            network = network.with_demand_names(names)?;
        }
        Ok(network)
    }
}
