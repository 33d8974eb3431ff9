//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section has defaults, so the config file itself is optional.
//!
//! # Example
//!
//! ```no_run
//! use supplyplan::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("supplyplan.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::logging::LoggingConfig;
use super::report::ReportConfig;
use super::solver::SolverConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Solver backend selection.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Report rendering options.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.logging.validate()
    }

    /// Initialize the global tracing subscriber from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
