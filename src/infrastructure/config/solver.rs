//! Solver backend selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported solver backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverBackend {
    /// HiGHS through good_lp.
    #[default]
    Highs,
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highs => write!(f, "highs"),
        }
    }
}

/// Solver configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}
