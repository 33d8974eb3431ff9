//! Solver factory.
//!
//! Builds the configured solver backend behind the [`Solver`] port.

use std::sync::Arc;

use crate::adapter::outbound::solver::HiGHSSolver;
use crate::infrastructure::config::solver::{SolverBackend, SolverConfig};
use crate::port::outbound::solver::Solver;

/// Build the solver selected by `[solver] backend`.
pub fn build_solver(config: &SolverConfig) -> Arc<dyn Solver> {
    match config.backend {
        SolverBackend::Highs => Arc::new(HiGHSSolver::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_highs() {
        let solver = build_solver(&SolverConfig::default());
        assert_eq!(solver.name(), "highs");
    }
}
