//! Factories wiring configuration to concrete adapters.

pub mod solver;

pub use solver::build_solver;
