//! Outbound ports (driven side).

pub mod solver;
