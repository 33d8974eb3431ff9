//! Infrastructure: configuration, logging and adapter wiring.

pub mod config;
pub mod factory;
