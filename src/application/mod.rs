//! Application services.

pub mod planner;

pub use planner::{Plan, Planner};
