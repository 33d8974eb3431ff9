//! Transportation-problem domain logic, independent of any solver backend.

pub mod constraint;
pub mod error;
pub mod network;
pub mod problem;
pub mod report;
pub mod solution;

pub use network::{DemandNode, SupplyNode, TransportNetwork};
pub use problem::{Constrained, Objective, SupplyBound, TransportProblem, Variables};
pub use report::{NodeTotal, Report, RouteLine};
pub use solution::{SolutionStatus, SolveResult, VariableValue};
