//! Supplyplan - minimum-cost transportation planning.
//!
//! Formulates the classic transportation program (warehouses with capacities,
//! customers with demands, a unit cost per route) as an integer program,
//! hands it to an LP/MIP solver and reports the optimal allocation.
//!
//! # Architecture
//!
//! - **`domain`** - Network validation, staged problem builder, results, reports
//! - **`port`** - Solver boundary (`Solver` trait, LP/ILP problem types)
//! - **`adapter`** - HiGHS backend via good_lp, TOML problem files, CLI
//! - **`application`** - The build -> solve -> report pipeline
//! - **`infrastructure`** - Configuration, logging, solver factory
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use supplyplan::adapter::outbound::solver::HiGHSSolver;
//! use supplyplan::application::Planner;
//! use supplyplan::domain::TransportNetwork;
//! use rust_decimal::Decimal;
//!
//! let network = TransportNetwork::try_new(
//!     vec![vec![Decimal::from(5)]],
//!     vec![Decimal::from(100)],
//!     vec![Decimal::from(50)],
//! )?;
//! let plan = Planner::new(Arc::new(HiGHSSolver::new())).plan(network)?;
//! println!("{}", plan.report.render_text(true));
//! # Ok::<(), supplyplan::error::Error>(())
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
