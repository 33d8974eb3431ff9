//! Port definitions.
//!
//! Outbound ports are implemented by adapters in [`crate::adapter::outbound`].

pub mod outbound;
