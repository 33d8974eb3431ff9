//! Adapters connecting the domain to the outside world.
//!
//! - [`inbound`]: CLI and problem-file input
//! - [`outbound`]: solver backends

pub mod inbound;
pub mod outbound;
