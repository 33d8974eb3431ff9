//! Domain validation errors for transportation networks.
//!
//! These errors are returned by [`TransportNetwork::try_new`] when the input
//! tables violate a construction invariant. No partially built network is
//! ever returned alongside them.
//!
//! # Examples
//!
//! ```
//! use supplyplan::domain::error::DomainError;
//! use supplyplan::domain::TransportNetwork;
//! use rust_decimal::Decimal;
//!
//! // Cost matrix is 1x2, but only one demand is given.
//! let result = TransportNetwork::try_new(
//!     vec![vec![Decimal::ONE, Decimal::from(2)]],
//!     vec![Decimal::from(10)],
//!     vec![Decimal::ONE],
//! );
//!
//! assert!(matches!(result, Err(DomainError::ShapeMismatch { .. })));
//! ```
//!
//! [`TransportNetwork::try_new`]: super::TransportNetwork::try_new

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when network invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Matrix or vector dimensions disagree.
    #[error("shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Which table (or row) has the wrong length.
        what: String,
        /// Length implied by the other inputs.
        expected: usize,
        /// Length actually provided.
        actual: usize,
    },

    /// A network needs at least one supply and one demand node.
    #[error("network has no {side} nodes")]
    EmptyNetwork {
        /// `"supply"` or `"demand"`.
        side: &'static str,
    },

    /// Costs, capacities and demands must be non-negative.
    #[error("{what}[{index}] must be non-negative, got {value}")]
    NegativeValue {
        /// Which table holds the value.
        what: &'static str,
        /// Flat index of the offending entry.
        index: usize,
        /// The offending value.
        value: Decimal,
    },
}
