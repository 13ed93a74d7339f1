//! Domain error types.
//!
//! Validation failures raised when constructing domain values. They are
//! distinct from dataset/IO errors.

use super::IataCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Flight record violates a construction invariant
    #[error("invalid flight: {0}")]
    InvalidFlight(&'static str),

    /// Journey has no legs
    #[error("journey must have at least one flight")]
    EmptyJourney,

    /// Consecutive legs don't share an airport
    #[error("legs do not connect: arrival at {0} followed by departure from {1}")]
    LegsNotConnected(IataCode, IataCode),
}
