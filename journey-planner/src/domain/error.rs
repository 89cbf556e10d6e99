//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from storage errors.

use super::Port;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Routes must take some time to travel
    #[error("route {origin} -> {destination} must have a positive duration")]
    ZeroDuration { origin: Port, destination: Port },
}
