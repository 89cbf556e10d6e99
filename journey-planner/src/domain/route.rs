//! Route types.

use std::fmt;

use super::{DomainError, Port};

/// Identifier assigned to a route by the store that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted edge between two ports.
///
/// A route from A to B says nothing about travel from B to A.
///
/// # Invariants
///
/// - Duration is positive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: RouteId,
    origin: Port,
    destination: Port,
    duration: u32,
}

impl Route {
    /// Create a route.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `duration` is zero.
    pub fn new(
        id: RouteId,
        origin: Port,
        destination: Port,
        duration: u32,
    ) -> Result<Self, DomainError> {
        if duration == 0 {
            return Err(DomainError::ZeroDuration {
                origin,
                destination,
            });
        }

        Ok(Route {
            id,
            origin,
            destination,
            duration,
        })
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn origin(&self) -> &Port {
        &self.origin
    }

    pub fn destination(&self) -> &Port {
        &self.destination
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Returns true if this route runs from `origin` to `destination`.
    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.origin.as_str() == origin && self.destination.as_str() == destination
    }
}
