//! Route store error types.

use std::path::PathBuf;

use crate::domain::{DomainError, Port, RouteId};

/// Errors from the route store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No route exists for the requested pair
    #[error("invalid route: no route available from {origin} to {destination}")]
    NotFound { origin: Port, destination: Port },

    /// A route already exists for the pair
    #[error("route {origin} -> {destination} already exists")]
    AlreadyExists { origin: Port, destination: Port },

    /// No route has the given id
    #[error("route {0} does not exist")]
    DoesNotExist(RouteId),

    /// The route failed validation
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Errors from loading a route seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON array of routes
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A route in the file was rejected by the store
    #[error("invalid route in {path}: {source}")]
    Route { path: PathBuf, source: RouteError },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::NotFound {
            origin: Port::from("Buenos Aires"),
            destination: Port::from("Liverpool"),
        };
        assert_eq!(
            err.to_string(),
            "invalid route: no route available from Buenos Aires to Liverpool"
        );

        let err = RouteError::AlreadyExists {
            origin: Port::from("Liverpool"),
            destination: Port::from("New York"),
        };
        assert_eq!(err.to_string(), "route Liverpool -> New York already exists");

        let err = RouteError::DoesNotExist(RouteId(4));
        assert_eq!(err.to_string(), "route 4 does not exist");

        let err = RouteError::from(DomainError::ZeroDuration {
            origin: Port::from("A"),
            destination: Port::from("B"),
        });
        assert_eq!(err.to_string(), "route A -> B must have a positive duration");
    }
}
