//! Route storage and the provider contract consumed by the planner.
//!
//! The planner never touches storage directly. It reads routes through
//! [`RouteProvider`], which exposes a snapshot of every route and a lookup
//! for the route between an exact pair of ports.

mod error;
mod repository;
mod seed;

pub use error::{RouteError, SeedError};
pub use repository::RouteRepository;
pub use seed::{load_routes_file, sample_routes};

use crate::domain::{Port, Route};

/// Read access to a route graph.
///
/// This abstraction allows the planner to be tested with mock data.
pub trait RouteProvider {
    /// Returns a snapshot of every route.
    ///
    /// The order is not meaningful.
    fn routes(&self) -> Vec<Route>;

    /// Returns the route from `origin` to `destination`.
    ///
    /// Fails with [`RouteError::NotFound`] if there is none.
    fn route_between(&self, origin: &Port, destination: &Port) -> Result<Route, RouteError>;
}
