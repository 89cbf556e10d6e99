//! In-memory route store.

use tracing::debug;

use crate::domain::{Port, Route, RouteId};

use super::{RouteError, RouteProvider};

/// An in-memory collection of routes.
///
/// At most one route exists for any ordered (origin, destination) pair.
/// Ids are assigned on insertion, starting at 1, and are never reused.
#[derive(Debug, Clone)]
pub struct RouteRepository {
    routes: Vec<Route>,
    next_id: u32,
}

impl Default for RouteRepository {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            next_id: 1,
        }
    }
}

impl RouteRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route between two ports.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a route for the same ordered pair already exists, or
    /// if the route is invalid (zero duration).
    pub fn add_route(
        &mut self,
        origin: impl Into<Port>,
        destination: impl Into<Port>,
        duration: u32,
    ) -> Result<Route, RouteError> {
        let route = Route::new(
            RouteId(self.next_id),
            origin.into(),
            destination.into(),
            duration,
        )?;

        if self.find(route.origin(), route.destination()).is_some() {
            return Err(RouteError::AlreadyExists {
                origin: route.origin().clone(),
                destination: route.destination().clone(),
            });
        }

        debug!(
            id = %route.id(),
            origin = %route.origin(),
            destination = %route.destination(),
            duration = route.duration(),
            "Route added"
        );

        self.next_id += 1;
        self.routes.push(route.clone());
        Ok(route)
    }

    /// Get the route from `origin` to `destination`.
    pub fn get_route(&self, origin: &Port, destination: &Port) -> Result<Route, RouteError> {
        self.find(origin, destination)
            .cloned()
            .ok_or_else(|| RouteError::NotFound {
                origin: origin.clone(),
                destination: destination.clone(),
            })
    }

    /// Replace the route that has the same id as `route`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no route has that id, or if the new pair is already
    /// used by a different route.
    pub fn update_route(&mut self, route: Route) -> Result<Route, RouteError> {
        let idx = self
            .routes
            .iter()
            .position(|r| r.id() == route.id())
            .ok_or(RouteError::DoesNotExist(route.id()))?;

        if let Some(existing) = self.find(route.origin(), route.destination()) {
            if existing.id() != route.id() {
                return Err(RouteError::AlreadyExists {
                    origin: route.origin().clone(),
                    destination: route.destination().clone(),
                });
            }
        }

        debug!(id = %route.id(), duration = route.duration(), "Route updated");

        self.routes[idx] = route.clone();
        Ok(route)
    }

    /// Remove the route with the given id, returning it.
    pub fn delete_route(&mut self, id: RouteId) -> Result<Route, RouteError> {
        let idx = self
            .routes
            .iter()
            .position(|r| r.id() == id)
            .ok_or(RouteError::DoesNotExist(id))?;

        debug!(id = %id, "Route deleted");

        Ok(self.routes.remove(idx))
    }

    /// Returns all routes in insertion order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if there are no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn find(&self, origin: &Port, destination: &Port) -> Option<&Route> {
        self.routes
            .iter()
            .find(|r| r.connects(origin.as_str(), destination.as_str()))
    }
}

impl RouteProvider for RouteRepository {
    fn routes(&self) -> Vec<Route> {
        self.routes.clone()
    }

    fn route_between(&self, origin: &Port, destination: &Port) -> Result<Route, RouteError> {
        self.get_route(origin, destination)
    }
}
