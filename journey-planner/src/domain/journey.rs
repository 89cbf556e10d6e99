//! Journey types.
//!
//! A `Journey` is an ordered chain of routes from an origin port to a
//! destination port.

use super::{Port, Route};

/// An ordered chain of routes.
///
/// Consecutive routes are expected to connect (the destination of one is the
/// origin of the next). This is guaranteed by whoever builds the journey; the
/// planner only ever appends routes that continue the chain, so `Journey`
/// does not re-check it.
///
/// An empty journey is valid and has a duration of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journey {
    routes: Vec<Route>,
}

impl Journey {
    /// Create an empty journey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route to the end of the journey.
    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns all routes in order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (stops) in the journey.
    pub fn stop_count(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if the journey has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the total duration: the sum of every route's duration.
    ///
    /// Summed as `u64` so no combination of `u32` route durations can overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use journey_planner::domain::{Journey, Route, RouteId};
    ///
    /// let mut journey = Journey::new();
    /// assert_eq!(journey.duration(), 0);
    ///
    /// journey.push(Route::new(RouteId(1), "A".into(), "B".into(), 6).unwrap());
    /// journey.push(Route::new(RouteId(2), "B".into(), "C".into(), 8).unwrap());
    /// assert_eq!(journey.duration(), 14);
    /// ```
    pub fn duration(&self) -> u64 {
        self.routes.iter().map(|route| u64::from(route.duration())).sum()
    }

    /// Returns the origin port, or `None` for an empty journey.
    pub fn origin(&self) -> Option<&Port> {
        self.routes.first().map(Route::origin)
    }

    /// Returns the destination port, or `None` for an empty journey.
    pub fn destination(&self) -> Option<&Port> {
        self.routes.last().map(Route::destination)
    }

    /// Returns every port visited, in order, starting with the origin.
    pub fn ports(&self) -> Vec<&Port> {
        let Some(first) = self.routes.first() else {
            return Vec::new();
        };

        std::iter::once(first.origin())
            .chain(self.routes.iter().map(Route::destination))
            .collect()
    }
}

impl FromIterator<Route> for Journey {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Journey {
            routes: iter.into_iter().collect(),
        }
    }
}
