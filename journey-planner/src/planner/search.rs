//! Depth-first journey search.
//!
//! Finds every path between two ports by recursive exploration over a single
//! snapshot of the route graph.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::domain::{Journey, Port, Route};
use crate::routes::{RouteError, RouteProvider};

use super::config::SearchConfig;
use super::filter::JourneyFilter;

/// Routes read from the provider once per query.
///
/// Every lookup during one enumeration goes through the same snapshot, so a
/// store mutated mid-search cannot produce an inconsistent result.
struct RouteSnapshot {
    routes: Vec<Route>,
    /// Indices into `routes`, by origin, in provider order.
    departures: HashMap<Port, Vec<usize>>,
}

impl RouteSnapshot {
    fn new(routes: Vec<Route>) -> Self {
        let mut departures: HashMap<Port, Vec<usize>> = HashMap::new();
        for (idx, route) in routes.iter().enumerate() {
            departures
                .entry(route.origin().clone())
                .or_default()
                .push(idx);
        }
        Self { routes, departures }
    }

    fn len(&self) -> usize {
        self.routes.len()
    }

    /// Routes leaving `port`.
    fn departures<'s>(&'s self, port: &Port) -> impl Iterator<Item = &'s Route> {
        self.departures
            .get(port)
            .into_iter()
            .flatten()
            .map(|&idx| &self.routes[idx])
    }

    /// The first route from `origin` to `destination`.
    fn between(&self, origin: &Port, destination: &Port) -> Option<&Route> {
        self.departures(origin).find(|r| r.destination() == destination)
    }

    /// Build a journey by resolving each consecutive pair of ports.
    fn resolve(&self, ports: &[&Port]) -> Option<Journey> {
        ports
            .windows(2)
            .map(|pair| self.between(pair[0], pair[1]).cloned())
            .collect()
    }
}

/// Ports departed from on the current branch, most recent first.
///
/// Each recursion frame owns one link and borrows its parent's. A branch can
/// only extend its own trail, so sibling branches never see each other's
/// ports.
struct Trail<'a> {
    port: &'a Port,
    parent: Option<&'a Trail<'a>>,
    /// Number of links, i.e. routes taken so far.
    depth: usize,
}

impl<'a> Trail<'a> {
    fn iter(&'a self) -> impl Iterator<Item = &'a Port> {
        std::iter::successors(Some(self), |t| t.parent).map(|t| t.port)
    }

    /// Ports in travel order.
    fn ports(&'a self) -> Vec<&'a Port> {
        let mut ports: Vec<&Port> = self.iter().collect();
        ports.reverse();
        ports
    }
}

fn departed_from(trail: Option<&Trail<'_>>, port: &Port) -> bool {
    trail.is_some_and(|t| t.iter().any(|p| p == port))
}

/// State for one enumeration.
struct Search<'s> {
    snapshot: &'s RouteSnapshot,
    destination: &'s Port,
    config: &'s SearchConfig,
    journeys: Vec<Journey>,
    explored: usize,
    truncated: bool,
}

impl<'s> Search<'s> {
    fn explore(&mut self, frontier: &'s Port, trail: Option<&Trail<'_>>) {
        let snapshot = self.snapshot;

        // Only the origin of a candidate is checked against the trail. A port
        // may therefore be reached again as the search target, but never
        // departed from twice.
        for route in snapshot
            .departures(frontier)
            .filter(|r| !departed_from(trail, r.origin()))
        {
            if self.config.journeys_exhausted(self.journeys.len()) {
                self.truncated = true;
                return;
            }

            let depth = trail.map_or(0, |t| t.depth) + 1;
            if !self.config.allows_stops(depth) {
                continue;
            }

            self.explored += 1;
            let link = Trail {
                port: route.origin(),
                parent: trail,
                depth,
            };

            if route.destination() == self.destination {
                let mut ports = link.ports();
                ports.push(self.destination);
                if let Some(journey) = snapshot.resolve(&ports) {
                    self.journeys.push(journey);
                }
            } else {
                trace!(
                    from = %route.origin(),
                    to = %route.destination(),
                    depth,
                    "Exploring route"
                );
                self.explore(route.destination(), Some(&link));
            }
        }
    }
}

/// Journey planner over a route provider.
pub struct Planner<'a, P: RouteProvider> {
    provider: &'a P,
    config: &'a SearchConfig,
}

impl<'a, P: RouteProvider> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(provider: &'a P, config: &'a SearchConfig) -> Self {
        Self { provider, config }
    }

    /// Build the journey that visits `ports` in exactly this order.
    ///
    /// Each consecutive pair is looked up with the provider. Fewer than two
    /// ports yields an empty journey.
    ///
    /// # Errors
    ///
    /// Returns the provider's error, unchanged, for the first pair with no
    /// route. No partial journey is returned.
    pub fn compose_exact_journey(&self, ports: &[Port]) -> Result<Journey, RouteError> {
        ports
            .windows(2)
            .map(|pair| self.provider.route_between(&pair[0], &pair[1]))
            .collect()
    }

    /// Find every journey from `origin` to `destination`.
    ///
    /// No port is departed from twice within one journey. When `origin` and
    /// `destination` are the same, the result is every cycle back to it; a
    /// zero-length journey is never produced. The order of the result is not
    /// meaningful.
    pub fn enumerate_journeys(&self, origin: &Port, destination: &Port) -> Vec<Journey> {
        let snapshot = RouteSnapshot::new(self.provider.routes());

        let mut search = Search {
            snapshot: &snapshot,
            destination,
            config: self.config,
            journeys: Vec::new(),
            explored: 0,
            truncated: false,
        };
        search.explore(origin, None);

        if search.truncated {
            warn!(
                origin = %origin,
                destination = %destination,
                max_journeys = ?self.config.max_journeys,
                "Journey limit reached, results truncated"
            );
        }

        debug!(
            origin = %origin,
            destination = %destination,
            routes = snapshot.len(),
            explored = search.explored,
            journeys = search.journeys.len(),
            "Enumeration complete"
        );

        search.journeys
    }

    /// Find the journey with the smallest total duration.
    ///
    /// Returns `None` when no journey exists. Among journeys of equal
    /// duration, the first one found by the search is returned.
    pub fn find_shortest_journey(&self, origin: &Port, destination: &Port) -> Option<Journey> {
        self.enumerate_journeys(origin, destination)
            .into_iter()
            .min_by_key(Journey::duration)
    }

    /// Find every journey from `origin` to `destination` that `filter` keeps.
    pub fn filter_journeys(
        &self,
        origin: &Port,
        destination: &Port,
        filter: JourneyFilter,
    ) -> Vec<Journey> {
        filter.apply(self.enumerate_journeys(origin, destination))
    }
}
