//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Journey, Port, Route};
use crate::planner::JourneyFilter;

/// Request to add or replace a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Port the route departs from
    pub origin: String,

    /// Port the route arrives at
    pub destination: String,

    /// Travel time
    pub duration: u32,
}

/// A route.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteResult {
    pub id: u32,
    pub origin: String,
    pub destination: String,
    pub duration: u32,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id().0,
            origin: route.origin().to_string(),
            destination: route.destination().to_string(),
            duration: route.duration(),
        }
    }
}

/// Response listing routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteListResponse {
    pub routes: Vec<RouteResult>,
}

/// Request for a journey along an exact list of ports.
#[derive(Debug, Deserialize)]
pub struct ExactJourneyRequest {
    /// Ports to visit, in order
    pub ports: Vec<String>,
}

impl ExactJourneyRequest {
    pub fn ports(&self) -> Vec<Port> {
        self.ports.iter().map(|p| Port::from(p.as_str())).collect()
    }
}

/// Query naming both ends of a journey.
#[derive(Debug, Deserialize)]
pub struct JourneyQuery {
    pub origin: String,
    pub destination: String,
}

/// A filter as sent over the wire, e.g. `{"kind": "max_stops", "value": 3}`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterSpec {
    MinStops(usize),
    MaxStops(usize),
    ExactStops(usize),
    MinDuration(u64),
    MaxDuration(u64),
}

impl From<FilterSpec> for JourneyFilter {
    fn from(spec: FilterSpec) -> Self {
        match spec {
            FilterSpec::MinStops(n) => JourneyFilter::MinStops(n),
            FilterSpec::MaxStops(n) => JourneyFilter::MaxStops(n),
            FilterSpec::ExactStops(n) => JourneyFilter::ExactStops(n),
            FilterSpec::MinDuration(d) => JourneyFilter::MinDuration(d),
            FilterSpec::MaxDuration(d) => JourneyFilter::MaxDuration(d),
        }
    }
}

/// Request to filter journeys between two ports.
#[derive(Debug, Deserialize)]
pub struct FilterJourneyRequest {
    pub origin: String,
    pub destination: String,
    pub filter: FilterSpec,
}

/// A journey option.
#[derive(Debug, Serialize, Deserialize)]
pub struct JourneyResult {
    /// Ports visited, in order
    pub ports: Vec<String>,

    /// Routes taken
    pub routes: Vec<RouteResult>,

    /// Number of routes
    pub stops: usize,

    /// Total duration
    pub duration: u64,
}

impl JourneyResult {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            ports: journey.ports().iter().map(|p| p.to_string()).collect(),
            routes: journey.routes().iter().map(RouteResult::from_route).collect(),
            stops: journey.stop_count(),
            duration: journey.duration(),
        }
    }
}

/// Response listing journeys.
#[derive(Debug, Serialize, Deserialize)]
pub struct JourneyListResponse {
    pub journeys: Vec<JourneyResult>,
}

impl JourneyListResponse {
    pub fn from_journeys(journeys: &[Journey]) -> Self {
        Self {
            journeys: journeys.iter().map(JourneyResult::from_journey).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;

    #[test]
    fn filter_spec_from_json() {
        let spec: FilterSpec = serde_json::from_str(r#"{"kind": "max_stops", "value": 3}"#).unwrap();
        assert_eq!(JourneyFilter::from(spec), JourneyFilter::MaxStops(3));

        let spec: FilterSpec =
            serde_json::from_str(r#"{"kind": "min_duration", "value": 6}"#).unwrap();
        assert_eq!(JourneyFilter::from(spec), JourneyFilter::MinDuration(6));
    }

    #[test]
    fn filter_spec_rejects_unknown_kind() {
        let result: Result<FilterSpec, _> =
            serde_json::from_str(r#"{"kind": "fewest_stops", "value": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn journey_result_from_journey() {
        let journey: Journey = [
            Route::new(RouteId(1), "Buenos Aires".into(), "New York".into(), 6).unwrap(),
            Route::new(RouteId(9), "New York".into(), "Liverpool".into(), 8).unwrap(),
        ]
        .into_iter()
        .collect();

        let result = JourneyResult::from_journey(&journey);

        assert_eq!(result.ports, vec!["Buenos Aires", "New York", "Liverpool"]);
        assert_eq!(result.stops, 2);
        assert_eq!(result.duration, 14);
        assert_eq!(result.routes[1].id, 9);
    }
}
