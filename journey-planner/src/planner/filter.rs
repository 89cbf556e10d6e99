//! Journey filters.

use crate::domain::Journey;

/// A predicate over enumerated journeys, carrying its bound.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::{Journey, Route, RouteId};
/// use journey_planner::planner::JourneyFilter;
///
/// let journey: Journey = [
///     Route::new(RouteId(1), "A".into(), "B".into(), 6).unwrap(),
///     Route::new(RouteId(2), "B".into(), "C".into(), 8).unwrap(),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(JourneyFilter::ExactStops(2).matches(&journey));
/// assert!(JourneyFilter::MaxDuration(14).matches(&journey));
/// assert!(!JourneyFilter::MinDuration(15).matches(&journey));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyFilter {
    /// At least this many routes
    MinStops(usize),
    /// At most this many routes
    MaxStops(usize),
    /// Exactly this many routes
    ExactStops(usize),
    /// Total duration at least this long
    MinDuration(u64),
    /// Total duration at most this long
    MaxDuration(u64),
}

impl JourneyFilter {
    /// Returns true if the journey is kept by this filter.
    pub fn matches(&self, journey: &Journey) -> bool {
        match *self {
            JourneyFilter::MinStops(n) => journey.stop_count() >= n,
            JourneyFilter::MaxStops(n) => journey.stop_count() <= n,
            JourneyFilter::ExactStops(n) => journey.stop_count() == n,
            JourneyFilter::MinDuration(d) => journey.duration() >= d,
            JourneyFilter::MaxDuration(d) => journey.duration() <= d,
        }
    }

    /// Keep only the journeys this filter matches, preserving order.
    pub fn apply(&self, journeys: Vec<Journey>) -> Vec<Journey> {
        journeys.into_iter().filter(|j| self.matches(j)).collect()
    }
}
