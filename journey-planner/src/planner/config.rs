//! Search configuration for the journey planner.

/// Limits on journey enumeration.
///
/// Enumeration is exhaustive by default. On large, densely connected graphs
/// the number of paths grows exponentially, so both limits exist to keep a
/// single query bounded. Either limit changes which journeys are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of routes in a journey.
    /// Branches that would exceed this are not explored.
    pub max_stops: Option<usize>,

    /// Maximum number of journeys to collect.
    /// Search stops once this many have been found.
    pub max_journeys: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_stops: Option<usize>, max_journeys: Option<usize>) -> Self {
        Self {
            max_stops,
            max_journeys,
        }
    }

    /// Returns true if a journey of `stops` routes is within the stop limit.
    pub fn allows_stops(&self, stops: usize) -> bool {
        self.max_stops.is_none_or(|max| stops <= max)
    }

    /// Returns true if `found` journeys have reached the journey limit.
    pub fn journeys_exhausted(&self, found: usize) -> bool {
        self.max_journeys.is_some_and(|max| found >= max)
    }
}
