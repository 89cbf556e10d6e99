//! Journey ranking for presenting results.
//!
//! The planner returns journeys in no particular order. Ranking gives callers
//! that display results a stable, useful ordering.

use std::cmp::Ordering;

use crate::domain::Journey;

/// Rank journeys by preference.
///
/// Journeys are ranked by:
/// 1. Total duration (shorter is better)
/// 2. Number of stops (fewer is better)
/// 3. Port sequence (alphabetical, so ties order deterministically)
///
/// Returns journeys sorted best-first.
pub fn rank_journeys(mut journeys: Vec<Journey>) -> Vec<Journey> {
    journeys.sort_by(compare);
    journeys
}

fn compare(a: &Journey, b: &Journey) -> Ordering {
    a.duration()
        .cmp(&b.duration())
        .then_with(|| a.stop_count().cmp(&b.stop_count()))
        .then_with(|| a.ports().cmp(&b.ports()))
}
