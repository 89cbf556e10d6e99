//! Journey planner using exhaustive depth-first search.
//!
//! This module implements the core planning operations over a route graph:
//! composing a journey along an exact list of ports, enumerating every path
//! between two ports, picking the shortest, and filtering by stop count or
//! duration.

mod config;
mod filter;
mod rank;
mod search;


pub use config::SearchConfig;
pub use filter::JourneyFilter;
pub use rank::rank_journeys;
pub use search::Planner;
