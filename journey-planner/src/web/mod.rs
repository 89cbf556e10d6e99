//! Web layer for the journey planner.
//!
//! Provides JSON endpoints for managing routes and planning journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
