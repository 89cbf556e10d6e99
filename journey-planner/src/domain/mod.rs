//! Domain types for the journey planner.
//!
//! This module contains the core domain model: ports, the directed routes
//! between them, and journeys built from chains of routes. Types that carry
//! invariants enforce them at construction time.

mod error;
mod journey;
mod port;
mod route;

pub use error::DomainError;
pub use journey::Journey;
pub use port::Port;
pub use route::{Route, RouteId};
