//! Seed data for the route store.
//!
//! Routes can be loaded from a JSON file or taken from the built-in sample
//! graph of nine routes between five ports.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::{RouteError, RouteRepository, SeedError};

/// One route entry in a seed file.
#[derive(Debug, Deserialize)]
struct RouteSeed {
    origin: String,
    destination: String,
    duration: u32,
}

/// The built-in sample graph: (origin, destination, duration).
const SAMPLE_ROUTES: &[(&str, &str, u32)] = &[
    ("Buenos Aires", "New York", 6),
    ("Buenos Aires", "Casablanca", 5),
    ("Buenos Aires", "Cape Town", 4),
    ("Cape Town", "New York", 4),
    ("Casablanca", "Liverpool", 3),
    ("Casablanca", "Cape Town", 6),
    ("Liverpool", "Casablanca", 3),
    ("Liverpool", "Cape Town", 6),
    ("New York", "Liverpool", 8),
];

/// Create a repository holding the sample graph.
///
/// # Example
///
/// ```
/// use journey_planner::routes::sample_routes;
///
/// let routes = sample_routes();
/// assert_eq!(routes.len(), 9);
/// ```
pub fn sample_routes() -> RouteRepository {
    let mut repo = RouteRepository::new();
    for (origin, destination, duration) in SAMPLE_ROUTES {
        if let Err(e) = repo.add_route(*origin, *destination, *duration) {
            warn!(error = %e, "Skipping sample route");
        }
    }
    repo
}

/// Load routes from a JSON file.
///
/// The file holds an array of `{"origin", "destination", "duration"}`
/// objects. Routes are added in file order, so ids follow that order.
pub fn load_routes_file(path: impl AsRef<Path>) -> Result<RouteRepository, SeedError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let seeds: Vec<RouteSeed> = serde_json::from_str(&json).map_err(|source| SeedError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let repo = build_repository(seeds).map_err(|source| SeedError::Route {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), routes = repo.len(), "Loaded routes");
    Ok(repo)
}

fn build_repository(seeds: Vec<RouteSeed>) -> Result<RouteRepository, RouteError> {
    let mut repo = RouteRepository::new();
    for seed in seeds {
        repo.add_route(seed.origin, seed.destination, seed.duration)?;
    }
    Ok(repo)
}
