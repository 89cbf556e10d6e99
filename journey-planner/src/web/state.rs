//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::planner::SearchConfig;
use crate::routes::RouteRepository;

/// Shared application state.
///
/// Handlers that plan journeys copy the routes under the read lock and search
/// the copy, so a query always sees one consistent set of routes.
#[derive(Clone)]
pub struct AppState {
    /// Route store
    pub routes: Arc<RwLock<RouteRepository>>,

    /// Journey planner configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: RouteRepository, config: SearchConfig) -> Self {
        Self {
            routes: Arc::new(RwLock::new(routes)),
            config: Arc::new(config),
        }
    }
}
