use journey_planner::config::AppConfig;
use journey_planner::routes::{load_routes_file, sample_routes};
use journey_planner::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "journey_planner=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()?;

    let routes = match &config.routes_file {
        Some(path) => load_routes_file(path)?,
        None => {
            info!("ROUTES_FILE not set, using sample routes");
            sample_routes()
        }
    };
    info!(routes = routes.len(), "Route graph ready");

    let state = AppState::new(routes, config.search.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Journey planner listening");
    info!("  GET    /health");
    info!("  GET    /routes              POST /routes");
    info!("  PUT    /routes/:id          DELETE /routes/:id");
    info!("  GET    /journeys?origin=&destination=");
    info!("  GET    /journeys/shortest?origin=&destination=");
    info!("  POST   /journeys/exact      POST /journeys/filter");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
