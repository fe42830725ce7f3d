//! Treasure hunt API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use treasure_api::config::ServerConfig;
use treasure_api::routes;
use treasure_api::state::AppState;
use treasure_content::file_fragment_source::FileFragmentSource;
use treasure_core::clock::SystemClock;
use treasure_core::delay::{ScaledDelay, TokioDelay};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting treasure hunt API server");

    let config = ServerConfig::from_env()?;
    tracing::info!(
        fragment_dir = %config.fragment_dir.display(),
        step_delay_scale = config.step_delay_scale,
        seeded = config.hunt_seed.is_some(),
        "configuration loaded"
    );

    // Build application state.
    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(ScaledDelay::new(TokioDelay, config.step_delay_scale)),
        AppState::system_rng_factory(config.hunt_seed),
        Arc::new(FileFragmentSource::new(config.fragment_dir.clone())),
    );

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/hunts", routes::hunt::router())
        .nest("/api/v1/fragments", routes::fragments::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
