//! Air-quality dashboard server for vulnerable-population protection.

use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tempo_server::api;
use tempo_server::config::Config;
use tempo_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tempo_server=debug".parse()?),
        )
        .init();

    tracing::info!("Starting dashboard server...");

    let config = Config::from_env();
    let port = config.server_port;
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config));

    let index = Path::new(&static_dir).join("index.html");
    let app = api::routes()
        .route_service("/", ServeFile::new(index))
        .nest_service("/static", ServeDir::new(&static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
