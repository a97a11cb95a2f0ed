mod config;
mod errors;
mod models;
mod people_client;
mod roster;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::people_client::{PeopleClient, PEOPLE_API_BASE};
use crate::roster::spawn_reload;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("dashboard_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting dashboard API v{}", env!("CARGO_PKG_VERSION"));

    let source = Arc::new(PeopleClient::new());
    info!("People client initialized ({PEOPLE_API_BASE})");

    let state = AppState::new(&config, source);

    // First load runs in the background; the board reports loading until it lands.
    spawn_reload(state.board.clone(), state.source.clone()).await;

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
