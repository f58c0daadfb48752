mod config;
mod errors;
mod extract;
mod generation;
mod layout;
mod llm_client;
mod models;
mod profile;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::default_page_config;
use crate::llm_client::ChatCompletionClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http=info",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scrivener API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion client
    let completion = ChatCompletionClient::new(config.completion.clone())
        .context("Failed to build completion HTTP client")?;
    info!(
        "Completion client initialized (model: {}, endpoint: {})",
        completion.model(),
        config.completion.endpoint
    );

    let page_config = default_page_config();
    info!(
        "Page layout: {}mm x {}mm, {} {}pt, {} lines per page",
        page_config.page_width_mm,
        page_config.page_height_mm,
        page_config.font.base_font,
        page_config.font_size_pt,
        page_config.lines_per_page()
    );

    // Build app state
    let state = AppState {
        completion: Arc::new(completion),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
