mod catalog;
mod config;
mod errors;
mod intent;
mod llm_client;
mod models;
mod pipeline;
mod recommend;
mod render;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::intent::extractor::LlmIntentExtractor;
use crate::llm_client::LlmClient;
use crate::recommend::Recommender;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recommender API v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog once; any failure here is fatal
    let catalog = Arc::new(
        Catalog::load(&config.catalog_path)
            .with_context(|| format!("Failed to load catalog from '{}'", config.catalog_path))?,
    );

    let recommender = Arc::new(Recommender::new(catalog.clone()));

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_api_base.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        catalog,
        recommender,
        extractor: Arc::new(LlmIntentExtractor(llm)),
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
