mod catalog;
mod chat;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod portfolio;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::TechCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::portfolio::themes::ThemeRegistry;
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

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // Technology catalog is built once and shared read-only
    info!(
        "Technology catalog loaded ({} entries)",
        TechCatalog::global().entries().len()
    );

    // Theme registry: built-ins plus optional overrides from THEMES_PATH
    let themes = ThemeRegistry::load(config.themes_path.as_deref(), &config.default_theme)?;
    info!(
        "Theme registry ready: {:?} (default: {})",
        themes.list().map(|(name, _)| name).collect::<Vec<_>>(),
        config.default_theme
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_timeout_secs);
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );

    // Build app state
    let state = AppState {
        model: Arc::new(llm),
        themes: Arc::new(themes),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
