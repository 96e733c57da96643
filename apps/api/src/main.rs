mod config;
mod errors;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::resume::dictionary::WordFrequencyDictionary;
use crate::resume::store::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the in-memory store with one example record per section
    let store = Arc::new(ResumeStore::seeded());
    info!("Resume store seeded");

    // Initialize spellcheck dictionary
    let dictionary = match &config.spellcheck_wordlist {
        Some(path) => WordFrequencyDictionary::from_path(path)?,
        None => WordFrequencyDictionary::embedded(),
    };

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone(), config.suggestion_timeout)?;
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; suggestion requests will fail");
    }
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm_client::MODEL,
        config.suggestion_timeout
    );

    // Build app state
    let state = AppState {
        store,
        suggester: Arc::new(llm),
        dictionary: Arc::new(dictionary),
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
