mod config;
mod db;
mod errors;
mod experiments;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::experiments::responder::{GeminiResponder, MockResponder, Responder};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (errors on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("api={}", &config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Reiterate API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Pick the responder once at startup: Gemini when a key is present and
    // the LLM is not disabled, otherwise the deterministic mock.
    let responder: Arc<dyn Responder> = match (&config.gemini_api_key, config.llm_disabled) {
        (Some(key), false) => {
            info!("LLM client initialized (model: {})", config.llm_model);
            Arc::new(GeminiResponder::new(LlmClient::new(
                key.clone(),
                config.llm_model.clone(),
            )))
        }
        (Some(_), true) => {
            info!("LLM_DISABLED set; responses will be mocked");
            Arc::new(MockResponder)
        }
        (None, _) => {
            warn!("GEMINI_API_KEY missing; responses will be mocked");
            Arc::new(MockResponder)
        }
    };

    // Build app state
    let state = AppState {
        db,
        responder,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
