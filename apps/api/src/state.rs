use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::experiments::responder::Responder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable response source. GeminiResponder when an API key is
    /// configured, MockResponder otherwise.
    pub responder: Arc<dyn Responder>,
    #[allow(dead_code)]
    pub config: Config,
}
