pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::experiments::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Experiments API
        .route(
            "/api/v1/experiments/run",
            post(handlers::handle_run_experiment),
        )
        .route("/api/v1/experiments", get(handlers::handle_list_experiments))
        .route(
            "/api/v1/experiments/:id",
            get(handlers::handle_get_experiment),
        )
        .with_state(state)
}
