// HTTP surface of the coordinator (adapter layer)

pub mod errors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::TaskCatalog;

/// Shared coordinator state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub catalog: Arc<TaskCatalog>,
}

/// Build the coordinator router.
///
/// Used by both the binary and the integration tests so the two route sets
/// cannot drift apart.
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::dispatch::health_check))
        // Task issuance (agent-facing)
        .route("/api/tasks/next", post(handlers::tasks::next_task))
        // Operator dispatch probe
        .route("/api/dispatch", post(handlers::dispatch::dispatch))
        // Result reports (agent-facing)
        .route("/api/results", post(handlers::results::submit_result))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
