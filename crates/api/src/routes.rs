use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all admin API routes with state. Mounted under `/api` by the binary.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::sites::routes())
        .merge(handlers::records::routes())
        .merge(handlers::rules::routes())
        .merge(handlers::telemetry::routes())
        .with_state(state)
}
