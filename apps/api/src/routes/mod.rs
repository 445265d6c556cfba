pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless scoring
        .route("/api/v1/score", post(handlers::handle_score))
        // Full analyses
        .route(
            "/api/v1/analyses",
            post(handlers::handle_analyze).get(handlers::handle_history),
        )
        .route("/api/v1/analyses/:id", get(handlers::handle_get_analysis))
        .route(
            "/api/v1/analyses/:id/enhance",
            post(handlers::handle_enhance),
        )
        .route(
            "/api/v1/analyses/:id/report",
            get(handlers::handle_report),
        )
        .layer(upload_limit)
        .with_state(state)
}
