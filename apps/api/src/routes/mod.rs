pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommend::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form
        .route(
            "/",
            get(handlers::handle_form).post(handlers::handle_form_submit),
        )
        // JSON API
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend),
        )
        .route("/api/v1/catalog", get(handlers::handle_catalog))
        .with_state(state)
}
