pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::factcheck::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Interactive page
        .route(
            "/",
            get(handlers::handle_index).post(handlers::handle_form_submit),
        )
        // JSON API
        .route("/api/v1/fact-check", post(handlers::handle_fact_check))
        .fallback(not_found)
        .with_state(state)
}
