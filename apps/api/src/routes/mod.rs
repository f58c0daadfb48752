pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers::handle_generate_application;
use crate::render::handlers::handle_download_pdf;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/applications", post(handle_generate_application))
        .route("/api/v1/documents/:kind/pdf", post(handle_download_pdf))
        .with_state(state)
}
