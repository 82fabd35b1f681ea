pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/resumes/pdf", post(handlers::handle_resume_pdf))
        .route(
            "/api/v1/resumes/text-pdf",
            post(handlers::handle_generated_text_pdf),
        )
        .route(
            "/api/v1/cover-letters/pdf",
            post(handlers::handle_cover_letter_pdf),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
