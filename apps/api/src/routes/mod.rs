pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::feedback::handlers as feedback_handlers;
use crate::generation::handlers as generation_handlers;
use crate::middleware::rate_limit::rate_limit;
use crate::resumes::handlers as resume_handlers;
use crate::resumes::handlers::MAX_UPLOAD_BYTES;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Resume analysis
        .route(
            "/api/v1/resumes/extract",
            post(resume_handlers::handle_extract),
        )
        .route("/api/v1/resumes/match", post(resume_handlers::handle_match))
        .route(
            "/api/v1/resumes/ats-preview",
            post(resume_handlers::handle_ats_preview),
        )
        .route("/api/v1/resumes/roast", post(resume_handlers::handle_roast))
        // Drafting and rendering
        .route(
            "/api/v1/resumes/suggest",
            post(generation_handlers::handle_suggest),
        )
        .route(
            "/api/v1/resumes/enhance",
            post(generation_handlers::handle_enhance),
        )
        .route(
            "/api/v1/resumes/render",
            post(generation_handlers::handle_render),
        )
        .route("/api/v1/templates", get(generation_handlers::handle_templates))
        // Feedback capture
        .route("/api/v1/feedback", post(feedback_handlers::handle_submit))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(from_fn_with_state(state.clone(), rate_limit));

    Router::new()
        .route("/health", get(health::health_handler))
        .merge(api)
        .with_state(state)
}
