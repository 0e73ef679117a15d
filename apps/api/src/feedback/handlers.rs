//! Axum route handlers for user feedback capture.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::feedback::FeedbackNoteRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub feedback: String,
}

/// POST /api/v1/feedback
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackNoteRow>), AppError> {
    if req.feedback.trim().is_empty() {
        return Err(AppError::Validation("feedback cannot be empty".to_string()));
    }

    let note: FeedbackNoteRow = sqlx::query_as(
        r#"
        INSERT INTO feedback_notes (name, email, feedback)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, feedback, created_at
        "#,
    )
    .bind(req.name.as_deref().map(str::trim))
    .bind(req.email.as_deref().map(str::trim))
    .bind(req.feedback.trim())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(note)))
}
