//! Axum route handlers for content drafting and document rendering.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::extraction::fields::sanitize_text;
use crate::generation::{prompts, suggest::parse_draft_sections};
use crate::llm_client::prompts::RESUME_ASSISTANT_SYSTEM;
use crate::render::{self, RenderFields, RenderFormat, TemplateKind};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    #[serde(rename = "yearsExperience")]
    pub years_experience: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub education: String,
    pub experience: String,
    pub skills: String,
}

/// POST /api/v1/resumes/suggest
///
/// Drafts starter section content for a role. A misbehaving completion
/// yields empty sections, never an error.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(req): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    let prompt = prompts::suggest_content_prompt(&req.job_title, &req.years_experience);
    let response = state
        .llm
        .complete_lenient(&prompt, RESUME_ASSISTANT_SYSTEM)
        .await;
    let sections = parse_draft_sections(&response);

    Ok(Json(SuggestResponse {
        education: sections.education,
        experience: sections.experience,
        skills: sections.skills,
    }))
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
}

/// POST /api/v1/resumes/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<Value>, AppError> {
    let prompt =
        prompts::enhance_section_prompt(&req.section, &req.content, req.job_title.as_deref());
    let enhanced = state
        .llm
        .complete_lenient(&prompt, RESUME_ASSISTANT_SYSTEM)
        .await;
    Ok(Json(json!({ "enhanced": sanitize_text(&enhanced) })))
}

fn default_format() -> String {
    "pdf".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    pub template: String,
    #[serde(default = "default_format")]
    pub format: String,
}

/// POST /api/v1/resumes/render
///
/// Renders form data through a named template into PDF or DOCX bytes.
/// Unknown template names are a caller contract violation and come back as a
/// client error listing the valid names.
pub async fn handle_render(
    State(_state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, AppError> {
    let template = TemplateKind::parse(&req.template).ok_or_else(|| AppError::TemplateNotFound {
        requested: req.template.clone(),
        available: TemplateKind::NAMES,
    })?;
    let format = RenderFormat::parse(&req.format).ok_or_else(|| {
        AppError::Validation(format!(
            "unknown format '{}', expected 'pdf' or 'docx'",
            req.format
        ))
    })?;

    let fields = RenderFields {
        name: sanitize_text(&req.name),
        email: sanitize_text(&req.email),
        phone: sanitize_text(&req.phone),
        education: sanitize_text(&req.education),
        experience: sanitize_text(&req.experience),
        skills: sanitize_text(&req.skills),
        certifications: req.certifications.as_deref().map(sanitize_text),
        achievements: req.achievements.as_deref().map(sanitize_text),
    };

    let document = render::render(template, format, &fields)?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, document.content_disposition),
        ],
        document.bytes,
    )
        .into_response())
}

/// GET /api/v1/templates
pub async fn handle_templates() -> Json<Value> {
    Json(json!({ "templates": TemplateKind::NAMES }))
}
