//! Axum route handlers for résumé upload analysis.

use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::analysis::{
    self,
    feedback_format::{self, ATS_MARKERS, MATCH_MARKERS},
    readability, scoring, structure,
};
use crate::errors::AppError;
use crate::extraction::{
    self,
    fields::{extract_fields, sanitize_text, ResumeFields},
    DocumentFormat,
};
use crate::llm_client::prompts::RESUME_ASSISTANT_SYSTEM;
use crate::resumes::prompts;
use crate::state::AppState;

/// Hard cap on uploaded résumé size.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

struct ResumeUpload {
    filename: String,
    content_type: String,
    data: Bytes,
}

/// Collected multipart fields for the analysis endpoints.
struct AnalysisUpload {
    resume: Option<ResumeUpload>,
    job_description: Option<String>,
    roast_level: Option<String>,
}

async fn read_multipart(mut multipart: Multipart) -> Result<AnalysisUpload, AppError> {
    let mut upload = AnalysisUpload {
        resume: None,
        job_description: None,
        roast_level: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name().unwrap_or("") {
            "resume" | "file" => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
                if data.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::Validation(
                        "file too large, maximum size is 10MB".to_string(),
                    ));
                }
                upload.resume = Some(ResumeUpload {
                    filename,
                    content_type,
                    data,
                });
            }
            "job_description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read field: {e}")))?;
                // An empty job description means the ATS-only path
                if !text.trim().is_empty() {
                    upload.job_description = Some(text);
                }
            }
            "roast_level" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read field: {e}")))?;
                if !text.trim().is_empty() {
                    upload.roast_level = Some(text);
                }
            }
            _ => {
                // Drain unknown fields so the stream keeps advancing
                let _ = field.bytes().await;
            }
        }
    }

    Ok(upload)
}

fn required_resume(upload: AnalysisUpload) -> Result<(ResumeUpload, Option<String>, Option<String>), AppError> {
    let AnalysisUpload {
        resume,
        job_description,
        roast_level,
    } = upload;
    let resume =
        resume.ok_or_else(|| AppError::Validation("missing 'resume' file field".to_string()))?;
    Ok((resume, job_description, roast_level))
}

/// POST /api/v1/resumes/extract
///
/// Extracts structured fields from an uploaded résumé. Extraction trouble
/// yields empty fields rather than an error — the form is pre-filled
/// best-effort.
pub async fn handle_extract(
    State(_state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeFields>, AppError> {
    let (resume, _, _) = required_resume(read_multipart(multipart).await?)?;
    let format = DocumentFormat::detect(&resume.filename, &resume.content_type)?;

    let text = match extraction::extract_document(resume.data.to_vec(), format).await {
        Ok(text) => text,
        Err(AppError::Extraction(reason)) => {
            warn!(%reason, "extraction yielded no text, returning empty fields");
            return Ok(Json(ResumeFields::default()));
        }
        Err(e) => return Err(e),
    };

    Ok(Json(extract_fields(&text)))
}

#[derive(Debug, Serialize)]
pub struct ScoreMetrics {
    pub keyword_score: f64,
    pub structure_score: f64,
    pub readability_score: f64,
    pub length_score: f64,
    pub avg_sentence_length: f64,
}

impl From<&scoring::ScoreBreakdown> for ScoreMetrics {
    fn from(b: &scoring::ScoreBreakdown) -> Self {
        ScoreMetrics {
            keyword_score: b.keyword_score,
            structure_score: b.structure_score,
            readability_score: b.readability_score,
            length_score: b.length_score,
            avg_sentence_length: b.avg_sentence_length,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchAiFeedback {
    pub strengths: String,
    pub overall_quality: String,
}

#[derive(Debug, Serialize)]
pub struct AtsAiFeedback {
    pub ats_readiness: String,
    pub suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct MatchReportResponse {
    pub match_score: i64,
    pub match_score_raw: String,
    pub missing_keywords: Vec<String>,
    pub explanation: String,
    pub structure_feedback: String,
    pub readability_feedback: String,
    pub metrics: ScoreMetrics,
    pub ai_feedback: MatchAiFeedback,
}

#[derive(Debug, Serialize)]
pub struct AtsReportResponse {
    pub ats_score: i64,
    pub ats_score_raw: String,
    pub explanation: String,
    pub structure_feedback: String,
    pub readability_feedback: String,
    pub metrics: ScoreMetrics,
    pub ai_feedback: AtsAiFeedback,
}

/// POST /api/v1/resumes/match
///
/// Scores an uploaded résumé. With a `job_description` field the job-match
/// blend runs and the report carries cosine similarity and missing keywords;
/// without one the ATS-only blend runs. LLM feedback degrades to sentinel
/// strings — the scores are always returned.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (resume, job_description, _) = required_resume(read_multipart(multipart).await?)?;
    info!(
        filename = %resume.filename,
        bytes = resume.data.len(),
        with_jd = job_description.is_some(),
        "match request received"
    );

    let format = DocumentFormat::detect(&resume.filename, &resume.content_type)?;
    let resume_text = extraction::extract_document(resume.data.to_vec(), format).await?;

    let jd = job_description.as_deref();
    let outcome = analysis::match_resume(&resume_text, jd)?;

    let structure_feedback = state
        .llm
        .complete_lenient(
            &prompts::structure_feedback_prompt(&resume_text, jd.is_some()),
            RESUME_ASSISTANT_SYSTEM,
        )
        .await;
    let readability_feedback = state
        .llm
        .complete_lenient(
            &prompts::readability_feedback_prompt(
                &resume_text,
                outcome.breakdown.avg_sentence_length,
                jd.is_some(),
            ),
            RESUME_ASSISTANT_SYSTEM,
        )
        .await;

    if let Some(jd_text) = jd {
        let ai_feedback = state
            .llm
            .complete_lenient(
                &prompts::match_feedback_prompt(&resume_text, jd_text),
                RESUME_ASSISTANT_SYSTEM,
            )
            .await;
        let sections = feedback_format::parse_sectioned_feedback(&ai_feedback, &MATCH_MARKERS);
        let raw = outcome.match_score_raw.unwrap_or(0.0);

        Ok(Json(MatchReportResponse {
            match_score: outcome.overall,
            match_score_raw: format!("{raw:.2}%"),
            missing_keywords: outcome
                .missing_keywords
                .into_iter()
                .take(analysis::MISSING_KEYWORDS_LIMIT)
                .collect(),
            explanation: feedback_format::first_sentence(&ai_feedback),
            structure_feedback,
            readability_feedback,
            metrics: (&outcome.breakdown).into(),
            ai_feedback: MatchAiFeedback {
                strengths: sections.first,
                overall_quality: sections.second,
            },
        })
        .into_response())
    } else {
        let ats_raw = scoring::ats_score(&resume_text);
        let ai_feedback = state
            .llm
            .complete_lenient(
                &prompts::ats_feedback_prompt(&resume_text),
                RESUME_ASSISTANT_SYSTEM,
            )
            .await;
        let sections = feedback_format::parse_sectioned_feedback(&ai_feedback, &ATS_MARKERS);

        Ok(Json(AtsReportResponse {
            ats_score: outcome.overall,
            ats_score_raw: format!("{ats_raw}%"),
            explanation: feedback_format::first_sentence(&ai_feedback),
            structure_feedback,
            readability_feedback,
            metrics: (&outcome.breakdown).into(),
            ai_feedback: AtsAiFeedback {
                ats_readiness: sections.first,
                suggestions: sections.second,
            },
        })
        .into_response())
    }
}

#[derive(Debug, Deserialize)]
pub struct AtsPreviewRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
}

/// POST /api/v1/resumes/ats-preview
///
/// Scores form data without an upload — the live preview while a résumé is
/// being drafted.
pub async fn handle_ats_preview(
    State(_state): State<AppState>,
    Json(req): Json<AtsPreviewRequest>,
) -> Result<Json<Value>, AppError> {
    let resume_text = format!(
        "{}\n{}\n{}\n{}\n{}\n{}",
        req.name, req.email, req.phone, req.education, req.experience, req.skills
    );
    let (_, ats_score) = analysis::score_resume(&resume_text);
    Ok(Json(json!({ "ats_score": ats_score })))
}

/// POST /api/v1/resumes/roast
///
/// Comedy mode. A résumé that yields no text gets the canned blank-resume
/// roast instead of an error.
pub async fn handle_roast(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let (resume, _, roast_level) = required_resume(read_multipart(multipart).await?)?;
    let level = roast_level.unwrap_or_else(|| "spicy".to_string());
    let format = DocumentFormat::detect(&resume.filename, &resume.content_type)?;

    let resume_text = match extraction::extract_document(resume.data.to_vec(), format).await {
        Ok(text) => text,
        Err(AppError::Extraction(_)) => {
            return Ok(Json(json!({ "roast": prompts::BLANK_RESUME_ROAST })));
        }
        Err(e) => return Err(e),
    };

    let missing = structure::missing_sections(&resume_text);
    let avg = readability::avg_sentence_length(&resume_text);
    let prompt = prompts::roast_prompt(
        &resume_text,
        &missing,
        avg,
        prompts::roast_tone_instruction(&level),
    );
    let roast = state
        .llm
        .complete_lenient(&prompt, RESUME_ASSISTANT_SYSTEM)
        .await;
    info!(level = %level, "roast generated");

    Ok(Json(json!({ "roast": sanitize_text(&roast) })))
}
