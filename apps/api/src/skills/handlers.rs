//! Axum route handlers for resume skill analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::advisor::SkillAdvice;
use crate::documents::{stage_upload, DocumentKind};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::skills::gap::analyze_skill_match;
use crate::skills::models::{CategorizedSkills, SkillMatch};
use crate::skills::roles::{required_skills, role_names};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeSkillsResponse {
    pub categorized_skills: CategorizedSkills,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_match: Option<SkillMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_advice: Option<SkillAdvice>,
}

#[derive(Debug, Deserialize)]
pub struct SkillMatchRequest {
    #[serde(default)]
    pub categorized_skills: CategorizedSkills,
    #[serde(default)]
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct SkillMatchResponse {
    pub skill_match: SkillMatch,
}

#[derive(Debug, Deserialize)]
pub struct AiAdviceRequest {
    #[serde(default)]
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AiAdviceResponse {
    pub advice: SkillAdvice,
}

#[derive(Debug, Serialize)]
pub struct JobRolesResponse {
    pub roles: Vec<&'static str>,
}

/// Multipart fields accepted by `/api/analyze-skills`.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<(String, Bytes)>,
    target_role: Option<String>,
    gemini_advice: bool,
}

async fn read_analyze_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
                form.resume = Some((filename, data));
            }
            Some("target_role") => {
                let value = read_text(field).await?;
                form.target_role = Some(value.trim().to_string()).filter(|v| !v.is_empty());
            }
            Some("gemini_advice") => {
                form.gemini_advice = parse_flag(&read_text(field).await?)?;
            }
            _ => {}
        }
    }
    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid form field: {e}")))
}

fn parse_flag(value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::Validation(format!(
            "gemini_advice must be true or false, got '{other}'"
        ))),
    }
}

fn lookup_role(role: &str) -> Result<&'static [&'static str], AppError> {
    required_skills(role)
        .ok_or_else(|| AppError::Validation(format!("Unknown target role: {role}")))
}

/// POST /api/analyze-skills
///
/// Multipart upload: `resume` (PDF or DOCX), optional `target_role` and
/// `gemini_advice`. A document that cannot be read yields an empty skill set.
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeSkillsResponse>, AppError> {
    let form = read_analyze_form(multipart).await?;

    let (filename, data) = form
        .resume
        .ok_or_else(|| AppError::Validation("A resume file is required".to_string()))?;
    if filename.trim().is_empty() {
        return Err(AppError::Validation("A resume file is required".to_string()));
    }
    let kind = DocumentKind::from_filename(&filename)
        .ok_or_else(|| AppError::Validation("Unsupported file format".to_string()))?;
    let required = form.target_role.as_deref().map(lookup_role).transpose()?;

    // Dropping the handle deletes the upload on every return path.
    let upload = stage_upload(data, kind)
        .await
        .map_err(anyhow::Error::from)?;
    let text = match state.extractor.extract(upload.path(), kind).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Text extraction failed for {filename}: {e}");
            String::new()
        }
    };
    drop(upload);

    let categorized_skills = state.skills.extract(&text);
    info!(
        "Analyzed {filename}: {} skill categories",
        categorized_skills.len()
    );

    let skill_match = required.map(|req| analyze_skill_match(&categorized_skills, req));
    let gemini_advice = match &skill_match {
        Some(m) if form.gemini_advice && !m.missing_skills.is_empty() => {
            Some(state.advisor.advise_all(&m.missing_skills).await)
        }
        _ => None,
    };

    Ok(Json(AnalyzeSkillsResponse {
        categorized_skills,
        skill_match,
        target_job: form.target_role.filter(|_| required.is_some()),
        gemini_advice,
    }))
}

/// POST /api/skill-match
pub async fn handle_skill_match(
    AppJson(request): AppJson<SkillMatchRequest>,
) -> Result<Json<SkillMatchResponse>, AppError> {
    let role = request.target_role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("target_role is required".to_string()));
    }
    if request.categorized_skills.is_empty() {
        return Err(AppError::Validation(
            "categorized_skills is required".to_string(),
        ));
    }
    let required = lookup_role(role)?;

    Ok(Json(SkillMatchResponse {
        skill_match: analyze_skill_match(&request.categorized_skills, required),
    }))
}

/// POST /api/ai-advice
pub async fn handle_ai_advice(
    State(state): State<AppState>,
    AppJson(request): AppJson<AiAdviceRequest>,
) -> Result<Json<AiAdviceResponse>, AppError> {
    let skills: Vec<String> = request
        .missing_skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if skills.is_empty() {
        return Err(AppError::Validation("missing_skills is required".to_string()));
    }

    let advice = state.advisor.advise_all(&skills).await;
    info!("Generated advice for {} skills", advice.len());
    Ok(Json(AiAdviceResponse { advice }))
}

/// GET /api/job-roles
pub async fn handle_job_roles() -> Json<JobRolesResponse> {
    Json(JobRolesResponse {
        roles: role_names().collect(),
    })
}
