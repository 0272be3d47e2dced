//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::Extraction;
use crate::scoring::{assemble_report, AnalysisReport, Gap, ReportContext, ScoringInput};
use crate::state::AppState;

const MAX_TEXT_BYTES: usize = 100_000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Already-classified requirements, scored without calling the extractor.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(flatten)]
    pub input: ScoringInput,
    #[serde(default)]
    pub gaps: Vec<Gap>,
    #[serde(default)]
    pub seniority_signals: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub extraction: Extraction,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/score
///
/// Runs the deterministic pipeline over caller-supplied requirements.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(mut request): Json<ScoreRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    validate_years(request.input.experience.required_years, "required_years")?;
    validate_years(request.input.experience.candidate_years, "candidate_years")?;

    let experience = &mut request.input.experience;
    if experience.seniority_signals_found == 0 {
        experience.seniority_signals_found = request.seniority_signals.len() as u32;
    }

    let context = ReportContext {
        gaps: &request.gaps,
        seniority_signals: &request.seniority_signals,
    };
    let report = assemble_report(&request.input, context, &state.scoring);

    info!(
        score = report.result.score,
        requirements = request.input.requirements.len(),
        "scored request"
    );
    Ok(Json(report))
}

/// POST /api/v1/analyze
///
/// Extracts requirements from raw text, then runs the same pipeline as `/score`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    validate_text(&request.resume_text, "resume_text")?;
    validate_text(&request.job_description, "job_description")?;

    let extractor = state.extractor.as_ref().ok_or_else(|| {
        AppError::ExtractorUnavailable(
            "Requirement extraction is not configured; use /api/v1/score".to_string(),
        )
    })?;

    let extraction = extractor
        .extract(&request.resume_text, &request.job_description)
        .await?;

    let input = extraction.scoring_input(&request.resume_text);
    let context = ReportContext {
        gaps: &extraction.gaps,
        seniority_signals: &extraction.experience.seniority_signals,
    };
    let report = assemble_report(&input, context, &state.scoring);

    info!(
        score = report.result.score,
        requirements = input.requirements.len(),
        "analyzed resume"
    );
    Ok(Json(AnalyzeResponse { report, extraction }))
}

fn validate_text(text: &str, field: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    if text.len() > MAX_TEXT_BYTES {
        return Err(AppError::Validation(format!(
            "{field} exceeds {MAX_TEXT_BYTES} bytes"
        )));
    }
    Ok(())
}

fn validate_years(years: f64, field: &str) -> Result<(), AppError> {
    if years.is_finite() && years >= 0.0 {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        )))
    }
}
