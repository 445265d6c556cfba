use axum::{
    extract::{Multipart, Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::{AnalysisRow, AnalysisSummaryRow};
use crate::scoring::ScoreBreakdown;
use crate::state::AppState;

use super::extraction::extract_resume_text;
use super::history;
use super::narrative;
use super::pipeline::{run_analysis, AnalysisInput};
use super::report;

/// Matches the history page size users expect from the web UI.
const HISTORY_LIMIT: i64 = 20;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub breakdown: ScoreBreakdown,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub filename: String,
    pub breakdown: ScoreBreakdown,
    pub hr_evaluation: String,
    pub ats_evaluation: String,
}

#[derive(Deserialize)]
pub struct EnhanceRequest {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct EnhanceResponse {
    pub analysis_id: Uuid,
    pub enhanced_resume: String,
}

/// POST /api/v1/score
/// Pure scoring: no persistence, no LLM calls. Any input pair scores.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let breakdown = state.scorer.score(&req.resume_text, &req.job_description);
    Ok(Json(ScoreResponse { breakdown }))
}

/// POST /api/v1/analyses (multipart)
/// Fields: `user_id`, `job_description`, and either `resume_file` (PDF or
/// TXT) or `resume_text`. Runs the full pipeline and stores the result.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut job_description = String::new();
    let mut resume_text = String::new();
    let mut upload: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => {
                let raw = read_text_field(field, "user_id").await?;
                let parsed = raw
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
                user_id = Some(parsed);
            }
            "job_description" => {
                job_description = read_text_field(field, "job_description").await?;
            }
            "resume_text" => {
                resume_text = read_text_field(field, "resume_text").await?;
            }
            "resume_file" => {
                let filename = field.file_name().unwrap_or("resume").to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resume_file: {e}"))
                })?;
                upload = Some((filename, data));
            }
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description is required".to_string(),
        ));
    }

    // An uploaded file wins over inline text.
    let (filename, resume_text) = match upload {
        Some((filename, data)) => {
            let text = extract_resume_text(&filename, &data)?;
            (filename, text)
        }
        None => ("Text Input".to_string(), resume_text),
    };
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Provide resume_file or a non-empty resume_text".to_string(),
        ));
    }

    let outcome = run_analysis(
        &state.db,
        &state.llm,
        &state.scorer,
        AnalysisInput {
            user_id,
            filename: filename.clone(),
            resume_text,
            job_description,
        },
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        analysis_id: outcome.analysis_id,
        filename,
        breakdown: outcome.breakdown,
        hr_evaluation: outcome.hr_evaluation,
        ats_evaluation: outcome.ats_evaluation,
    }))
}

/// GET /api/v1/analyses?user_id=
pub async fn handle_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AnalysisSummaryRow>>, AppError> {
    let rows = history::list_recent(&state.db, params.user_id, HISTORY_LIMIT).await?;
    Ok(Json(rows))
}

/// GET /api/v1/analyses/:id?user_id=
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AnalysisRow>, AppError> {
    let row = load_analysis(&state, id, params.user_id).await?;
    Ok(Json(row))
}

/// POST /api/v1/analyses/:id/enhance
/// Generates the enhanced resume for a stored analysis and attaches it.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let row = load_analysis(&state, id, req.user_id).await?;
    let breakdown = parse_breakdown(&row)?;

    let enhanced = narrative::enhance_resume(
        &state.llm,
        &row.resume_text,
        &row.job_description,
        &breakdown,
        &row.hr_evaluation,
    )
    .await?;

    let stored = history::store_enhanced_resume(&state.db, id, req.user_id, &enhanced).await?;
    if !stored {
        // Row existed moments ago; treat a lost race as not found.
        return Err(AppError::NotFound(format!("Analysis {id} not found")));
    }

    Ok(Json(EnhanceResponse {
        analysis_id: id,
        enhanced_resume: enhanced,
    }))
}

/// GET /api/v1/analyses/:id/report?user_id=
/// Returns the optimization report as a Markdown attachment.
pub async fn handle_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let row = load_analysis(&state, id, params.user_id).await?;
    if row.enhanced_resume.is_none() {
        return Err(AppError::NotFound(
            "No enhanced resume available. Generate one first.".to_string(),
        ));
    }
    let breakdown = parse_breakdown(&row)?;

    let generated_at = Utc::now();
    let body = report::build_report(&row, &breakdown, generated_at);
    let headers = [
        (
            header::CONTENT_TYPE,
            "text/markdown; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                report::report_filename(generated_at)
            ),
        ),
    ];
    Ok((headers, body))
}

async fn load_analysis(state: &AppState, id: Uuid, user_id: Uuid) -> Result<AnalysisRow, AppError> {
    history::get_analysis(&state.db, id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

fn parse_breakdown(row: &AnalysisRow) -> Result<ScoreBreakdown, AppError> {
    serde_json::from_value(row.breakdown.clone()).map_err(|e| {
        AppError::Internal(anyhow::anyhow!(
            "stored breakdown for analysis {} is unreadable: {e}",
            row.id
        ))
    })
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read {name}: {e}")))
}
