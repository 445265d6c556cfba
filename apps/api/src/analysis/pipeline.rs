//! End-to-end analysis run: score deterministically, narrate with the LLM,
//! persist the result.
//!
//! Order matters. The breakdown is computed before the scanner narrative so
//! the narrative can be anchored to the real numbers, and nothing is stored
//! until both evaluations exist; a failed LLM call leaves no partial rows.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::scoring::{AtsScorer, ScoreBreakdown};

use super::history::{self, NewAnalysis};
use super::narrative;

pub struct AnalysisInput {
    pub user_id: Uuid,
    pub filename: String,
    pub resume_text: String,
    pub job_description: String,
}

pub struct AnalysisOutcome {
    pub analysis_id: Uuid,
    pub breakdown: ScoreBreakdown,
    pub hr_evaluation: String,
    pub ats_evaluation: String,
}

pub async fn run_analysis(
    pool: &PgPool,
    llm: &LlmClient,
    scorer: &AtsScorer,
    input: AnalysisInput,
) -> Result<AnalysisOutcome, AppError> {
    // 1. Deterministic score
    let breakdown = scorer.score(&input.resume_text, &input.job_description);
    info!(
        "Scored '{}' for user {}: {}/100 ({}/{} keywords)",
        input.filename,
        input.user_id,
        breakdown.total_score,
        breakdown.matched_keywords.len(),
        breakdown.total_keywords
    );

    // 2. Narrative evaluations
    let hr_evaluation =
        narrative::hr_evaluation(llm, &input.resume_text, &input.job_description).await?;
    let ats_evaluation = narrative::ats_evaluation(
        llm,
        &input.resume_text,
        &input.job_description,
        &breakdown,
    )
    .await?;

    // 3. Persist
    let analysis_id = Uuid::new_v4();
    let breakdown_json = serde_json::to_value(&breakdown)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("breakdown serialization failed: {e}")))?;
    history::insert_analysis(
        pool,
        NewAnalysis {
            id: analysis_id,
            user_id: input.user_id,
            filename: &input.filename,
            ats_score: breakdown.total_score as i32,
            keywords_matched: breakdown.matched_keywords.len() as i32,
            total_keywords: breakdown.total_keywords as i32,
            breakdown: &breakdown_json,
            job_description: &input.job_description,
            resume_text: &input.resume_text,
            hr_evaluation: &hr_evaluation,
            ats_evaluation: &ats_evaluation,
        },
    )
    .await?;

    Ok(AnalysisOutcome {
        analysis_id,
        breakdown,
        hr_evaluation,
        ats_evaluation,
    })
}
