//! Analysis persistence. Every completed analysis is stored so users can
//! revisit past scores; the enhanced resume is filled in later on demand.
//! All reads are scoped by `user_id` so one user can never see another's rows.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::analysis::{AnalysisRow, AnalysisSummaryRow};

/// Parameters for storing a completed analysis.
pub struct NewAnalysis<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: &'a str,
    pub ats_score: i32,
    pub keywords_matched: i32,
    pub total_keywords: i32,
    pub breakdown: &'a serde_json::Value,
    pub job_description: &'a str,
    pub resume_text: &'a str,
    pub hr_evaluation: &'a str,
    pub ats_evaluation: &'a str,
}

pub async fn insert_analysis(pool: &PgPool, params: NewAnalysis<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO analyses
            (id, user_id, filename, ats_score, keywords_matched, total_keywords,
             breakdown, job_description, resume_text, hr_evaluation, ats_evaluation)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(params.id)
    .bind(params.user_id)
    .bind(params.filename)
    .bind(params.ats_score)
    .bind(params.keywords_matched)
    .bind(params.total_keywords)
    .bind(params.breakdown)
    .bind(params.job_description)
    .bind(params.resume_text)
    .bind(params.hr_evaluation)
    .bind(params.ats_evaluation)
    .execute(pool)
    .await?;

    info!("Stored analysis {} for user {}", params.id, params.user_id);
    Ok(())
}

/// Fetches one analysis, scoped to its owner.
pub async fn get_analysis(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<AnalysisRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM analyses WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Most recent analyses for a user, newest first.
pub async fn list_recent(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<AnalysisSummaryRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, filename, ats_score, keywords_matched, total_keywords, created_at
        FROM analyses
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Attaches an enhanced resume to an existing analysis.
/// Returns false when no row matched (wrong id or wrong owner).
pub async fn store_enhanced_resume(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    enhanced_resume: &str,
) -> Result<bool, sqlx::Error> {
    let result =
        sqlx::query("UPDATE analyses SET enhanced_resume = $3 WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .bind(enhanced_resume)
            .execute(pool)
            .await?;
    Ok(result.rows_affected() > 0)
}
