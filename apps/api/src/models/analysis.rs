use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored analysis: the inputs, the score breakdown, and both LLM
/// evaluations. `enhanced_resume` stays NULL until the user requests one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub filename: String,
    pub ats_score: i32,
    pub keywords_matched: i32,
    pub total_keywords: i32,
    pub breakdown: Value,
    pub job_description: String,
    pub resume_text: String,
    pub hr_evaluation: String,
    pub ats_evaluation: String,
    pub enhanced_resume: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Trimmed row for history listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisSummaryRow {
    pub id: Uuid,
    pub filename: String,
    pub ats_score: i32,
    pub keywords_matched: i32,
    pub total_keywords: i32,
    pub created_at: DateTime<Utc>,
}
