//! LLM-backed evaluations layered on top of the deterministic score.
//! Output is opaque prose; nothing downstream parses it.

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::scoring::ScoreBreakdown;

use super::prompts;

/// Recruiter-style review of the resume against the job description.
pub async fn hr_evaluation(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
) -> Result<String, AppError> {
    let prompt = prompts::build_hr_prompt(resume_text, job_description);
    llm.call_text(&prompt, prompts::HR_EVALUATION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("HR evaluation failed: {e}")))
}

/// Scanner-style narrative anchored to the computed breakdown, so the prose
/// never contradicts the deterministic score.
pub async fn ats_evaluation(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
    breakdown: &ScoreBreakdown,
) -> Result<String, AppError> {
    let prompt = prompts::build_ats_prompt(resume_text, job_description, breakdown);
    llm.call_text(&prompt, prompts::ATS_EVALUATION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("ATS evaluation failed: {e}")))
}

/// Rewrites the resume toward the job description, guided by the missing
/// keywords and the HR evaluation.
pub async fn enhance_resume(
    llm: &LlmClient,
    resume_text: &str,
    job_description: &str,
    breakdown: &ScoreBreakdown,
    hr_evaluation: &str,
) -> Result<String, AppError> {
    let prompt =
        prompts::build_enhancement_prompt(resume_text, job_description, breakdown, hr_evaluation);
    llm.call_text(&prompt, prompts::ENHANCEMENT_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume enhancement failed: {e}")))
}
