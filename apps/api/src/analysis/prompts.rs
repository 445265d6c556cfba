// All LLM prompt constants for the analysis module, plus the builders that
// fill them. Evaluations are free-form reports, so unlike structured
// extraction prompts these do not demand JSON output.

use std::collections::BTreeSet;

use crate::scoring::ScoreBreakdown;

/// Caps applied before embedding keyword lists in prompts. Keyword sets are
/// ordered, so the caps always keep the same leading terms.
const MISSING_KEYWORDS_SUMMARY_CAP: usize = 15;
const MISSING_KEYWORDS_REPORT_CAP: usize = 20;
const ENHANCEMENT_MISSING_CAP: usize = 15;

/// HR evaluations quote at most this much of themselves downstream.
const HR_EXCERPT_MAX_CHARS: usize = 1000;

/// System prompt for the recruiter-style evaluation.
pub const HR_EVALUATION_SYSTEM: &str =
    "You are an experienced technical Human Resources manager reviewing a resume \
    against a job description. \
    Respond with a professional evaluation report in plain text. \
    Do NOT return JSON. \
    Do NOT invent facts about the candidate that the resume does not support.";

/// HR evaluation prompt template. Replace `{resume_text}` and
/// `{job_description}` before sending.
pub const HR_EVALUATION_PROMPT_TEMPLATE: &str = r#"Review the following resume against the job description and share your professional evaluation of whether the candidate's profile aligns with the role. Highlight strengths and weaknesses relative to the stated requirements.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

Cover, in order:

1. OVERALL PROFILE ALIGNMENT
   - Does the candidate's profile match the role requirements?
   - Overall suitability rating (Excellent / Good / Average / Poor)

2. KEY STRENGTHS
   - Technical skills that align with the requirements
   - Relevant experience and achievements
   - Educational background fit

3. AREAS OF CONCERN
   - Missing technical skills or experience
   - Gaps in qualifications

4. EXPERIENCE ANALYSIS
   - Relevance of work experience
   - Career progression assessment

5. RECOMMENDATIONS
   - Should this candidate proceed?
   - Questions to focus on during the interview

Format your response professionally as an HR evaluation report."#;

/// System prompt for the screening-scanner evaluation.
pub const ATS_EVALUATION_SYSTEM: &str =
    "You are a skilled applicant-tracking-system scanner with a deep understanding \
    of how automated resume screening works. \
    Respond in plain text: the match percentage first, then missing keywords, \
    then final thoughts.";

/// ATS evaluation prompt template.
/// Replace: {resume_text}, {job_description}, {total_score},
///          {keywords_matched}, {total_keywords}, {missing_keywords},
///          {missing_keywords_report}
pub const ATS_EVALUATION_PROMPT_TEMPLATE: &str = r#"Evaluate the resume against the job description. Give the percentage match first, then the keywords that are missing, and end with final thoughts.

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}

CURRENT ANALYSIS:
- ATS Score: {total_score}%
- Keywords Matched: {keywords_matched}/{total_keywords}
- Missing Keywords: {missing_keywords}

Provide:

1. MATCH PERCENTAGE: {total_score}%

2. MISSING KEYWORDS:
   {missing_keywords_report}

3. FINAL THOUGHTS:
   - Compatibility assessment
   - Likelihood of passing an initial screen
   - Critical improvements needed"#;

/// System prompt for resume enhancement.
pub const ENHANCEMENT_SYSTEM: &str =
    "You are an expert resume writer and ATS optimization specialist. \
    Return only the enhanced resume content, properly formatted with clear sections. \
    Do NOT add skills, employers, or qualifications the original resume does not support.";

/// Enhancement prompt template.
/// Replace: {resume_text}, {job_description}, {total_score},
///          {matched_keywords}, {missing_keywords}, {hr_excerpt}
pub const ENHANCEMENT_PROMPT_TEMPLATE: &str = r#"Rewrite and enhance this resume to improve its screening score and address the evaluation concerns below.

ORIGINAL RESUME:
{resume_text}

TARGET JOB DESCRIPTION:
{job_description}

CURRENT ANALYSIS:
- Current Score: {total_score}/100
- Keywords Successfully Matched: {matched_keywords}
- Missing Important Keywords: {missing_keywords}

HR EVALUATION INSIGHTS:
{hr_excerpt}

ENHANCEMENT REQUIREMENTS:
1. Naturally incorporate the missing keywords where relevant and truthful
2. Address the weaknesses identified in the HR evaluation
3. Improve action verbs and quantify achievements where possible
4. Optimize section headings for automated scanning (Experience, Education, Skills)
5. Enhance the professional summary to match the job requirements
6. Keep keyword density natural; no keyword stuffing
7. Maintain authenticity; never add false information

Return only the enhanced resume content."#;

pub fn build_hr_prompt(resume_text: &str, job_description: &str) -> String {
    HR_EVALUATION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
}

pub fn build_ats_prompt(
    resume_text: &str,
    job_description: &str,
    breakdown: &ScoreBreakdown,
) -> String {
    ATS_EVALUATION_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
        .replace("{total_score}", &breakdown.total_score.to_string())
        .replace(
            "{keywords_matched}",
            &breakdown.matched_keywords.len().to_string(),
        )
        .replace("{total_keywords}", &breakdown.total_keywords.to_string())
        .replace(
            "{missing_keywords}",
            &keyword_list(&breakdown.missing_keywords, MISSING_KEYWORDS_SUMMARY_CAP),
        )
        .replace(
            "{missing_keywords_report}",
            &keyword_list(&breakdown.missing_keywords, MISSING_KEYWORDS_REPORT_CAP),
        )
}

pub fn build_enhancement_prompt(
    resume_text: &str,
    job_description: &str,
    breakdown: &ScoreBreakdown,
    hr_evaluation: &str,
) -> String {
    let excerpt = truncate_chars(hr_evaluation, HR_EXCERPT_MAX_CHARS);
    let excerpt = if excerpt.len() < hr_evaluation.len() {
        format!("{excerpt}...")
    } else {
        excerpt.to_string()
    };
    ENHANCEMENT_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{job_description}", job_description)
        .replace("{total_score}", &breakdown.total_score.to_string())
        .replace(
            "{matched_keywords}",
            &keyword_list(&breakdown.matched_keywords, usize::MAX),
        )
        .replace(
            "{missing_keywords}",
            &keyword_list(&breakdown.missing_keywords, ENHANCEMENT_MISSING_CAP),
        )
        .replace("{hr_excerpt}", &excerpt)
}

/// Cuts `text` after `max_chars` characters, respecting char boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn keyword_list(keywords: &BTreeSet<String>, cap: usize) -> String {
    keywords
        .iter()
        .take(cap)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}
