//! Markdown report for an enhanced resume. Rendering is pure; the handler
//! supplies the timestamp so output is reproducible.

use chrono::{DateTime, Utc};

use crate::models::analysis::AnalysisRow;
use crate::scoring::ScoreBreakdown;

/// Attachment filename, derived from the generation time.
pub fn report_filename(generated_at: DateTime<Utc>) -> String {
    format!(
        "enhanced_resume_{}.md",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Renders the optimization report. Expects `analysis.enhanced_resume` to be
/// present; the caller checks before rendering.
pub fn build_report(
    analysis: &AnalysisRow,
    breakdown: &ScoreBreakdown,
    generated_at: DateTime<Utc>,
) -> String {
    let enhanced = analysis.enhanced_resume.as_deref().unwrap_or_default();

    format!(
        r#"# Enhanced Resume - ATS Optimization Report

Original file: `{filename}`

| Metric | Score | Details |
| --- | --- | --- |
| ATS Score | {total}% | Overall ATS compatibility |
| Keywords Matched | {matched} | Out of {total_keywords} total |
| Format Score | {format}% | Resume structure and format |
| Content Score | {content}% | Content quality assessment |
| Length Score | {length}% | Word count fit |

## Enhanced Resume

{enhanced}

---

Enhanced by the ATS Optimization Service
Generated on {date}
"#,
        filename = analysis.filename,
        total = breakdown.total_score,
        matched = breakdown.matched_keywords.len(),
        total_keywords = breakdown.total_keywords,
        format = breakdown.format_score,
        content = breakdown.content_score,
        length = breakdown.length_score,
        enhanced = enhanced,
        date = generated_at.format("%B %d, %Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn fixture() -> (AnalysisRow, ScoreBreakdown) {
        let breakdown = ScoreBreakdown {
            total_score: 78,
            keyword_score: 80,
            format_score: 85,
            content_score: 65,
            length_score: 100,
            matched_keywords: BTreeSet::from(["python".to_string(), "docker".to_string()]),
            missing_keywords: BTreeSet::from(["kubernetes".to_string()]),
            total_keywords: 3,
        };
        let row = AnalysisRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            filename: "resume.pdf".to_string(),
            ats_score: 78,
            keywords_matched: 2,
            total_keywords: 3,
            breakdown: serde_json::to_value(&breakdown).unwrap(),
            job_description: "jd".to_string(),
            resume_text: "resume".to_string(),
            hr_evaluation: "hr".to_string(),
            ats_evaluation: "ats".to_string(),
            enhanced_resume: Some("SUMMARY\nSeasoned engineer.".to_string()),
            created_at: Utc::now(),
        };
        (row, breakdown)
    }

    #[test]
    fn test_report_contains_scores_and_resume() {
        let (row, breakdown) = fixture();
        let when = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let report = build_report(&row, &breakdown, when);
        assert!(report.contains("| ATS Score | 78% |"));
        assert!(report.contains("| Keywords Matched | 2 | Out of 3 total |"));
        assert!(report.contains("| Length Score | 100% |"));
        assert!(report.contains("`resume.pdf`"));
        assert!(report.contains("Seasoned engineer."));
        assert!(report.contains("Generated on January 15, 2025"));
    }

    #[test]
    fn test_report_filename_embeds_timestamp() {
        let when = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(report_filename(when), "enhanced_resume_20250115_103000.md");
    }
}
