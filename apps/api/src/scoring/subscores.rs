//! Format, content, and length heuristics.
//!
//! Each function returns a multiplier in [0.0, 1.0]; the engine scales it by
//! the category weight. The checkpoints mirror what resume screeners look
//! for: named sections, contact details, action verbs, quantified results,
//! and a page-appropriate word count.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category weights. They sum to 100 so weighted sub-scores add up to the
/// total directly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub format: f64,
    pub content: f64,
    pub length: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 40.0,
            format: 25.0,
            content: 20.0,
            length: 15.0,
        }
    }
}

/// Section headings worth 0.15 each.
pub const RESUME_SECTIONS: &[&str] = &["experience", "education", "skills", "summary", "objective"];

/// Action verbs worth 0.05 each.
pub const ACTION_VERBS: &[&str] = &[
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "led",
    "improved",
    "increased",
    "achieved",
    "delivered",
];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("phone pattern is valid"));

static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+%|\b\d+\s*(million|thousand|k\b)").expect("quantified pattern is valid")
});

/// Structure checkpoints: 0.15 per named section, 0.10 each for an email
/// address, a phone number, and more than ten lines.
pub fn format_multiplier(resume_text: &str) -> f64 {
    let lower = resume_text.to_lowercase();
    let mut score = 0.0;
    for section in RESUME_SECTIONS {
        if lower.contains(section) {
            score += 0.15;
        }
    }
    if EMAIL_RE.is_match(resume_text) {
        score += 0.10;
    }
    if PHONE_RE.is_match(resume_text) {
        score += 0.10;
    }
    if resume_text.split('\n').count() > 10 {
        score += 0.10;
    }
    score.clamp(0.0, 1.0)
}

/// Content checkpoints: 0.05 per action verb, 0.30 for quantified
/// achievements, 0.20 for a word count between 300 and 800.
pub fn content_multiplier(resume_text: &str) -> f64 {
    let lower = resume_text.to_lowercase();
    let mut score = 0.0;
    for verb in ACTION_VERBS {
        if lower.contains(verb) {
            score += 0.05;
        }
    }
    if QUANTIFIED_RE.is_match(&lower) {
        score += 0.30;
    }
    if (300..=800).contains(&word_count(resume_text)) {
        score += 0.20;
    }
    score.clamp(0.0, 1.0)
}

/// Band multiplier by word count. 400 to 600 words is the sweet spot; an
/// empty resume earns nothing at all.
pub fn length_multiplier(resume_text: &str) -> f64 {
    match word_count(resume_text) {
        0 => 0.0,
        400..=600 => 1.0,
        300..=399 | 601..=800 => 0.8,
        200..=299 | 801..=1000 => 0.6,
        _ => 0.4,
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_default_weights_sum_to_one_hundred() {
        let w = ScoringWeights::default();
        assert_eq!(w.keyword + w.format + w.content + w.length, 100.0);
    }

    #[test]
    fn test_format_sections_add_up() {
        assert_eq!(format_multiplier(""), 0.0);
        assert_eq!(format_multiplier("Experience"), 0.15);
        let multiplier = format_multiplier("Experience Education Skills Summary Objective");
        assert!((multiplier - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_format_contact_details() {
        assert_eq!(format_multiplier("jane.doe@example.com"), 0.10);
        assert_eq!(format_multiplier("555-123-4567"), 0.10);
        assert_eq!(format_multiplier("5551234567"), 0.10);
        assert_eq!(format_multiplier("555.123.4567"), 0.10);
        // Too few digits for a phone number.
        assert_eq!(format_multiplier("555-1234"), 0.0);
    }

    #[test]
    fn test_format_counts_lines_not_length() {
        let eleven_lines = "a\n".repeat(10) + "a";
        assert_eq!(format_multiplier(&eleven_lines), 0.10);
        let ten_lines = "a\n".repeat(9) + "a";
        assert_eq!(format_multiplier(&ten_lines), 0.0);
    }

    #[test]
    fn test_format_clamps_at_one() {
        let resume = format!(
            "Experience Education Skills Summary Objective\n{}\njane@example.com 555-123-4567",
            "line\n".repeat(12)
        );
        assert_eq!(format_multiplier(&resume), 1.0);
    }

    #[test]
    fn test_format_never_decreases_as_structure_is_added() {
        let stages = [
            "some plain text".to_string(),
            "Experience\nsome plain text".to_string(),
            "Experience\nEducation\nSkills\nsome plain text".to_string(),
            "Experience\nEducation\nSkills\njane@example.com\nsome plain text".to_string(),
            format!(
                "Experience\nEducation\nSkills\njane@example.com\n555-123-4567\n{}",
                "filler\n".repeat(12)
            ),
        ];
        let mut previous = 0.0;
        for stage in &stages {
            let multiplier = format_multiplier(stage);
            assert!(
                multiplier >= previous,
                "format dropped from {previous} to {multiplier}"
            );
            assert!(multiplier <= 1.0);
            previous = multiplier;
        }
    }

    #[test]
    fn test_content_action_verbs() {
        assert_eq!(content_multiplier("managed a team"), 0.05);
        let multiplier = content_multiplier("Managed, developed and delivered");
        assert!((multiplier - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_content_quantified_achievements() {
        assert_eq!(content_multiplier("cut costs by 30%"), 0.30);
        assert_eq!(content_multiplier("served 2 million users"), 0.30);
        assert_eq!(content_multiplier("saved 10 thousand hours"), 0.30);
        assert_eq!(content_multiplier("processed 100k requests"), 0.30);
        // A bare number is not an achievement.
        assert_eq!(content_multiplier("worked on 3 projects"), 0.0);
    }

    #[test]
    fn test_content_word_count_band() {
        assert_eq!(content_multiplier(&words(300)), 0.20);
        assert_eq!(content_multiplier(&words(800)), 0.20);
        assert_eq!(content_multiplier(&words(299)), 0.0);
        assert_eq!(content_multiplier(&words(801)), 0.0);
    }

    #[test]
    fn test_length_bands() {
        let cases: &[(usize, f64)] = &[
            (0, 0.0),
            (1, 0.4),
            (199, 0.4),
            (200, 0.6),
            (299, 0.6),
            (300, 0.8),
            (399, 0.8),
            (400, 1.0),
            (500, 1.0),
            (600, 1.0),
            (601, 0.8),
            (800, 0.8),
            (801, 0.6),
            (1000, 0.6),
            (1001, 0.4),
        ];
        for &(count, expected) in cases {
            assert_eq!(
                length_multiplier(&words(count)),
                expected,
                "word count {count}"
            );
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        assert_eq!(length_multiplier("  \n\t  "), 0.0);
    }
}
