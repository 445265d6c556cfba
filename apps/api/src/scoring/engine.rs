//! Deterministic resume-vs-job-description scorer.
//!
//! Four weighted categories: keyword overlap (40), format (25), content
//! quality (20), and length (15). Weighted sub-scores are summed, rounded
//! half away from zero, and capped at 100. Reported per-category scores are
//! normalized to a 0..=100 scale so clients can render them uniformly.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::keywords::extract_keywords;
use super::matcher::match_keywords;
use super::stopwords::StopwordSet;
use super::subscores::{self, ScoringWeights};
use super::taxonomy::{CompiledTaxonomy, TechnicalTaxonomy};

/// Full scoring result for one resume against one job description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Overall score, 0..=100.
    pub total_score: u32,
    /// Per-category scores, each normalized to 0..=100.
    pub keyword_score: u32,
    pub format_score: u32,
    pub content_score: u32,
    pub length_score: u32,
    pub matched_keywords: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
    pub total_keywords: usize,
}

pub struct AtsScorer {
    stopwords: StopwordSet,
    taxonomy: CompiledTaxonomy,
    weights: ScoringWeights,
}

impl AtsScorer {
    /// Scorer with the default taxonomy and weights. The built-in taxonomy
    /// is known-good, so compilation cannot fail here.
    pub fn new(stopwords: StopwordSet) -> Self {
        Self::with_taxonomy(stopwords, TechnicalTaxonomy::default())
            .expect("built-in taxonomy patterns compile")
    }

    pub fn with_taxonomy(
        stopwords: StopwordSet,
        taxonomy: TechnicalTaxonomy,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            stopwords,
            taxonomy: taxonomy.compile()?,
            weights: ScoringWeights::default(),
        })
    }

    /// Scores `resume_text` against `job_description`. Pure and total: any
    /// pair of strings yields a breakdown, and equal inputs yield equal
    /// output.
    pub fn score(&self, resume_text: &str, job_description: &str) -> ScoreBreakdown {
        let keywords = extract_keywords(job_description, &self.stopwords, &self.taxonomy);
        let matches = match_keywords(&keywords, resume_text);

        let keyword_weighted = matches.ratio() * self.weights.keyword;
        let format_weighted = subscores::format_multiplier(resume_text) * self.weights.format;
        let content_weighted = subscores::content_multiplier(resume_text) * self.weights.content;
        let length_weighted = subscores::length_multiplier(resume_text) * self.weights.length;

        let total = keyword_weighted + format_weighted + content_weighted + length_weighted;

        ScoreBreakdown {
            total_score: (total.round().min(100.0)) as u32,
            keyword_score: display_score(keyword_weighted, self.weights.keyword),
            format_score: display_score(format_weighted, self.weights.format),
            content_score: display_score(content_weighted, self.weights.content),
            length_score: display_score(length_weighted, self.weights.length),
            matched_keywords: matches.matched,
            missing_keywords: matches.missing,
            total_keywords: matches.total(),
        }
    }
}

/// Normalizes a weighted sub-score back to 0..=100 for display.
fn display_score(weighted: f64, weight: f64) -> u32 {
    (weighted * 100.0 / weight).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOB_DESCRIPTION: &str =
        "Looking for a Python developer with AWS and Docker experience, Bachelor degree required";

    const RESUME: &str = "Experienced Python developer with 5 years AWS and Docker deployment \
                          experience, Bachelor of Science in Computer Science";

    fn scorer() -> AtsScorer {
        AtsScorer::new(StopwordSet::builtin())
    }

    /// Function words plus recruiting boilerplate, so extraction over the
    /// fixture job description is exact regardless of the bundled list.
    fn recruiting_stopwords() -> StopwordSet {
        StopwordSet::from_lines(
            "the\nand\nfor\nwith\nof\nin\non\nat\nto\nby\nor\nbut\nis\nare\nlooking\nrequired\nseeking",
        )
    }

    #[test]
    fn test_matched_keywords_cover_the_technical_terms() {
        let breakdown = scorer().score(RESUME, JOB_DESCRIPTION);
        for term in ["python", "aws", "docker", "bachelor"] {
            assert!(
                breakdown.matched_keywords.contains(term),
                "expected {term} to match"
            );
        }
    }

    #[test]
    fn test_keyword_overlap_drives_a_strong_score() {
        let scorer = AtsScorer::new(recruiting_stopwords());
        let breakdown = scorer.score(RESUME, JOB_DESCRIPTION);
        // Exactly seven keywords survive the filters; six appear in the
        // resume ("experience" via "Experienced"), "degree" does not.
        assert_eq!(breakdown.total_keywords, 7);
        assert_eq!(
            breakdown.missing_keywords,
            BTreeSet::from(["degree".to_string()])
        );
        assert_eq!(breakdown.matched_keywords.len(), 6);
        // 6/7 of the 40-point keyword weight is well above 30.
        assert!(breakdown.keyword_score > 75);
        assert_eq!(breakdown.keyword_score, 86);
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let breakdown = scorer().score("", JOB_DESCRIPTION);
        assert_eq!(breakdown.total_score, 0);
        assert_eq!(breakdown.keyword_score, 0);
        assert_eq!(breakdown.format_score, 0);
        assert_eq!(breakdown.content_score, 0);
        assert_eq!(breakdown.length_score, 0);
        assert!(breakdown.matched_keywords.is_empty());
        assert_eq!(breakdown.missing_keywords.len(), breakdown.total_keywords);
    }

    #[test]
    fn test_empty_job_description_zeroes_only_keywords() {
        let breakdown = scorer().score(RESUME, "");
        assert_eq!(breakdown.total_keywords, 0);
        assert_eq!(breakdown.keyword_score, 0);
        assert!(breakdown.matched_keywords.is_empty());
        assert!(breakdown.missing_keywords.is_empty());
        // The resume-only categories still contribute.
        assert!(breakdown.total_score > 0);
    }

    #[test]
    fn test_stopword_only_job_description_zeroes_keywords() {
        let breakdown = scorer().score(RESUME, "the and but this that");
        assert_eq!(breakdown.total_keywords, 0);
        assert_eq!(breakdown.keyword_score, 0);
    }

    #[test]
    fn test_well_formed_resume_subscores() {
        // 500 words on separate lines with every section heading, contact
        // details, three action verbs, and a quantified achievement.
        let mut words: Vec<String> = [
            "experience",
            "education",
            "skills",
            "summary",
            "objective",
            "managed",
            "developed",
            "created",
            "jane.doe@example.com",
            "555-123-4567",
            "40%",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();
        while words.len() < 500 {
            words.push("lorem".to_string());
        }
        let resume = words.join("\n");

        let breakdown = scorer().score(&resume, JOB_DESCRIPTION);
        assert_eq!(breakdown.format_score, 100);
        assert_eq!(breakdown.length_score, 100);
        // 3 verbs (0.15) + quantified (0.30) + word-count band (0.20).
        assert_eq!(breakdown.content_score, 65);
    }

    #[test]
    fn test_total_is_the_rounded_sum_of_weighted_parts() {
        let scorer = AtsScorer::new(recruiting_stopwords());
        let breakdown = scorer.score(RESUME, JOB_DESCRIPTION);
        let recomputed = breakdown.keyword_score as f64 * 0.40
            + breakdown.format_score as f64 * 0.25
            + breakdown.content_score as f64 * 0.20
            + breakdown.length_score as f64 * 0.15;
        let diff = (breakdown.total_score as f64 - recomputed).abs();
        // Display scores are rounded independently, so allow a two-point
        // rounding drift.
        assert!(diff <= 2.0, "total {} vs recomputed {recomputed}", breakdown.total_score);
    }

    #[test]
    fn test_total_never_exceeds_one_hundred() {
        let resume = format!(
            "Experience Education Skills Summary Objective\n\
             jane.doe@example.com 555-123-4567\n{}\n\
             Managed developed created implemented designed led improved \
             increased achieved delivered results, improved uptime by 30%, \
             python aws docker bachelor degree required looking developer experience\n{}",
            "line\n".repeat(12),
            vec!["word"; 450].join(" ")
        );
        let breakdown = scorer().score(&resume, JOB_DESCRIPTION);
        assert!(breakdown.total_score <= 100);
        assert!(breakdown.keyword_score <= 100);
        assert!(breakdown.format_score <= 100);
        assert!(breakdown.content_score <= 100);
        assert!(breakdown.length_score <= 100);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = scorer();
        let first = scorer.score(RESUME, JOB_DESCRIPTION);
        let second = scorer.score(RESUME, JOB_DESCRIPTION);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matched_and_missing_partition_the_keywords() {
        let breakdown = scorer().score(RESUME, JOB_DESCRIPTION);
        assert!(breakdown.matched_keywords.is_disjoint(&breakdown.missing_keywords));
        assert_eq!(
            breakdown.matched_keywords.len() + breakdown.missing_keywords.len(),
            breakdown.total_keywords
        );
    }

    #[test]
    fn test_breakdown_serializes_with_stable_key_order() {
        let breakdown = scorer().score(RESUME, JOB_DESCRIPTION);
        let a = serde_json::to_string(&breakdown).unwrap();
        let b = serde_json::to_string(&breakdown).unwrap();
        assert_eq!(a, b);
        let value: serde_json::Value = serde_json::from_str(&a).unwrap();
        assert!(value.get("total_score").is_some());
        assert!(value.get("matched_keywords").unwrap().is_array());
    }

    #[test]
    fn test_custom_taxonomy_changes_extraction() {
        let taxonomy = TechnicalTaxonomy {
            categories: vec![crate::scoring::taxonomy::TaxonomyCategory {
                category: "tooling".to_string(),
                patterns: vec!["terraform".to_string()],
            }],
        };
        let scorer = AtsScorer::with_taxonomy(recruiting_stopwords(), taxonomy).unwrap();
        let breakdown = scorer.score("I write terraform modules", "Terraform required");
        assert!(breakdown.matched_keywords.contains("terraform"));
    }
}
