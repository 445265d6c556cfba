use std::collections::BTreeSet;

/// Keyword presence check result. Sets are ordered so serialized output is
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatches {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl KeywordMatches {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Fraction of keywords found, 0.0 when there were none to find.
    pub fn ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f64 / total as f64
        }
    }
}

/// Splits `keywords` by case-insensitive substring presence in the resume.
/// Containment is deliberate: "java" counts when the resume says
/// "javascript", which matches how recruiters skim for stems.
pub fn match_keywords(keywords: &BTreeSet<String>, resume_text: &str) -> KeywordMatches {
    let resume_lower = resume_text.to_lowercase();
    let mut matched = BTreeSet::new();
    let mut missing = BTreeSet::new();
    for keyword in keywords {
        if resume_lower.contains(keyword.as_str()) {
            matched.insert(keyword.clone());
        } else {
            missing.insert(keyword.clone());
        }
    }
    KeywordMatches { matched, missing }
}
