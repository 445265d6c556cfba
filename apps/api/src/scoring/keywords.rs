//! Keyword extraction from job descriptions.
//!
//! Two passes over the text. The token pass keeps the first
//! [`MAX_FREQUENCY_KEYWORDS`] distinct tokens, in order of first occurrence,
//! after dropping stopwords and short tokens. The taxonomy pass scans the raw
//! lowercased text so multi-word terms survive. The result is the union of
//! both, so taxonomy terms are never crowded out by the cap.

use std::collections::BTreeSet;

use super::stopwords::StopwordSet;
use super::taxonomy::CompiledTaxonomy;
use super::tokenizer::tokenize;

/// Cap on keywords taken from the token pass.
pub const MAX_FREQUENCY_KEYWORDS: usize = 20;

/// Tokens shorter than this are noise (articles, stray letters).
pub const MIN_KEYWORD_CHARS: usize = 3;

pub fn extract_keywords(
    job_description: &str,
    stopwords: &StopwordSet,
    taxonomy: &CompiledTaxonomy,
) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();

    let mut picked = 0;
    for token in tokenize(job_description) {
        if picked == MAX_FREQUENCY_KEYWORDS {
            break;
        }
        if token.chars().count() < MIN_KEYWORD_CHARS || stopwords.contains(&token) {
            continue;
        }
        if keywords.insert(token) {
            picked += 1;
        }
    }

    for term in taxonomy.matches(&job_description.to_lowercase()) {
        keywords.insert(term);
    }

    keywords
}
