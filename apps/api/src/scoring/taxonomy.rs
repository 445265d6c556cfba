//! Technical keyword taxonomy.
//!
//! Keywords the token pass cannot see (multi-word phrases, terms buried in
//! punctuation) are picked up by scanning the raw lowercased text with one
//! alternation regex per category. The table is data so categories can be
//! extended without touching the extraction code.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    pub category: String,
    /// Regex fragments, combined as `\b(?:a|b|c)\b` at compile time.
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalTaxonomy {
    pub categories: Vec<TaxonomyCategory>,
}

impl Default for TechnicalTaxonomy {
    fn default() -> Self {
        let category = |name: &str, patterns: &[&str]| TaxonomyCategory {
            category: name.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        };
        Self {
            categories: vec![
                category(
                    "technology",
                    &[
                        "python",
                        "java",
                        "javascript",
                        "react",
                        "angular",
                        "vue",
                        "node",
                        "sql",
                        "mongodb",
                        "aws",
                        "azure",
                        "docker",
                        "kubernetes",
                    ],
                ),
                category(
                    "discipline",
                    &[
                        "machine learning",
                        "data science",
                        "artificial intelligence",
                        "deep learning",
                    ],
                ),
                category(
                    "methodology",
                    &["project management", "agile", "scrum", "devops", "ci/cd"],
                ),
                category(
                    "qualification",
                    &[
                        "bachelor",
                        "master",
                        "degree",
                        "certification",
                        r"years?\s+experience",
                    ],
                ),
            ],
        }
    }
}

impl TechnicalTaxonomy {
    pub fn compile(&self) -> Result<CompiledTaxonomy, regex::Error> {
        let categories = self
            .categories
            .iter()
            .map(|c| {
                let pattern = format!(r"\b(?:{})\b", c.patterns.join("|"));
                Ok(CompiledCategory {
                    category: c.category.clone(),
                    matcher: Regex::new(&pattern)?,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(CompiledTaxonomy { categories })
    }
}

#[derive(Debug, Clone)]
pub struct CompiledTaxonomy {
    categories: Vec<CompiledCategory>,
}

#[derive(Debug, Clone)]
struct CompiledCategory {
    #[allow(dead_code)]
    category: String,
    matcher: Regex,
}

impl CompiledTaxonomy {
    /// Returns every taxonomy term found in `lowered_text`, in scan order.
    /// Duplicates are kept; callers dedup.
    pub fn matches(&self, lowered_text: &str) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.matcher.find_iter(lowered_text))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
