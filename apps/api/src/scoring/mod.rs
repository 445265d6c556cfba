// Scoring engine: keyword extraction, keyword matching, heuristic sub-scores.
// Pure and deterministic. No I/O happens here; stopwords and the taxonomy
// are loaded once at startup and passed in.

pub mod engine;
pub mod keywords;
pub mod matcher;
pub mod stopwords;
pub mod subscores;
pub mod taxonomy;
pub mod tokenizer;

pub use engine::{AtsScorer, ScoreBreakdown};
pub use stopwords::StopwordSet;
