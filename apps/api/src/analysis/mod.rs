// Analysis pipeline: resume extraction, deterministic scoring, LLM
// evaluations, stored history, enhancement, and the downloadable report.
// All LLM calls go through llm_client; all scoring goes through scoring.

pub mod extraction;
pub mod handlers;
pub mod history;
pub mod narrative;
pub mod pipeline;
pub mod prompts;
pub mod report;
