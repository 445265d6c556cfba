//! Text normalization and word splitting shared by keyword extraction.

/// Lowercases the text, replaces every non-word character (anything that is
/// not alphanumeric or `_`) with whitespace, and splits on whitespace.
/// Token order follows the source text.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let normalized: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();
    normalized
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
