//! Stopword set used to filter job-description tokens.
//!
//! The default list comes from the `stop_words` crate (English). Deployments
//! can swap in a domain-tuned list via a plain-text file, one word per line;
//! lines starting with `#` are comments.

use std::collections::HashSet;
use std::path::Path;

use stop_words::LANGUAGE;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Builds the set from the bundled English list.
    pub fn builtin() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .into_iter()
            .map(|w| w.to_lowercase())
            .collect();
        Self { words }
    }

    /// Builds the set from newline-separated words.
    pub fn from_lines(lines: &str) -> Self {
        let words = lines
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// Loads the set from `path` when given, falling back to the bundled
    /// list if the file is missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match std::fs::read_to_string(path) {
                Ok(contents) => {
                    let set = Self::from_lines(&contents);
                    info!("Loaded {} stopwords from {}", set.len(), path.display());
                    set
                }
                Err(e) => {
                    warn!(
                        "Failed to read stopword file {}: {e}; using the bundled list",
                        path.display()
                    );
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_contains_common_function_words() {
        let set = StopwordSet::builtin();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.len() > 100);
    }

    #[test]
    fn test_builtin_keeps_domain_terms() {
        let set = StopwordSet::builtin();
        assert!(!set.contains("python"));
        assert!(!set.contains("docker"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let set = StopwordSet::from_lines("the\nand");
        assert!(set.contains("The"));
        assert!(set.contains("AND"));
        assert!(!set.contains("python"));
    }

    #[test]
    fn test_from_lines_skips_blanks_and_comments() {
        let set = StopwordSet::from_lines("# recruiting boilerplate\nlooking\n\n  required  \n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("looking"));
        assert!(set.contains("required"));
    }

    #[test]
    fn test_load_reads_file_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbravo").unwrap();
        let set = StopwordSet::load(Some(file.path()));
        assert_eq!(set.len(), 2);
        assert!(set.contains("alpha"));
    }

    #[test]
    fn test_load_falls_back_on_missing_file() {
        let set = StopwordSet::load(Some(Path::new("/nonexistent/stopwords.txt")));
        assert!(set.contains("the"));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        let set = StopwordSet::load(None);
        assert!(set.contains("and"));
    }
}
