//! Query and question normalisation.
//!
//! Both sides of every comparison pass through the same pipeline: lowercase,
//! strip punctuation, collapse whitespace runs, trim. Nothing smarter — no
//! stemming, no stop-word removal.

use regex::Regex;

/// Text normaliser with its regexes compiled once at construction.
///
/// Build one and share it; construction compiles the punctuation pattern,
/// after which every call is allocation-plus-scan only.
#[derive(Debug)]
pub struct Normalizer {
    punctuation: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            punctuation: Regex::new(r"[^\w\s]")
                .expect("embedded punctuation pattern must be a valid regex"),
        }
    }

    /// Normalise a string: lowercase, punctuation stripped, single spaces,
    /// trimmed.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.punctuation.replace_all(&lowered, "");
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Normalise and split into tokens. Empty input yields an empty list.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.punctuation.replace_all(&lowered, "");
        stripped.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("  What Does EVA Do  "), "what does eva do");
    }

    #[test]
    fn strips_punctuation() {
        let n = Normalizer::new();
        assert_eq!(
            n.normalize("What does the eligibility verification agent (EVA) do?"),
            "what does the eligibility verification agent eva do"
        );
    }

    #[test]
    fn apostrophes_collapse_into_the_word() {
        let n = Normalizer::new();
        assert_eq!(
            n.normalize("Thoughtful AI's agents."),
            "thoughtful ais agents"
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("tell\t me   about\n CAM"), "tell me about cam");
    }

    #[test]
    fn tokens_split_on_whitespace() {
        let n = Normalizer::new();
        assert_eq!(n.tokens("How does PHIL work?"), ["how", "does", "phil", "work"]);
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        let n = Normalizer::new();
        assert!(n.tokens("").is_empty());
        assert!(n.tokens("   \t\n").is_empty());
        assert!(n.tokens("?!...").is_empty());
    }
}
