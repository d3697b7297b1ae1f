//! The matcher — the one piece of real logic in the system.
//!
//! [`Matcher::answer`] scores a free-text query against every stored
//! question with [`similarity::token_set_ratio`] and returns the best
//! entry's answer when the score clears the threshold, otherwise the
//! fallback string. Pure given (query, dataset, threshold): no I/O, no
//! interior mutability, safe to call from anywhere.

use crate::dataset::Dataset;
use crate::normalize::Normalizer;
use crate::similarity;
use crate::types::Reply;

/// Default minimum similarity for a confident match, on the `[0, 1]` scale.
/// The boundary is inclusive: a score exactly at the threshold matches.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Returned when no stored question is close enough to the query.
pub const FALLBACK: &str = "I'm a specialized assistant for Thoughtful AI's healthcare \
     automation agents. I can help you learn about EVA, CAM, PHIL, and other Thoughtful AI \
     services. Could you ask me something specific about our agents?";

/// Answers queries against a fixed dataset.
///
/// Stored questions are normalised and tokenised once at construction; each
/// [`answer`](Matcher::answer) call normalises only the query.
#[derive(Debug)]
pub struct Matcher {
    dataset: Dataset,
    /// Token lists of the stored questions, index-aligned with the dataset.
    question_tokens: Vec<Vec<String>>,
    threshold: f64,
    fallback: String,
    normalizer: Normalizer,
}

impl Matcher {
    pub fn new(dataset: Dataset, threshold: f64) -> Self {
        let normalizer = Normalizer::new();
        let question_tokens = dataset
            .entries()
            .iter()
            .map(|e| normalizer.tokens(&e.question))
            .collect();
        Self {
            dataset,
            question_tokens,
            threshold,
            fallback: FALLBACK.to_string(),
            normalizer,
        }
    }

    /// Replace the fallback string.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Answer one query.
    ///
    /// Every input produces a reply: the best-scoring entry's answer when
    /// its score is at or above the threshold, the fallback otherwise. Ties
    /// for the best score resolve to the earliest entry in dataset order.
    pub fn answer(&self, query: &str) -> Reply {
        let query_tokens = self.normalizer.tokens(query);

        let mut best_index = 0;
        let mut best_score = -1.0;
        for (index, tokens) in self.question_tokens.iter().enumerate() {
            let score = similarity::token_set_ratio(&query_tokens, tokens);
            // Strict comparison keeps the earliest entry on ties.
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        if best_score >= self.threshold {
            let entry = &self.dataset.entries()[best_index];
            Reply {
                answer: entry.answer.clone(),
                matched: true,
                score: best_score,
                question: Some(entry.question.clone()),
            }
        } else {
            Reply {
                answer: self.fallback.clone(),
                matched: false,
                score: best_score,
                question: None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QaEntry;

    fn matcher() -> Matcher {
        Matcher::new(Dataset::builtin(), DEFAULT_THRESHOLD)
    }

    #[test]
    fn stored_question_returns_its_answer() {
        let m = matcher();
        let entry = m.dataset().entries()[0].clone();
        let reply = m.answer(&entry.question);
        assert!(reply.matched);
        assert_eq!(reply.answer, entry.answer);
        assert_eq!(reply.question.as_deref(), Some(entry.question.as_str()));
    }

    #[test]
    fn paraphrase_matches_the_closest_entry() {
        let reply = matcher().answer("What does EVA do?");
        assert!(reply.matched);
        assert!(reply.answer.starts_with("EVA automates"));
    }

    #[test]
    fn unrelated_query_falls_back() {
        let reply = matcher().answer("tell me about the weather");
        assert!(!reply.matched);
        assert_eq!(reply.answer, FALLBACK);
        assert!(reply.question.is_none());
    }

    #[test]
    fn empty_query_falls_back() {
        let reply = matcher().answer("");
        assert!(!reply.matched);
        assert_eq!(reply.answer, FALLBACK);
    }

    #[test]
    fn tie_break_prefers_the_earlier_entry() {
        let dataset = Dataset::from_entries(vec![
            QaEntry::new("What is ansa?", "first"),
            QaEntry::new("What is ansa?", "second"),
        ])
        .unwrap();
        let m = Matcher::new(dataset, DEFAULT_THRESHOLD);
        assert_eq!(m.answer("what is ansa").answer, "first");
    }

    #[test]
    fn custom_fallback_is_used() {
        let m = matcher().with_fallback("try again");
        assert_eq!(m.answer("qwertyuiop").answer, "try again");
    }

    #[test]
    fn threshold_of_one_accepts_only_exact_matches() {
        let m = Matcher::new(Dataset::builtin(), 1.0);
        assert!(m.answer("What does the claims processing agent (CAM) do?").matched);
        assert!(!m.answer("What does CAM do?").matched);
    }
}
