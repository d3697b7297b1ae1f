//! Builders for datasets and matchers used across the harnesses.

use ansa_core::{
    dataset::Dataset,
    matcher::{Matcher, DEFAULT_THRESHOLD},
    types::QaEntry,
};

/// Build a single entry.
pub fn entry(question: &str, answer: &str) -> QaEntry {
    QaEntry::new(question, answer)
}

/// Build a validated dataset from literal pairs. Panics on invalid input —
/// harnesses construct only well-formed datasets through this helper.
pub fn dataset(pairs: &[(&str, &str)]) -> Dataset {
    Dataset::from_entries(pairs.iter().map(|(q, a)| entry(q, a)).collect())
        .expect("test dataset must be valid")
}

/// A matcher over the embedded product facts at the default threshold.
pub fn builtin_matcher() -> Matcher {
    Matcher::new(Dataset::builtin(), DEFAULT_THRESHOLD)
}

/// A matcher over literal pairs at an explicit threshold.
pub fn matcher_with(pairs: &[(&str, &str)], threshold: f64) -> Matcher {
    Matcher::new(dataset(pairs), threshold)
}
