//! Core types for ansa-core.
//!
//! This module defines the fundamental data structures shared across all
//! layers: the stored [`QaEntry`] and the [`Reply`] the matcher produces for
//! every query.

use serde::{Deserialize, Serialize};

/// A single stored question/answer pair.
///
/// Entries are defined at build time (or read from the user dataset file at
/// start-up) and never mutated afterwards. Questions need not be unique;
/// when two entries score identically the earlier one in dataset order wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    /// The canonical phrasing of the question.
    pub question: String,
    /// The answer returned verbatim when this entry is the best match.
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The matcher's response to one query.
///
/// Every query produces a `Reply` — there are no error outcomes. A reply is
/// either a confident match (`matched = true`, `question` names the stored
/// entry) or the fallback (`matched = false`, `question` is `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// The answer text: the matched entry's answer, or the fallback string.
    pub answer: String,
    /// Whether the best similarity score cleared the threshold.
    pub matched: bool,
    /// The best similarity score found, in `[0, 1]`, even when below the
    /// threshold.
    pub score: f64,
    /// The stored question that produced the answer, when matched.
    pub question: Option<String>,
}
