//! The question/answer dataset.
//!
//! The product-fact table is embedded in the binary so the assistant works
//! without any files on disk. [`Dataset::load`] additionally merges entries
//! from `~/.config/ansa/dataset.json` when that file exists, using the same
//! JSON shape as the embedded table:
//!
//! ```json
//! { "questions": [ { "question": "…", "answer": "…" } ] }
//! ```
//!
//! Validation is the one hard failure in the whole system: an empty dataset
//! or a blank question/answer is a configuration error and is rejected at
//! start-up.

use crate::types::QaEntry;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded product facts
// ---------------------------------------------------------------------------

const BUILTIN: &[(&str, &str)] = &[
    (
        "What does the eligibility verification agent (EVA) do?",
        "EVA automates the process of verifying a patient's eligibility and benefits \
         information in real-time, eliminating manual data entry errors and reducing \
         claim rejections.",
    ),
    (
        "What does the claims processing agent (CAM) do?",
        "CAM streamlines the submission and management of claims, improving accuracy, \
         reducing manual intervention, and accelerating reimbursements.",
    ),
    (
        "How does the payment posting agent (PHIL) work?",
        "PHIL automates the posting of payments to patient accounts, ensuring fast, \
         accurate reconciliation of payments and reducing administrative burden.",
    ),
    (
        "Tell me about Thoughtful AI's Agents.",
        "Thoughtful AI provides a suite of AI-powered automation agents designed to \
         streamline healthcare processes. These include Eligibility Verification (EVA), \
         Claims Processing (CAM), and Payment Posting (PHIL), among others.",
    ),
    (
        "What are the benefits of using Thoughtful AI's agents?",
        "Using Thoughtful AI's Agents can significantly reduce administrative costs, \
         improve operational efficiency, and reduce errors in critical processes like \
         claims management and payment posting.",
    ),
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Start-up dataset failures. These are configuration errors — once a
/// [`Dataset`] exists, no further failure modes remain.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset contains no entries")]
    Empty,
    #[error("dataset entry {index} has a blank question")]
    BlankQuestion { index: usize },
    #[error("dataset entry {index} has a blank answer")]
    BlankAnswer { index: usize },
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset file: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Validated, ordered, read-only collection of [`QaEntry`] values.
///
/// Construction is the only place invariants are checked; every instance is
/// guaranteed non-empty with non-blank questions and answers, in a stable
/// order that the matcher's tie-break relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    entries: Vec<QaEntry>,
}

/// On-disk shape of the user dataset file.
#[derive(Debug, Deserialize)]
struct UserDataset {
    questions: Vec<QaEntry>,
}

impl Dataset {
    /// Validate and wrap a list of entries.
    pub fn from_entries(entries: Vec<QaEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.question.trim().is_empty() {
                return Err(DatasetError::BlankQuestion { index });
            }
            if entry.answer.trim().is_empty() {
                return Err(DatasetError::BlankAnswer { index });
            }
        }
        Ok(Self { entries })
    }

    /// The embedded product-fact table.
    pub fn builtin() -> Self {
        Self::from_entries(builtin_entries()).expect("embedded dataset must be valid")
    }

    /// Builtin entries extended by the user dataset file, if present.
    pub fn load() -> Result<Self, DatasetError> {
        Self::load_from(dataset_path())
    }

    /// Builtin entries extended by the file at `path`, if it exists.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let mut entries = builtin_entries();
        let path = path.as_ref();
        if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let user: UserDataset = serde_json::from_str(&raw)?;
            entries.extend(user.questions);
        }
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored questions in dataset order, for display.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }
}

fn builtin_entries() -> Vec<QaEntry> {
    BUILTIN
        .iter()
        .map(|(q, a)| QaEntry::new(*q, *a))
        .collect()
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn dataset_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ansa")
        .join("dataset.json")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_non_empty_and_well_formed() {
        let ds = Dataset::builtin();
        assert_eq!(ds.len(), 5);
        for entry in ds.entries() {
            assert!(!entry.question.trim().is_empty());
            assert!(!entry.answer.trim().is_empty());
        }
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(
            Dataset::from_entries(Vec::new()),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn blank_question_is_rejected() {
        let entries = vec![QaEntry::new("ok?", "yes"), QaEntry::new("   ", "orphan")];
        assert!(matches!(
            Dataset::from_entries(entries),
            Err(DatasetError::BlankQuestion { index: 1 })
        ));
    }

    #[test]
    fn blank_answer_is_rejected() {
        let entries = vec![QaEntry::new("ok?", "")];
        assert!(matches!(
            Dataset::from_entries(entries),
            Err(DatasetError::BlankAnswer { index: 0 })
        ));
    }

    #[test]
    fn missing_user_file_falls_back_to_builtin() {
        let ds = Dataset::load_from("/nonexistent/ansa/dataset.json").unwrap();
        assert_eq!(ds, Dataset::builtin());
    }
}
