//! ansa-core — dataset and matching logic for the ansa support assistant.
//!
//! This crate holds everything that is not terminal UI: the embedded
//! question/answer dataset, text normalisation, string similarity, the
//! matcher, and configuration.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Matcher ──► UI / CLI
//! ```
//!
//! The dataset is loaded once at start-up and never mutated; the matcher is
//! a pure function over it. The UI layers (ansa-tui, the CLI one-shot mode)
//! call [`Matcher::answer`](matcher::Matcher::answer) once per submission
//! and render the returned [`Reply`](types::Reply).

pub mod config;
pub mod dataset;
pub mod matcher;
pub mod normalize;
pub mod similarity;
pub mod types;

pub use dataset::{Dataset, DatasetError};
pub use matcher::Matcher;
pub use types::{QaEntry, Reply};
