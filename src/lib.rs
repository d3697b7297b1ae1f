//! ansa — terminal support assistant for healthcare-automation Q&A.
//!
//! A free-text question is matched against a fixed table of product facts;
//! the closest entry's answer comes back when the similarity clears a fixed
//! threshold, the fallback message otherwise. This crate re-exports the
//! public surface of the member crates so integration tests and downstream
//! users can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Matcher ──► TUI / CLI
//! ```
//!
//! The dataset is loaded once at start-up and never mutated; the matcher is
//! a pure function over it. The UI calls [`Matcher::answer`] once per
//! submission and appends the reply to the session's display list.

pub use ansa_core::{
    config::Config,
    dataset::{Dataset, DatasetError},
    matcher::{Matcher, DEFAULT_THRESHOLD, FALLBACK},
    normalize::Normalizer,
    similarity,
    types::{QaEntry, Reply},
};
pub use ansa_tui::{run, App, WELCOME};
