#![allow(dead_code)] // each harness uses a different subset of the helpers
//! Shared test utilities for ansa integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. All helpers are deterministic — the matcher has no
//! clock, randomness, or I/O.

pub mod builders;

#[allow(unused_imports)]
pub use builders::*;
