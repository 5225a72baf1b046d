//! File hint evaluation tools for hintbench.
//!
//! This crate provides:
//! - The precision/recall scoring engine matching file hints against oracle
//!   patch files
//! - Aggregate metrics over assessed results
//! - JSON loaders for benchmark examples and hint files

pub mod dataset;
pub mod hint_eval;
pub mod summary;

pub use hint_eval::{evaluate_file_hints, precision, recall};
pub use summary::{EvaluationResults, Metrics};
