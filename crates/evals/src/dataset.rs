//! JSON loaders for benchmark examples and file hints
//!
//! The evaluator operates on in-memory collections; these helpers read the
//! JSON files an external harness produces (benchmark rows reduced to their
//! patch file lists, and recommendation runs reduced to hint file lists).
//! Each record is validated at load time so malformed input fails here, not
//! inside scoring.

use std::path::Path;

use anyhow::{Context, Result};
use hintbench_core::bench::{BenchExample, FileHint};

/// Load benchmark examples from a JSON array file
pub fn load_examples(path: &Path) -> Result<Vec<BenchExample>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read examples file: {}", path.display()))?;
    let examples: Vec<BenchExample> =
        serde_json::from_str(&content).context("Failed to parse examples JSON")?;
    for (i, example) in examples.iter().enumerate() {
        example
            .validate()
            .with_context(|| format!("Invalid example at index {i}"))?;
    }
    Ok(examples)
}

/// Load file hints from a JSON array file
pub fn load_hints(path: &Path) -> Result<Vec<FileHint>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hints file: {}", path.display()))?;
    let hints: Vec<FileHint> =
        serde_json::from_str(&content).context("Failed to parse hints JSON")?;
    for (i, hint) in hints.iter().enumerate() {
        hint.validate()
            .with_context(|| format!("Invalid hint at index {i}"))?;
    }
    Ok(hints)
}
