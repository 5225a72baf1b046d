//! Benchmark records: ground-truth examples, file hints, and assessed results
//!
//! A file hint answers "which files should be edited to resolve this task?".
//! The records here carry one benchmark task's ground truth, one candidate
//! recommendation for it, and the scored pairing of the two.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patch::patch_file_paths;

/// Ground truth for one benchmark task
///
/// `patch_files` lists the paths modified by the reference fix;
/// `test_patch_files` lists the paths modified by its accompanying tests.
/// Either list may be empty. Records are immutable once constructed and
/// `id` is expected to be unique within one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchExample {
    pub id: String,
    pub repo: String,
    pub base_commit: String,
    pub patch_files: Vec<String>,
    pub test_patch_files: Vec<String>,
}

impl BenchExample {
    /// Construct a validated example from its fields
    pub fn new(
        id: impl Into<String>,
        repo: impl Into<String>,
        base_commit: impl Into<String>,
        patch_files: Vec<String>,
        test_patch_files: Vec<String>,
    ) -> Result<Self> {
        let example = Self {
            id: id.into(),
            repo: repo.into(),
            base_commit: base_commit.into(),
            patch_files,
            test_patch_files,
        };
        example.validate()?;
        Ok(example)
    }

    /// Construct an example from the task's recorded unified-diff patches
    ///
    /// The fix patch and the test patch are scanned independently for their
    /// `+++ b/` target paths.
    pub fn from_patch_text(
        id: impl Into<String>,
        repo: impl Into<String>,
        base_commit: impl Into<String>,
        patch: &str,
        test_patch: &str,
    ) -> Result<Self> {
        Self::new(
            id,
            repo,
            base_commit,
            patch_file_paths(patch),
            patch_file_paths(test_patch),
        )
    }

    /// Check record well-formedness
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::invalid_input("BenchExample id cannot be empty"));
        }
        Ok(())
    }
}

/// Recommendation of files to edit for one benchmark task
///
/// `hint_files` may be empty or contain duplicates; duplicates collapse
/// during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHint {
    pub id: String,
    pub hint_files: Vec<String>,
}

impl FileHint {
    /// Construct a validated hint
    pub fn new(id: impl Into<String>, hint_files: Vec<String>) -> Result<Self> {
        let hint = Self {
            id: id.into(),
            hint_files,
        };
        hint.validate()?;
        Ok(hint)
    }

    /// Check record well-formedness
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::invalid_input("FileHint id cannot be empty"));
        }
        Ok(())
    }
}

/// Scored pairing of one hint with its matching example
///
/// Inputs are carried through unfiltered for traceability; `hint_files` is
/// the original recommendation, before test-file exclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileHintAssessed {
    pub id: String,
    pub hint_files: Vec<String>,
    pub patch_files: Vec<String>,
    pub test_patch_files: Vec<String>,
    pub precision: f64,
    pub recall: f64,
}
