//! Hint providers: injected handles that recommend files to edit
//!
//! A provider is an explicitly constructed handle passed to its callers,
//! with caller-managed lifetime. Nothing here reaches for a process-wide
//! client behind a lock.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tracing::{debug, warn};

use hintbench_core::bench::FileHint;

use crate::error::{AssistantError, Result};
use crate::retry::{retry, RetryPolicy};

/// One benchmark task put to a provider
#[derive(Debug, Clone)]
pub struct HintTask {
    pub id: String,
    pub problem_statement: String,
}

impl HintTask {
    pub fn new(id: impl Into<String>, problem_statement: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            problem_statement: problem_statement.into(),
        }
    }
}

/// A service that recommends files to edit for a problem statement
#[async_trait]
pub trait HintProvider: Send + Sync {
    /// Recommend files to edit for one task
    async fn recommend_files(&self, task: &HintTask) -> Result<Vec<String>>;
}

/// Produce one hint per task, retrying transient provider failures.
///
/// Tasks whose calls still fail after the retry budget are dropped with a
/// warning; the batch itself never fails. Output order follows task order.
pub async fn gather_hints(
    provider: &dyn HintProvider,
    policy: &RetryPolicy,
    tasks: &[HintTask],
) -> Vec<FileHint> {
    let mut hints = Vec::new();
    for task in tasks {
        let outcome = retry(policy, AssistantError::is_transient, || {
            provider.recommend_files(task)
        })
        .await;
        match outcome {
            Ok(hint_files) => {
                debug!(task_id = %task.id, files = hint_files.len(), "recommendation received");
                hints.push(FileHint {
                    id: task.id.clone(),
                    hint_files,
                });
            }
            Err(e) => {
                warn!(task_id = %task.id, "dropping task after failed recommendation: {e}");
            }
        }
    }
    hints
}

/// Scripted provider for tests and offline runs
#[derive(Debug, Default)]
pub struct MockHintProvider {
    responses: HashMap<String, Vec<String>>,
    // Remaining rate-limit rejections to serve per task id
    transient_failures: Mutex<HashMap<String, usize>>,
}

impl MockHintProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the file list returned for a task id
    pub fn with_response(mut self, id: impl Into<String>, files: Vec<String>) -> Self {
        self.responses.insert(id.into(), files);
        self
    }

    /// Script `count` rate-limit rejections for a task id before it succeeds
    pub fn with_transient_failures(self, id: impl Into<String>, count: usize) -> Self {
        self.transient_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), count);
        self
    }
}

#[async_trait]
impl HintProvider for MockHintProvider {
    async fn recommend_files(&self, task: &HintTask) -> Result<Vec<String>> {
        {
            let mut failures = self
                .transient_failures
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(remaining) = failures.get_mut(&task.id) {
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(AssistantError::RateLimited(format!(
                        "scripted rejection for {}",
                        task.id
                    )));
                }
            }
        }
        self.responses
            .get(&task.id)
            .cloned()
            .ok_or_else(|| AssistantError::Provider(format!("no scripted response for {}", task.id)))
    }
}
