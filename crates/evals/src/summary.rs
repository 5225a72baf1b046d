//! Aggregate metrics over assessed hint evaluations

use hintbench_core::bench::FileHintAssessed;
use serde::Serialize;

/// Accumulator for assessed results across an evaluation run
#[derive(Debug, Default)]
pub struct EvaluationResults {
    assessed: Vec<FileHintAssessed>,
}

/// Computed metrics for an evaluation run
#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub total_hints: usize,
    pub mean_precision: f64,
    pub mean_recall: f64,
    /// Results with precision == 1.0
    pub perfect_precision: usize,
    /// Results with recall == 1.0
    pub perfect_recall: usize,
}

impl EvaluationResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one assessed result
    pub fn record(&mut self, result: FileHintAssessed) {
        self.assessed.push(result);
    }

    /// Record a batch of assessed results
    pub fn extend(&mut self, results: impl IntoIterator<Item = FileHintAssessed>) {
        self.assessed.extend(results);
    }

    pub fn len(&self) -> usize {
        self.assessed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessed.is_empty()
    }

    /// Access the recorded results
    pub fn assessed(&self) -> &[FileHintAssessed] {
        &self.assessed
    }

    /// Compute aggregate metrics over all recorded results
    ///
    /// An empty accumulator yields zeroed metrics rather than NaN means.
    pub fn compute_metrics(&self) -> Metrics {
        let total = self.assessed.len();
        if total == 0 {
            return Metrics {
                total_hints: 0,
                mean_precision: 0.0,
                mean_recall: 0.0,
                perfect_precision: 0,
                perfect_recall: 0,
            };
        }

        let precision_sum: f64 = self.assessed.iter().map(|a| a.precision).sum();
        let recall_sum: f64 = self.assessed.iter().map(|a| a.recall).sum();

        Metrics {
            total_hints: total,
            mean_precision: precision_sum / total as f64,
            mean_recall: recall_sum / total as f64,
            perfect_precision: self.assessed.iter().filter(|a| a.precision == 1.0).count(),
            perfect_recall: self.assessed.iter().filter(|a| a.recall == 1.0).count(),
        }
    }

    /// Print a human-readable metrics block to stdout
    pub fn print_metrics(&self) {
        let metrics = self.compute_metrics();
        println!("  Hints assessed:    {}", metrics.total_hints);
        println!(
            "  Mean precision:    {:.1}%",
            metrics.mean_precision * 100.0
        );
        println!("  Mean recall:       {:.1}%", metrics.mean_recall * 100.0);
        println!(
            "  Perfect precision: {}/{}",
            metrics.perfect_precision, metrics.total_hints
        );
        println!(
            "  Perfect recall:    {}/{}",
            metrics.perfect_recall, metrics.total_hints
        );
    }
}
