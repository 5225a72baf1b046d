//! Precision/recall scoring of file hints against oracle patch files
//!
//! A file hint means "these are the files to modify for this request". For
//! metric background: <https://en.wikipedia.org/wiki/Precision_and_recall>.
//!
//! Precision and recall are undefined at 0/0; this module pins the
//! degenerate cases down: an empty hint set scores precision 1.0 only when
//! the oracle is also empty (correctly predicting nothing is needed) and
//! 0.0 otherwise, while an empty oracle scores recall 1.0 unconditionally
//! (nothing to find, so nothing was missed).

use std::collections::HashSet;

use hintbench_core::bench::{BenchExample, FileHint, FileHintAssessed};
use tracing::debug;

/// For every hint with a matching example, calculate precision and recall.
///
/// Matching is by `id`, one assessed result per (hint, example) match, in
/// hint input order. Files in the example's test patch are removed from the
/// hint set before scoring: recommending a test file is neither rewarded
/// nor penalized. Hints whose `id` matches no example produce no result.
///
/// Pure function over its inputs; never fails.
pub fn evaluate_file_hints(
    examples: &[BenchExample],
    hints: &[FileHint],
) -> Vec<FileHintAssessed> {
    let mut assessed = Vec::new();
    for hint in hints {
        let mut matched = false;
        for example in examples.iter().filter(|e| e.id == hint.id) {
            matched = true;
            // Ignore test patch files
            let test_patch_files: HashSet<&str> = example
                .test_patch_files
                .iter()
                .map(String::as_str)
                .collect();
            let effective_hints: HashSet<String> = hint
                .hint_files
                .iter()
                .filter(|f| !test_patch_files.contains(f.as_str()))
                .cloned()
                .collect();
            assessed.push(FileHintAssessed {
                id: hint.id.clone(),
                hint_files: hint.hint_files.clone(),
                patch_files: example.patch_files.clone(),
                test_patch_files: example.test_patch_files.clone(),
                precision: precision(example, &effective_hints),
                recall: recall(example, &effective_hints),
            });
        }
        if !matched {
            debug!(hint_id = %hint.id, "no example matches hint id, skipping");
        }
    }
    assessed
}

/// Fraction of recommended files that the reference fix actually modified.
///
/// An empty hint set yields 1.0 when the oracle is empty too, else 0.0.
pub fn precision(example: &BenchExample, effective_hints: &HashSet<String>) -> f64 {
    if effective_hints.is_empty() {
        return if example.patch_files.is_empty() {
            1.0
        } else {
            0.0
        };
    }
    let patch_files: HashSet<&str> = example.patch_files.iter().map(String::as_str).collect();
    let true_positives = effective_hints
        .iter()
        .filter(|f| patch_files.contains(f.as_str()))
        .count();
    true_positives as f64 / effective_hints.len() as f64
}

/// Fraction of actually-modified files that were recommended.
///
/// An empty oracle yields 1.0 regardless of the hints.
pub fn recall(example: &BenchExample, effective_hints: &HashSet<String>) -> f64 {
    let patch_files: HashSet<&str> = example.patch_files.iter().map(String::as_str).collect();
    if patch_files.is_empty() {
        return 1.0;
    }
    let true_positives = patch_files
        .iter()
        .filter(|f| effective_hints.contains(**f))
        .count();
    true_positives as f64 / patch_files.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn example(patch_files: &[&str], test_patch_files: &[&str]) -> BenchExample {
        BenchExample {
            id: "task-1".to_string(),
            repo: "owner/repo".to_string(),
            base_commit: "deadbeef".to_string(),
            patch_files: patch_files.iter().map(|s| s.to_string()).collect(),
            test_patch_files: test_patch_files.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn hint_set(files: &[&str]) -> HashSet<String> {
        files.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_precision_empty_hints_nonempty_oracle_is_zero() {
        let e = example(&["f1", "f2", "f3"], &[]);
        assert_eq!(precision(&e, &hint_set(&[])), 0.0);
    }

    #[test]
    fn test_precision_empty_hints_empty_oracle_is_one() {
        let e = example(&[], &[]);
        assert_eq!(precision(&e, &hint_set(&[])), 1.0);
    }

    #[test]
    fn test_recall_empty_oracle_is_one_regardless_of_hints() {
        let e = example(&[], &[]);
        assert_eq!(recall(&e, &hint_set(&[])), 1.0);
        assert_eq!(recall(&e, &hint_set(&["anything", "at", "all"])), 1.0);
    }

    #[test]
    fn test_exact_match_scores_one_on_both() {
        let e = example(&["f1", "f2"], &[]);
        let hints = hint_set(&["f1", "f2"]);
        assert_eq!(precision(&e, &hints), 1.0);
        assert_eq!(recall(&e, &hints), 1.0);
    }

    #[test]
    fn test_partial_overlap() {
        let e = example(&["f1", "f2", "f3", "f4"], &[]);
        let hints = hint_set(&["f1", "f2", "wrong1", "wrong2"]);
        assert_eq!(precision(&e, &hints), 0.5);
        assert_eq!(recall(&e, &hints), 0.5);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let cases = [
            (example(&[], &[]), hint_set(&[])),
            (example(&[], &[]), hint_set(&["a"])),
            (example(&["a"], &[]), hint_set(&[])),
            (example(&["a", "b"], &[]), hint_set(&["a", "c", "d"])),
        ];
        for (e, hints) in &cases {
            let p = precision(e, hints);
            let r = recall(e, hints);
            assert!((0.0..=1.0).contains(&p), "precision {p} out of range");
            assert!((0.0..=1.0).contains(&r), "recall {r} out of range");
        }
    }

    #[test]
    fn test_duplicate_oracle_entries_collapse_in_recall_denominator() {
        let e = example(&["f1", "f1", "f2"], &[]);
        let hints = hint_set(&["f1"]);
        assert_eq!(recall(&e, &hints), 0.5);
    }

    #[test]
    fn test_evaluate_excludes_test_files_before_scoring() {
        let e = example(&["f1", "f2"], &["t1"]);
        let with_test = FileHint {
            id: "task-1".to_string(),
            hint_files: vec![
                "f1".to_string(),
                "f2".to_string(),
                "t1".to_string(),
            ],
        };
        let without_test = FileHint {
            id: "task-1".to_string(),
            hint_files: vec!["f1".to_string(), "f2".to_string()],
        };
        let results = evaluate_file_hints(
            std::slice::from_ref(&e),
            &[with_test.clone(), without_test],
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].precision, results[1].precision);
        assert_eq!(results[0].recall, results[1].recall);
        // The original recommendation is carried through unfiltered
        assert_eq!(results[0].hint_files, with_test.hint_files);
    }

    #[test]
    fn test_evaluate_output_follows_hint_order() {
        let examples = vec![
            example(&["f1"], &[]),
            BenchExample {
                id: "task-2".to_string(),
                ..example(&["g1"], &[])
            },
        ];
        let hints = vec![
            FileHint {
                id: "task-2".to_string(),
                hint_files: vec!["g1".to_string()],
            },
            FileHint {
                id: "task-1".to_string(),
                hint_files: vec![],
            },
        ];
        let results = evaluate_file_hints(&examples, &hints);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "task-2");
        assert_eq!(results[1].id, "task-1");
    }

    #[test]
    fn test_evaluate_unmatched_hint_produces_no_record() {
        let examples = vec![example(&["f1"], &[])];
        let hints = vec![FileHint {
            id: "no-such-task".to_string(),
            hint_files: vec!["f1".to_string()],
        }];
        assert!(evaluate_file_hints(&examples, &hints).is_empty());
    }

    #[test]
    fn test_evaluate_duplicate_example_ids_each_produce_a_record() {
        // The join does not assume id uniqueness: one result per match.
        let examples = vec![example(&["f1"], &[]), example(&["f2"], &[])];
        let hints = vec![FileHint {
            id: "task-1".to_string(),
            hint_files: vec!["f1".to_string()],
        }];
        let results = evaluate_file_hints(&examples, &hints);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].precision, 1.0);
        assert_eq!(results[1].precision, 0.0);
    }

    #[test]
    fn test_evaluate_duplicate_hint_files_collapse() {
        let e = example(&["f1", "f2"], &[]);
        let hints = vec![FileHint {
            id: "task-1".to_string(),
            hint_files: vec!["f1".to_string(), "f1".to_string(), "f1".to_string()],
        }];
        let results = evaluate_file_hints(std::slice::from_ref(&e), &hints);
        assert_eq!(results.len(), 1);
        // Three copies of one correct file are a single true positive
        assert_eq!(results[0].precision, 1.0);
        assert_eq!(results[0].recall, 0.5);
    }

    #[test]
    fn test_evaluate_leaves_inputs_untouched() {
        let examples = vec![example(&["f1"], &["t1"])];
        let hints = vec![FileHint {
            id: "task-1".to_string(),
            hint_files: vec!["t1".to_string(), "f1".to_string()],
        }];
        let examples_before = examples.clone();
        let hints_before = hints.clone();
        let _ = evaluate_file_hints(&examples, &hints);
        assert_eq!(examples, examples_before);
        assert_eq!(hints, hints_before);
    }
}
