//! Unified-diff scanning for changed file paths
//!
//! Benchmark datasets record reference fixes as unified-diff patches. The
//! only information the evaluator needs from a patch is the set of file
//! paths it touches, read off the `+++ b/` target lines.

/// Marker prefixing the post-image path of each file section in a unified diff
const PATCH_TARGET_MARKER: &str = "+++ b/";

/// Extract the file paths touched by a unified-diff patch, in encounter order.
///
/// Every line beginning with `+++ b/` contributes the remainder of the line
/// as one path. Deleted-file targets (`+++ /dev/null`) carry no `b/` prefix
/// and are skipped.
pub fn patch_file_paths(patch: &str) -> Vec<String> {
    patch
        .lines()
        .filter_map(|line| line.strip_prefix(PATCH_TARGET_MARKER))
        .map(str::to_string)
        .collect()
}
