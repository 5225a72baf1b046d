//! Core types for the hintbench file-hint evaluation toolkit
//!
//! This crate provides the foundational pieces shared across the hintbench
//! workspace:
//!
//! - **Bench records**: ground-truth examples, file hints, and assessed results
//! - **Patch scanning**: extraction of changed file paths from unified diffs
//! - **Configuration**: system configuration management
//! - **Error handling**: unified error types
//!

pub mod bench;
pub mod config;
pub mod error;
pub mod patch;

// Re-export main types for convenience
pub use bench::{BenchExample, FileHint, FileHintAssessed};
pub use config::{AssistantConfig, Config, DatasetConfig, RetryConfig};
pub use error::{Error, Result, ResultExt};
pub use patch::patch_file_paths;

/// Version of the core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bench::{BenchExample, FileHint, FileHintAssessed};
    pub use crate::config::Config;
    pub use crate::error::{Result, ResultExt};
}
