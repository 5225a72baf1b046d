//! Configuration module for the hintbench system
//!
//! Configuration can be loaded from TOML files and/or environment variables.
//! Precedence (lowest to highest): hardcoded defaults, config file
//! (`~/.hintbench/config.toml` or a custom path), `HINTBENCH_*` environment
//! variables.

use config::{Config as ConfigLib, ConfigBuilder as LibConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

/// Returns the path to the global configuration file
///
/// The global config is stored at `~/.hintbench/config.toml`.
pub fn global_config_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| Error::config("Unable to determine home directory".to_string()))?;
    Ok(home_dir.join(".hintbench").join("config.toml"))
}

/// Main configuration structure for the hintbench system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Benchmark dataset configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Assistant service configuration
    #[serde(default)]
    pub assistant: AssistantConfig,
}

/// Configuration for the benchmark dataset
///
/// Informational for external loaders; the scoring engine itself never
/// touches the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Dataset name
    #[serde(default = "default_dataset_name")]
    pub name: String,

    /// Dataset split to evaluate
    #[serde(default = "default_dataset_split")]
    pub split: String,

    /// Local cache directory for downloaded dataset rows
    #[serde(default)]
    pub cache_dir: Option<String>,
}

/// Configuration for the external assistant service
#[derive(Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Model name used for retrieval-assisted recommendations
    #[serde(default = "default_assistant_model")]
    pub model: String,

    /// API key for authentication (or use the OPENAI_API_KEY env var)
    pub api_key: Option<String>,

    /// Retry behavior for fallible assistant calls
    #[serde(default)]
    pub retry: RetryConfig,
}

impl std::fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("retry", &self.retry)
            .finish()
    }
}

/// Retry policy parameters for fallible operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first
    #[serde(default = "default_retry_max_attempts")]
    pub max_attempts: usize,

    /// Initial wait before the first retry, in milliseconds
    #[serde(default = "default_retry_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Multiplicative factor applied to the wait after each retry
    #[serde(default = "default_retry_backoff_factor")]
    pub backoff_factor: f64,

    /// Cap on the wait between retries, in milliseconds
    #[serde(default = "default_retry_max_delay_ms")]
    pub max_delay_ms: u64,

    /// Jitter fraction added on top of each wait (0.0 disables)
    #[serde(default = "default_retry_jitter")]
    pub jitter: f64,
}

// Default implementations

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            name: default_dataset_name(),
            split: default_dataset_split(),
            cache_dir: None,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_assistant_model(),
            api_key: None,
            retry: RetryConfig::default(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_retry_max_attempts(),
            base_delay_ms: default_retry_base_delay_ms(),
            backoff_factor: default_retry_backoff_factor(),
            max_delay_ms: default_retry_max_delay_ms(),
            jitter: default_retry_jitter(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

impl AssistantConfig {
    /// Resolve the API key from config or environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
    }
}

/// Helper to set a config default with consistent error mapping
fn set_config_default<T: Into<config::Value>>(
    builder: LibConfigBuilder<config::builder::DefaultState>,
    key: &str,
    value: T,
) -> Result<LibConfigBuilder<config::builder::DefaultState>> {
    builder
        .set_default(key, value)
        .map_err(|e| Error::config(format!("Failed to set {key} default: {e}")))
}

impl Config {
    /// Loads configuration from a TOML file with environment variable overrides
    ///
    /// Environment variables are prefixed with `HINTBENCH_` and use double
    /// underscores for nested values. For example:
    /// - `HINTBENCH_DATASET__SPLIT=test`
    pub fn from_file(path: &Path) -> Result<Self> {
        let builder = ConfigLib::builder();

        // Set defaults explicitly (config crate doesn't apply serde defaults
        // for missing sections)
        let builder = set_config_default(builder, "dataset.name", default_dataset_name())?;
        let builder = set_config_default(builder, "dataset.split", default_dataset_split())?;
        let builder = set_config_default(builder, "assistant.model", default_assistant_model())?;
        let builder = set_config_default(
            builder,
            "assistant.retry.max_attempts",
            default_retry_max_attempts() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "assistant.retry.base_delay_ms",
            default_retry_base_delay_ms() as i64,
        )?;
        let builder = set_config_default(
            builder,
            "assistant.retry.backoff_factor",
            default_retry_backoff_factor(),
        )?;
        let builder = set_config_default(
            builder,
            "assistant.retry.max_delay_ms",
            default_retry_max_delay_ms() as i64,
        )?;
        let mut builder =
            set_config_default(builder, "assistant.retry.jitter", default_retry_jitter())?;

        // Add the config file if it exists
        if path.exists() {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        // Add environment variables with HINTBENCH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("HINTBENCH")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::config(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| Error::config(format!("Failed to deserialize config: {e}")))
    }

    /// Creates a config from a TOML string (useful for testing)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from a single file
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => global_config_path()?,
        };
        Self::from_file(&path)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.dataset.name.is_empty() {
            return Err(Error::config("dataset.name cannot be empty".to_string()));
        }
        if self.dataset.split.is_empty() {
            return Err(Error::config("dataset.split cannot be empty".to_string()));
        }

        if self.assistant.model.is_empty() {
            return Err(Error::config("assistant.model cannot be empty".to_string()));
        }

        let retry = &self.assistant.retry;
        if retry.max_attempts == 0 {
            return Err(Error::config(
                "assistant.retry.max_attempts must be greater than 0".to_string(),
            ));
        }
        if retry.max_attempts > 1000 {
            return Err(Error::config(format!(
                "assistant.retry.max_attempts too large (max 1000, got {})",
                retry.max_attempts
            )));
        }
        if retry.base_delay_ms == 0 {
            return Err(Error::config(
                "assistant.retry.base_delay_ms must be greater than 0".to_string(),
            ));
        }
        if retry.max_delay_ms < retry.base_delay_ms {
            return Err(Error::config(format!(
                "assistant.retry.max_delay_ms ({}) cannot be less than base_delay_ms ({})",
                retry.max_delay_ms, retry.base_delay_ms
            )));
        }
        if retry.backoff_factor < 1.0 {
            return Err(Error::config(format!(
                "assistant.retry.backoff_factor must be at least 1.0 (got {})",
                retry.backoff_factor
            )));
        }
        if !(0.0..=1.0).contains(&retry.jitter) {
            return Err(Error::config(format!(
                "assistant.retry.jitter must be between 0.0 and 1.0 (got {})",
                retry.jitter
            )));
        }

        Ok(())
    }

    /// Saves the configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| Error::config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, toml_string)
            .map_err(|e| Error::config(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

// Default value functions

fn default_dataset_name() -> String {
    "princeton-nlp/SWE-bench".to_string()
}

fn default_dataset_split() -> String {
    "dev".to_string()
}

fn default_assistant_model() -> String {
    "gpt-4-0125-preview".to_string()
}

fn default_retry_max_attempts() -> usize {
    5
}

fn default_retry_base_delay_ms() -> u64 {
    1000
}

fn default_retry_backoff_factor() -> f64 {
    2.0
}

fn default_retry_max_delay_ms() -> u64 {
    60_000
}

fn default_retry_jitter() -> f64 {
    0.1
}
