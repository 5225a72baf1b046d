//! Error types for assistant operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

impl AssistantError {
    /// Rate-limit rejections are worth retrying; other failures are not
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited(_))
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
