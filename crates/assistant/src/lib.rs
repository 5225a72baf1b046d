//! Assistant-side building blocks for producing file hints
//!
//! The recommendation side of the system talks to an external assistant
//! service. This crate holds the service-agnostic pieces:
//!
//! - [`HintProvider`] - an explicitly constructed, passed-in handle that
//!   recommends files for a task; callers own its lifetime (no process-wide
//!   singleton)
//! - [`RetryPolicy`] / [`retry`] - a generic retry combinator for any
//!   fallible async operation, with exponential backoff, cap, and jitter
//! - [`AssistantEvent`] / [`HintTranscript`] - a typed event stream and its
//!   fold, replacing handler-override streaming callbacks
//!
//! Everything here runs without a network; [`MockHintProvider`] scripts
//! responses for tests and offline runs.

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod error;
pub mod events;
pub mod provider;
pub mod retry;

pub use error::{AssistantError, Result};
pub use events::{drain_events, AssistantEvent, HintTranscript};
pub use provider::{gather_hints, HintProvider, HintTask, MockHintProvider};
pub use retry::{retry, RetryPolicy};
