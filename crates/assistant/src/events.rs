//! Assistant stream events and their consumers
//!
//! Streaming responses arrive as a sequence of typed events. Consumers fold
//! the stream into whatever they need — accumulated response text, the file
//! list a retrieval step consulted — keyed on the event variant rather than
//! overriding handler methods on a base class.

use futures::{Stream, StreamExt};
use hintbench_core::bench::FileHint;

/// One event from a streaming assistant run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantEvent {
    /// Incremental response text
    TextDelta(String),
    /// A retrieval tool step finished, reporting the files it consulted
    RetrievalStep { file_names: Vec<String> },
    /// The run finished
    RunCompleted,
}

/// Fold of an assistant event stream
#[derive(Debug, Clone, Default)]
pub struct HintTranscript {
    text: String,
    file_names: Vec<String>,
    completed: bool,
}

impl HintTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event
    pub fn apply(&mut self, event: AssistantEvent) {
        match event {
            AssistantEvent::TextDelta(delta) => self.text.push_str(&delta),
            AssistantEvent::RetrievalStep { file_names } => self.file_names.extend(file_names),
            AssistantEvent::RunCompleted => self.completed = true,
        }
    }

    /// Accumulated response text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Files consulted by retrieval steps, in event order
    pub fn file_names(&self) -> &[String] {
        &self.file_names
    }

    /// Whether a `RunCompleted` event was seen
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Convert the retrieval file list into a hint for the given task
    pub fn into_file_hint(self, id: impl Into<String>) -> FileHint {
        FileHint {
            id: id.into(),
            hint_files: self.file_names,
        }
    }
}

/// Consume a stream of events into a transcript
///
/// Works over any event source: an iterator-backed stream in tests, a
/// channel receiver fed by a live connection in production.
pub async fn drain_events<S>(events: S) -> HintTranscript
where
    S: Stream<Item = AssistantEvent>,
{
    futures::pin_mut!(events);
    let mut transcript = HintTranscript::new();
    while let Some(event) = events.next().await {
        transcript.apply(event);
    }
    transcript
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::SinkExt;
    use pretty_assertions::assert_eq;

    fn sample_events() -> Vec<AssistantEvent> {
        vec![
            AssistantEvent::TextDelta("Looking at ".to_string()),
            AssistantEvent::TextDelta("the linter.".to_string()),
            AssistantEvent::RetrievalStep {
                file_names: vec![
                    "src/sqlfluff/core/linter/linted_dir.py".to_string(),
                    "src/sqlfluff/cli/commands.py".to_string(),
                ],
            },
            AssistantEvent::RetrievalStep {
                file_names: vec!["src/sqlfluff/cli/formatters.py".to_string()],
            },
            AssistantEvent::RunCompleted,
        ]
    }

    #[test]
    fn test_apply_accumulates_text_and_files() {
        let mut transcript = HintTranscript::new();
        for event in sample_events() {
            transcript.apply(event);
        }
        assert_eq!(transcript.text(), "Looking at the linter.");
        assert_eq!(
            transcript.file_names(),
            &[
                "src/sqlfluff/core/linter/linted_dir.py".to_string(),
                "src/sqlfluff/cli/commands.py".to_string(),
                "src/sqlfluff/cli/formatters.py".to_string(),
            ]
        );
        assert!(transcript.is_completed());
    }

    #[test]
    fn test_into_file_hint_carries_retrieval_files() {
        let mut transcript = HintTranscript::new();
        for event in sample_events() {
            transcript.apply(event);
        }
        let hint = transcript.into_file_hint("sqlfluff__sqlfluff-4764");
        assert_eq!(hint.id, "sqlfluff__sqlfluff-4764");
        assert_eq!(hint.hint_files.len(), 3);
    }

    #[tokio::test]
    async fn test_drain_iterator_stream() {
        let transcript = drain_events(futures::stream::iter(sample_events())).await;
        assert_eq!(transcript.file_names().len(), 3);
        assert!(transcript.is_completed());
    }

    #[tokio::test]
    async fn test_drain_channel_stream() {
        let (mut tx, rx) = futures::channel::mpsc::unbounded();
        let producer = async move {
            for event in sample_events() {
                tx.send(event).await.expect("receiver alive");
            }
            // Sender drops here, ending the stream
        };
        let (_, transcript) = tokio::join!(producer, drain_events(rx));
        assert_eq!(transcript.text(), "Looking at the linter.");
        assert_eq!(transcript.file_names().len(), 3);
    }

    #[test]
    fn test_empty_stream_yields_empty_transcript() {
        let transcript = HintTranscript::new();
        assert!(transcript.text().is_empty());
        assert!(transcript.file_names().is_empty());
        assert!(!transcript.is_completed());
    }
}
