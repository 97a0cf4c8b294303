//! Execution messages surfaced to the host application
//!
//! Items report user-visible progress (warnings, errors, success lines)
//! through a [`LogSink`] injected at construction time. This abstracts over
//! the transport (console, UI event channel, mpsc) so items can run inside
//! the desktop host, a headless runner, or tests.

use serde::{Deserialize, Serialize};

/// Severity classification for a user-visible execution message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Informational progress line
    Info,
    /// Non-fatal condition, execution moves on
    Warning,
    /// Terminal failure for the current pipeline step
    Error,
    /// Terminal success for the current pipeline step
    Success,
}

/// A single classified message emitted during execution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionMessage {
    /// Severity of this message
    pub kind: MessageKind,
    /// Name of the item that emitted it
    pub item: String,
    /// Message text
    pub text: String,
}

impl ExecutionMessage {
    fn new(kind: MessageKind, item: &str, text: impl Into<String>) -> Self {
        Self {
            kind,
            item: item.to_string(),
            text: text.into(),
        }
    }

    /// Create an info message
    pub fn info(item: &str, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Info, item, text)
    }

    /// Create a warning message
    pub fn warning(item: &str, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Warning, item, text)
    }

    /// Create an error message
    pub fn error(item: &str, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Error, item, text)
    }

    /// Create a success message
    pub fn success(item: &str, text: impl Into<String>) -> Self {
        Self::new(MessageKind::Success, item, text)
    }
}

/// Trait for receiving execution messages
///
/// Implementations must be cheap to call from both the pipeline task and
/// background worker tasks.
pub trait LogSink: Send + Sync {
    /// Deliver a message to the host
    fn send(&self, message: ExecutionMessage);
}

/// A no-op sink that discards all messages
///
/// Useful for testing or when messages aren't needed.
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn send(&self, _message: ExecutionMessage) {}
}

/// A vector-based sink that collects messages
///
/// Useful for testing to verify messages were emitted correctly.
pub struct VecLogSink {
    messages: std::sync::Mutex<Vec<ExecutionMessage>>,
}

impl VecLogSink {
    pub fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Get all collected messages
    pub fn messages(&self) -> Vec<ExecutionMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Count collected messages of the given kind
    pub fn count(&self, kind: MessageKind) -> usize {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.kind == kind)
            .count()
    }

    /// Clear all collected messages
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Default for VecLogSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for VecLogSink {
    fn send(&self, message: ExecutionMessage) {
        self.messages.lock().unwrap().push(message);
    }
}

/// Sink that forwards messages to the `log` crate
///
/// Warning maps to `log::warn!`, error to `log::error!`, info and success
/// to `log::info!`. Used by headless runners without a UI console.
pub struct LogCrateSink;

impl LogSink for LogCrateSink {
    fn send(&self, message: ExecutionMessage) {
        match message.kind {
            MessageKind::Warning => log::warn!("[{}] {}", message.item, message.text),
            MessageKind::Error => log::error!("[{}] {}", message.item, message.text),
            MessageKind::Info | MessageKind::Success => {
                log::info!("[{}] {}", message.item, message.text)
            }
        }
    }
}
