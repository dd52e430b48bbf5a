//! Message and sender types shared between the widget and its backends.
//!
//! They deliberately mirror the two roles a single-pane chat transcript
//! needs: the human user and the remote assistant.  By staying minimal we
//! can:
//!
//! * serialize them without pulling in heavyweight dependencies, and
//! * use them in unit tests without mocking a full transport layer.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the chat transcript.
///
/// The widget owns every message exclusively; the list is append-only and
/// never reordered.  While a reply is in flight, `text` grows by appending
/// tokens and `rendered` holds the markup derived from the full accumulated
/// text.  At most one message has `is_streaming == true` at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Creation-timestamp-derived identifier (milliseconds since the epoch).
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// True only for the assistant placeholder of the turn in flight.
    #[serde(default)]
    pub is_streaming: bool,
    /// Cached markup derived from `text`; recomputed on every token.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rendered: String,
}

impl ChatMessage {
    /// Create a finished (non-streaming) message stamped with the current
    /// time.
    pub fn new(id: impl Into<String>, text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            is_streaming: false,
            rendered: String::new(),
        }
    }
}

/// Originator of a [`ChatMessage`].
///
/// The `Display` implementation renders the canonical lowercase name so you
/// can feed it directly into JSON or a template without extra mapping logic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// Messages originating from the human user.
    User,
    /// Messages produced by the remote prediction service.
    Assistant,
}

impl Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
        }
    }
}
