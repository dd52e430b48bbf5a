//! Seam to the embedding UI surface.

use agentchat_core::message::ChatMessage;

/// Callbacks the widget fires when the transcript changes.
///
/// The embedding UI decides what a refresh or a scroll actually means; the
/// widget only guarantees *when* they happen: after every appended token and
/// after each terminal transition of a turn.
pub trait ChatView {
    /// The transcript changed; re-render it.
    fn refresh(&mut self, messages: &[ChatMessage]);

    /// Keep the newest message visible.
    fn scroll_to_bottom(&mut self);
}

/// No-op view for headless embedding and tests.
#[derive(Debug, Default)]
pub struct NullView;

impl ChatView for NullView {
    fn refresh(&mut self, _messages: &[ChatMessage]) {}

    fn scroll_to_bottom(&mut self) {}
}
