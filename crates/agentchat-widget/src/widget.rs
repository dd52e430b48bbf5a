use agentchat_core::{
    i18n,
    message::{ChatMessage, Sender},
    provider::StreamingPredictProvider,
};
use chrono::Utc;
use futures_util::{StreamExt, pin_mut};

use crate::format::{RenderMode, render_markup};
use crate::view::ChatView;

/// Transcript-owning chat controller.
///
/// One widget instance holds the full UI state of the conversation: the
/// message list, the bound input text and the loading flag.  There are no
/// ambient globals; embedders own the widget and the widget owns everything
/// else.
///
/// Because [`send_message`](Self::send_message) takes `&mut self`, a second
/// send cannot start while one is in flight and `clear_chat` cannot race an
/// active turn.  To cancel a turn, drop the future returned by
/// `send_message`; the backend aborts its in-flight request, and a following
/// [`clear_chat`](Self::clear_chat) resets the loading flag along with the
/// transcript.
pub struct ChatWidget<P, V> {
    backend: P,
    view: V,
    messages: Vec<ChatMessage>,
    user_input: String,
    is_loading: bool,
    mode: RenderMode,
}

impl<P, V> ChatWidget<P, V>
where
    P: StreamingPredictProvider,
    V: ChatView,
{
    /// Create an empty widget over `backend`, rendering with the default
    /// escape-by-default [`RenderMode`].
    pub fn new(backend: P, view: V) -> Self {
        Self {
            backend,
            view,
            messages: Vec::new(),
            user_input: String::new(),
            is_loading: false,
            mode: RenderMode::default(),
        }
    }

    /// Opt into a different trust setting for server-provided markup.
    pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn input(&self) -> &str {
        &self.user_input
    }

    /// Bind the input field's current text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.user_input = text.into();
    }

    /// Access the embedded view, e.g. to reset per-turn render state.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// True while an assistant reply is being streamed into the transcript.
    pub fn is_streaming_assistant(&self) -> bool {
        self.messages.iter().any(|m| m.is_streaming)
    }

    /// Run one request/response cycle for the bound input.
    ///
    /// A whitespace-only input is a no-op.  Otherwise the raw input text is
    /// appended as a user message, the input is cleared, and an empty
    /// assistant placeholder is appended with `is_streaming == true`; the
    /// backend stream is then driven to completion on the caller's task.
    /// Per token: append verbatim, re-render, refresh, scroll.  A stream
    /// error replaces the placeholder text with the fixed translated failure
    /// string; the original error is only logged.
    pub async fn send_message(&mut self) {
        if self.user_input.trim().is_empty() {
            return;
        }

        let query = std::mem::take(&mut self.user_input);
        let now_ms = Utc::now().timestamp_millis();

        self.messages
            .push(ChatMessage::new(now_ms.to_string(), query.clone(), Sender::User));
        self.is_loading = true;

        let mut placeholder =
            ChatMessage::new((now_ms + 1).to_string(), String::new(), Sender::Assistant);
        placeholder.is_streaming = true;
        self.messages.push(placeholder);
        self.view.scroll_to_bottom();

        let stream = self.backend.stream_predict(&query);
        pin_mut!(stream);

        while let Some(event) = stream.next().await {
            match event {
                Ok(token) => {
                    if let Some(reply) = self.messages.last_mut() {
                        reply.text.push_str(&token);
                        reply.rendered = render_markup(&reply.text, self.mode);
                    }
                    self.view.refresh(&self.messages);
                    self.view.scroll_to_bottom();
                }
                Err(err) => {
                    tracing::error!(error = %err, "prediction stream failed");
                    if let Some(reply) = self.messages.last_mut() {
                        reply.text = i18n::translate("error_occurred").to_owned();
                        reply.rendered = render_markup(&reply.text, self.mode);
                        reply.is_streaming = false;
                    }
                    self.is_loading = false;
                    self.view.refresh(&self.messages);
                    self.view.scroll_to_bottom();
                    return;
                }
            }
        }

        if let Some(reply) = self.messages.last_mut() {
            reply.is_streaming = false;
        }
        self.is_loading = false;
        self.view.refresh(&self.messages);
        self.view.scroll_to_bottom();
    }

    /// Discard the entire transcript, including any interrupted streaming
    /// message, and reset the loading flag.  Confirmation prompting is the
    /// embedder's concern.
    pub fn clear_chat(&mut self) {
        self.messages.clear();
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NullView;
    use agentchat_core::error::{ChatError, Result};
    use futures_core::stream::Stream;
    use std::pin::Pin;

    /// Backend that replays a fixed script instead of touching the network.
    struct ScriptedBackend {
        tokens: Vec<&'static str>,
        fail_after_tokens: bool,
    }

    impl ScriptedBackend {
        fn tokens(tokens: Vec<&'static str>) -> Self {
            Self {
                tokens,
                fail_after_tokens: false,
            }
        }

        fn failing_after(tokens: Vec<&'static str>) -> Self {
            Self {
                tokens,
                fail_after_tokens: true,
            }
        }
    }

    impl StreamingPredictProvider for ScriptedBackend {
        type Tokens<'s>
            = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
        where
            Self: 's;

        fn stream_predict<'s>(&'s self, _query: &str) -> Self::Tokens<'s> {
            let mut items: Vec<Result<String>> =
                self.tokens.iter().map(|t| Ok((*t).to_owned())).collect();
            if self.fail_after_tokens {
                items.push(Err(ChatError::Invalid("connection reset".into())));
            }
            Box::pin(futures_util::stream::iter(items))
        }
    }

    /// View that counts callbacks so tests can assert the refresh contract.
    #[derive(Default)]
    struct RecordingView {
        refreshes: usize,
        scrolls: usize,
    }

    impl ChatView for RecordingView {
        fn refresh(&mut self, _messages: &[ChatMessage]) {
            self.refreshes += 1;
        }

        fn scroll_to_bottom(&mut self) {
            self.scrolls += 1;
        }
    }

    #[tokio::test]
    async fn whitespace_only_input_is_a_no_op() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec!["x"]), NullView);
        widget.set_input("   \n\t ");
        widget.send_message().await;

        assert!(widget.messages().is_empty());
        assert!(!widget.is_loading());
        assert_eq!(widget.input(), "   \n\t ");
    }

    #[tokio::test]
    async fn tokens_accumulate_into_the_assistant_reply() {
        let mut widget =
            ChatWidget::new(ScriptedBackend::tokens(vec!["Halo", " dunia"]), NullView)
                .with_render_mode(RenderMode::Trusted);
        widget.set_input("hi");
        widget.send_message().await;

        let messages = widget.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].text, "hi");
        assert_eq!(messages[1].sender, Sender::Assistant);
        assert_eq!(messages[1].text, "Halo dunia");
        assert_eq!(messages[1].rendered, "Halo dunia");
        assert!(!messages[1].is_streaming);
        assert!(!widget.is_loading());
        assert!(widget.input().is_empty());
    }

    #[tokio::test]
    async fn user_message_keeps_the_raw_untrimmed_input() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec!["ok"]), NullView);
        widget.set_input("  halo  ");
        widget.send_message().await;

        assert_eq!(widget.messages()[0].text, "  halo  ");
    }

    #[tokio::test]
    async fn stream_error_replaces_partial_text_with_the_fixed_string() {
        let mut widget = ChatWidget::new(
            ScriptedBackend::failing_after(vec!["partial ", "answer"]),
            NullView,
        );
        widget.set_input("hi");
        widget.send_message().await;

        let reply = widget.messages().last().unwrap();
        assert_eq!(reply.text, i18n::translate("error_occurred"));
        assert!(!reply.is_streaming);
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn tokens_are_rendered_through_the_markup_subset() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec!["a\n**b**"]), NullView)
            .with_render_mode(RenderMode::Trusted);
        widget.set_input("hi");
        widget.send_message().await;

        assert_eq!(widget.messages()[1].rendered, "a<br><b>b</b>");
    }

    #[tokio::test]
    async fn default_mode_escapes_server_markup() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec!["<hr>"]), NullView);
        widget.set_input("hi");
        widget.send_message().await;

        assert_eq!(widget.messages()[1].rendered, "&lt;hr&gt;");
    }

    #[tokio::test]
    async fn view_is_refreshed_per_token_and_on_completion() {
        let mut widget = ChatWidget::new(
            ScriptedBackend::tokens(vec!["a", "b", "c"]),
            RecordingView::default(),
        );
        widget.set_input("hi");
        widget.send_message().await;

        // One refresh per token plus the terminal refresh; scrolls add the
        // initial placeholder scroll on top.
        assert_eq!(widget.view_mut().refreshes, 4);
        assert_eq!(widget.view_mut().scrolls, 5);
    }

    #[tokio::test]
    async fn empty_stream_still_appends_and_settles_the_placeholder() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec![]), NullView);
        widget.set_input("hi");
        widget.send_message().await;

        assert_eq!(widget.messages().len(), 2);
        assert_eq!(widget.messages()[1].text, "");
        assert!(!widget.is_streaming_assistant());
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn clear_chat_discards_everything() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec!["x"]), NullView);
        widget.set_input("hi");
        widget.send_message().await;
        assert!(!widget.messages().is_empty());

        widget.clear_chat();
        assert!(widget.messages().is_empty());
        assert!(!widget.is_loading());
    }

    #[tokio::test]
    async fn message_ids_are_timestamp_ordered() {
        let mut widget = ChatWidget::new(ScriptedBackend::tokens(vec!["x"]), NullView);
        widget.set_input("hi");
        widget.send_message().await;

        let user_id: i64 = widget.messages()[0].id.parse().unwrap();
        let reply_id: i64 = widget.messages()[1].id.parse().unwrap();
        assert_eq!(reply_id, user_id + 1);
    }
}
