//! # Terminal chat – Real-time example
//!
//! Drives a [`ChatWidget`] against a locally running prediction service and
//! renders the assistant's reply as it streams in, token by token.
//!
//! ```bash
//! # the service must answer POST http://127.0.0.1:5000/predict with SSE
//! cargo run -p agentchat --example chat
//! ```
//!
//! Type a message and press enter; `/clear` wipes the transcript, `/quit`
//! exits.
//!
//! ---------------------------------------------------------------------------

use agentchat::message::ChatMessage;
use agentchat::predict::PredictClient;
use agentchat::widget::{ChatView, ChatWidget, RenderMode};
use std::io::{self, BufRead, Write};

/// Prints the streaming reply incrementally; `printed` tracks how much of
/// the placeholder's text already reached the terminal.
#[derive(Default)]
struct TerminalView {
    printed: usize,
}

impl ChatView for TerminalView {
    fn refresh(&mut self, messages: &[ChatMessage]) {
        if let Some(reply) = messages.last() {
            if reply.is_streaming && reply.text.len() > self.printed {
                print!("{}", &reply.text[self.printed..]);
                io::stdout().flush().ok();
                self.printed = reply.text.len();
            }
        }
    }

    fn scroll_to_bottom(&mut self) {
        // A terminal scrolls on its own.
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // 1. Spin up the HTTP backend using the loopback environment rule.
    let backend = PredictClient::for_hostname("localhost");

    // 2. The terminal is a trusted sink, so render verbatim.
    let mut widget =
        ChatWidget::new(backend, TerminalView::default()).with_render_mode(RenderMode::Trusted);

    let stdin = io::stdin();
    loop {
        print!("\nYou: ");
        io::stdout().flush().ok();

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "/quit" => break,
            "/clear" => {
                widget.clear_chat();
                println!("(transcript cleared)");
                continue;
            }
            _ => {}
        }

        // 3. One request/response cycle; the view prints tokens as they land.
        print!("Agent: ");
        io::stdout().flush().ok();
        widget.view_mut().printed = 0;
        widget.set_input(line);
        widget.send_message().await;

        let printed = widget.view_mut().printed;
        if let Some(reply) = widget.messages().last() {
            if printed == 0 {
                print!("{}", reply.text);
            } else if reply.text.len() != printed {
                // The turn failed after partial output and the fixed error
                // text replaced the partial reply.
                print!("\n{}", reply.text);
            }
        }
        println!();
    }

    Ok(())
}
