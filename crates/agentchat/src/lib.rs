//! # `agentchat` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                  | What it provides                                                              |
//! |------------------------|-------------------------------------------------------------------------------|
//! | **`agentchat-core`**   | `ChatMessage`/`Sender`, the `StreamingPredictProvider` trait, errors, i18n    |
//! | **`agentchat-widget`** | The transcript-owning `ChatWidget` controller, markup formatter, view seam    |
//! | **`agentchat-predict`**| HTTP/SSE client for the prediction endpoint *(optional)*                      |
//!
//! By default the crate re-exports the whole stack.  Disabling the `predict`
//! Cargo feature drops `reqwest`, TLS, etc. so an embedder can plug in its
//! own transport behind the provider trait:
//!
//! ```toml
//! [dependencies]
//! agentchat = { version = "0.1", default-features = false }
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use agentchat::predict::PredictClient;
//! use agentchat::widget::{ChatWidget, NullView, RenderMode};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = PredictClient::for_hostname("localhost");
//!     let mut widget =
//!         ChatWidget::new(backend, NullView).with_render_mode(RenderMode::Trusted);
//!
//!     widget.set_input("Halo!");
//!     widget.send_message().await;
//!
//!     for message in widget.messages() {
//!         println!("{}: {}", message.sender, message.text);
//!     }
//! }
//! ```
//!
//! ## Crate contents
//!
//! The `pub use` statements below simply forward the public API of the
//! individual crates so users can write `agentchat::widget::ChatWidget`
//! instead of juggling three separate dependencies.
#![doc(html_root_url = "https://docs.rs/agentchat/latest")]

pub use agentchat_core::*;
pub use agentchat_widget as widget;

#[cfg(feature = "predict")]
pub use agentchat_predict as predict;
