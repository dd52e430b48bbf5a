//! Provider-agnostic building blocks for the **agentchat** widget stack.
//!
//! This crate deliberately knows nothing about HTTP, SSE framing or any
//! concrete prediction service.  It defines:
//!
//! * [`message`] – the [`ChatMessage`](message::ChatMessage) record owned by
//!   the widget's transcript,
//! * [`provider`] – the [`StreamingPredictProvider`](provider::StreamingPredictProvider)
//!   trait a transport backend implements,
//! * [`error`] – the unified [`ChatError`](error::ChatError) all backends
//!   funnel into,
//! * [`i18n`] – the static translation lookup used for user-facing strings.
//!
//! Backend crates (e.g. `agentchat-predict`) convert their internal errors
//! into [`ChatError`](error::ChatError) before bubbling them up, so the widget
//! only ever deals with one error surface.

pub mod error;
pub mod i18n;
pub mod message;
pub mod provider;
