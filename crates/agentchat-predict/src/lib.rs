//! HTTP/SSE backend for the **agentchat** widget stack.
//!
//! [`PredictClient`] speaks the prediction service's wire protocol: a single
//! `POST {base}/predict` whose response body is a Server-Sent-Events stream
//! of `data: <token>` frames terminated by a `[DONE]` sentinel or transport
//! EOF.  The crate implements
//! [`StreamingPredictProvider`](agentchat_core::provider::StreamingPredictProvider)
//! so the widget stays transport-agnostic.

mod provider_impl;

mod client;
pub mod error;
pub mod sse;

pub use client::{PredictClient, resolve_api_url};
