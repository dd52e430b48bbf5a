use async_stream::try_stream;

use bytes::Bytes;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::Serialize;

use crate::{error::PredictError, sse::EventStreamDecoder};

/// Base URL used when the widget is hosted on a loopback hostname.
const LOCAL_BASE_URL: &str = "http://127.0.0.1:5000";

/// Resolve the prediction service base URL from the hosting page's hostname.
///
/// A loopback hostname targets the fixed local development port; anything
/// else resolves to the empty string so requests stay same-origin.  There is
/// no configuration file and no override.
///
/// ```rust
/// use agentchat_predict::resolve_api_url;
///
/// assert_eq!(resolve_api_url("localhost"), "http://127.0.0.1:5000");
/// assert_eq!(resolve_api_url("example.com"), "");
/// ```
pub fn resolve_api_url(hostname: &str) -> &'static str {
    match hostname {
        "localhost" | "127.0.0.1" => LOCAL_BASE_URL,
        _ => "",
    }
}

/// JSON body of the `POST /predict` request.
#[derive(Debug, Serialize)]
pub(crate) struct PredictRequest<'a> {
    pub message: &'a str,
}

/// Minimal HTTP client for the prediction service's */predict* endpoint.
///
/// * One request ▶ one finite token stream; no retries.
/// * Shares a single `reqwest::Client`, so cloning `PredictClient` is cheap.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: HttpClient,
    base: String,
}

impl PredictClient {
    /// Convenience constructor building a default `reqwest` client: Rustls
    /// TLS, no request timeout.  A hung connection blocks until the
    /// transport itself errors; callers cancel by dropping the stream.
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .build()
            .expect("building reqwest client");

        Self::with_http(http, base_url)
    }

    /// Build a client for the environment rule of [`resolve_api_url`].
    pub fn for_hostname(hostname: &str) -> Self {
        Self::new(resolve_api_url(hostname))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base: base_url.into(),
        }
    }

    /// Start a streaming prediction for `query`.
    ///
    /// Yields one item per `data:` frame of the SSE response, in order,
    /// exactly once, with the `[DONE]` sentinel swallowed.  The stream ends
    /// after the sentinel's frame has been drained and the transport signals
    /// EOF; a trailing incomplete frame is discarded.  Dropping the stream
    /// aborts the in-flight request; nothing is delivered afterwards.
    pub fn predict_stream(
        &self,
        query: impl Into<String>,
    ) -> impl Stream<Item = Result<String, PredictError>> + '_ {
        let message = query.into();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

        let url = format!("{}/predict", self.base);

        try_stream! {
            tracing::debug!(%url, "starting prediction stream");

            let resp = self
                .http
                .post(url)
                .headers(headers)
                .json(&PredictRequest { message: &message })
                .send()
                .await?;

            if !resp.status().is_success() {
                let status = resp.status();
                let reason = status
                    .canonical_reason()
                    .unwrap_or("unknown reason")
                    .to_owned();
                tracing::warn!(%status, "prediction endpoint rejected request");
                Err(PredictError::Api { status, reason })?;
            }

            let mut bytes_stream = resp.bytes_stream();
            let mut decoder = EventStreamDecoder::new();

            while let Some(chunk) = bytes_stream.next().await {
                let chunk: Bytes = chunk?;
                for token in decoder.feed(&chunk)? {
                    yield token;
                }
            }
        }
    }
}
