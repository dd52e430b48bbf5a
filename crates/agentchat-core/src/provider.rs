//! The seam between the widget and a concrete transport backend.

use futures_core::stream::Stream;

use crate::error::Result;

/// A backend that turns a user query into an **incremental** sequence of
/// answer tokens.
///
/// The stream yields UTF-8 text deltas in the order the service produced
/// them, finishes when the service signals logical completion, and surfaces
/// any transport failure as a single `Err` item.  The stream is finite and
/// not restartable; dropping it must abort whatever transport operation is
/// still in flight.
pub trait StreamingPredictProvider: Send + Sync {
    /// The token stream returned for one query.
    type Tokens<'s>: Stream<Item = Result<String>> + Send + 's
    where
        Self: 's;

    /// Start a prediction request for `query`.
    ///
    /// No validation is applied here; an empty query is passed through
    /// as-is.
    fn stream_predict<'s>(&'s self, query: &str) -> Self::Tokens<'s>;
}
