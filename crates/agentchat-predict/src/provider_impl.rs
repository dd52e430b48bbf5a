use std::pin::Pin;

use agentchat_core::error::{ChatError, Result};
use agentchat_core::provider::StreamingPredictProvider;
use futures_core::stream::Stream;
use futures_util::TryStreamExt;

use crate::client::PredictClient;

impl StreamingPredictProvider for PredictClient {
    type Tokens<'s>
        = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
    where
        Self: 's;

    fn stream_predict<'s>(&'s self, query: &str) -> Self::Tokens<'s> {
        Box::pin(self.predict_stream(query).map_err(ChatError::from))
    }
}
