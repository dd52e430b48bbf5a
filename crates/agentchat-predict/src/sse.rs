//! Incremental decoder for the prediction service's SSE framing.
//!
//! The service separates events with a blank line (`\n\n`) and prefixes each
//! payload with `data: `.  Chunk boundaries are arbitrary: a frame, or even a
//! single multi-byte UTF-8 character, may be split across chunks, so the
//! decoder buffers raw bytes and only converts to text once a full frame is
//! available.  The two delimiter bytes can never land inside a multi-byte
//! character (continuation bytes are all `>= 0x80`), so every drained frame
//! holds whole characters.

use crate::error::PredictError;

/// Payload value signaling logical stream termination.  Swallowed, never
/// emitted.
pub const DONE_SENTINEL: &str = "[DONE]";

const DATA_PREFIX: &str = "data: ";
const FRAME_DELIMITER: &[u8] = b"\n\n";

/// Stateful frame splitter fed one transport chunk at a time.
///
/// ```rust
/// use agentchat_predict::sse::EventStreamDecoder;
///
/// let mut decoder = EventStreamDecoder::new();
/// assert!(decoder.feed(b"data: Ha").unwrap().is_empty());
/// assert_eq!(decoder.feed(b"lo\n\n").unwrap(), vec!["Halo"]);
/// ```
#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    buf: Vec<u8>,
}

impl EventStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` to the internal buffer and drain every fully formed
    /// frame, in order.
    ///
    /// Returns the `data: ` payloads of the drained frames, minus the
    /// `[DONE]` sentinel and empty payloads.  Frames without the prefix
    /// (comments, keepalives) are ignored.  The trailing incomplete frame, if
    /// any, is retained for the next call.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<String>, PredictError> {
        self.buf.extend_from_slice(chunk);

        let mut tokens = Vec::new();
        while let Some(pos) = self
            .buf
            .windows(FRAME_DELIMITER.len())
            .position(|w| w == FRAME_DELIMITER)
        {
            let frame: Vec<u8> = self.buf.drain(..pos + FRAME_DELIMITER.len()).collect();
            let event = std::str::from_utf8(&frame[..pos])
                .map_err(|e| PredictError::Protocol(format!("frame is not valid UTF-8: {e}")))?;

            if let Some(data) = event.strip_prefix(DATA_PREFIX) {
                if data == DONE_SENTINEL {
                    continue;
                }
                if !data.is_empty() {
                    tokens.push(data.to_owned());
                }
            }
        }

        Ok(tokens)
    }
}
