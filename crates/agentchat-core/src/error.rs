//! Unified error type exposed by **`agentchat-core`**.
//!
//! Backend crates should convert their internal errors into one of these
//! variants before bubbling them up to the widget.  This keeps the public API
//! small while still conveying rich diagnostic information.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Generic forwarding of any backend-specific error that doesn’t fit
    /// another category.  The widget shows a fixed message to the user and
    /// logs the original.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid: {0}")]
    Invalid(String),
}
