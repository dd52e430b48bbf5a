//! The chat controller of the **agentchat** stack.
//!
//! [`ChatWidget`] owns the transcript and orchestrates one request/response
//! cycle per user-initiated send: append the user message, append an empty
//! assistant placeholder, drive the backend's token stream, and update the
//! placeholder as tokens arrive.  Rendering stays outside this crate behind
//! the [`ChatView`](view::ChatView) seam.

pub mod format;
pub mod view;
mod widget;

pub use format::{RenderMode, render_markup};
pub use view::{ChatView, NullView};
pub use widget::ChatWidget;
