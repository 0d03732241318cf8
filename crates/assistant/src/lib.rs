//! Chat assistant for the demochat backend.
//!
//! Finds the latest user turn in a conversation and answers it with one of
//! the toy tools (time, weather) or the mock retriever.

pub mod clock;
pub mod dispatch;
pub mod message;
pub mod tools;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use demochat_knowledge::{ChatResponse, SourceRef};
pub use dispatch::{last_user_message, Assistant, Route, NO_USER_MESSAGE};
pub use message::{ChatRequest, Message, Role};
