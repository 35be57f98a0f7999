//! Conversation session management.
//!
//! A `Session` owns the conversation log for one customer and runs the
//! tool-call loop against the model. A `SessionHandle` wraps a session in
//! a lock so overlapping messages are rejected instead of interleaved.

mod chat;
mod handle;
mod log;
mod manager;
pub mod replies;
mod types;


pub use handle::SessionHandle;
pub use log::ConversationLog;
pub use manager::{Session, DEFAULT_MAX_TOOL_ROUNDS};
pub use types::TurnState;
