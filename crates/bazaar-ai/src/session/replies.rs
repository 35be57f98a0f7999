//! Fixed replies shown to the customer when a message cannot be answered.

use crate::AiError;

pub const TRANSPORT_FAILURE: &str =
    "I apologize, but I'm experiencing some interference. Could you rephrase that?";
pub const MALFORMED_REPLY: &str = "I'm having trouble thinking right now.";
pub const API_KEY_MISSING: &str = "Error: API Key missing.";
pub const TOOL_ROUNDS_EXCEEDED: &str =
    "I couldn't finish looking that up. Please try asking again.";
pub const SESSION_BUSY: &str = "I'm still working on your last message. One moment please.";

/// Customer-facing text for an error that ended a turn.
pub fn fallback_reply(error: &AiError) -> &'static str {
    match error {
        AiError::NotConfigured => API_KEY_MISSING,
        AiError::Malformed(_) => MALFORMED_REPLY,
        AiError::ToolRoundsExceeded(_) => TOOL_ROUNDS_EXCEEDED,
        AiError::Busy => SESSION_BUSY,
        AiError::ApiError(_)
        | AiError::RateLimited
        | AiError::NetworkError(_)
        | AiError::ParseError(_) => TRANSPORT_FAILURE,
    }
}
