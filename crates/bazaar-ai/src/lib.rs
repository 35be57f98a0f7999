//! Conversational core for the Bazaar dealership assistant.
//!
//! Provides:
//! - Typed conversation turns (text / function call / function response)
//! - A Gemini REST client behind the `AiClient` trait
//! - An inventory provider client and the tool executor on top of it
//! - Sessions that run the bounded tool-call loop, one lock per session

pub mod assistant;
pub mod content;
pub mod gemini;
pub mod inventory;
pub mod prompt;
pub mod session;
pub mod token_tracker;
pub mod tools;

#[cfg(test)]
mod testing;

use async_trait::async_trait;

pub use assistant::{Assistant, AssistantSettings};
pub use content::{FunctionCall, FunctionResponse, Part, Role, Turn};
pub use gemini::{GeminiClient, GeminiConfig};
pub use inventory::{HttpInventory, InventoryError, InventoryLocation, InventorySource};
pub use prompt::Persona;
pub use session::{ConversationLog, Session, SessionHandle, TurnState};
pub use token_tracker::TokenTracker;
pub use tools::{ToolExecutor, ToolFailure, ToolOutput};

/// A remote language model that can answer one request at a time.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(
        &self,
        turns: &[Turn],
        system_instruction: &str,
        tools: &[ToolDefinition],
    ) -> Result<AiResponse, AiError>;

    /// Whether the client has the credentials it needs to make a request.
    fn is_configured(&self) -> bool {
        true
    }
}

/// A function the model may ask the host to run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Value>,
}

/// The parts of a model reply this crate looks at.
#[derive(Debug, Clone, Default)]
pub struct AiResponse {
    /// First content part of the first candidate, if present and well-formed.
    pub part: Option<Part>,
    pub usage: TokenUsage,
}

impl AiResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            part: Some(Part::Text(text.into())),
            usage: TokenUsage::default(),
        }
    }

    pub fn function_call(name: impl Into<String>) -> Self {
        Self {
            part: Some(Part::FunctionCall(FunctionCall::new(name))),
            usage: TokenUsage::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key not configured")]
    NotConfigured,
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Malformed reply: {0}")]
    Malformed(String),
    #[error("Tool round limit of {0} exceeded")]
    ToolRoundsExceeded(u32),
    #[error("Session is busy with another request")]
    Busy,
}
