use bazaar_common::ContextStrategy;
use serde::{Deserialize, Serialize};

/// Conversational assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Gemini model name.
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Output token cap. Unset leaves the model default.
    pub max_output_tokens: Option<u32>,
    /// Tool-call cycles allowed per user message (valid range: 1-20).
    pub max_tool_rounds: u32,
    pub strategy: ContextStrategy,
    pub persona_name: String,
    pub dealership_name: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".into(),
            temperature: 0.7,
            max_output_tokens: None,
            max_tool_rounds: 5,
            strategy: ContextStrategy::Tools,
            persona_name: "Chaika".into(),
            dealership_name: "Auto Bazaar".into(),
        }
    }
}
