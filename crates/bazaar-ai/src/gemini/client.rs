//! Gemini API client struct, request building, and response parsing.

use crate::content::Turn;
use crate::{AiError, AiResponse, ToolDefinition};

use super::config::GeminiConfig;
use super::wire::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, SystemInstruction,
    TextPart, ToolGroup,
};

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the request body for the Gemini API.
    pub(crate) fn build_request_body<'a>(
        &self,
        turns: &'a [Turn],
        system_instruction: &'a str,
        tools: &'a [ToolDefinition],
    ) -> GenerateContentRequest<'a> {
        let tools = if tools.is_empty() {
            Vec::new()
        } else {
            vec![ToolGroup {
                function_declarations: tools.iter().collect(),
            }]
        };

        GenerateContentRequest {
            contents: turns,
            system_instruction: SystemInstruction {
                parts: [TextPart {
                    text: system_instruction,
                }],
            },
            tools,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            },
        }
    }

    /// Parse a Gemini response body.
    pub(crate) fn parse_response(&self, body: &str) -> Result<AiResponse, AiError> {
        let response: GenerateContentResponse =
            serde_json::from_str(body).map_err(|e| AiError::ParseError(e.to_string()))?;
        let usage = response.usage();
        Ok(AiResponse {
            part: response.first_part(),
            usage,
        })
    }
}
