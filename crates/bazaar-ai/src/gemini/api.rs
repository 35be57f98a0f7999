//! AiClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::content::Turn;
use crate::{AiClient, AiError, AiResponse, ToolDefinition};

use super::client::GeminiClient;

#[async_trait]
impl AiClient for GeminiClient {
    async fn send_message(
        &self,
        turns: &[Turn],
        system_instruction: &str,
        tools: &[ToolDefinition],
    ) -> Result<AiResponse, AiError> {
        if !self.config.has_api_key() {
            return Err(AiError::NotConfigured);
        }

        let body = self.build_request_body(turns, system_instruction, tools);
        let url = self.api_url();

        debug!(
            model = %self.config.model,
            turns = turns.len(),
            tools = tools.len(),
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        self.parse_response(&text)
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }
}
