//! Request and response bodies of `generateContent`.

use serde::{Deserialize, Serialize};

use crate::content::{Part, RawPart, Turn};
use crate::{TokenUsage, ToolDefinition};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    pub contents: &'a [Turn],
    pub system_instruction: SystemInstruction<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolGroup<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct SystemInstruction<'a> {
    pub parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToolGroup<'a> {
    pub function_declarations: Vec<&'a ToolDefinition>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<RawPart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
}

impl GenerateContentResponse {
    /// First part of the first candidate, validated into a [`Part`].
    pub fn first_part(self) -> Option<Part> {
        let raw = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?;
        match Part::try_from(raw) {
            Ok(part) => Some(part),
            Err(e) => {
                tracing::debug!(error = %e, "Discarding unrecognised reply part");
                None
            }
        }
    }

    pub fn usage(&self) -> TokenUsage {
        self.usage_metadata
            .as_ref()
            .map(|meta| TokenUsage {
                input_tokens: meta.prompt_token_count,
                output_tokens: meta.candidates_token_count,
            })
            .unwrap_or_default()
    }
}
