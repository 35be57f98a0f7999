//! Conversation turns and their parts, in the Gemini wire shape.
//!
//! A [`Part`] serializes to exactly one of `{"text"}`, `{"functionCall"}` or
//! `{"functionResponse"}`. Incoming parts go through [`RawPart`] so that
//! extra keys the API adds are ignored and a part with none of the three
//! is rejected at the boundary.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    Function,
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Map<String, serde_json::Value>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: serde_json::Map::new(),
        }
    }
}

/// The host's answer to a [`FunctionCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPart")]
pub enum Part {
    Text(String),
    FunctionCall(FunctionCall),
    FunctionResponse(FunctionResponse),
}

/// Permissive decoding target for a part.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPart {
    text: Option<String>,
    function_call: Option<FunctionCall>,
    function_response: Option<FunctionResponse>,
}

impl TryFrom<RawPart> for Part {
    type Error = String;

    fn try_from(raw: RawPart) -> Result<Self, Self::Error> {
        if let Some(call) = raw.function_call {
            return Ok(Part::FunctionCall(call));
        }
        if let Some(text) = raw.text {
            return Ok(Part::Text(text));
        }
        if let Some(response) = raw.function_response {
            return Ok(Part::FunctionResponse(response));
        }
        Err("part has no text, functionCall or functionResponse".into())
    }
}

/// One entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text(text.into())],
        }
    }

    /// The model's recorded intent to call a tool.
    pub fn function_call(call: FunctionCall) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::FunctionCall(call)],
        }
    }

    pub fn function_response(name: impl Into<String>, response: serde_json::Value) -> Self {
        Self {
            role: Role::Function,
            parts: vec![Part::FunctionResponse(FunctionResponse {
                name: name.into(),
                response,
            })],
        }
    }

    /// Concatenated text parts, empty if there are none.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Name of the tool this turn requests, for model intent turns.
    pub fn requested_tool(&self) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            Part::FunctionCall(call) => Some(call.name.as_str()),
            _ => None,
        })
    }
}
