//! The tool-call loop: send the log, run requested tools, repeat until text.

use serde_json::json;
use tracing::{debug, info, warn};

use crate::content::{Part, Turn};
use crate::{AiClient, AiError};

use super::manager::Session;
use super::replies::fallback_reply;
use super::types::TurnState;

impl Session {
    /// Add a user message and get the assistant's reply.
    ///
    /// Each tool cycle appends the model's intent and the tool result to the
    /// log before the model is called again. Errors leave the log as already
    /// appended, so a failed call ends with the user turn. A client without
    /// credentials is rejected before anything is logged.
    pub async fn chat(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> Result<String, AiError> {
        // A dropped future can leave a stale mid-turn state behind.
        self.transition(TurnState::AwaitingUserInput);
        let result = self.run_turn(client, user_message.into()).await;
        if result.is_err() {
            self.transition(TurnState::AwaitingUserInput);
        }
        result
    }

    /// Like [`chat`](Self::chat), but every failure becomes a fixed reply.
    pub async fn send_message(
        &mut self,
        client: &dyn AiClient,
        user_message: impl Into<String>,
    ) -> String {
        match self.chat(client, user_message).await {
            Ok(text) => text,
            Err(e) => {
                warn!(session = %self.id, error = %e, "Turn ended without a model answer");
                fallback_reply(&e).to_string()
            }
        }
    }

    async fn run_turn(&mut self, client: &dyn AiClient, text: String) -> Result<String, AiError> {
        if !client.is_configured() {
            return Err(AiError::NotConfigured);
        }
        self.log.append(Turn::user(text));
        let mut rounds = 0;

        loop {
            self.transition(TurnState::ModelRequested);
            let response = client
                .send_message(self.log.snapshot(), &self.system_instruction, &self.tools)
                .await?;
            self.tracker.record(&response.usage);

            match response.part {
                Some(Part::FunctionCall(call)) => {
                    rounds += 1;
                    if rounds > self.max_tool_rounds {
                        warn!(
                            session = %self.id,
                            tool = %call.name,
                            max = self.max_tool_rounds,
                            "Tool round limit reached"
                        );
                        return Err(AiError::ToolRoundsExceeded(self.max_tool_rounds));
                    }

                    info!(session = %self.id, tool = %call.name, round = rounds, "Model requested tool");
                    self.transition(TurnState::ToolRequested);
                    let output = self.executor.execute(&call).await;

                    // Intent and result are logged together so the log never
                    // ends in an unanswered tool call.
                    let name = call.name.clone();
                    self.log.append(Turn::function_call(call));
                    self.log.append(Turn::function_response(
                        name,
                        json!({ "result": output.to_payload() }),
                    ));
                }
                Some(Part::Text(text)) if !text.is_empty() => {
                    debug!(session = %self.id, rounds, "Model answered");
                    self.log.append(Turn::model_text(text.clone()));
                    self.transition(TurnState::Responded);
                    return Ok(text);
                }
                Some(_) => {
                    return Err(AiError::Malformed(
                        "first part is neither text nor a function call".into(),
                    ));
                }
                None => return Err(AiError::Malformed("reply has no content part".into())),
            }
        }
    }
}
