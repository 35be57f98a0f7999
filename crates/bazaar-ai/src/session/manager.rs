//! Session struct and conversation management.

use std::sync::Arc;

use bazaar_common::SessionId;
use tracing::debug;

use crate::content::Turn;
use crate::token_tracker::TokenTracker;
use crate::tools::ToolExecutor;
use crate::ToolDefinition;

use super::log::ConversationLog;
use super::types::TurnState;

pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 5;

/// One customer conversation: log, instruction, tools, and turn state.
pub struct Session {
    pub(super) id: SessionId,
    pub(super) log: ConversationLog,
    /// Sent as the system instruction with every model call.
    pub(super) system_instruction: String,
    /// Empty in snapshot mode.
    pub(super) tools: Vec<ToolDefinition>,
    pub(super) executor: Arc<ToolExecutor>,
    pub(super) tracker: TokenTracker,
    /// Tool-call cycles allowed per user message.
    pub(super) max_tool_rounds: u32,
    pub(super) state: TurnState,
}

impl Session {
    pub fn new(executor: Arc<ToolExecutor>) -> Self {
        Self {
            id: SessionId::new(),
            log: ConversationLog::new(),
            system_instruction: String::new(),
            tools: Vec::new(),
            executor,
            tracker: TokenTracker::new(),
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
            state: TurnState::AwaitingUserInput,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_max_tool_rounds(mut self, max: u32) -> Self {
        self.max_tool_rounds = max;
        self
    }

    pub(super) fn transition(&mut self, next: TurnState) {
        if self.state != next {
            debug!(session = %self.id, from = ?self.state, to = ?next, "Turn state");
            self.state = next;
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Get the full conversation history.
    pub fn turns(&self) -> &[Turn] {
        self.log.snapshot()
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Clear conversation history and usage; instruction and tools stay.
    pub fn reset(&mut self) {
        self.log.reset();
        self.tracker.reset();
        self.state = TurnState::AwaitingUserInput;
    }

    /// Number of turns in history.
    pub fn turn_count(&self) -> usize {
        self.log.len()
    }
}
