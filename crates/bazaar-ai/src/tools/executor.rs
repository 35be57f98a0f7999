//! Runs a tool call against the inventory provider.
//!
//! Never fails: unknown names and provider errors become error-tagged
//! payloads that are handed back to the model like any other result.

use std::sync::Arc;

use bazaar_common::Vehicle;
use serde_json::json;
use tracing::{debug, warn};

use crate::content::FunctionCall;
use crate::inventory::InventorySource;

use super::definitions::resolve_tool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFailure {
    UnknownTool,
    FetchFailed,
}

impl ToolFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownTool => "unknown tool",
            Self::FetchFailed => "fetch failed",
        }
    }
}

/// Outcome of one tool execution.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    Inventory(Vec<Vehicle>),
    Error(ToolFailure),
}

impl ToolOutput {
    /// Single-object payload: `{"inventory": [...]}` or `{"error": "..."}`.
    pub fn to_payload(&self) -> serde_json::Value {
        match self {
            Self::Inventory(vehicles) => json!({ "inventory": vehicles }),
            Self::Error(failure) => json!({ "error": failure.as_str() }),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

pub struct ToolExecutor {
    source: Arc<dyn InventorySource>,
}

impl ToolExecutor {
    pub fn new(source: Arc<dyn InventorySource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Arc<dyn InventorySource> {
        &self.source
    }

    pub async fn execute(&self, call: &FunctionCall) -> ToolOutput {
        let Some(location) = resolve_tool(&call.name) else {
            warn!(tool = %call.name, "Model requested an unknown tool");
            return ToolOutput::Error(ToolFailure::UnknownTool);
        };

        debug!(tool = %call.name, ?location, "Executing tool");
        match self.source.fetch(location).await {
            Ok(vehicles) => {
                debug!(tool = %call.name, count = vehicles.len(), "Tool returned inventory");
                ToolOutput::Inventory(vehicles)
            }
            Err(e) => {
                warn!(tool = %call.name, error = %e, "Inventory fetch failed");
                ToolOutput::Error(ToolFailure::FetchFailed)
            }
        }
    }
}
