//! Session factory: shared model client and inventory, per-session state.

use std::sync::Arc;

use bazaar_common::{ContextStrategy, Vehicle};
use tracing::{info, warn};

use crate::inventory::{InventoryLocation, InventorySource};
use crate::prompt::{static_snapshot_instruction, tool_protocol_instruction, Persona};
use crate::session::{Session, SessionHandle};
use crate::tools::{inventory_tools, ToolExecutor};
use crate::AiClient;

#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub strategy: ContextStrategy,
    pub max_tool_rounds: u32,
    pub persona: Persona,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            strategy: ContextStrategy::Tools,
            max_tool_rounds: crate::session::DEFAULT_MAX_TOOL_ROUNDS,
            persona: Persona::default(),
        }
    }
}

/// Creates independent chat sessions that share one client and inventory.
pub struct Assistant {
    client: Arc<dyn AiClient>,
    executor: Arc<ToolExecutor>,
    settings: AssistantSettings,
}

impl Assistant {
    pub fn new(
        client: Arc<dyn AiClient>,
        inventory: Arc<dyn InventorySource>,
        settings: AssistantSettings,
    ) -> Self {
        Self {
            client,
            executor: Arc::new(ToolExecutor::new(inventory)),
            settings,
        }
    }

    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    /// Start a fresh session with an empty log.
    ///
    /// In snapshot mode both inventories are fetched here and embedded in
    /// the system instruction; a failed fetch contributes no vehicles.
    pub async fn initialize_session(&self) -> SessionHandle {
        let persona = &self.settings.persona;
        let session = Session::new(Arc::clone(&self.executor))
            .with_max_tool_rounds(self.settings.max_tool_rounds);

        let session = match self.settings.strategy {
            ContextStrategy::Tools => session
                .with_system_instruction(tool_protocol_instruction(persona))
                .with_tools(inventory_tools()),
            ContextStrategy::StaticSnapshot => {
                let inventory = self.snapshot_inventory().await;
                session.with_system_instruction(static_snapshot_instruction(persona, &inventory))
            }
        };

        info!(
            session = %session.id(),
            strategy = ?self.settings.strategy,
            "Session initialized"
        );
        SessionHandle::new(Arc::clone(&self.client), session)
    }

    async fn snapshot_inventory(&self) -> Vec<Vehicle> {
        let mut vehicles = Vec::new();
        for location in InventoryLocation::ALL {
            match self.executor.source().fetch(location).await {
                Ok(batch) => vehicles.extend(batch),
                Err(e) => warn!(?location, error = %e, "Inventory snapshot incomplete"),
            }
        }
        vehicles
    }
}
