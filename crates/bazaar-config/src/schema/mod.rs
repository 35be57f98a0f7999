//! Configuration schema types for Bazaar.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assistant;
mod inventory;
mod system;

pub use assistant::*;
pub use inventory::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Bazaar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BazaarConfig {
    pub assistant: AssistantConfig,
    pub inventory: InventoryConfig,
    pub logging: LoggingConfig,
}
