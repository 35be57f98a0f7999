use serde::{Deserialize, Serialize};

/// Where the inventory provider lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Base URL, scheme included.
    pub base_url: String,
    pub dealer_path: String,
    pub warehouse_path: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            dealer_path: "/api/dealer/inventory".into(),
            warehouse_path: "/api/warehouse/inventory".into(),
        }
    }
}
