//! Inventory provider client.
//!
//! The provider is an external HTTP service with two read-only endpoints,
//! each returning a JSON array of vehicle records. A body that is not an
//! array fails the fetch; individual records that do not decode are dropped.

use async_trait::async_trait;
use bazaar_common::Vehicle;
use tracing::{debug, warn};

/// Which inventory to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryLocation {
    /// Cars physically at the local showroom.
    Dealer,
    /// Cars held in the global warehouse.
    Warehouse,
}

impl InventoryLocation {
    pub const ALL: [InventoryLocation; 2] = [Self::Dealer, Self::Warehouse];
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn fetch(&self, location: InventoryLocation) -> Result<Vec<Vehicle>, InventoryError>;
}

pub const DEFAULT_DEALER_PATH: &str = "/api/dealer/inventory";
pub const DEFAULT_WAREHOUSE_PATH: &str = "/api/warehouse/inventory";

/// Inventory provider reached over HTTP.
pub struct HttpInventory {
    base_url: String,
    dealer_path: String,
    warehouse_path: String,
    http: reqwest::Client,
}

impl HttpInventory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            dealer_path: DEFAULT_DEALER_PATH.to_string(),
            warehouse_path: DEFAULT_WAREHOUSE_PATH.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_paths(mut self, dealer: impl Into<String>, warehouse: impl Into<String>) -> Self {
        self.dealer_path = dealer.into();
        self.warehouse_path = warehouse.into();
        self
    }

    pub fn url(&self, location: InventoryLocation) -> String {
        let path = match location {
            InventoryLocation::Dealer => &self.dealer_path,
            InventoryLocation::Warehouse => &self.warehouse_path,
        };
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl InventorySource for HttpInventory {
    async fn fetch(&self, location: InventoryLocation) -> Result<Vec<Vehicle>, InventoryError> {
        let url = self.url(location);
        debug!(%url, ?location, "Inventory request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| InventoryError::Network(e.to_string()))?;

        let records: Vec<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| InventoryError::Decode(e.to_string()))?;
        Ok(decode_records(location, records))
    }
}

/// Decode each record on its own; records that do not fit are skipped.
fn decode_records(location: InventoryLocation, records: Vec<serde_json::Value>) -> Vec<Vehicle> {
    let total = records.len();
    let vehicles: Vec<Vehicle> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value(record) {
            Ok(vehicle) => Some(vehicle),
            Err(e) => {
                warn!(?location, error = %e, "Skipping unreadable inventory record");
                None
            }
        })
        .collect();
    if vehicles.len() < total {
        debug!(?location, kept = vehicles.len(), total, "Inventory partially decoded");
    }
    vehicles
}
