//! In-process fakes for the model and the inventory provider.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bazaar_common::{Vehicle, VehicleCategory};
use tokio::sync::Notify;

use crate::content::Turn;
use crate::inventory::{InventoryError, InventoryLocation, InventorySource};
use crate::{AiClient, AiError, AiResponse, ToolDefinition};

pub(crate) fn vehicle(id: &str, make: &str, model: &str, category: VehicleCategory) -> Vehicle {
    Vehicle {
        id: id.into(),
        make: make.into(),
        model: model.into(),
        year: 2023,
        price: 41_000.0,
        category,
        color: "Red".into(),
        mileage: 5_000,
        description: format!("A {make} {model}."),
        features: vec!["Heated seats".into()],
        image_url: format!("https://img.example/{id}.jpg"),
    }
}

pub(crate) fn sedan() -> Vehicle {
    vehicle("d-1", "Toyota", "Camry", VehicleCategory::Sedan)
}

pub(crate) fn truck() -> Vehicle {
    vehicle("w-7", "Ford", "F-150", VehicleCategory::Truck)
}

pub(crate) struct FakeInventory {
    dealer: Vec<Vehicle>,
    warehouse: Vec<Vehicle>,
    failures: HashMap<InventoryLocation, fn() -> InventoryError>,
    delay: Option<Duration>,
    requests: Mutex<Vec<InventoryLocation>>,
}

impl FakeInventory {
    pub(crate) fn new(dealer: Vec<Vehicle>, warehouse: Vec<Vehicle>) -> Self {
        Self {
            dealer,
            warehouse,
            failures: HashMap::new(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing(mut self, location: InventoryLocation, error: fn() -> InventoryError) -> Self {
        self.failures.insert(location, error);
        self
    }

    /// Sleep this long before answering each fetch.
    pub(crate) fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn requests(&self) -> Vec<InventoryLocation> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventorySource for FakeInventory {
    async fn fetch(&self, location: InventoryLocation) -> Result<Vec<Vehicle>, InventoryError> {
        self.requests.lock().unwrap().push(location);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(error) = self.failures.get(&location) {
            return Err(error());
        }
        Ok(match location {
            InventoryLocation::Dealer => self.dealer.clone(),
            InventoryLocation::Warehouse => self.warehouse.clone(),
        })
    }
}

/// What the model saw on one request.
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub turns: Vec<Turn>,
    pub system_instruction: String,
    pub tool_names: Vec<String>,
}

/// Replays canned replies in order; errors once the script runs out.
pub(crate) struct ScriptedClient {
    replies: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    seen: Mutex<Vec<SeenRequest>>,
    gate: Option<Arc<Notify>>,
    configured: bool,
}

impl ScriptedClient {
    pub(crate) fn new(replies: Vec<Result<AiResponse, AiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::new(Vec::new()),
            gate: None,
            configured: true,
        }
    }

    /// Hold every reply until `gate` is notified.
    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Report missing credentials, like a client built without an API key.
    pub(crate) fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub(crate) fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(
        &self,
        turns: &[Turn],
        system_instruction: &str,
        tools: &[ToolDefinition],
    ) -> Result<AiResponse, AiError> {
        self.seen.lock().unwrap().push(SeenRequest {
            turns: turns.to_vec(),
            system_instruction: system_instruction.to_string(),
            tool_names: tools.iter().map(|t| t.name.clone()).collect(),
        });
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::NetworkError("script exhausted".into())))
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
