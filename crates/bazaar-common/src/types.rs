use serde::{Deserialize, Serialize};
use std::fmt;

/// Body style a vehicle is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    #[serde(rename = "SUV")]
    Suv,
    Sedan,
    Sports,
    Truck,
    Electric,
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Suv => "SUV",
            Self::Sedan => "Sedan",
            Self::Sports => "Sports",
            Self::Truck => "Truck",
            Self::Electric => "Electric",
        };
        f.write_str(name)
    }
}

/// How a session gives the model access to inventory.
///
/// Exactly one strategy is active per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContextStrategy {
    /// Expose inventory lookups as callable tools.
    #[default]
    Tools,
    /// Fetch inventory once and embed it in the system instruction.
    StaticSnapshot,
}

/// A vehicle record as served by the inventory provider.
///
/// Field names follow the provider's JSON (`type`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub price: f64,
    #[serde(rename = "type")]
    pub category: VehicleCategory,
    pub color: String,
    pub mileage: u32,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub image_url: String,
}
