pub mod errors;
pub mod id;
pub mod types;

pub use errors::ConfigError;
pub use id::SessionId;
pub use types::{ContextStrategy, Vehicle, VehicleCategory};
