//! Inventory tools exposed to the model.
//!
//! Two fixed tools, each resolving to one inventory provider endpoint.

mod definitions;
mod executor;

pub use definitions::{inventory_tools, resolve_tool, DEALER_INVENTORY_TOOL, WAREHOUSE_INVENTORY_TOOL};
pub use executor::{ToolExecutor, ToolFailure, ToolOutput};
