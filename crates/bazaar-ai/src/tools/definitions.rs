use crate::inventory::InventoryLocation;
use crate::ToolDefinition;

pub const DEALER_INVENTORY_TOOL: &str = "get_dealer_inventory";
pub const WAREHOUSE_INVENTORY_TOOL: &str = "get_global_warehouse_inventory";

/// The tool descriptors sent with every request in tool mode.
pub fn inventory_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: DEALER_INVENTORY_TOOL.to_string(),
            description: "Retrieves the list of cars currently physically available at the \
                          Local Dealer Showroom. Always check this first."
                .to_string(),
            parameters: None,
        },
        ToolDefinition {
            name: WAREHOUSE_INVENTORY_TOOL.to_string(),
            description: "Retrieves the list of cars from the Global Warehouse. Use this ONLY \
                          if the user asks for a specific type of car (like a Truck or Sports \
                          car) that is NOT found in the dealer inventory."
                .to_string(),
            parameters: None,
        },
    ]
}

/// Map a tool name to the inventory it reads. `None` for unknown tools.
pub fn resolve_tool(name: &str) -> Option<InventoryLocation> {
    match name {
        DEALER_INVENTORY_TOOL => Some(InventoryLocation::Dealer),
        WAREHOUSE_INVENTORY_TOOL => Some(InventoryLocation::Warehouse),
        _ => None,
    }
}
