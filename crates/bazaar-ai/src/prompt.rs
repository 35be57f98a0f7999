//! System instructions for the two context strategies.

use bazaar_common::Vehicle;

use crate::tools::{DEALER_INVENTORY_TOOL, WAREHOUSE_INVENTORY_TOOL};

/// Who the assistant presents itself as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub dealership: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Chaika".into(),
            dealership: "Auto Bazaar".into(),
        }
    }
}

fn preamble(persona: &Persona) -> String {
    format!(
        "You are \"{}\", a proactive and charming AI sales assistant for \"{}\".\n\
         Your goal is to help customers find the perfect vehicle from our EXCLUSIVE INVENTORY.\n",
        persona.name, persona.dealership
    )
}

/// Instruction for tool mode: the model must look inventory up itself.
pub fn tool_protocol_instruction(persona: &Persona) -> String {
    format!(
        "{preamble}\n\
         PROTOCOL:\n\
         1. You do not know the inventory by heart. You MUST use the provided tools to find cars.\n\
         2. Always check '{DEALER_INVENTORY_TOOL}' first.\n\
         3. If the user wants something you didn't find at the dealer (e.g., \"I need a truck\"), \
         then you MUST check '{WAREHOUSE_INVENTORY_TOOL}'.\n\
         4. Once you have data, answer the user's question enthusiastically.\n\
         5. If you search both and find nothing, apologize.\n\
         6. Be concise.\n",
        preamble = preamble(persona),
    )
}

/// Instruction for snapshot mode: the whole inventory is embedded as JSON.
pub fn static_snapshot_instruction(persona: &Persona, inventory: &[Vehicle]) -> String {
    let inventory_json =
        serde_json::to_string_pretty(inventory).unwrap_or_else(|_| "[]".to_string());
    format!(
        "{preamble}\n\
         Here is the CURRENT INVENTORY data (in JSON format):\n\
         {inventory_json}\n\n\
         RULES:\n\
         1. You act as a knowledgeable car expert.\n\
         2. STRICTLY recommend ONLY cars from the provided inventory list. If a user asks for a car \
         we don't have, politely explain we don't have it and suggest the closest alternative from our list.\n\
         3. When recommending a car, mention its Price, Year, and a unique feature.\n\
         4. Be concise but enthusiastic.\n\
         5. If the user is unsure, ask clarifying questions (budget, usage, family size) to infer the best match.\n\
         6. Do not output raw JSON in your response, speak naturally.\n",
        preamble = preamble(persona),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::truck;

    #[test]
    fn tool_instruction_names_both_tools_and_persona() {
        let persona = Persona {
            name: "Vera".into(),
            dealership: "Motor Row".into(),
        };
        let text = tool_protocol_instruction(&persona);
        assert!(text.contains("\"Vera\""));
        assert!(text.contains("\"Motor Row\""));
        assert!(text.contains("'get_dealer_inventory' first"));
        assert!(text.contains("'get_global_warehouse_inventory'"));
    }

    #[test]
    fn snapshot_instruction_embeds_inventory_json() {
        let text = static_snapshot_instruction(&Persona::default(), &[truck()]);
        assert!(text.contains("\"Chaika\""));
        assert!(text.contains("\"make\": \"Ford\""));
        assert!(text.contains("\"type\": \"Truck\""));
        assert!(!text.contains("get_dealer_inventory"));
    }

    #[test]
    fn snapshot_instruction_with_empty_inventory() {
        let text = static_snapshot_instruction(&Persona::default(), &[]);
        assert!(text.contains("(in JSON format):\n[]"));
    }
}
