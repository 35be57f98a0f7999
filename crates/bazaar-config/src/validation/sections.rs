//! Per-section validation for assistant and inventory settings.

use crate::schema::BazaarConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Validate assistant constraints.
pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &BazaarConfig) {
    let assistant = &config.assistant;
    validate_non_empty(errors, "assistant.model", &assistant.model);
    validate_range_f64(
        errors,
        "assistant.temperature",
        assistant.temperature,
        0.0,
        2.0,
    );
    if let Some(max) = assistant.max_output_tokens {
        validate_range(errors, "assistant.max_output_tokens", max, 1, 65_536);
    }
    validate_range(
        errors,
        "assistant.max_tool_rounds",
        assistant.max_tool_rounds,
        1,
        20,
    );
    validate_non_empty(errors, "assistant.persona_name", &assistant.persona_name);
    validate_non_empty(
        errors,
        "assistant.dealership_name",
        &assistant.dealership_name,
    );
}

/// Validate inventory provider location.
pub(crate) fn validate_inventory(errors: &mut Vec<String>, config: &BazaarConfig) {
    let inventory = &config.inventory;
    let url = inventory.base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "inventory.base_url = {url:?} must start with http:// or https://"
        ));
    }
    for (name, path) in [
        ("inventory.dealer_path", &inventory.dealer_path),
        ("inventory.warehouse_path", &inventory.warehouse_path),
    ] {
        if !path.starts_with('/') {
            errors.push(format!("{name} = {path:?} must start with '/'"));
        }
    }
}
