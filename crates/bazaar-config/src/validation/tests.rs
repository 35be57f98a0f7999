//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = BazaarConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = BazaarConfig::default();
    config.assistant.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.temperature"));
}

#[test]
fn catches_negative_temperature() {
    let mut config = BazaarConfig::default();
    config.assistant.temperature = -0.1;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_zero_tool_rounds() {
    let mut config = BazaarConfig::default();
    config.assistant.max_tool_rounds = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.max_tool_rounds"));
}

#[test]
fn unset_max_output_tokens_is_fine() {
    let mut config = BazaarConfig::default();
    config.assistant.max_output_tokens = None;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = BazaarConfig::default();
    config.assistant.max_output_tokens = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.max_output_tokens"));
}

#[test]
fn catches_empty_model() {
    let mut config = BazaarConfig::default();
    config.assistant.model = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.model must not be empty"));
}

#[test]
fn catches_base_url_without_scheme() {
    let mut config = BazaarConfig::default();
    config.inventory.base_url = "127.0.0.1:5000".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("inventory.base_url"));
}

#[test]
fn catches_relative_endpoint_path() {
    let mut config = BazaarConfig::default();
    config.inventory.warehouse_path = "api/warehouse/inventory".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("inventory.warehouse_path"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = BazaarConfig::default();
    config.assistant.temperature = 5.0;
    config.assistant.max_tool_rounds = 50;
    config.inventory.base_url = "ftp://nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("assistant.temperature"));
    assert!(err.contains("assistant.max_tool_rounds"));
    assert!(err.contains("inventory.base_url"));
    assert_eq!(err.matches("; ").count(), 2);
}
