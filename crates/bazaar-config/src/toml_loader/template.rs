//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Bazaar Configuration
# Only override what you want to change -- missing fields use defaults.
# The Gemini API key is read from GEMINI_API_KEY (or GOOGLE_API_KEY).

[assistant]
# model = "gemini-2.5-flash"
# temperature = 0.7          # 0.0-2.0
# max_output_tokens = 1024   # 1-65536, unset = model default
# max_tool_rounds = 5        # 1-20
# strategy = "tools"         # tools, static_snapshot
# persona_name = "Chaika"
# dealership_name = "Auto Bazaar"

[inventory]
# base_url = "http://127.0.0.1:5000"
# dealer_path = "/api/dealer/inventory"
# warehouse_path = "/api/warehouse/inventory"

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
