mod cli;

use std::sync::Arc;

use bazaar_ai::{
    Assistant, AssistantSettings, GeminiClient, GeminiConfig, HttpInventory, Persona,
    SessionHandle,
};
use bazaar_config::BazaarConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

/// Parse `.env` contents into KEY=VALUE pairs, skipping blanks and comments.
fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            (key.trim().to_string(), value.to_string())
        })
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

/// Load environment variables from `./.env`. Variables already set win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
}

fn init_logging(flag: Option<&str>, config: &BazaarConfig) {
    let fallback = flag.unwrap_or_else(|| config.logging.level.directive());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("bazaar=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn gemini_config(config: &BazaarConfig) -> GeminiConfig {
    let base = GeminiConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!("{e}; replies will report the missing key");
        GeminiConfig::new("")
    });
    base.with_model(config.assistant.model.clone())
        .with_temperature(config.assistant.temperature)
        .with_max_tokens(config.assistant.max_output_tokens)
}

fn settings(config: &BazaarConfig) -> AssistantSettings {
    AssistantSettings {
        strategy: config.assistant.strategy,
        max_tool_rounds: config.assistant.max_tool_rounds,
        persona: Persona {
            name: config.assistant.persona_name.clone(),
            dealership: config.assistant.dealership_name.clone(),
        },
    }
}

async fn chat_loop(handle: SessionHandle, persona: &str) {
    println!("{persona} is ready. Type /reset to start over, /quit to leave.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read stdin: {e}");
                break;
            }
        };
        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                handle.reset().await;
                println!("(conversation cleared)");
            }
            message => {
                let reply = handle.send_message(message).await;
                println!("{persona}: {reply}");
            }
        }
    }
    tracing::info!(
        session = %handle.id(),
        tokens = handle.total_tokens().await,
        "Session closed"
    );
}

#[tokio::main]
async fn main() {
    load_dotenv();

    let args = cli::parse();

    let loaded = match &args.config {
        Some(path) => bazaar_config::load_config_from(path),
        None => bazaar_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (BazaarConfig::default(), Some(e)),
    };

    init_logging(args.log_level.as_deref(), &config);
    tracing::info!("Bazaar v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(strategy) = args.strategy {
        config.assistant.strategy = strategy.into();
    }
    if let Some(url) = args.inventory_url {
        config.inventory.base_url = url;
    }
    tracing::info!(
        model = %config.assistant.model,
        strategy = ?config.assistant.strategy,
        inventory = %config.inventory.base_url,
        "Config loaded"
    );

    let client = Arc::new(GeminiClient::new(gemini_config(&config)));
    let inventory = Arc::new(
        HttpInventory::new(config.inventory.base_url.clone()).with_paths(
            config.inventory.dealer_path.clone(),
            config.inventory.warehouse_path.clone(),
        ),
    );
    let assistant = Assistant::new(client, inventory, settings(&config));

    let handle = assistant.initialize_session().await;
    tracing::info!(session = %handle.id(), "Session ready");

    chat_loop(handle, &config.assistant.persona_name).await;
    tracing::info!("Shutdown complete");
}
