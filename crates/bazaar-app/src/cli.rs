use std::path::PathBuf;

use bazaar_common::ContextStrategy;
use clap::{Parser, ValueEnum};

/// Bazaar: a terminal chat with the dealership's sales assistant.
#[derive(Parser, Debug)]
#[command(name = "bazaar", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, bazaar=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// How the assistant learns about stock.
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Inventory service base URL override.
    #[arg(long)]
    pub inventory_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Model calls inventory tools on demand.
    Tools,
    /// Inventory is fetched once and embedded in the instruction.
    StaticSnapshot,
}

impl From<StrategyArg> for ContextStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Tools => ContextStrategy::Tools,
            StrategyArg::StaticSnapshot => ContextStrategy::StaticSnapshot,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags() {
        let args = Args::try_parse_from(["bazaar"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.strategy.is_none());
    }

    #[test]
    fn strategy_flag_uses_kebab_case() {
        let args =
            Args::try_parse_from(["bazaar", "--strategy", "static-snapshot"]).unwrap();
        assert_eq!(
            args.strategy.map(ContextStrategy::from),
            Some(ContextStrategy::StaticSnapshot)
        );
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "bazaar",
            "--config",
            "/tmp/bazaar.toml",
            "--inventory-url",
            "http://inventory:5000",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/bazaar.toml")));
        assert_eq!(args.inventory_url.as_deref(), Some("http://inventory:5000"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Args::try_parse_from(["bazaar", "--strategy", "psychic"]).is_err());
    }
}
