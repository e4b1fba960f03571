//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap: the cache TTL
//! for API responses and an overridable API root (mainly for tests against
//! a local server).

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::client::DEFAULT_BASE_URL;

/// Errors for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// A zero TTL would make every sweep remove every entry
    #[error("--ttl must be at least 1 second")]
    ZeroTtl,
}

/// Pokedex CLI - explore location areas and catch creatures interactively
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex over the PokeAPI")]
#[command(version)]
pub struct Cli {
    /// How long API responses stay cached, in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub ttl: u64,

    /// API root to query
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Freshness window for cached API responses
    pub cache_ttl: Duration,
    /// API root to query
    pub base_url: String,
}

impl StartupConfig {
    /// Validates parsed CLI arguments into a startup configuration
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if cli.ttl == 0 {
            return Err(CliError::ZeroTtl);
        }
        Ok(StartupConfig {
            cache_ttl: Duration::from_secs(cli.ttl),
            base_url: cli.base_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args_uses_defaults() {
        let cli = Cli::parse_from(["pokedex"]);
        assert_eq!(cli.ttl, 60);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_parse_custom_ttl_and_base_url() {
        let cli = Cli::parse_from(["pokedex", "--ttl", "5", "--base-url", "http://localhost:8080"]);
        assert_eq!(cli.ttl, 5);
        assert_eq!(cli.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_startup_config_from_cli() {
        let cli = Cli::parse_from(["pokedex", "--ttl", "120"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.cache_ttl, Duration::from_secs(120));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_startup_config_rejects_zero_ttl() {
        let cli = Cli::parse_from(["pokedex", "--ttl", "0"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--ttl"));
    }
}
