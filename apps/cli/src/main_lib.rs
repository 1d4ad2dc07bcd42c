use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use autoglass_vehicle_data::{AgpClient, ClientConfig, LookupCache, VehicleResolver};

/// Look up vehicles by VIN against the auto-glass catalog.
#[derive(Debug, Parser)]
#[command(name = "vin-lookup", version, about)]
pub struct Cli {
    /// Catalog service base URL (overrides AUTOGLASS_API_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides AUTOGLASS_API_TIMEOUT_SECS)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode one or more VINs and resolve model and body style
    Decode {
        /// VINs to look up; catalog responses are shared between them
        #[arg(required = true)]
        vins: Vec<String>,
    },
    /// Resolve a decoded model name against the canonical catalog
    Resolve {
        #[arg(long)]
        year: String,
        #[arg(long)]
        make: String,
        #[arg(long)]
        model: String,
    },
}

pub fn init_tracing() {
    let log_format = std::env::var("AUTOGLASS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Environment first, then command-line overrides.
pub fn build_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.base_url {
        Some(base_url) => ClientConfig::new(base_url)?,
        None => ClientConfig::from_env().context("catalog service is not configured")?,
    };

    if let Some(secs) = cli.timeout_secs {
        anyhow::ensure!(secs > 0, "--timeout-secs must be positive");
        config = config.with_timeout(Duration::from_secs(secs));
    }

    Ok(config)
}

/// Execute the selected command and render its result as pretty JSON.
pub async fn run(cli: &Cli, config: ClientConfig) -> anyhow::Result<String> {
    let client = Arc::new(AgpClient::new(config));
    let resolver = VehicleResolver::from_client(client).with_cache(Arc::new(LookupCache::new()));

    match &cli.command {
        Command::Decode { vins } => {
            let mut lookups = Vec::with_capacity(vins.len());
            for vin in vins {
                let lookup = resolver
                    .lookup_vin(vin)
                    .await
                    .with_context(|| format!("lookup failed for VIN {}", vin))?;
                lookups.push(lookup);
            }

            if lookups.len() == 1 {
                Ok(serde_json::to_string_pretty(&lookups[0])?)
            } else {
                Ok(serde_json::to_string_pretty(&lookups)?)
            }
        }
        Command::Resolve { year, make, model } => {
            let result = resolver
                .resolve_vin_model(Some(year.as_str()), Some(make.as_str()), Some(model.as_str()))
                .await;
            tracing::info!(
                "Resolved '{}' -> {:?} (match: {})",
                model,
                result.resolved_model,
                result.match_found
            );
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decode_multiple_vins() {
        let cli = Cli::try_parse_from([
            "vin-lookup",
            "decode",
            "1N6AD0EV5KN700000",
            "4T1B11HK5JU000000",
        ])
        .unwrap();

        match cli.command {
            Command::Decode { vins } => assert_eq!(vins.len(), 2),
            other => panic!("Expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_requires_a_vin() {
        assert!(Cli::try_parse_from(["vin-lookup", "decode"]).is_err());
    }

    #[test]
    fn test_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "vin-lookup",
            "resolve",
            "--year",
            "2019",
            "--make",
            "Nissan",
            "--model",
            "Frontier",
            "--base-url",
            "https://api.example.com/python",
            "--timeout-secs",
            "7",
        ])
        .unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/python/");
        assert_eq!(config.request_timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = Cli::try_parse_from([
            "vin-lookup",
            "--base-url",
            "https://api.example.com/",
            "--timeout-secs",
            "0",
            "decode",
            "1N6AD0EV5KN700000",
        ])
        .unwrap();

        assert!(build_config(&cli).is_err());
    }
}
