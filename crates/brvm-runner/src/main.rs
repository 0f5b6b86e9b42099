//! # brvm-runner
//!
//! Command-line driver for the BRVM market-data gateway.
//!
//! Loads an optional JSON configuration file, applies command-line
//! overrides, builds a [`MarketDataGateway`], fetches the requested
//! resources (all five concurrently by default) and prints them to stdout
//! as one JSON document tagged with each resource's origin.
//!
//! # Usage
//!
//! ```bash
//! brvm-runner config.json --log-level debug
//! brvm-runner --mode remote --remote-url http://localhost:5000/api --resource stocks
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use brvm_core::Resource;
use brvm_core::config::{GatewayConfig, Mode};
use brvm_gateway::{MarketDataGateway, Outcome};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;
use tracing::info;

/// BRVM market-data gateway runner.
#[derive(Parser, Debug)]
#[command(name = "brvm-runner", about = "BRVM market-data gateway runner")]
struct Cli {
    /// Configuration file path (JSON). Built-in defaults apply when omitted.
    config: Option<PathBuf>,

    /// Data source: `snapshot` or `remote`.
    #[arg(long)]
    mode: Option<Mode>,

    /// Snapshot directory or static-file URL.
    #[arg(long)]
    snapshot_path: Option<String>,

    /// REST API base URL.
    #[arg(long)]
    remote_url: Option<String>,

    /// Snapshot date (YYYY-MM-DD) instead of today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Fetch a single resource (market-status, indices, stocks, bonds, news).
    #[arg(short, long)]
    resource: Option<Resource>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,

    /// Print compact instead of pretty JSON.
    #[arg(long)]
    compact: bool,
}

/// Layer command-line flags over the file (or default) configuration.
fn resolve_config(cli: &Cli) -> Result<GatewayConfig> {
    let mut config = match &cli.config {
        Some(path) => brvm_core::config::load_config(path)?,
        None => GatewayConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(path) = &cli.snapshot_path {
        config.snapshot_base_path = path.clone();
    }
    if let Some(url) = &cli.remote_url {
        config.remote_base_url = url.clone();
    }
    if cli.date.is_some() {
        config.snapshot_date = cli.date;
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    if cli.log_dir.is_some() {
        config.log.dir = cli.log_dir.clone();
    }

    config.validate()?;
    Ok(config)
}

fn tag<T: Serialize>(resource: Resource, outcome: Outcome<T>) -> Result<(Resource, serde_json::Value)> {
    info!("[{resource}] origin={}", outcome.origin());
    let value = serde_json::to_value(&outcome).with_context(|| format!("serializing {resource}"))?;
    Ok((resource, value))
}

async fn fetch_one(gateway: &MarketDataGateway, resource: Resource) -> Result<(Resource, serde_json::Value)> {
    match resource {
        Resource::MarketStatus => tag(resource, gateway.market_status().await),
        Resource::Indices => tag(resource, gateway.indices().await),
        Resource::Stocks => tag(resource, gateway.stocks().await),
        Resource::Bonds => tag(resource, gateway.bonds().await),
        Resource::News => tag(resource, gateway.market_news().await),
    }
}

/// Fetch the selected resource, or all five concurrently.
async fn collect(gateway: &MarketDataGateway, only: Option<Resource>) -> Result<serde_json::Value> {
    let entries = match only {
        Some(resource) => vec![fetch_one(gateway, resource).await?],
        None => {
            let (status, indices, stocks, bonds, news) = tokio::join!(
                fetch_one(gateway, Resource::MarketStatus),
                fetch_one(gateway, Resource::Indices),
                fetch_one(gateway, Resource::Stocks),
                fetch_one(gateway, Resource::Bonds),
                fetch_one(gateway, Resource::News),
            );
            vec![status?, indices?, stocks?, bonds?, news?]
        }
    };

    let map = entries
        .into_iter()
        .map(|(resource, value)| (resource.to_string(), value))
        .collect();
    Ok(serde_json::Value::Object(map))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Resolve configuration
    let config = resolve_config(&cli)?;

    // 2. Initialize logging
    brvm_core::logging::init_logging(&config.log);

    info!(
        "brvm-runner starting, mode={:?}, config={}",
        config.mode,
        cli.config.as_ref().map_or("<defaults>".to_string(), |p| p.display().to_string()),
    );

    // 3. Build the gateway
    let gateway = MarketDataGateway::new(&config)?;
    info!("snapshot date {}", gateway.snapshot_date());

    // 4. Fetch and print
    let output = collect(&gateway, cli.resource).await?;
    let text = if cli.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    println!("{text}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("brvm-runner").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_defaults() {
        let cli = cli(&[
            "--mode",
            "remote",
            "--remote-url",
            "http://127.0.0.1:5000/api",
            "--date",
            "2025-03-21",
            "-r",
            "market-status",
            "-l",
            "debug",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.mode, Mode::Remote);
        assert_eq!(config.remote_base_url, "http://127.0.0.1:5000/api");
        assert_eq!(config.snapshot_date, NaiveDate::from_ymd_opt(2025, 3, 21));
        assert_eq!(config.log.level, "debug");
        assert_eq!(cli.resource, Some(Resource::MarketStatus));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let cli = cli(&["--mode", "remote", "--remote-url", "localhost"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[tokio::test]
    async fn collect_all_from_missing_snapshots() {
        let config = GatewayConfig {
            snapshot_base_path: "/nonexistent/brvm".into(),
            ..Default::default()
        };
        let gateway = MarketDataGateway::new(&config).unwrap();
        let output = collect(&gateway, None).await.unwrap();

        for key in ["market_status", "indices", "stocks", "bonds", "news"] {
            assert_eq!(output[key]["origin"], "fallback", "{key}");
        }
        assert_eq!(output["indices"]["data"].as_array().map(Vec::len), Some(8));
        assert_eq!(output["market_status"]["data"]["market_status"], "closed");
    }

    #[tokio::test]
    async fn collect_single_resource() {
        let gateway = MarketDataGateway::new(&GatewayConfig::default()).unwrap();
        let output = collect(&gateway, Some(Resource::News)).await.unwrap();
        let obj = output.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(output["news"]["data"][0]["source"], "BRVM");
    }
}
