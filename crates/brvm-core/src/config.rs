//! Configuration parsing for the market-data gateway.
//!
//! The gateway reads a single JSON file. Every field has a default, so an
//! empty object `{}` is a valid config (snapshot mode over
//! `../data/processed`).
//!
//! # Example config
//!
//! ```json
//! {
//!   "mode": "remote",
//!   "snapshot_base_path": "../data/processed",
//!   "remote_base_url": "http://localhost:5000/api",
//!   "request_timeout_ms": 10000,
//!   "log": { "level": "debug", "dir": "/tmp/log" }
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Where the gateway gets its data. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Per-day files under `snapshot_base_path`, with example-data fallback.
    #[default]
    Snapshot,
    /// JSON from the HTTP API under `remote_base_url`, null on failure.
    Remote,
}

impl std::str::FromStr for Mode {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "snapshot" => Ok(Self::Snapshot),
            "remote" => Ok(Self::Remote),
            other => Err(GatewayError::Config(format!("unknown mode: {other}"))),
        }
    }
}

/// Top-level gateway config, deserialized from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub mode: Mode,

    /// Directory or `http(s)://` URL holding `{resource}_{date}.{ext}` files.
    pub snapshot_base_path: String,

    /// Base URL of the REST API (e.g. `http://localhost:5000/api`).
    pub remote_base_url: String,

    /// Per-request HTTP timeout. `None` waits indefinitely.
    pub request_timeout_ms: Option<u64>,

    /// Read snapshots for this date instead of today.
    pub snapshot_date: Option<NaiveDate>,

    /// When today's file is absent from a snapshot directory, use the most
    /// recent `{resource}_*.{ext}` file before falling back to example data.
    pub latest_snapshot_fallback: bool,

    pub log: LogConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            snapshot_base_path: default_snapshot_base_path(),
            remote_base_url: default_remote_base_url(),
            request_timeout_ms: None,
            snapshot_date: None,
            latest_snapshot_fallback: false,
            log: LogConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// `true` when snapshots are served by a static HTTP file server.
    pub fn snapshots_over_http(&self) -> bool {
        is_http_url(&self.snapshot_base_path)
    }

    /// Reject values that would only fail later, at request time.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.mode == Mode::Remote && !is_http_url(&self.remote_base_url) {
            return Err(GatewayError::Config(format!(
                "remote_base_url must be an http(s) URL, got '{}'",
                self.remote_base_url
            )));
        }
        if self.mode == Mode::Snapshot && self.snapshot_base_path.trim().is_empty() {
            return Err(GatewayError::Config("snapshot_base_path is empty".into()));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(GatewayError::Config("request_timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

/// Logging block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
    /// Optional directory for daily-rotating log files.
    pub dir: Option<String>,
    /// Log file prefix.
    pub module_name: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            dir: None,
            module_name: "brvm-runner".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default helpers (used by serde)
// ---------------------------------------------------------------------------

fn default_snapshot_base_path() -> String {
    "../data/processed".into()
}

fn default_remote_base_url() -> String {
    "http://localhost:5000/api".into()
}

fn is_http_url(s: &str) -> bool {
    let s = s.trim_start().to_ascii_lowercase();
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load and parse a JSON config file.
pub fn load_config(path: &Path) -> anyhow::Result<GatewayConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GatewayConfig = serde_json::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config: GatewayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.mode, Mode::Snapshot);
        assert!(!config.snapshots_over_http());
    }

    #[test]
    fn full_config() {
        let json = r#"{
            "mode": "remote",
            "remote_base_url": "https://brvm.example.org/api",
            "request_timeout_ms": 2500,
            "snapshot_date": "2025-03-21",
            "log": { "level": "debug" }
        }"#;
        let config: GatewayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, Mode::Remote);
        assert_eq!(config.request_timeout_ms, Some(2500));
        assert_eq!(config.snapshot_date, NaiveDate::from_ymd_opt(2025, 3, 21));
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.module_name, "brvm-runner");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn remote_mode_needs_http_base() {
        let config = GatewayConfig {
            mode: Mode::Remote,
            remote_base_url: "/api".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GatewayError::Config(_))));
    }

    #[test]
    fn http_snapshot_base_detected() {
        let config = GatewayConfig {
            snapshot_base_path: "HTTP://localhost:8000/data/processed".into(),
            ..Default::default()
        };
        assert!(config.snapshots_over_http());
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("Remote".parse::<Mode>().unwrap(), Mode::Remote);
        assert!("live".parse::<Mode>().is_err());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("brvm-config-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, r#"{"snapshot_base_path": "/srv/brvm"}"#).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.snapshot_base_path, "/srv/brvm");
        std::fs::remove_file(&path).unwrap();

        assert!(load_config(&path).is_err());
    }
}
