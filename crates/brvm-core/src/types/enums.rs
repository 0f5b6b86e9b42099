//! Enumerations used throughout the gateway.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Resource kinds
// ---------------------------------------------------------------------------

/// The five kinds of data the dashboard asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    MarketStatus,
    Indices,
    Stocks,
    Bonds,
    News,
}

impl Resource {
    /// Every resource, in dashboard order.
    pub const ALL: [Resource; 5] =
        [Self::MarketStatus, Self::Indices, Self::Stocks, Self::Bonds, Self::News];

    /// Prefix of the per-day snapshot file name.
    pub fn snapshot_stem(self) -> &'static str {
        match self {
            Self::MarketStatus => "market_status",
            Self::Indices => "indices",
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::News => "news",
        }
    }

    /// Snapshot file extension. News has no snapshot file.
    pub fn snapshot_extension(self) -> Option<&'static str> {
        match self {
            Self::MarketStatus => Some("json"),
            Self::Indices | Self::Stocks | Self::Bonds => Some("csv"),
            Self::News => None,
        }
    }

    /// `{resource}_{YYYY-MM-DD}.{ext}`, or `None` for resources without a
    /// snapshot file.
    pub fn snapshot_file_name(self, date: &str) -> Option<String> {
        self.snapshot_extension()
            .map(|ext| format!("{}_{date}.{ext}", self.snapshot_stem()))
    }

    /// Path segment under the remote API base URL.
    pub fn api_path(self) -> &'static str {
        match self {
            Self::MarketStatus => "market-status",
            Self::Indices => "indices",
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::News => "news",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.snapshot_stem())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "market_status" | "status" => Ok(Self::MarketStatus),
            "indices" => Ok(Self::Indices),
            "stocks" => Ok(Self::Stocks),
            "bonds" => Ok(Self::Bonds),
            "news" => Ok(Self::News),
            other => Err(format!("unknown resource: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Market state
// ---------------------------------------------------------------------------

/// Whether the exchange is currently trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketState {
    Open,
    Closed,
}

impl std::fmt::Display for MarketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
        }
    }
}
