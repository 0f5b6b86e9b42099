//! The market-data gateway.
//!
//! # Source selection
//!
//! ```text
//! MarketDataGateway
//! ├── Mode::Snapshot ── SnapshotSource (dir or static HTTP)
//! │     ├── market_status_{date}.json ── JSON
//! │     ├── {indices,stocks,bonds}_{date}.csv ── CSV normalization
//! │     └── news ── always the example dataset
//! └── Mode::Remote ── RemoteClient (GET {base}/{path}, JSON)
//! ```
//!
//! # Failure policy
//!
//! | Mode     | Missing / non-2xx   | No response / parse failed                      |
//! |----------|---------------------|-------------------------------------------------|
//! | Snapshot | `Fallback(example)` | CSV: `Fallback(example)`; status: `Unavailable` |
//! | Remote   | `Unavailable`       | `Unavailable`                                   |
//!
//! The two modes are deliberately asymmetric. No operation panics or
//! returns an error past this boundary; the `try_*` variants expose the
//! underlying [`GatewayError`] without substitution.
//!
//! Operations take `&self`, hold no shared mutable state, and may run
//! concurrently. Each call performs exactly one read.

use std::time::Duration;

use brvm_core::config::{GatewayConfig, Mode};
use brvm_core::error::{GatewayError, GatewayResult};
use brvm_core::{BondQuote, IndexQuote, MarketStatus, NewsItem, Resource, StockQuote};
use brvm_core::{csv, fallback, time_util};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

use crate::outcome::Outcome;
use crate::remote::{RemoteClient, build_http_client};
use crate::source::{FsSnapshots, HttpSnapshots, SnapshotSource};

pub struct MarketDataGateway {
    mode: Mode,
    snapshots: Box<dyn SnapshotSource>,
    remote: RemoteClient,
    /// Pinned snapshot date; `None` means "today, local time".
    snapshot_date: Option<NaiveDate>,
}

impl MarketDataGateway {
    /// Build a gateway from configuration.
    ///
    /// The snapshot source is a static HTTP server when
    /// `snapshot_base_path` is an `http(s)://` URL, a local directory
    /// otherwise.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;
        let http = build_http_client(config.request_timeout_ms.map(Duration::from_millis))?;

        let snapshots: Box<dyn SnapshotSource> = if config.snapshots_over_http() {
            Box::new(HttpSnapshots::new(http.clone(), config.snapshot_base_path.clone()))
        } else {
            Box::new(
                FsSnapshots::new(&config.snapshot_base_path)
                    .with_latest_fallback(config.latest_snapshot_fallback),
            )
        };

        Ok(Self::assemble(config, snapshots, http))
    }

    /// Build a gateway over a caller-supplied snapshot source.
    pub fn with_snapshot_source(
        config: &GatewayConfig,
        snapshots: impl SnapshotSource + 'static,
    ) -> GatewayResult<Self> {
        config.validate()?;
        let http = build_http_client(config.request_timeout_ms.map(Duration::from_millis))?;
        Ok(Self::assemble(config, Box::new(snapshots), http))
    }

    fn assemble(
        config: &GatewayConfig,
        snapshots: Box<dyn SnapshotSource>,
        http: reqwest::Client,
    ) -> Self {
        info!(
            "[gateway] mode={:?} snapshots={} remote={}",
            config.mode,
            snapshots.describe(),
            config.remote_base_url
        );
        Self {
            mode: config.mode,
            snapshots,
            remote: RemoteClient::new(http, config.remote_base_url.clone()),
            snapshot_date: config.snapshot_date,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Date whose snapshot files are read.
    pub fn snapshot_date(&self) -> NaiveDate {
        self.snapshot_date.unwrap_or_else(time_util::local_today)
    }

    // -----------------------------------------------------------------------
    // Public operations (total)
    // -----------------------------------------------------------------------

    pub async fn market_status(&self) -> Outcome<MarketStatus> {
        let resource = Resource::MarketStatus;
        match self.mode {
            Mode::Remote => self.remote_outcome(resource).await,
            Mode::Snapshot => match self.snapshot_json(resource).await {
                Ok(status) => Outcome::Live(status),
                Err(e) if e.is_parse_failure() || e.is_transport() => {
                    error!("[{resource}] {e}");
                    Outcome::Unavailable
                }
                Err(e) => {
                    warn!("[{resource}] {e}; serving default status");
                    Outcome::Fallback(fallback::market_status())
                }
            },
        }
    }

    pub async fn indices(&self) -> Outcome<Vec<IndexQuote>> {
        self.csv_outcome(Resource::Indices, fallback::indices).await
    }

    pub async fn stocks(&self) -> Outcome<Vec<StockQuote>> {
        self.csv_outcome(Resource::Stocks, fallback::stocks).await
    }

    pub async fn bonds(&self) -> Outcome<Vec<BondQuote>> {
        self.csv_outcome(Resource::Bonds, fallback::bonds).await
    }

    /// Snapshot mode never reads anything for news.
    pub async fn market_news(&self) -> Outcome<Vec<NewsItem>> {
        match self.mode {
            Mode::Snapshot => Outcome::Fallback(fallback::news()),
            Mode::Remote => self.remote_outcome(Resource::News).await,
        }
    }

    // -----------------------------------------------------------------------
    // Typed variants (no substitution)
    // -----------------------------------------------------------------------

    pub async fn try_market_status(&self) -> GatewayResult<MarketStatus> {
        self.try_fetch(Resource::MarketStatus).await
    }

    pub async fn try_indices(&self) -> GatewayResult<Vec<IndexQuote>> {
        self.try_csv(Resource::Indices).await
    }

    pub async fn try_stocks(&self) -> GatewayResult<Vec<StockQuote>> {
        self.try_csv(Resource::Stocks).await
    }

    pub async fn try_bonds(&self) -> GatewayResult<Vec<BondQuote>> {
        self.try_csv(Resource::Bonds).await
    }

    pub async fn try_market_news(&self) -> GatewayResult<Vec<NewsItem>> {
        self.try_fetch(Resource::News).await
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// JSON-backed resources: market status, news.
    async fn try_fetch<T: DeserializeOwned>(&self, resource: Resource) -> GatewayResult<T> {
        match (self.mode, resource.snapshot_extension()) {
            (Mode::Remote, _) => self.remote.get_json(resource).await,
            (Mode::Snapshot, Some("json")) => self.snapshot_json(resource).await,
            (Mode::Snapshot, _) => Err(GatewayError::unavailable(
                resource,
                "no snapshot file for this resource",
            )),
        }
    }

    /// CSV-backed resources: indices, stocks, bonds.
    async fn try_csv<T: DeserializeOwned>(&self, resource: Resource) -> GatewayResult<Vec<T>> {
        match self.mode {
            Mode::Remote => self.remote.get_json(resource).await,
            Mode::Snapshot => self.snapshot_csv(resource).await,
        }
    }

    async fn csv_outcome<T: DeserializeOwned>(
        &self,
        resource: Resource,
        example: fn() -> Vec<T>,
    ) -> Outcome<Vec<T>> {
        match self.mode {
            Mode::Remote => self.remote_outcome(resource).await,
            Mode::Snapshot => match self.snapshot_csv(resource).await {
                Ok(rows) => Outcome::Live(rows),
                Err(e) => {
                    warn!("[{resource}] {e}; serving example data");
                    Outcome::Fallback(example())
                }
            },
        }
    }

    async fn remote_outcome<T: DeserializeOwned>(&self, resource: Resource) -> Outcome<T> {
        match self.remote.get_json(resource).await {
            Ok(v) => Outcome::Live(v),
            Err(e) => {
                error!("[{resource}] {e}");
                Outcome::Unavailable
            }
        }
    }

    async fn read_snapshot(&self, resource: Resource) -> GatewayResult<Vec<u8>> {
        let date = time_util::iso_date(self.snapshot_date());
        self.snapshots.read(resource, &date).await
    }

    async fn snapshot_json<T: DeserializeOwned>(&self, resource: Resource) -> GatewayResult<T> {
        let bytes = self.read_snapshot(resource).await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::parse(resource, e))
    }

    async fn snapshot_csv<T: DeserializeOwned>(&self, resource: Resource) -> GatewayResult<Vec<T>> {
        let bytes = self.read_snapshot(resource).await?;
        let text = std::str::from_utf8(&bytes).map_err(|e| GatewayError::parse(resource, e))?;
        let records = csv::parse_csv(text);
        csv::decode_rows(&records).map_err(|e| GatewayError::parse(resource, e))
    }
}
