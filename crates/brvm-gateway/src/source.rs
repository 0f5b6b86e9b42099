//! Snapshot sources: where the per-day files come from.
//!
//! | Source          | Base                         | Read                   |
//! |-----------------|------------------------------|------------------------|
//! | [`FsSnapshots`]   | local directory              | `tokio::fs::read`      |
//! | [`HttpSnapshots`] | static file server URL       | `GET {base}/{file}`    |
//!
//! A source only fetches bytes. A missing file or non-success status is
//! [`GatewayError::ResourceUnavailable`], a request with no response is
//! [`GatewayError::Transport`]; parsing is the gateway's job.

use std::path::PathBuf;

use async_trait::async_trait;
use brvm_core::Resource;
use chrono::NaiveDate;
use brvm_core::error::{GatewayError, GatewayResult};
use tracing::debug;

use crate::remote::join_url;

/// Provider of raw snapshot bytes for a resource and date.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Read `{resource}_{date}.{ext}`. `date` is `YYYY-MM-DD`.
    async fn read(&self, resource: Resource, date: &str) -> GatewayResult<Vec<u8>>;
}

fn file_name(resource: Resource, date: &str) -> GatewayResult<String> {
    resource
        .snapshot_file_name(date)
        .ok_or_else(|| GatewayError::unavailable(resource, "no snapshot file for this resource"))
}

/// `YYYY-MM-DD`, exactly ten characters.
fn parse_file_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

// ---------------------------------------------------------------------------
// Filesystem
// ---------------------------------------------------------------------------

/// Snapshot files in a local directory.
pub struct FsSnapshots {
    base: PathBuf,
    /// Fall back to the most recent earlier file when the requested one is
    /// missing.
    latest_fallback: bool,
}

impl FsSnapshots {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into(), latest_fallback: false }
    }

    pub fn with_latest_fallback(mut self, enabled: bool) -> Self {
        self.latest_fallback = enabled;
        self
    }

    /// Most recent `{stem}_{YYYY-MM-DD}.{ext}` file dated on or before
    /// `wanted`. Names whose middle part is not exactly a date are skipped.
    async fn latest_before(&self, resource: Resource, wanted: NaiveDate) -> Option<String> {
        let ext = resource.snapshot_extension()?;
        let prefix = format!("{}_", resource.snapshot_stem());
        let suffix = format!(".{ext}");

        let mut entries = tokio::fs::read_dir(&self.base).await.ok()?;
        let mut best: Option<(NaiveDate, String)> = None;
        while let Ok(Some(entry)) = entries.next_entry().await {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            let Some(date) = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(&suffix))
                .and_then(parse_file_date)
            else {
                continue;
            };
            if date > wanted {
                continue;
            }
            if best.as_ref().is_none_or(|(b, _)| date > *b) {
                best = Some((date, name));
            }
        }
        best.map(|(_, name)| name)
    }
}

#[async_trait]
impl SnapshotSource for FsSnapshots {
    fn describe(&self) -> String {
        self.base.display().to_string()
    }

    async fn read(&self, resource: Resource, date: &str) -> GatewayResult<Vec<u8>> {
        let name = file_name(resource, date)?;
        let path = self.base.join(&name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && self.latest_fallback => {
                let latest = match parse_file_date(date) {
                    Some(wanted) => self.latest_before(resource, wanted).await,
                    None => None,
                };
                let Some(latest) = latest else {
                    return Err(GatewayError::unavailable(resource, format!("{}: {e}", path.display())));
                };
                debug!("[snapshot] {name} missing, using {latest}");
                let latest_path = self.base.join(&latest);
                tokio::fs::read(&latest_path)
                    .await
                    .map_err(|e| GatewayError::unavailable(resource, format!("{}: {e}", latest_path.display())))
            }
            Err(e) => Err(GatewayError::unavailable(resource, format!("{}: {e}", path.display()))),
        }
    }
}

// ---------------------------------------------------------------------------
// Static HTTP file server
// ---------------------------------------------------------------------------

/// Snapshot files served over HTTP (e.g. next to the dashboard's assets).
pub struct HttpSnapshots {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSnapshots {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshots {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    async fn read(&self, resource: Resource, date: &str) -> GatewayResult<Vec<u8>> {
        let url = join_url(&self.base_url, &file_name(resource, date)?);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| GatewayError::transport(resource, format!("GET {url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GatewayError::unavailable(resource, format!("GET {url}: HTTP {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| GatewayError::transport(resource, format!("GET {url}: {e}")))?;
        Ok(body.to_vec())
    }
}
