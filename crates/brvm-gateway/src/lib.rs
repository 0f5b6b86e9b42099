//! # brvm-gateway
//!
//! Data-retrieval and normalization layer of the BRVM dashboard.
//!
//! [`MarketDataGateway`] answers five questions (market status, indices,
//! stocks, bonds, news) from one of two sources chosen at construction:
//!
//! | Mode       | Source                                   | On failure          |
//! |------------|------------------------------------------|---------------------|
//! | `snapshot` | `{resource}_{YYYY-MM-DD}.{json,csv}` files | example dataset   |
//! | `remote`   | `GET {base}/{resource}` JSON API         | unavailable (null)  |
//!
//! Every operation resolves to an [`Outcome`] and never fails past the
//! gateway boundary.
//!
//! ## Modules
//!
//! - [`gateway`]: `MarketDataGateway`
//! - [`outcome`]: `Outcome` / `Origin` tagged results
//! - [`source`]: `SnapshotSource` trait with filesystem and HTTP sources
//! - [`remote`]: REST API client

pub mod gateway;
pub mod outcome;
pub mod remote;
pub mod source;

#[cfg(test)]
mod test_support;

pub use gateway::MarketDataGateway;
pub use outcome::{Origin, Outcome};
pub use source::{FsSnapshots, HttpSnapshots, SnapshotSource};
