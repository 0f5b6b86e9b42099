//! # brvm-core
//!
//! Core crate for the BRVM market-data gateway, providing:
//!
//! - **Types** (`types`): market status, index/stock/bond quotes, news, and the `Cell` value
//! - **CSV** (`csv`): delimited-text normalization with numeric coercion
//! - **Fallback** (`fallback`): fixed example datasets served when a snapshot is missing
//! - **Configuration** (`config`): JSON config deserialization
//! - **Error types** (`error`): domain-specific `GatewayError` via thiserror
//! - **Time utilities** (`time_util`): local calendar date and display timestamps
//! - **Logging** (`logging`): tracing-based structured logging

pub mod config;
pub mod csv;
pub mod error;
pub mod fallback;
pub mod logging;
pub mod time_util;
pub mod types;

// Re-export types at crate root for convenience.
pub use types::*;
