//! Typed error definitions for the market-data gateway.
//!
//! [`GatewayError`] separates "the bytes never arrived" from "the bytes
//! arrived but could not be read", because the gateway reacts to the two
//! differently for some resources. All variants implement `std::error::Error`
//! via `thiserror`, so they integrate with `anyhow::Result` in the runner.

use thiserror::Error;

use crate::types::Resource;

/// Domain-specific errors for the market-data gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The file is missing, or the server answered with a non-success
    /// status.
    #[error("{resource} unavailable: {reason}")]
    ResourceUnavailable { resource: Resource, reason: String },

    /// No response came back: connection refused, timeout, or the body
    /// was cut off.
    #[error("{resource} unreachable: {reason}")]
    Transport { resource: Resource, reason: String },

    /// The payload could not be interpreted as JSON or as the expected
    /// delimited layout.
    #[error("{resource} parse failure: {reason}")]
    ParseFailure { resource: Resource, reason: String },

    /// Configuration parsing or validation error.
    #[error("config error: {0}")]
    Config(String),
}

impl GatewayError {
    pub fn unavailable(resource: Resource, reason: impl ToString) -> Self {
        Self::ResourceUnavailable { resource, reason: reason.to_string() }
    }

    pub fn transport(resource: Resource, reason: impl ToString) -> Self {
        Self::Transport { resource, reason: reason.to_string() }
    }

    pub fn parse(resource: Resource, reason: impl ToString) -> Self {
        Self::ParseFailure { resource, reason: reason.to_string() }
    }

    /// `true` for [`GatewayError::ParseFailure`].
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::ParseFailure { .. })
    }

    /// `true` for [`GatewayError::Transport`].
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let missing = GatewayError::unavailable(Resource::Bonds, "HTTP 404");
        let refused = GatewayError::transport(Resource::Bonds, "connection refused");
        let garbled = GatewayError::parse(Resource::Bonds, "expected value");

        assert!(!missing.is_transport() && !missing.is_parse_failure());
        assert!(refused.is_transport() && !refused.is_parse_failure());
        assert!(garbled.is_parse_failure() && !garbled.is_transport());
        assert_eq!(refused.to_string(), "bonds unreachable: connection refused");
    }
}
