//! Conversions from external infrastructure errors into domain errors.

use std::io::Error as IoError;

use marketplace_domain::MarketplaceError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MarketplaceError);

impl From<InfraError> for MarketplaceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MarketplaceError> for InfraError {
    fn from(value: MarketplaceError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMarketplaceError {
    fn into_marketplace(self) -> MarketplaceError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MarketplaceError */
/* -------------------------------------------------------------------------- */

impl IntoMarketplaceError for HttpError {
    fn into_marketplace(self) -> MarketplaceError {
        if self.is_builder() {
            return MarketplaceError::Internal(format!("invalid HTTP request: {self}"));
        }

        if self.is_timeout() {
            return MarketplaceError::Transport(format!("HTTP request timed out: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return MarketplaceError::Transport(format!("HTTP connection failure: {self}"));
        }

        MarketplaceError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_marketplace())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → MarketplaceError */
/* -------------------------------------------------------------------------- */

impl IntoMarketplaceError for IoError {
    fn into_marketplace(self) -> MarketplaceError {
        MarketplaceError::FileAccess(format!("{:?}: {}", self.kind(), self))
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_marketplace())
    }
}

/* -------------------------------------------------------------------------- */
/* config parse errors → MarketplaceError */
/* -------------------------------------------------------------------------- */

impl IntoMarketplaceError for JsonError {
    fn into_marketplace(self) -> MarketplaceError {
        MarketplaceError::Config(format!("Invalid JSON format: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_marketplace())
    }
}

impl IntoMarketplaceError for TomlError {
    fn into_marketplace(self) -> MarketplaceError {
        MarketplaceError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_marketplace())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
