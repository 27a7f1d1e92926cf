//! Error types used throughout the client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for marketplace operations
///
/// Only transport and local-file faults are errors. Business-level failures
/// reported by the service (validation messages, permission denials) arrive
/// as ordinary response bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MarketplaceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("File access error: {0}")]
    FileAccess(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketplaceError {
    /// True when the failure happened on the wire rather than locally.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type alias for marketplace operations
pub type Result<T> = std::result::Result<T, MarketplaceError>;
