//! Port interfaces for the marketplace client
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use std::time::Duration;

use async_trait::async_trait;
use marketplace_domain::{ApiRequest, ApiResponse, Credentials, Result};

/// Performs one signed HTTP exchange.
///
/// Implementations sign every call with the consumer credentials, send it
/// exactly once, and report any completed exchange as `Ok` regardless of
/// status. Only transport failures are errors. No retries.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: &ApiRequest, credentials: &Credentials) -> Result<ApiResponse>;
}

/// Reads package archives from local storage.
#[async_trait]
pub trait PackageSource: Send + Sync {
    /// Full contents of the package at `path`.
    async fn read_package(&self, path: &str) -> Result<Vec<u8>>;
}

/// Timer that paces validation polling.
#[async_trait]
pub trait PollTimer: Send + Sync {
    /// Suspend the calling workflow for `delay`.
    async fn wait(&self, delay: Duration);
}
