//! Filesystem-backed package source

use async_trait::async_trait;
use marketplace_core::PackageSource;
use marketplace_domain::{MarketplaceError, Result};
use tracing::{debug, warn};

use crate::errors::InfraError;

/// Reads packages from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPackageSource;

#[async_trait]
impl PackageSource for FsPackageSource {
    async fn read_package(&self, path: &str) -> Result<Vec<u8>> {
        let contents = tokio::fs::read(path).await.map_err(|err| {
            warn!(path, error = %err, "failed to read package");
            let infra: InfraError = err.into();
            MarketplaceError::from(infra)
        })?;
        debug!(path, bytes = contents.len(), "package loaded");
        Ok(contents)
    }
}
