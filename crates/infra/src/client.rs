//! Ready-to-use marketplace client
//!
//! Wires the signed HTTP executor, filesystem package source and tokio timer
//! into [`MarketplaceService`] from a single [`ClientConfig`].

use std::sync::Arc;

use marketplace_core::MarketplaceService;
use marketplace_domain::{ClientConfig, ResponseBody, Result};
use tracing::info;

use crate::config;
use crate::http::{HttpClient, SignedHttpExecutor};
use crate::packages::FsPackageSource;
use crate::scheduling::TokioPollTimer;

/// Marketplace API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct MarketplaceClient {
    service: Arc<MarketplaceService>,
}

impl MarketplaceClient {
    /// Build a client from explicit configuration.
    ///
    /// # Errors
    /// Returns `MarketplaceError::Config` when the configuration is invalid
    /// and `MarketplaceError::Internal` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut http = HttpClient::builder().timeout(config.request_timeout());
        if let Some(agent) = &config.user_agent {
            http = http.user_agent(agent.clone());
        }
        let executor = SignedHttpExecutor::new(http.build()?);

        let base_url = config.resolved_base_url();
        info!(
            environment = %config.environment,
            base_url = %base_url,
            poll_interval_ms = config.poll_interval_ms,
            "marketplace client configured"
        );

        let service = MarketplaceService::new(
            Arc::new(executor),
            Arc::new(FsPackageSource),
            Arc::new(TokioPollTimer),
            config.credentials(),
            base_url,
        )
        .with_poll_interval(config.poll_interval());

        Ok(Self { service: Arc::new(service) })
    }

    /// Build a client from the environment, falling back to a config file.
    ///
    /// # Errors
    /// See [`config::load`] and [`MarketplaceClient::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(config::load()?)
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &str {
        self.service.base_url()
    }

    pub async fn get_account_details(&self) -> Result<ResponseBody> {
        self.service.get_account_details().await
    }

    pub async fn get_installed_apps(&self) -> Result<ResponseBody> {
        self.service.get_installed_apps().await
    }

    pub async fn get_account_permissions(&self) -> Result<ResponseBody> {
        self.service.get_account_permissions().await
    }

    /// Submit a hosted manifest URL for validation.
    pub async fn validate_manifest(&self, manifest_url: &str) -> Result<ResponseBody> {
        self.service.validate_manifest(manifest_url).await
    }

    pub async fn get_validation(&self, validation_id: &str) -> Result<ResponseBody> {
        self.service.get_validation(validation_id).await
    }

    /// Upload a packaged app and wait until the validation is processed.
    ///
    /// # Errors
    /// Fails without sending anything if the path does not name a `.zip`
    /// file or the file cannot be read. Failed status checks are logged and
    /// retried; they never end the wait.
    pub async fn validate_package(&self, package_path: &str) -> Result<ResponseBody> {
        self.service.validate_package(package_path).await
    }

    /// Publish a validated app. `format` is `"packaged"` or anything else
    /// for hosted.
    pub async fn publish(&self, validation_id: &str, format: &str) -> Result<ResponseBody> {
        self.service.publish(validation_id, format).await
    }
}
