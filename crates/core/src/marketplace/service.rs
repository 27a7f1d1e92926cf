//! Marketplace service - account reads, validation workflow and publishing

use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use marketplace_domain::constants::DEFAULT_POLL_INTERVAL_MS;
use marketplace_domain::{
    extract_package_name, ApiRequest, Credentials, Endpoint, PackageUpload, PublishFormat,
    ResponseBody, Result,
};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use super::ports::{PackageSource, PollTimer, RequestExecutor};
use crate::validation::ValidationState;

/// Operation surface of the marketplace API.
///
/// Holds only immutable state (credentials, base URL, poll interval) and
/// shared ports, so any number of workflows can run on one instance
/// concurrently. Each call keeps its own state in locals.
///
/// A pending validation is polled until the service reports it processed.
/// There is no cancellation API; dropping the returned future is the only
/// way to abandon a poll loop.
pub struct MarketplaceService {
    executor: Arc<dyn RequestExecutor>,
    packages: Arc<dyn PackageSource>,
    timer: Arc<dyn PollTimer>,
    credentials: Credentials,
    base_url: String,
    poll_interval: Duration,
}

impl MarketplaceService {
    /// Create a new marketplace service
    ///
    /// `base_url` must end with `/`; endpoint paths are appended verbatim.
    pub fn new(
        executor: Arc<dyn RequestExecutor>,
        packages: Arc<dyn PackageSource>,
        timer: Arc<dyn PollTimer>,
        credentials: Credentials,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            packages,
            timer,
            credentials,
            base_url: base_url.into(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Override the delay between validation status checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Settings of the authenticated account.
    #[instrument(skip(self))]
    pub async fn get_account_details(&self) -> Result<ResponseBody> {
        self.send(ApiRequest::get(Endpoint::AccountDetails.url(&self.base_url))).await
    }

    /// Apps installed by the authenticated account.
    #[instrument(skip(self))]
    pub async fn get_installed_apps(&self) -> Result<ResponseBody> {
        self.send(ApiRequest::get(Endpoint::InstalledApps.url(&self.base_url))).await
    }

    /// Permissions granted to the authenticated account.
    #[instrument(skip(self))]
    pub async fn get_account_permissions(&self) -> Result<ResponseBody> {
        self.send(ApiRequest::get(Endpoint::Permissions.url(&self.base_url))).await
    }

    /// Validate a hosted app manifest.
    ///
    /// Manifest validation is answered synchronously; the body is returned
    /// as-is without polling.
    #[instrument(skip(self))]
    pub async fn validate_manifest(&self, manifest_url: &str) -> Result<ResponseBody> {
        let request = ApiRequest::post_json(
            Endpoint::Validation.url(&self.base_url),
            json!({ "manifest": manifest_url }),
        );
        self.send(request).await
    }

    /// Current state of one validation.
    #[instrument(skip(self))]
    pub async fn get_validation(&self, validation_id: &str) -> Result<ResponseBody> {
        let url = Endpoint::Validation.resource_url(&self.base_url, validation_id);
        self.send(ApiRequest::get_json(url)).await
    }

    /// Upload a zip package for validation and wait for the result.
    ///
    /// A `202 Accepted` submission is polled every `poll_interval` until the
    /// job is processed. Failed polls are logged and retried without limit.
    /// Any other status resolves immediately with the submission body, error
    /// bodies included; callers inspect the body for business failures.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the path does not name a `.zip` file
    /// - `FileAccess` if the package cannot be read
    /// - `Transport` if the submission itself fails
    /// - `InvalidResponse` if an accepted submission carries no job id
    #[instrument(skip(self))]
    pub async fn validate_package(&self, package_path: &str) -> Result<ResponseBody> {
        let name = extract_package_name(package_path)?;
        let contents = self.packages.read_package(package_path).await?;
        debug!(name, bytes = contents.len(), "package read");

        let upload = PackageUpload::zip(name, BASE64.encode(&contents));
        let url = Endpoint::Validation.url(&self.base_url);
        let request = ApiRequest::post_json(url, upload.into_request_body());

        let response = self.executor.execute(&request, &self.credentials).await?;
        let mut state = ValidationState::Submitting.on_submission(response)?;

        if let Some(job_id) = state.pending_job_id() {
            info!(job_id, "validation accepted, polling for result");
        }

        while let Some(job_id) = state.pending_job_id().map(str::to_owned) {
            self.timer.wait(self.poll_interval).await;

            let outcome = self.get_validation(&job_id).await;
            if let Err(err) = &outcome {
                warn!(job_id = %job_id, error = %err, "validation status check failed, retrying");
            }

            state = state.on_poll(outcome);
            if let ValidationState::Pending { polls, .. } = &state {
                debug!(job_id = %job_id, polls, "validation not processed yet");
            }
        }

        info!("validation processed");
        state.into_processed()
    }

    /// Publish a validated app.
    ///
    /// `format` is the app's delivery tag; `"packaged"` publishes the
    /// validation as an upload, anything else as a manifest.
    #[instrument(skip(self))]
    pub async fn publish(&self, validation_id: &str, format: &str) -> Result<ResponseBody> {
        let body = PublishFormat::from(format).request_body(validation_id);
        self.send(ApiRequest::post_json(Endpoint::Publish.url(&self.base_url), body)).await
    }

    async fn send(&self, request: ApiRequest) -> Result<ResponseBody> {
        let response = self.executor.execute(&request, &self.credentials).await?;
        debug!(
            method = %request.method,
            url = %request.url,
            status = response.status,
            "request completed"
        );
        Ok(response.body)
    }
}
