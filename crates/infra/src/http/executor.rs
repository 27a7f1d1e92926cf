//! Signed request executor backed by [`HttpClient`]

use async_trait::async_trait;
use marketplace_core::RequestExecutor;
use marketplace_domain::{
    ApiRequest, ApiResponse, Credentials, HttpMethod, MarketplaceError, ResponseBody, Result,
};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::debug;

use super::client::HttpClient;
use crate::errors::InfraError;
use crate::signing::OAuthSigner;

/// Executes marketplace calls: sign, send once, read the body.
#[derive(Clone)]
pub struct SignedHttpExecutor {
    http: HttpClient,
    signer: OAuthSigner,
}

impl SignedHttpExecutor {
    pub fn new(http: HttpClient) -> Self {
        Self { http, signer: OAuthSigner::new() }
    }
}

#[async_trait]
impl RequestExecutor for SignedHttpExecutor {
    async fn execute(
        &self,
        request: &ApiRequest,
        credentials: &Credentials,
    ) -> Result<ApiResponse> {
        let authorization =
            self.signer.authorization_header(request.method, &request.url, credentials)?;

        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut builder =
            self.http.request(method, &request.url).header(AUTHORIZATION, authorization);
        if request.expects_json {
            builder = builder.header(ACCEPT, "application/json");
        }
        if let Some(body) = &request.body {
            let payload = serde_json::to_vec(body).map_err(|e| {
                MarketplaceError::Internal(format!("failed to serialize request body: {e}"))
            })?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = self.http.send(builder).await?;
        let status = response.status().as_u16();
        let payload = response.text().await.map_err(|err| {
            let infra: InfraError = err.into();
            MarketplaceError::from(infra)
        })?;

        debug!(status, bytes = payload.len(), "response body read");
        Ok(ApiResponse::new(status, ResponseBody::from_payload(payload, request.expects_json)))
    }
}
