//! Fake port implementations

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use marketplace_core::{MarketplaceService, PackageSource, PollTimer, RequestExecutor};
use marketplace_domain::{
    ApiRequest, ApiResponse, Credentials, MarketplaceError, ResponseBody, Result,
};
use serde_json::Value;

pub const BASE_URL: &str = "https://marketplace.test/api/v2/";

/// One recorded call to the executor.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub request: ApiRequest,
    pub consumer_key: String,
}

/// Executor that replays scripted replies in order and records requests.
///
/// Runs out of script with an `Internal` error so a runaway poll loop
/// surfaces as a test failure instead of hanging.
#[derive(Default, Clone)]
pub struct StubExecutor {
    replies: Arc<Mutex<VecDeque<Result<ApiResponse>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl StubExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(self, status: u16, body: Value) -> Self {
        self.push(Ok(ApiResponse::new(status, ResponseBody::Json(body))))
    }

    pub fn text(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse::new(status, ResponseBody::Text(body.to_string()))))
    }

    pub fn transport_error(self, message: &str) -> Self {
        self.push(Err(MarketplaceError::Transport(message.to_string())))
    }

    fn push(self, reply: Result<ApiResponse>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.request.url).collect()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl RequestExecutor for StubExecutor {
    async fn execute(
        &self,
        request: &ApiRequest,
        credentials: &Credentials,
    ) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            request: request.clone(),
            consumer_key: credentials.consumer_key().to_string(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(MarketplaceError::Internal("stub executor exhausted".into())))
    }
}

/// In-memory package store keyed by path.
#[derive(Default, Clone)]
pub struct MemoryPackages {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl MemoryPackages {
    pub fn with_file(self, path: &str, contents: &[u8]) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), contents.to_vec());
        self
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageSource for MemoryPackages {
    async fn read_package(&self, path: &str) -> Result<Vec<u8>> {
        self.reads.lock().unwrap().push(path.to_string());
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| MarketplaceError::FileAccess(format!("{path}: no such file")))
    }
}

/// Timer that returns immediately and records each requested delay.
#[derive(Default, Clone)]
pub struct RecordingTimer {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingTimer {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl PollTimer for RecordingTimer {
    async fn wait(&self, delay: Duration) {
        self.waits.lock().unwrap().push(delay);
    }
}

/// Timer backed by tokio's clock, for tests running with paused time.
#[derive(Default, Clone)]
pub struct TokioTimer;

#[async_trait]
impl PollTimer for TokioTimer {
    async fn wait(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

pub fn service(
    executor: &StubExecutor,
    packages: &MemoryPackages,
    timer: Arc<dyn PollTimer>,
) -> MarketplaceService {
    MarketplaceService::new(
        Arc::new(executor.clone()),
        Arc::new(packages.clone()),
        timer,
        Credentials::new("consumer-key", "consumer-secret"),
        BASE_URL,
    )
}
