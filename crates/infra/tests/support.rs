#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use marketplace_domain::ClientConfig;
use marketplace_infra::MarketplaceClient;
use tempfile::TempDir;
use wiremock::MockServer;

pub const CONSUMER_KEY: &str = "integration-key";
pub const CONSUMER_SECRET: &str = "integration-secret";

/// Poll interval short enough to keep wiremock-driven workflows fast.
pub const FAST_POLL: Duration = Duration::from_millis(10);

/// Base URL of the API mounted on a mock server.
pub fn api_base(server: &MockServer) -> String {
    format!("{}/api/v2/", server.uri())
}

/// Client pointed at `server` with a fast poll interval.
pub fn client_for(server: &MockServer) -> MarketplaceClient {
    let config = ClientConfig::new(CONSUMER_KEY, CONSUMER_SECRET)
        .with_base_url(api_base(server))
        .with_poll_interval(FAST_POLL);
    MarketplaceClient::new(config).expect("client should build")
}

/// Zip package written to a temporary directory that lives as long as the
/// returned guard.
pub struct TempPackage {
    pub path: PathBuf,
    _dir: TempDir,
}

impl TempPackage {
    pub fn new(file_name: &str, contents: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join(file_name);
        std::fs::write(&path, contents).expect("package should be written");
        Self { path, _dir: dir }
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("temp path should be UTF-8")
    }
}
