//! Tokio-backed poll timer

use std::time::Duration;

use async_trait::async_trait;
use marketplace_core::PollTimer;
use tokio::time::sleep;

/// Waits on the tokio clock, so paused-time tests advance it instantly.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPollTimer;

#[async_trait]
impl PollTimer for TokioPollTimer {
    async fn wait(&self, delay: Duration) {
        sleep(delay).await;
    }
}
