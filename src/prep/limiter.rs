//! Pacing between consecutive completion calls

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;

/// Keeps completion calls under the provider's rate limit.
///
/// `pause` runs after a completion call that is followed by another one.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a fixed duration between calls.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl RateLimiter for FixedDelay {
    async fn pause(&self) {
        tracing::debug!("Pausing {:?} for provider rate limit", self.0);
        tokio::time::sleep(self.0).await;
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl RateLimiter for NoDelay {
    async fn pause(&self) {}
}

/// Build the limiter configured by `pipeline.delay_ms`.
pub fn from_settings(settings: &Settings) -> Arc<dyn RateLimiter> {
    match settings.pipeline.delay_ms {
        0 => Arc::new(NoDelay),
        ms => Arc::new(FixedDelay(Duration::from_millis(ms))),
    }
}
