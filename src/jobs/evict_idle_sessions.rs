use std::time::Duration;

use async_trait::async_trait;

use crate::api::AppState;

/// Removes chat sessions nobody has talked to for `ttl`. Without it
/// the session store grows for as long as the process runs.
#[derive(Debug)]
pub struct EvictIdleSessions {
    pub ttl: Duration,
}

#[async_trait]
impl crate::jobs::PeriodicJob for EvictIdleSessions {
    fn interval(&self) -> Duration {
        // Check twice per TTL so a session lives at most 1.5x the TTL
        (self.ttl / 2).max(Duration::from_secs(1))
    }

    async fn run_job(&self, state: &AppState) {
        let evicted = state.chat.store().evict_idle(self.ttl).await;
        if evicted > 0 {
            tracing::info!("Evicted {} idle chat sessions", evicted);
        }
    }
}
