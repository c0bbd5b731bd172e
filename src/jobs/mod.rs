//! Background jobs that run on a fixed interval for the lifetime of
//! the server.
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::api::AppState;

mod evict_idle_sessions;

pub use evict_idle_sessions::EvictIdleSessions;

#[async_trait]
pub trait PeriodicJob: Debug + Send + Sync {
    fn interval(&self) -> Duration;

    async fn run_job(&self, state: &AppState);
}

/// Spawn `job` in its own tokio task, running it once per interval.
/// The first run happens after one full interval.
pub fn spawn_periodic_job<J>(state: Arc<AppState>, job: J) -> tokio::task::JoinHandle<()>
where
    J: PeriodicJob + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(job.interval());
        // The first tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            tracing::debug!("Running periodic job {:?}", job);
            job.run_job(&state).await;
        }
    })
}
