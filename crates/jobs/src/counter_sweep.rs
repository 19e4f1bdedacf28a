use sitegate_application::ports::CounterStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Periodically reclaims rate-limit counters whose window has expired.
pub struct CounterSweepJob {
    store: Arc<dyn CounterStore>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CounterSweepJob {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            store,
            interval_secs: 30,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> JoinHandle<()> {
        info!(interval_secs = self.interval_secs, "Starting counter sweep job");

        tokio::spawn(async move {
            let period = Duration::from_secs(self.interval_secs);
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CounterSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.store.purge_expired().await {
                            Ok(0) => {}
                            Ok(removed) => debug!(removed, "Expired rate-limit counters purged"),
                            Err(e) => error!(error = %e, "Counter sweep failed"),
                        }
                    }
                }
            }
        })
    }
}
