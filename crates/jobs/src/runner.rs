use crate::CounterSweepJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Register jobs with the builder methods, then call `.start()` once.
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_counter_sweep(CounterSweepJob::new(store).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    counter_sweep: Option<CounterSweepJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            counter_sweep: None,
        }
    }

    pub fn with_counter_sweep(mut self, job: CounterSweepJob) -> Self {
        self.counter_sweep = Some(job);
        self
    }

    /// Starts every registered job and returns their task handles.
    pub async fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");
        let mut handles = Vec::new();

        if let Some(job) = self.counter_sweep {
            handles.push(Arc::new(job).start().await);
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
