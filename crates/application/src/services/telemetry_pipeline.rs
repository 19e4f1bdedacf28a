use arc_swap::ArcSwapOption;
use sitegate_domain::config::TelemetryConfig;
use sitegate_domain::{TelemetryEvent, TelemetryStats};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::ports::AnalyticsStore;

/// Result of handing one event to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Accepted,
    /// Queue was full; the event was discarded.
    Dropped,
    /// Pipeline already shut down; the event was discarded.
    Rejected,
}

#[derive(Debug, Clone, Copy)]
pub struct TelemetrySettings {
    pub queue_capacity: usize,
    pub batch_size: usize,
    pub flush_interval: Duration,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self::from(&TelemetryConfig::default())
    }
}

impl From<&TelemetryConfig> for TelemetrySettings {
    fn from(config: &TelemetryConfig) -> Self {
        Self {
            queue_capacity: config.queue_capacity.max(1),
            batch_size: config.batch_size.max(1),
            flush_interval: config.flush_interval().max(Duration::from_millis(1)),
        }
    }
}

#[derive(Default)]
struct Counters {
    accepted: AtomicU64,
    dropped: AtomicU64,
    rejected: AtomicU64,
    flushed_events: AtomicU64,
    flushed_batches: AtomicU64,
    failed_batches: AtomicU64,
    lost_events: AtomicU64,
}

impl Counters {
    fn snapshot(&self) -> TelemetryStats {
        TelemetryStats {
            accepted: self.accepted.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            flushed_events: self.flushed_events.load(Ordering::Relaxed),
            flushed_batches: self.flushed_batches.load(Ordering::Relaxed),
            failed_batches: self.failed_batches.load(Ordering::Relaxed),
            lost_events: self.lost_events.load(Ordering::Relaxed),
        }
    }
}

/// Buffered, batched recorder of telemetry events.
///
/// `record` never waits: events go into a bounded queue drained by a single
/// worker task that owns the batch. The worker writes a batch when it is
/// full, when the flush timer fires with pending events, and once more when
/// the queue is closed. Delivery is at-most-once; a failed write loses its
/// batch.
pub struct TelemetryPipeline {
    sender: ArcSwapOption<mpsc::Sender<TelemetryEvent>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    counters: Arc<Counters>,
    settings: TelemetrySettings,
}

impl TelemetryPipeline {
    /// Spawns the worker on the current tokio runtime.
    pub fn start(store: Arc<dyn AnalyticsStore>, settings: TelemetrySettings) -> Self {
        let (sender, receiver) = mpsc::channel(settings.queue_capacity);
        let counters = Arc::new(Counters::default());

        let worker = tokio::spawn(Self::run(
            store,
            receiver,
            settings,
            Arc::clone(&counters),
        ));

        info!(
            queue_capacity = settings.queue_capacity,
            batch_size = settings.batch_size,
            flush_interval_ms = settings.flush_interval.as_millis() as u64,
            "Telemetry pipeline started"
        );

        Self {
            sender: ArcSwapOption::from_pointee(sender),
            worker: Mutex::new(Some(worker)),
            counters,
            settings,
        }
    }

    pub fn settings(&self) -> TelemetrySettings {
        self.settings
    }

    /// Enqueues an event without blocking.
    pub fn record(&self, event: TelemetryEvent) -> RecordOutcome {
        let guard = self.sender.load();
        let Some(sender) = &*guard else {
            self.counters.rejected.fetch_add(1, Ordering::Relaxed);
            return RecordOutcome::Rejected;
        };

        match sender.try_send(event) {
            Ok(()) => {
                self.counters.accepted.fetch_add(1, Ordering::Relaxed);
                RecordOutcome::Accepted
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                let dropped = self.counters.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                if dropped.is_power_of_two() {
                    warn!(dropped, "Telemetry queue full, dropping events");
                }
                RecordOutcome::Dropped
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                self.counters.rejected.fetch_add(1, Ordering::Relaxed);
                RecordOutcome::Rejected
            }
        }
    }

    /// Closes the queue and waits until every accepted event has been
    /// flushed or reported as lost.
    ///
    /// Safe to call more than once; later calls return once the first one
    /// has finished.
    pub async fn shutdown(&self) {
        let mut worker = self.worker.lock().await;
        drop(self.sender.swap(None));

        if let Some(handle) = worker.take() {
            if let Err(e) = handle.await {
                error!(error = %e, "Telemetry worker terminated abnormally");
            }
            let stats = self.counters.snapshot();
            info!(
                flushed_events = stats.flushed_events,
                lost_events = stats.lost_events,
                dropped = stats.dropped,
                "Telemetry pipeline stopped"
            );
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.load().is_none()
    }

    pub fn stats(&self) -> TelemetryStats {
        self.counters.snapshot()
    }

    async fn run(
        store: Arc<dyn AnalyticsStore>,
        mut receiver: mpsc::Receiver<TelemetryEvent>,
        settings: TelemetrySettings,
        counters: Arc<Counters>,
    ) {
        let batch_size = settings.batch_size;
        let mut batch: Vec<TelemetryEvent> = Vec::with_capacity(batch_size);
        let mut ticker = interval_at(
            Instant::now() + settings.flush_interval,
            settings.flush_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                maybe_event = receiver.recv() => {
                    match maybe_event {
                        Some(event) => {
                            batch.push(event);
                            while batch.len() < batch_size {
                                match receiver.try_recv() {
                                    Ok(e) => batch.push(e),
                                    Err(_) => break,
                                }
                            }
                            if batch.len() >= batch_size {
                                Self::flush(&*store, &mut batch, &counters).await;
                            }
                        }
                        None => {
                            Self::flush(&*store, &mut batch, &counters).await;
                            debug!("Telemetry worker drained");
                            return;
                        }
                    }
                }
                _ = ticker.tick() => {
                    Self::flush(&*store, &mut batch, &counters).await;
                }
            }
        }
    }

    async fn flush(store: &dyn AnalyticsStore, batch: &mut Vec<TelemetryEvent>, counters: &Counters) {
        let count = batch.len();
        if count == 0 {
            return;
        }

        match store.write_batch(batch).await {
            Ok(()) => {
                counters.flushed_batches.fetch_add(1, Ordering::Relaxed);
                counters
                    .flushed_events
                    .fetch_add(count as u64, Ordering::Relaxed);
                debug!(count, "Telemetry batch flushed");
            }
            Err(e) => {
                counters.failed_batches.fetch_add(1, Ordering::Relaxed);
                counters.lost_events.fetch_add(count as u64, Ordering::Relaxed);
                error!(error = %e, count, "Failed to flush telemetry batch, discarding");
            }
        }

        batch.clear();
    }
}
