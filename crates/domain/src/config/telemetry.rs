use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sizing of the asynchronous analytics pipeline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Pending events held before new ones are dropped (default: 10000)
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Events written per bulk insert (default: 1000)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Maximum age of a partial batch in milliseconds (default: 5000)
    #[serde(default = "default_flush_interval_ms")]
    pub flush_interval_ms: u64,
}

impl TelemetryConfig {
    pub fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            queue_capacity: default_queue_capacity(),
            batch_size: default_batch_size(),
            flush_interval_ms: default_flush_interval_ms(),
        }
    }
}

fn default_queue_capacity() -> usize {
    10_000
}

fn default_batch_size() -> usize {
    1_000
}

fn default_flush_interval_ms() -> u64 {
    5_000
}
