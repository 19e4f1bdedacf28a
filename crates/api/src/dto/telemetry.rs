use serde::{Deserialize, Serialize};
use sitegate_domain::TelemetryStats;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryStatsResponse {
    #[serde(flatten)]
    pub counters: TelemetryStats,
    pub queue_capacity: usize,
    pub batch_size: usize,
    pub flush_interval_ms: u64,
    pub closed: bool,
}
