use async_trait::async_trait;
use sitegate_domain::{DomainError, TelemetryEvent};

/// Bulk sink for telemetry events.
///
/// A failure anywhere in the batch is reported as a failure of the whole batch.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn write_batch(&self, events: &[TelemetryEvent]) -> Result<(), DomainError>;
}
