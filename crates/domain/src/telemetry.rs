use crate::decision::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Protocol tag stored in the user-agent column for DNS queries.
pub const DNS_USER_AGENT: &str = "DNS";

/// Immutable record of one handled request or query.
///
/// Created by a front-end once handling is finished and consumed exactly once
/// by the telemetry pipeline. `site_id` is 0 when no site resolved; DNS
/// events carry status 0 and duration 0.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetryEvent {
    pub timestamp: DateTime<Utc>,
    pub site_id: i64,
    pub client_ip: Arc<str>,
    pub user_agent: Arc<str>,
    pub method: Arc<str>,
    pub path: Arc<str>,
    pub status: u16,
    pub duration_us: u64,
    pub action: Action,
}

impl TelemetryEvent {
    pub fn dns(
        site_id: i64,
        client_ip: impl Into<Arc<str>>,
        query_name: impl Into<Arc<str>>,
        query_type: impl Into<Arc<str>>,
        action: Action,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            site_id,
            client_ip: client_ip.into(),
            user_agent: Arc::from(DNS_USER_AGENT),
            method: query_type.into(),
            path: query_name.into(),
            status: 0,
            duration_us: 0,
            action,
        }
    }
}

/// Point-in-time counters of the telemetry pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryStats {
    /// Events accepted into the queue.
    pub accepted: u64,
    /// Events dropped because the queue was full.
    pub dropped: u64,
    /// Events rejected because the pipeline was shut down.
    pub rejected: u64,
    pub flushed_events: u64,
    pub flushed_batches: u64,
    pub failed_batches: u64,
    /// Events discarded together with a failed batch.
    pub lost_events: u64,
}
