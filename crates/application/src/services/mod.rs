mod decision_engine;
mod rate_limiter;
mod telemetry_pipeline;

pub use decision_engine::DecisionEngine;
pub use rate_limiter::RateLimiter;
pub use telemetry_pipeline::{RecordOutcome, TelemetryPipeline, TelemetrySettings};
