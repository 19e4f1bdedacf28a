use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed-window limit applied per (site, client IP)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window (default: 100)
    #[serde(default = "default_limit")]
    pub limit: u64,

    /// Window length in seconds (default: 60)
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,

    /// How often expired counters are purged from memory (default: 30)
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            window_secs: default_window_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

fn default_limit() -> u64 {
    100
}

fn default_window_secs() -> u64 {
    60
}

fn default_sweep_interval_secs() -> u64 {
    30
}
