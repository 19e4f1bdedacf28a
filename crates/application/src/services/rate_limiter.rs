use sitegate_domain::config::RateLimitConfig;
use sitegate_domain::net::rate_limit_key;
use sitegate_domain::DomainError;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::ports::CounterStore;

/// Fixed-window request counter per `(site, client IP)`.
///
/// The first increment of a window sets its expiry; the counter is never
/// deleted explicitly. A client can therefore send up to twice the limit
/// across a window boundary.
pub struct RateLimiter {
    store: Arc<dyn CounterStore>,
    limit: u64,
    window: Duration,
}

impl RateLimiter {
    pub fn new(store: Arc<dyn CounterStore>, limit: u64, window: Duration) -> Self {
        Self {
            store,
            limit,
            window,
        }
    }

    pub fn from_config(store: Arc<dyn CounterStore>, config: &RateLimitConfig) -> Self {
        Self::new(store, config.limit, config.window())
    }

    /// Counts one request and reports whether it is within the limit.
    pub async fn check(&self, site_id: i64, client_ip: &str) -> Result<bool, DomainError> {
        let key = rate_limit_key(site_id, client_ip);
        let count = self.store.increment(&key).await?;

        if count == 1 {
            self.store.expire(&key, self.window).await?;
        }

        let allowed = count <= self.limit as i64;
        if !allowed {
            debug!(key = %key, count, limit = self.limit, "Rate limit exceeded");
        }
        Ok(allowed)
    }
}
