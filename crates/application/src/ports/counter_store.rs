use async_trait::async_trait;
use sitegate_domain::DomainError;
use std::time::Duration;

/// Atomic increment-with-expiry key/value store backing the rate limiter.
///
/// `increment` must be atomic at the store level: concurrent callers on the
/// same key observe strictly increasing post-increment values. A key whose
/// expiry has passed behaves as absent.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Increments `key` and returns the post-increment value.
    async fn increment(&self, key: &str) -> Result<i64, DomainError>;

    /// Sets `key` to expire `ttl` from now.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError>;

    /// Reclaims expired keys, returning how many were removed. Stores with
    /// native expiry have nothing to do.
    async fn purge_expired(&self) -> Result<u64, DomainError> {
        Ok(0)
    }
}
