use async_trait::async_trait;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use sitegate_application::ports::CounterStore;
use sitegate_domain::DomainError;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Counter {
    value: i64,
    expires_at: Option<Instant>,
}

impl Counter {
    #[inline]
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

/// Process-local counter store.
///
/// Each key lives in one DashMap shard; `increment` mutates the entry while
/// holding that shard's write lock, so concurrent increments of the same key
/// never lose updates. Expired entries read as absent and are removed lazily
/// on the next increment or by `purge_expired`.
pub struct InMemoryCounterStore {
    counters: DashMap<String, Counter, FxBuildHasher>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::with_hasher(FxBuildHasher),
        }
    }

    /// Current value of `key`, `None` when absent or expired.
    pub fn get(&self, key: &str) -> Option<i64> {
        let now = Instant::now();
        self.counters
            .get(key)
            .filter(|c| !c.is_expired(now))
            .map(|c| c.value)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl Default for InMemoryCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn increment(&self, key: &str) -> Result<i64, DomainError> {
        let now = Instant::now();
        let mut entry = self.counters.entry(key.to_string()).or_insert(Counter {
            value: 0,
            expires_at: None,
        });

        if entry.is_expired(now) {
            *entry = Counter {
                value: 0,
                expires_at: None,
            };
        }
        entry.value += 1;
        Ok(entry.value)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError> {
        if let Some(mut entry) = self.counters.get_mut(key) {
            entry.expires_at = Some(Instant::now() + ttl);
        }
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        let now = Instant::now();
        let before = self.counters.len();
        self.counters.retain(|_, c| !c.is_expired(now));
        let removed = before.saturating_sub(self.counters.len()) as u64;

        if removed > 0 {
            debug!(removed, remaining = self.counters.len(), "Expired rate-limit counters purged");
        }
        Ok(removed)
    }
}
