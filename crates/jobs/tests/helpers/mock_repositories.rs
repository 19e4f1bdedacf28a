use async_trait::async_trait;
use sitegate_application::ports::CounterStore;
use sitegate_domain::DomainError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Counter store whose entries expire against tokio's (pausable) clock.
pub struct MockCounterStore {
    entries: RwLock<HashMap<String, (i64, Option<Instant>)>>,
    purge_calls: AtomicU64,
    should_fail: AtomicBool,
}

impl MockCounterStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            purge_calls: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn purge_calls(&self) -> u64 {
        self.purge_calls.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterStore for MockCounterStore {
    async fn increment(&self, key: &str) -> Result<i64, DomainError> {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(key.to_string()).or_insert((0, None));
        entry.0 += 1;
        Ok(entry.0)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError> {
        if let Some(entry) = self.entries.write().await.get_mut(key) {
            entry.1 = Some(Instant::now() + ttl);
        }
        Ok(())
    }

    async fn purge_expired(&self) -> Result<u64, DomainError> {
        self.purge_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::CounterStoreError("Mock purge error".to_string()));
        }
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, (_, expires)| expires.is_none_or(|at| at > now));
        Ok((before - entries.len()) as u64)
    }
}
