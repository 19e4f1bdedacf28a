#![allow(dead_code)]

use async_trait::async_trait;
use sitegate_application::ports::{
    AnalyticsStore, BlockRuleRepository, CounterStore, DnsRecordRepository, SiteRepository,
};
use sitegate_domain::{
    Action, BlockRule, DnsRecord, DomainError, RecordType, Site, TelemetryEvent,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, RwLock};
use tokio::time::Instant;

// ============================================================================
// Mock SiteRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockSiteRepository {
    sites: Arc<RwLock<Vec<Site>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockSiteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_sites(sites: Vec<Site>) -> Self {
        let repo = Self::new();
        *repo.sites.write().await = sites;
        repo
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.sites.read().await.len()
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("Mock site lookup failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SiteRepository for MockSiteRepository {
    async fn create(
        &self,
        name: String,
        target_url: String,
        active: bool,
        config: serde_json::Value,
    ) -> Result<Site, DomainError> {
        self.check_fail()?;
        let mut sites = self.sites.write().await;
        if sites.iter().any(|s| &*s.name == name) {
            return Err(DomainError::SiteConflict(name));
        }
        let mut site = Site::new(name, target_url);
        site.id = Some(sites.len() as i64 + 1);
        site.active = active;
        site.config = config;
        sites.push(site.clone());
        Ok(site)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Site>, DomainError> {
        self.check_fail()?;
        Ok(self
            .sites
            .read()
            .await
            .iter()
            .find(|s| s.id == Some(id))
            .cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Site>, DomainError> {
        self.check_fail()?;
        Ok(self
            .sites
            .read()
            .await
            .iter()
            .find(|s| &*s.name == name)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Site>, DomainError> {
        self.check_fail()?;
        Ok(self.sites.read().await.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.check_fail()?;
        let mut sites = self.sites.write().await;
        let before = sites.len();
        sites.retain(|s| s.id != Some(id));
        if sites.len() == before {
            return Err(DomainError::SiteNotFound(format!("Site {} not found", id)));
        }
        Ok(())
    }
}

// ============================================================================
// Mock BlockRuleRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockBlockRuleRepository {
    rules: Arc<RwLock<Vec<BlockRule>>>,
    should_fail: Arc<AtomicBool>,
    next_id: Arc<AtomicUsize>,
}

impl MockBlockRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_rules(rules: Vec<BlockRule>) -> Self {
        let repo = Self::new();
        for rule in rules {
            repo.add_rule(rule).await;
        }
        repo
    }

    pub async fn add_rule(&self, mut rule: BlockRule) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        rule.id = Some(id);
        self.rules.write().await.push(rule);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.rules.read().await.len()
    }
}

#[async_trait]
impl BlockRuleRepository for MockBlockRuleRepository {
    async fn create(
        &self,
        rule_type: String,
        value: String,
        action: String,
        description: String,
    ) -> Result<BlockRule, DomainError> {
        let mut rule = BlockRule::new(rule_type, value, action, description);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        rule.id = Some(id);
        self.rules.write().await.push(rule.clone());
        Ok(rule)
    }

    async fn get_all(&self) -> Result<Vec<BlockRule>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("Mock rule lookup failed".to_string()));
        }
        Ok(self.rules.read().await.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut rules = self.rules.write().await;
        let before = rules.len();
        rules.retain(|r| r.id != Some(id));
        if rules.len() == before {
            return Err(DomainError::RuleNotFound(format!("Rule {} not found", id)));
        }
        Ok(())
    }
}

// ============================================================================
// Mock DnsRecordRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDnsRecordRepository {
    records: Arc<RwLock<Vec<DnsRecord>>>,
}

impl MockDnsRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl DnsRecordRepository for MockDnsRecordRepository {
    async fn create(&self, mut record: DnsRecord) -> Result<DnsRecord, DomainError> {
        let mut records = self.records.write().await;
        record.id = Some(records.len() as i64 + 1);
        records.push(record.clone());
        Ok(record)
    }

    async fn get_by_site(&self, site_id: i64) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.site_id == site_id)
            .cloned()
            .collect())
    }

    async fn find_active(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| &*r.name == name && r.record_type == record_type)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Mock CounterStore
// ============================================================================

/// In-memory counter store on the tokio clock so paused-time tests can step
/// past window expiry.
#[derive(Clone, Default)]
pub struct MockCounterStore {
    counters: Arc<std::sync::Mutex<HashMap<String, (i64, Option<Instant>)>>>,
    increments: Arc<AtomicUsize>,
    expires: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn increment_calls(&self) -> usize {
        self.increments.load(Ordering::SeqCst)
    }

    pub fn expire_calls(&self) -> usize {
        self.expires.load(Ordering::SeqCst)
    }

    pub fn value(&self, key: &str) -> Option<i64> {
        let counters = self.counters.lock().unwrap();
        counters.get(key).and_then(|(count, expiry)| match expiry {
            Some(at) if *at <= Instant::now() => None,
            _ => Some(*count),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.counters.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl CounterStore for MockCounterStore {
    async fn increment(&self, key: &str) -> Result<i64, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::CounterStoreError("Mock counter store down".to_string()));
        }
        self.increments.fetch_add(1, Ordering::SeqCst);

        let mut counters = self.counters.lock().unwrap();
        let now = Instant::now();
        let entry = counters.entry(key.to_string()).or_insert((0, None));
        if matches!(entry.1, Some(at) if at <= now) {
            *entry = (0, None);
        }
        entry.0 += 1;
        Ok(entry.0)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<(), DomainError> {
        self.expires.fetch_add(1, Ordering::SeqCst);
        if let Some(entry) = self.counters.lock().unwrap().get_mut(key) {
            entry.1 = Some(Instant::now() + ttl);
        }
        Ok(())
    }
}

// ============================================================================
// Mock AnalyticsStore
// ============================================================================

#[derive(Clone, Default)]
pub struct MockAnalyticsStore {
    batches: Arc<std::sync::Mutex<Vec<Vec<TelemetryEvent>>>>,
    attempts: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
    gate: Option<Arc<Notify>>,
    gate_open: Arc<AtomicBool>,
    entered: Arc<Notify>,
}

impl MockAnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose writes park until `open_gate` is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    pub fn open_gate(&self) {
        self.gate_open.store(true, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notify_waiters();
        }
    }

    /// Resolves once a write has started.
    pub async fn wait_for_write(&self) {
        self.entered.notified().await;
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Successfully written batches, in write order.
    pub fn batches(&self) -> Vec<Vec<TelemetryEvent>> {
        self.batches.lock().unwrap().clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().unwrap().iter().map(Vec::len).collect()
    }

    pub fn total_events(&self) -> usize {
        self.batch_sizes().iter().sum()
    }

    /// Write attempts, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalyticsStore for MockAnalyticsStore {
    async fn write_batch(&self, events: &[TelemetryEvent]) -> Result<(), DomainError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        if let Some(gate) = &self.gate {
            let opened = gate.notified();
            if !self.gate_open.load(Ordering::SeqCst) {
                opened.await;
            }
        }
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::AnalyticsError("Mock analytics store down".to_string()));
        }
        self.batches.lock().unwrap().push(events.to_vec());
        Ok(())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_site(id: i64, name: &str, active: bool) -> Site {
    let mut site = Site::new(name, "http://127.0.0.1:3000");
    site.id = Some(id);
    site.active = active;
    site
}

pub fn make_event(n: usize) -> TelemetryEvent {
    TelemetryEvent::dns(
        1,
        format!("10.0.{}.{}", (n / 256) % 256, n % 256),
        "example.com",
        "A",
        Action::Allow,
    )
}
