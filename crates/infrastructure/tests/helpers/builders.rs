use sitegate_application::ports::{BlockRuleRepository, DnsRecordRepository, SiteRepository};
use sitegate_application::services::{
    DecisionEngine, RateLimiter, TelemetryPipeline, TelemetrySettings,
};
use async_trait::async_trait;
use sitegate_domain::{DnsRecord, DomainError, RecordType, Site};
use sitegate_infrastructure::database::create_memory_pool;
use sitegate_infrastructure::rate_limit::InMemoryCounterStore;
use sitegate_infrastructure::repositories::{
    SqliteAnalyticsStore, SqliteBlockRuleRepository, SqliteDnsRecordRepository,
    SqliteSiteRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Fully wired stack on an in-memory database.
pub struct Harness {
    pub pool: SqlitePool,
    pub sites: Arc<SqliteSiteRepository>,
    pub rules: Arc<SqliteBlockRuleRepository>,
    pub records: Arc<SqliteDnsRecordRepository>,
    pub counters: Arc<InMemoryCounterStore>,
    pub engine: Arc<DecisionEngine>,
    pub telemetry: Arc<TelemetryPipeline>,
}

/// (site_id, client_ip, user_agent, method, path, status, action)
pub type RequestRow = (i64, String, String, String, String, i64, String);

impl Harness {
    pub async fn new(limit: u64) -> Self {
        let pool = create_memory_pool().await.unwrap();

        let sites = Arc::new(SqliteSiteRepository::new(pool.clone()));
        let rules = Arc::new(SqliteBlockRuleRepository::new(pool.clone()));
        let records = Arc::new(SqliteDnsRecordRepository::new(pool.clone()));
        let counters = Arc::new(InMemoryCounterStore::new());

        let limiter = RateLimiter::new(counters.clone(), limit, Duration::from_secs(60));
        let engine = Arc::new(DecisionEngine::new(sites.clone(), rules.clone(), limiter));

        let telemetry = Arc::new(TelemetryPipeline::start(
            Arc::new(SqliteAnalyticsStore::new(pool.clone())),
            TelemetrySettings {
                queue_capacity: 1_000,
                batch_size: 100,
                flush_interval: Duration::from_secs(60),
            },
        ));

        Self {
            pool,
            sites,
            rules,
            records,
            counters,
            engine,
            telemetry,
        }
    }

    pub async fn add_site(&self, name: &str, target_url: &str, active: bool) -> Site {
        self.sites
            .create(
                name.to_string(),
                target_url.to_string(),
                active,
                serde_json::json!({}),
            )
            .await
            .unwrap()
    }

    pub async fn add_record(
        &self,
        site_id: i64,
        record_type: RecordType,
        name: &str,
        content: &str,
        priority: u16,
    ) -> DnsRecord {
        self.records
            .create(DnsRecord::new(site_id, record_type, name, content).with_priority(priority))
            .await
            .unwrap()
    }

    pub async fn block_ip(&self, ip: &str, description: &str) {
        self.rules
            .create(
                "IP".to_string(),
                ip.to_string(),
                "BLOCK".to_string(),
                description.to_string(),
            )
            .await
            .unwrap();
    }

    /// Engine sharing this harness's rules and counters whose site lookups
    /// always fail.
    pub fn engine_with_failing_sites(&self) -> Arc<DecisionEngine> {
        let limiter = RateLimiter::new(self.counters.clone(), 100, Duration::from_secs(60));
        Arc::new(DecisionEngine::new(
            Arc::new(FailingSiteRepository),
            self.rules.clone(),
            limiter,
        ))
    }

    /// Waits until `count` events have been accepted by the pipeline.
    pub async fn wait_for_events(&self, count: u64) {
        for _ in 0..200 {
            if self.telemetry.stats().accepted >= count {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "expected {} telemetry events, got {}",
            count,
            self.telemetry.stats().accepted
        );
    }

    /// Drains the telemetry pipeline and returns every stored request row.
    pub async fn flushed_requests(&self) -> Vec<RequestRow> {
        self.telemetry.shutdown().await;
        sqlx::query_as::<_, RequestRow>(
            "SELECT site_id, client_ip, user_agent, method, path, status, action
             FROM requests ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .unwrap()
    }
}

/// Site store whose every call fails like an unreachable database.
pub struct FailingSiteRepository;

fn unavailable() -> DomainError {
    DomainError::DatabaseError("database is locked".to_string())
}

#[async_trait]
impl SiteRepository for FailingSiteRepository {
    async fn create(
        &self,
        _name: String,
        _target_url: String,
        _active: bool,
        _config: serde_json::Value,
    ) -> Result<Site, DomainError> {
        Err(unavailable())
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<Site>, DomainError> {
        Err(unavailable())
    }

    async fn get_by_name(&self, _name: &str) -> Result<Option<Site>, DomainError> {
        Err(unavailable())
    }

    async fn get_all(&self) -> Result<Vec<Site>, DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i64) -> Result<(), DomainError> {
        Err(unavailable())
    }
}
