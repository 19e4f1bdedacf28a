use sitegate_infrastructure::rate_limit::InMemoryCounterStore;
use sitegate_infrastructure::repositories::{
    SqliteAnalyticsStore, SqliteBlockRuleRepository, SqliteDnsRecordRepository,
    SqliteSiteRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub sites: Arc<SqliteSiteRepository>,
    pub rules: Arc<SqliteBlockRuleRepository>,
    pub records: Arc<SqliteDnsRecordRepository>,
    pub analytics: Arc<SqliteAnalyticsStore>,
    pub counters: Arc<InMemoryCounterStore>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            sites: Arc::new(SqliteSiteRepository::new(pool.clone())),
            rules: Arc::new(SqliteBlockRuleRepository::new(pool.clone())),
            records: Arc::new(SqliteDnsRecordRepository::new(pool.clone())),
            analytics: Arc::new(SqliteAnalyticsStore::new(pool)),
            counters: Arc::new(InMemoryCounterStore::new()),
        }
    }
}
