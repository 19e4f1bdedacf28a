pub mod analytics_store;
pub mod block_rule_repository;
pub mod dns_record_repository;
pub mod site_repository;

pub use analytics_store::SqliteAnalyticsStore;
pub use block_rule_repository::SqliteBlockRuleRepository;
pub use dns_record_repository::SqliteDnsRecordRepository;
pub use site_repository::SqliteSiteRepository;
