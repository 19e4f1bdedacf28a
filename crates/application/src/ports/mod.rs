mod analytics_store;
mod block_rule_repository;
mod counter_store;
mod dns_record_repository;
mod site_repository;

pub use analytics_store::AnalyticsStore;
pub use block_rule_repository::BlockRuleRepository;
pub use counter_store::CounterStore;
pub use dns_record_repository::DnsRecordRepository;
pub use site_repository::SiteRepository;
