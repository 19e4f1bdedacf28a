use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid site: {0}")]
    InvalidSite(String),

    #[error("Invalid block rule: {0}")]
    InvalidRule(String),

    #[error("Invalid DNS record: {0}")]
    InvalidRecord(String),

    #[error("Site not found: {0}")]
    SiteNotFound(String),

    #[error("Site already exists: {0}")]
    SiteConflict(String),

    #[error("Block rule not found: {0}")]
    RuleNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Counter store error: {0}")]
    CounterStoreError(String),

    #[error("Analytics store error: {0}")]
    AnalyticsError(String),
}
