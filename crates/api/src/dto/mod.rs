pub mod record;
pub mod rule;
pub mod site;
pub mod telemetry;

pub use record::{CreateRecordRequest, RecordResponse};
pub use rule::{CreateRuleRequest, RuleResponse};
pub use site::{CreateSiteRequest, SiteResponse};
pub use telemetry::TelemetryStatsResponse;
