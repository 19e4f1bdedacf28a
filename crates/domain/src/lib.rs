//! Sitegate Domain Layer
pub mod block_rule;
pub mod config;
pub mod decision;
pub mod dns_record;
pub mod errors;
pub mod net;
pub mod site;
pub mod telemetry;
pub mod validators;

pub use block_rule::BlockRule;
pub use config::{CliOverrides, Config, ConfigError};
pub use decision::{Action, Decision};
pub use dns_record::{DnsRecord, RecordType};
pub use errors::DomainError;
pub use site::Site;
pub use telemetry::{TelemetryEvent, TelemetryStats};
