//! Configuration module for SiteGate
//!
//! Structures are split by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listener ports, binding and the DNS proxy address
//! - `database`: SQLite location
//! - `rate_limit`: Per-site request window
//! - `telemetry`: Queue and batch sizing of the analytics pipeline
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod database;
pub mod errors;
pub mod logging;
pub mod rate_limit;
pub mod root;
pub mod server;
pub mod telemetry;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use rate_limit::RateLimitConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;
