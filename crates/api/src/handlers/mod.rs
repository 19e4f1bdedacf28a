pub mod health;
pub mod records;
pub mod rules;
pub mod sites;
pub mod telemetry;

pub use health::health_check;
