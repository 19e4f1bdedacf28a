//! Sitegate Application Layer
//!
//! Ports consumed from infrastructure, the decision engine, the telemetry
//! pipeline and the admin use cases.

pub mod ports;
pub mod services;
pub mod use_cases;
