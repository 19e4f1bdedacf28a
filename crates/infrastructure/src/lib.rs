//! Sitegate Infrastructure Layer
//!
//! SQLite repositories, the in-memory counter store and the two front-ends
//! (authoritative DNS handler and HTTP reverse proxy).

pub mod database;
pub mod dns;
pub mod proxy;
pub mod rate_limit;
pub mod repositories;
