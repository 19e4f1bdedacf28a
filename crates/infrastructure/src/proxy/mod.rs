//! HTTP reverse-proxy front-end.

pub mod forwarder;
pub mod handler;

pub use forwarder::UpstreamForwarder;
pub use handler::{proxy_router, ProxyState};
