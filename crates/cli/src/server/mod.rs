pub mod admin;
pub mod dns;
pub mod proxy;

pub use admin::start_admin_server;
pub use dns::start_dns_server;
pub use proxy::start_proxy_server;
