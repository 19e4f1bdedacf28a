pub mod answer;
pub mod record_type_map;
pub mod server;

pub use server::{DnsResolution, DnsServerHandler};
