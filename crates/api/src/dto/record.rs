use serde::{Deserialize, Serialize};
use sitegate_domain::DnsRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub site_id: i64,
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    pub priority: u16,
    pub created_at: Option<String>,
}

impl From<DnsRecord> for RecordResponse {
    fn from(record: DnsRecord) -> Self {
        Self {
            id: record.id.unwrap_or(0),
            site_id: record.site_id,
            record_type: record.record_type.as_str().to_string(),
            name: record.name.to_string(),
            content: record.content.to_string(),
            ttl: record.ttl,
            priority: record.priority,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}
