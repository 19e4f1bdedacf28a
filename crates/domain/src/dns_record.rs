use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_RECORD_TTL: u32 = 300;

/// Record types the DNS front-end can synthesize answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    CNAME,
    TXT,
    MX,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::CNAME => "CNAME",
            RecordType::TXT => "TXT",
            RecordType::MX => "MX",
        }
    }

    pub fn uses_priority(&self) -> bool {
        matches!(self, RecordType::MX)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "CNAME" => Ok(RecordType::CNAME),
            "TXT" => Ok(RecordType::TXT),
            "MX" => Ok(RecordType::MX),
            other => Err(DomainError::InvalidRecord(format!(
                "Unsupported record type: {}",
                other
            ))),
        }
    }
}

/// Custom zone record owned by a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecord {
    pub id: Option<i64>,
    pub site_id: i64,
    pub record_type: RecordType,
    pub name: Arc<str>,
    pub content: Arc<str>,
    pub ttl: u32,
    pub priority: u16,
    pub created_at: Option<String>,
}

impl DnsRecord {
    pub fn new(
        site_id: i64,
        record_type: RecordType,
        name: impl Into<Arc<str>>,
        content: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: None,
            site_id,
            record_type,
            name: name.into(),
            content: content.into(),
            ttl: DEFAULT_RECORD_TTL,
            priority: 0,
            created_at: None,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn validate(record_type: RecordType, name: &str, content: &str) -> Result<(), String> {
        if name.is_empty() || content.is_empty() {
            return Err("name and content are required".to_string());
        }
        if content.len() > 1024 {
            return Err("Record content cannot exceed 1024 characters".to_string());
        }
        if record_type == RecordType::A && content.parse::<std::net::Ipv4Addr>().is_err() {
            return Err(format!("A record content must be an IPv4 address: {}", content));
        }
        Ok(())
    }
}
