use sitegate_domain::dns_record::DEFAULT_RECORD_TTL;
use sitegate_domain::net::normalize_query_name;
use sitegate_domain::{DnsRecord, DomainError, RecordType};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{DnsRecordRepository, SiteRepository};

pub struct CreateDnsRecordUseCase {
    site_repo: Arc<dyn SiteRepository>,
    record_repo: Arc<dyn DnsRecordRepository>,
}

impl CreateDnsRecordUseCase {
    pub fn new(
        site_repo: Arc<dyn SiteRepository>,
        record_repo: Arc<dyn DnsRecordRepository>,
    ) -> Self {
        Self {
            site_repo,
            record_repo,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        site_id: i64,
        record_type: &str,
        name: String,
        content: String,
        ttl: Option<u32>,
        priority: Option<u16>,
    ) -> Result<DnsRecord, DomainError> {
        let record_type: RecordType = record_type.parse()?;
        let name = normalize_query_name(name.trim());
        let content = content.trim().to_string();

        DnsRecord::validate(record_type, &name, &content).map_err(DomainError::InvalidRecord)?;

        self.site_repo
            .get_by_id(site_id)
            .await?
            .ok_or_else(|| DomainError::SiteNotFound(format!("Site {} not found", site_id)))?;

        let record = DnsRecord::new(site_id, record_type, name, content)
            .with_ttl(ttl.unwrap_or(DEFAULT_RECORD_TTL))
            .with_priority(priority.unwrap_or(0));

        let record = self.record_repo.create(record).await?;

        info!(
            record_id = ?record.id,
            site_id,
            record_type = %record.record_type,
            name = %record.name,
            "DNS record created successfully"
        );

        Ok(record)
    }
}
