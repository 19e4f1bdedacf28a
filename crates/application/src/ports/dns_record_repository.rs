use async_trait::async_trait;
use sitegate_domain::{DnsRecord, DomainError, RecordType};

#[async_trait]
pub trait DnsRecordRepository: Send + Sync {
    async fn create(&self, record: DnsRecord) -> Result<DnsRecord, DomainError>;

    async fn get_by_site(&self, site_id: i64) -> Result<Vec<DnsRecord>, DomainError>;

    /// Records with this exact name and type whose owning site is active.
    async fn find_active(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError>;
}
