use sitegate_domain::{DnsRecord, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::DnsRecordRepository;

pub struct GetDnsRecordsUseCase {
    record_repo: Arc<dyn DnsRecordRepository>,
}

impl GetDnsRecordsUseCase {
    pub fn new(record_repo: Arc<dyn DnsRecordRepository>) -> Self {
        Self { record_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_by_site(&self, site_id: i64) -> Result<Vec<DnsRecord>, DomainError> {
        self.record_repo.get_by_site(site_id).await
    }
}
