use async_trait::async_trait;
use sitegate_application::ports::DnsRecordRepository;
use sitegate_domain::{DnsRecord, DomainError, RecordType};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument, warn};

type RecordRow = (i64, i64, String, String, String, i64, i64, String);

pub struct SqliteDnsRecordRepository {
    pool: SqlitePool,
}

impl SqliteDnsRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Option<DnsRecord> {
        let (id, site_id, record_type, name, content, ttl, priority, created_at) = row;

        let record_type = match record_type.parse::<RecordType>() {
            Ok(t) => t,
            Err(e) => {
                warn!(record_id = id, error = %e, "Skipping record with unknown type");
                return None;
            }
        };

        Some(DnsRecord {
            id: Some(id),
            site_id,
            record_type,
            name: Arc::from(name.as_str()),
            content: Arc::from(content.as_str()),
            ttl: ttl.clamp(0, u32::MAX as i64) as u32,
            priority: priority.clamp(0, u16::MAX as i64) as u16,
            created_at: Some(created_at),
        })
    }
}

#[async_trait]
impl DnsRecordRepository for SqliteDnsRecordRepository {
    #[instrument(skip(self, record), fields(site_id = record.site_id, name = %record.name))]
    async fn create(&self, record: DnsRecord) -> Result<DnsRecord, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO dns_records (site_id, record_type, name, content, ttl, priority)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, site_id, record_type, name, content, ttl, priority, created_at",
        )
        .bind(record.site_id)
        .bind(record.record_type.as_str())
        .bind(&*record.name)
        .bind(&*record.content)
        .bind(record.ttl as i64)
        .bind(record.priority as i64)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("FOREIGN KEY constraint failed") {
                DomainError::SiteNotFound(format!("Site {} not found", record.site_id))
            } else {
                error!(error = %e, "Failed to create DNS record");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        Self::row_to_record(row)
            .ok_or_else(|| DomainError::DatabaseError("Failed to read created record".to_string()))
    }

    #[instrument(skip(self))]
    async fn get_by_site(&self, site_id: i64) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, site_id, record_type, name, content, ttl, priority, created_at
             FROM dns_records WHERE site_id = ? ORDER BY id ASC",
        )
        .bind(site_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query DNS records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_record).collect())
    }

    #[instrument(skip(self), level = "debug")]
    async fn find_active(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT r.id, r.site_id, r.record_type, r.name, r.content, r.ttl, r.priority, r.created_at
             FROM dns_records r
             JOIN sites s ON r.site_id = s.id
             WHERE r.name = ? AND r.record_type = ? AND s.active = 1
             ORDER BY r.priority ASC, r.id ASC",
        )
        .bind(name)
        .bind(record_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to look up DNS records");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_record).collect())
    }
}
