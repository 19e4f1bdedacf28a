use async_trait::async_trait;
use sitegate_application::ports::AnalyticsStore;
use sitegate_domain::{DomainError, TelemetryEvent};
use sqlx::SqlitePool;
use tracing::{debug, error};

/// Rows per INSERT statement; 9 bound parameters each.
const ROWS_PER_STATEMENT: usize = 500;

const INSERT_PREFIX: &str = "INSERT INTO requests (timestamp, site_id, client_ip, user_agent, method, path, status, duration_us, action) VALUES ";

/// Writes telemetry batches into the `requests` table.
///
/// A batch is written inside one transaction, so it lands completely or not
/// at all.
pub struct SqliteAnalyticsStore {
    pool: SqlitePool,
}

impl SqliteAnalyticsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM requests")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    fn insert_sql(rows: usize) -> String {
        let mut sql = String::with_capacity(INSERT_PREFIX.len() + rows * 30);
        sql.push_str(INSERT_PREFIX);
        for i in 0..rows {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str("(?, ?, ?, ?, ?, ?, ?, ?, ?)");
        }
        sql
    }
}

#[async_trait]
impl AnalyticsStore for SqliteAnalyticsStore {
    async fn write_batch(&self, events: &[TelemetryEvent]) -> Result<(), DomainError> {
        if events.is_empty() {
            return Ok(());
        }

        let to_domain = |e: sqlx::Error| {
            error!(error = %e, count = events.len(), "Analytics batch insert failed");
            DomainError::AnalyticsError(e.to_string())
        };

        let mut tx = self.pool.begin().await.map_err(to_domain)?;

        for chunk in events.chunks(ROWS_PER_STATEMENT) {
            let sql = Self::insert_sql(chunk.len());
            let mut query = sqlx::query(&sql);
            for event in chunk {
                query = query
                    .bind(event.timestamp.to_rfc3339())
                    .bind(event.site_id)
                    .bind(&*event.client_ip)
                    .bind(&*event.user_agent)
                    .bind(&*event.method)
                    .bind(&*event.path)
                    .bind(event.status as i64)
                    .bind(event.duration_us.min(i64::MAX as u64) as i64)
                    .bind(event.action.as_str());
            }
            query.execute(&mut *tx).await.map_err(to_domain)?;
        }

        tx.commit().await.map_err(to_domain)?;

        debug!(count = events.len(), "Analytics batch written");
        Ok(())
    }
}
