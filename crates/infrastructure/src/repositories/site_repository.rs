use async_trait::async_trait;
use sitegate_application::ports::SiteRepository;
use sitegate_domain::{DomainError, Site};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument, warn};

type SiteRow = (i64, String, String, bool, String, String, String);

const SITE_COLUMNS: &str = "id, name, target_url, active, config, created_at, updated_at";

pub struct SqliteSiteRepository {
    pool: SqlitePool,
}

impl SqliteSiteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_site(row: SiteRow) -> Site {
        let (id, name, target_url, active, config, created_at, updated_at) = row;

        let config = serde_json::from_str(&config).unwrap_or_else(|e| {
            warn!(site_id = id, error = %e, "Stored site config is not valid JSON, using {{}}");
            serde_json::json!({})
        });

        Site {
            id: Some(id),
            name: Arc::from(name.as_str()),
            target_url: Arc::from(target_url.as_str()),
            active,
            config,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[async_trait]
impl SiteRepository for SqliteSiteRepository {
    #[instrument(skip(self, config))]
    async fn create(
        &self,
        name: String,
        target_url: String,
        active: bool,
        config: serde_json::Value,
    ) -> Result<Site, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let result = sqlx::query(
            "INSERT INTO sites (name, target_url, active, config, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&name)
        .bind(&target_url)
        .bind(active)
        .bind(config.to_string())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::SiteConflict(format!("Site '{}' already exists", name))
            } else {
                error!(error = %e, "Failed to create site");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.last_insert_rowid();

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::DatabaseError("Failed to fetch created site".to_string()))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Site>, DomainError> {
        let row = sqlx::query_as::<_, SiteRow>(&format!(
            "SELECT {} FROM sites WHERE id = ?",
            SITE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query site by id");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_site))
    }

    #[instrument(skip(self), level = "debug")]
    async fn get_by_name(&self, name: &str) -> Result<Option<Site>, DomainError> {
        let row = sqlx::query_as::<_, SiteRow>(&format!(
            "SELECT {} FROM sites WHERE name = ?",
            SITE_COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query site by name");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_site))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Site>, DomainError> {
        let rows = sqlx::query_as::<_, SiteRow>(&format!(
            "SELECT {} FROM sites ORDER BY name ASC",
            SITE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all sites");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_site).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM sites WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete site");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SiteNotFound(format!("Site {} not found", id)));
        }

        Ok(())
    }
}
