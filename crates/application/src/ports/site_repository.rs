use async_trait::async_trait;
use sitegate_domain::{DomainError, Site};

/// Repository interface for sites.
///
/// `get_by_name` is the site resolver used on every decision; it performs an
/// exact, case-sensitive match and must reflect the latest committed state.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Creates a new site.
    ///
    /// # Errors
    ///
    /// * `DomainError::SiteConflict` - If a site with this name already exists
    /// * `DomainError::DatabaseError` - If a database error occurs
    async fn create(
        &self,
        name: String,
        target_url: String,
        active: bool,
        config: serde_json::Value,
    ) -> Result<Site, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Site>, DomainError>;

    /// Resolves a site by exact name.
    ///
    /// * `Ok(None)` - If no site with this name exists
    /// * `Err(DomainError)` - If the lookup itself failed
    async fn get_by_name(&self, name: &str) -> Result<Option<Site>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Site>, DomainError>;

    /// Deletes a site together with its DNS records.
    ///
    /// # Errors
    ///
    /// * `DomainError::SiteNotFound` - If the site doesn't exist
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
