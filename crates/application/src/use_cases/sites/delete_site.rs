use sitegate_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SiteRepository;

pub struct DeleteSiteUseCase {
    site_repo: Arc<dyn SiteRepository>,
}

impl DeleteSiteUseCase {
    pub fn new(site_repo: Arc<dyn SiteRepository>) -> Self {
        Self { site_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        let site = self
            .site_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::SiteNotFound(format!("Site {} not found", id)))?;

        self.site_repo.delete(id).await?;

        info!(site_id = id, name = %site.name, "Site deleted successfully");

        Ok(())
    }
}
