use sitegate_domain::{DomainError, Site};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::SiteRepository;

pub struct CreateSiteUseCase {
    site_repo: Arc<dyn SiteRepository>,
}

impl CreateSiteUseCase {
    pub fn new(site_repo: Arc<dyn SiteRepository>) -> Self {
        Self { site_repo }
    }

    #[instrument(skip(self, config))]
    pub async fn execute(
        &self,
        name: String,
        target_url: String,
        active: bool,
        config: Option<serde_json::Value>,
    ) -> Result<Site, DomainError> {
        let name = name.trim().to_ascii_lowercase();
        Site::validate_name(&name).map_err(DomainError::InvalidSite)?;
        Site::validate_target_url(&target_url).map_err(DomainError::InvalidSite)?;

        let config = config.unwrap_or_else(|| serde_json::json!({}));
        Site::validate_config(&config).map_err(DomainError::InvalidSite)?;

        if self.site_repo.get_by_name(&name).await?.is_some() {
            return Err(DomainError::SiteConflict(name));
        }

        let site = self
            .site_repo
            .create(name.clone(), target_url, active, config)
            .await?;

        info!(
            site_id = ?site.id,
            name = %name,
            active = site.active,
            "Site created successfully"
        );

        Ok(site)
    }
}
