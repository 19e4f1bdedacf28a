use sitegate_domain::{DomainError, Site};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::SiteRepository;

pub struct GetSitesUseCase {
    site_repo: Arc<dyn SiteRepository>,
}

impl GetSitesUseCase {
    pub fn new(site_repo: Arc<dyn SiteRepository>) -> Self {
        Self { site_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Site>, DomainError> {
        self.site_repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Site>, DomainError> {
        self.site_repo.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Site>, DomainError> {
        self.site_repo.get_by_name(name).await
    }
}
