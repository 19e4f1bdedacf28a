use serde::{Deserialize, Serialize};
use sitegate_domain::Site;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResponse {
    pub id: i64,
    pub name: String,
    pub target_url: String,
    pub active: bool,
    pub config: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Site> for SiteResponse {
    fn from(site: Site) -> Self {
        Self {
            id: site.id.unwrap_or(0),
            name: site.name.to_string(),
            target_url: site.target_url.to_string(),
            active: site.active,
            config: site.config,
            created_at: site.created_at,
            updated_at: site.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSiteRequest {
    pub name: String,
    pub target_url: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub config: Option<serde_json::Value>,
}

fn default_active() -> bool {
    true
}
