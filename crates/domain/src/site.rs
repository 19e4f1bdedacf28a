use crate::validators;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A tenant's routable hostname, its active flag and the upstream it is
/// proxied to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub target_url: Arc<str>,
    pub active: bool,
    #[serde(default = "empty_config")]
    pub config: serde_json::Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Site {
    pub fn new(name: impl Into<Arc<str>>, target_url: impl Into<Arc<str>>) -> Self {
        Self {
            id: None,
            name: name.into(),
            target_url: target_url.into(),
            active: true,
            config: empty_config(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Identifier used for rate-limit keys and telemetry; 0 when not persisted.
    pub fn id_or_zero(&self) -> i64 {
        self.id.unwrap_or(0)
    }

    pub fn has_target(&self) -> bool {
        !self.target_url.is_empty()
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        validators::validate_hostname(name)
    }

    pub fn validate_target_url(url: &str) -> Result<(), String> {
        validators::validate_url(url)
    }

    pub fn validate_config(config: &serde_json::Value) -> Result<(), String> {
        if config.is_object() {
            Ok(())
        } else {
            Err("Site config must be a JSON object".to_string())
        }
    }
}

fn empty_config() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
