use serde::{Deserialize, Serialize};
use sitegate_domain::BlockRule;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleResponse {
    pub id: i64,
    pub rule_type: String,
    pub value: String,
    pub action: String,
    pub description: String,
    pub created_at: Option<String>,
}

impl From<BlockRule> for RuleResponse {
    fn from(rule: BlockRule) -> Self {
        Self {
            id: rule.id.unwrap_or(0),
            rule_type: rule.rule_type.to_string(),
            value: rule.value.to_string(),
            action: rule.action.to_string(),
            description: rule.description.to_string(),
            created_at: rule.created_at,
        }
    }
}

/// Only `IP` / `BLOCK` rules take effect; other types are stored as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRuleRequest {
    #[serde(default = "default_rule_type")]
    pub rule_type: String,
    pub value: String,
    #[serde(default = "default_action")]
    pub action: String,
    pub description: Option<String>,
}

fn default_rule_type() -> String {
    "IP".to_string()
}

fn default_action() -> String {
    "BLOCK".to_string()
}
