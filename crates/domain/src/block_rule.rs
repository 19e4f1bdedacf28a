use crate::validators;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The only rule type the decision engine evaluates.
pub const RULE_TYPE_IP: &str = "IP";

/// The only rule action that triggers blocking.
pub const RULE_ACTION_BLOCK: &str = "BLOCK";

/// An IP-based block/allow rule. Rules carry no priority: the first match in
/// provider order wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRule {
    pub id: Option<i64>,
    pub rule_type: Arc<str>,
    pub value: Arc<str>,
    pub action: Arc<str>,
    #[serde(default)]
    pub description: Arc<str>,
    pub created_at: Option<String>,
}

impl BlockRule {
    pub fn new(
        rule_type: impl Into<Arc<str>>,
        value: impl Into<Arc<str>>,
        action: impl Into<Arc<str>>,
        description: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: None,
            rule_type: rule_type.into(),
            value: value.into(),
            action: action.into(),
            description: description.into(),
            created_at: None,
        }
    }

    pub fn ip_block(ip: &str, description: &str) -> Self {
        Self::new(RULE_TYPE_IP, ip, RULE_ACTION_BLOCK, description)
    }

    /// True when this rule is an `IP`/`BLOCK` rule for exactly `client_ip`.
    #[inline]
    pub fn blocks_ip(&self, client_ip: &str) -> bool {
        &*self.rule_type == RULE_TYPE_IP
            && &*self.action == RULE_ACTION_BLOCK
            && &*self.value == client_ip
    }

    pub fn validate(
        rule_type: &str,
        value: &str,
        action: &str,
        description: &str,
    ) -> Result<(), String> {
        if rule_type.is_empty() || value.is_empty() || action.is_empty() {
            return Err("rule_type, value, and action are required".to_string());
        }
        validators::validate_description(description)
    }
}
