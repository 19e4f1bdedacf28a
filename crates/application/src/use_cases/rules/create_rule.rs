use sitegate_domain::{BlockRule, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlockRuleRepository;

pub struct CreateBlockRuleUseCase {
    rule_repo: Arc<dyn BlockRuleRepository>,
}

impl CreateBlockRuleUseCase {
    pub fn new(rule_repo: Arc<dyn BlockRuleRepository>) -> Self {
        Self { rule_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        rule_type: String,
        value: String,
        action: String,
        description: Option<String>,
    ) -> Result<BlockRule, DomainError> {
        let rule_type = rule_type.trim().to_ascii_uppercase();
        let action = action.trim().to_ascii_uppercase();
        let value = value.trim().to_string();
        let description = description.unwrap_or_default();

        BlockRule::validate(&rule_type, &value, &action, &description)
            .map_err(DomainError::InvalidRule)?;

        let rule = self
            .rule_repo
            .create(rule_type, value, action, description)
            .await?;

        info!(
            rule_id = ?rule.id,
            rule_type = %rule.rule_type,
            value = %rule.value,
            action = %rule.action,
            "Block rule created successfully"
        );

        Ok(rule)
    }
}
