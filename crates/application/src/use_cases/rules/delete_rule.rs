use sitegate_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::BlockRuleRepository;

pub struct DeleteBlockRuleUseCase {
    rule_repo: Arc<dyn BlockRuleRepository>,
}

impl DeleteBlockRuleUseCase {
    pub fn new(rule_repo: Arc<dyn BlockRuleRepository>) -> Self {
        Self { rule_repo }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.rule_repo.delete(id).await?;
        info!(rule_id = id, "Block rule deleted successfully");
        Ok(())
    }
}
