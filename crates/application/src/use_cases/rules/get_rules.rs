use sitegate_domain::{BlockRule, DomainError};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::BlockRuleRepository;

pub struct GetBlockRulesUseCase {
    rule_repo: Arc<dyn BlockRuleRepository>,
}

impl GetBlockRulesUseCase {
    pub fn new(rule_repo: Arc<dyn BlockRuleRepository>) -> Self {
        Self { rule_repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<BlockRule>, DomainError> {
        self.rule_repo.get_all().await
    }
}
