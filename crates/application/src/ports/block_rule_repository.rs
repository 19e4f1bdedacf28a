use async_trait::async_trait;
use sitegate_domain::{BlockRule, DomainError};

/// Rule provider. `get_all` returns rules in a stable provider order; the
/// decision engine relies on that order for first-match-wins.
#[async_trait]
pub trait BlockRuleRepository: Send + Sync {
    async fn create(
        &self,
        rule_type: String,
        value: String,
        action: String,
        description: String,
    ) -> Result<BlockRule, DomainError>;

    async fn get_all(&self) -> Result<Vec<BlockRule>, DomainError>;

    /// # Errors
    ///
    /// * `DomainError::RuleNotFound` - If the rule doesn't exist
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
