use async_trait::async_trait;
use sitegate_application::ports::BlockRuleRepository;
use sitegate_domain::{BlockRule, DomainError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{error, instrument};

type RuleRow = (i64, String, String, String, String, String);

pub struct SqliteBlockRuleRepository {
    pool: SqlitePool,
}

impl SqliteBlockRuleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_rule(row: RuleRow) -> BlockRule {
        let (id, rule_type, value, action, description, created_at) = row;

        BlockRule {
            id: Some(id),
            rule_type: Arc::from(rule_type.as_str()),
            value: Arc::from(value.as_str()),
            action: Arc::from(action.as_str()),
            description: Arc::from(description.as_str()),
            created_at: Some(created_at),
        }
    }
}

#[async_trait]
impl BlockRuleRepository for SqliteBlockRuleRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        rule_type: String,
        value: String,
        action: String,
        description: String,
    ) -> Result<BlockRule, DomainError> {
        let row = sqlx::query_as::<_, RuleRow>(
            "INSERT INTO block_rules (rule_type, value, action, description)
             VALUES (?, ?, ?, ?)
             RETURNING id, rule_type, value, action, description, created_at",
        )
        .bind(&rule_type)
        .bind(&value)
        .bind(&action)
        .bind(&description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create block rule");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(Self::row_to_rule(row))
    }

    /// Rules in insertion order.
    #[instrument(skip(self), level = "debug")]
    async fn get_all(&self) -> Result<Vec<BlockRule>, DomainError> {
        let rows = sqlx::query_as::<_, RuleRow>(
            "SELECT id, rule_type, value, action, description, created_at
             FROM block_rules ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query block rules");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_rule).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM block_rules WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete block rule");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RuleNotFound(format!("Rule {} not found", id)));
        }

        Ok(())
    }
}
