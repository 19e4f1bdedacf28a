mod create_rule;
mod delete_rule;
mod get_rules;

pub use create_rule::CreateBlockRuleUseCase;
pub use delete_rule::DeleteBlockRuleUseCase;
pub use get_rules::GetBlockRulesUseCase;
