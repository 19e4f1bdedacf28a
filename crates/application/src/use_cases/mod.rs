pub mod records;
pub mod rules;
pub mod sites;

pub use records::{CreateDnsRecordUseCase, GetDnsRecordsUseCase};
pub use rules::{CreateBlockRuleUseCase, DeleteBlockRuleUseCase, GetBlockRulesUseCase};
pub use sites::{CreateSiteUseCase, DeleteSiteUseCase, GetSitesUseCase};
