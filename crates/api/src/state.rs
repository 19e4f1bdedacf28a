use sitegate_application::services::TelemetryPipeline;
use sitegate_application::use_cases::{
    CreateBlockRuleUseCase, CreateDnsRecordUseCase, CreateSiteUseCase, DeleteBlockRuleUseCase,
    DeleteSiteUseCase, GetBlockRulesUseCase, GetDnsRecordsUseCase, GetSitesUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_sites: Arc<GetSitesUseCase>,
    pub create_site: Arc<CreateSiteUseCase>,
    pub delete_site: Arc<DeleteSiteUseCase>,
    pub get_rules: Arc<GetBlockRulesUseCase>,
    pub create_rule: Arc<CreateBlockRuleUseCase>,
    pub delete_rule: Arc<DeleteBlockRuleUseCase>,
    pub get_records: Arc<GetDnsRecordsUseCase>,
    pub create_record: Arc<CreateDnsRecordUseCase>,
    pub telemetry: Arc<TelemetryPipeline>,
}
