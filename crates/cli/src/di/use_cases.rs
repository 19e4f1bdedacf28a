use super::Repositories;
use sitegate_api::AppState;
use sitegate_application::services::TelemetryPipeline;
use sitegate_application::use_cases::{
    CreateBlockRuleUseCase, CreateDnsRecordUseCase, CreateSiteUseCase, DeleteBlockRuleUseCase,
    DeleteSiteUseCase, GetBlockRulesUseCase, GetDnsRecordsUseCase, GetSitesUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub get_sites: Arc<GetSitesUseCase>,
    pub create_site: Arc<CreateSiteUseCase>,
    pub delete_site: Arc<DeleteSiteUseCase>,
    pub get_rules: Arc<GetBlockRulesUseCase>,
    pub create_rule: Arc<CreateBlockRuleUseCase>,
    pub delete_rule: Arc<DeleteBlockRuleUseCase>,
    pub get_records: Arc<GetDnsRecordsUseCase>,
    pub create_record: Arc<CreateDnsRecordUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            get_sites: Arc::new(GetSitesUseCase::new(repos.sites.clone())),
            create_site: Arc::new(CreateSiteUseCase::new(repos.sites.clone())),
            delete_site: Arc::new(DeleteSiteUseCase::new(repos.sites.clone())),
            get_rules: Arc::new(GetBlockRulesUseCase::new(repos.rules.clone())),
            create_rule: Arc::new(CreateBlockRuleUseCase::new(repos.rules.clone())),
            delete_rule: Arc::new(DeleteBlockRuleUseCase::new(repos.rules.clone())),
            get_records: Arc::new(GetDnsRecordsUseCase::new(repos.records.clone())),
            create_record: Arc::new(CreateDnsRecordUseCase::new(
                repos.sites.clone(),
                repos.records.clone(),
            )),
        }
    }

    pub fn app_state(&self, telemetry: Arc<TelemetryPipeline>) -> AppState {
        AppState {
            get_sites: self.get_sites.clone(),
            create_site: self.create_site.clone(),
            delete_site: self.delete_site.clone(),
            get_rules: self.get_rules.clone(),
            create_rule: self.create_rule.clone(),
            delete_rule: self.delete_rule.clone(),
            get_records: self.get_records.clone(),
            create_record: self.create_record.clone(),
            telemetry,
        }
    }
}
