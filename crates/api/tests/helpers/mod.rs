#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sitegate_api::{create_api_routes, AppState};
use sitegate_application::services::{TelemetryPipeline, TelemetrySettings};
use sitegate_application::use_cases::{
    CreateBlockRuleUseCase, CreateDnsRecordUseCase, CreateSiteUseCase, DeleteBlockRuleUseCase,
    DeleteSiteUseCase, GetBlockRulesUseCase, GetDnsRecordsUseCase, GetSitesUseCase,
};
use sitegate_infrastructure::database::create_memory_pool;
use sitegate_infrastructure::repositories::{
    SqliteAnalyticsStore, SqliteBlockRuleRepository, SqliteDnsRecordRepository,
    SqliteSiteRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub telemetry: Arc<TelemetryPipeline>,
}

pub async fn create_test_app() -> TestApp {
    let pool = create_memory_pool().await.unwrap();

    let sites = Arc::new(SqliteSiteRepository::new(pool.clone()));
    let rules = Arc::new(SqliteBlockRuleRepository::new(pool.clone()));
    let records = Arc::new(SqliteDnsRecordRepository::new(pool.clone()));
    let telemetry = Arc::new(TelemetryPipeline::start(
        Arc::new(SqliteAnalyticsStore::new(pool.clone())),
        TelemetrySettings::default(),
    ));

    let state = AppState {
        get_sites: Arc::new(GetSitesUseCase::new(sites.clone())),
        create_site: Arc::new(CreateSiteUseCase::new(sites.clone())),
        delete_site: Arc::new(DeleteSiteUseCase::new(sites.clone())),
        get_rules: Arc::new(GetBlockRulesUseCase::new(rules.clone())),
        create_rule: Arc::new(CreateBlockRuleUseCase::new(rules.clone())),
        delete_rule: Arc::new(DeleteBlockRuleUseCase::new(rules)),
        get_records: Arc::new(GetDnsRecordsUseCase::new(records.clone())),
        create_record: Arc::new(CreateDnsRecordUseCase::new(sites, records)),
        telemetry: telemetry.clone(),
    };

    TestApp {
        router: Router::new().nest("/api", create_api_routes(state)),
        pool,
        telemetry,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        json_parts(response).await
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        json_parts(response).await
    }

    pub async fn delete(&self, uri: &str) -> StatusCode {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .status()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Status plus JSON body; non-JSON bodies come back as a JSON string.
async fn json_parts(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let text = body_string(response).await;
    let value = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
    (status, value)
}
