use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};

use crate::{
    dto::{CreateRuleRequest, RuleResponse},
    errors::{api_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rules", get(get_all_rules).post(create_rule))
        .route("/rules/{id}", delete(delete_rule))
}

async fn get_all_rules(
    State(state): State<AppState>,
) -> Result<Json<Vec<RuleResponse>>, ApiError> {
    let rules = state
        .get_rules
        .get_all()
        .await
        .map_err(|e| api_error(e, "Failed to retrieve block rules"))?;

    Ok(Json(rules.into_iter().map(RuleResponse::from).collect()))
}

async fn create_rule(
    State(state): State<AppState>,
    Json(req): Json<CreateRuleRequest>,
) -> Result<(StatusCode, Json<RuleResponse>), ApiError> {
    let rule = state
        .create_rule
        .execute(req.rule_type, req.value, req.action, req.description)
        .await
        .map_err(|e| api_error(e, "Failed to create block rule"))?;

    Ok((StatusCode::CREATED, Json(rule.into())))
}

async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_rule
        .execute(id)
        .await
        .map_err(|e| api_error(e, "Failed to delete block rule"))?;

    Ok(StatusCode::NO_CONTENT)
}
