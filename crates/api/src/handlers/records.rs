use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::{
    dto::{CreateRecordRequest, RecordResponse},
    errors::{api_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/sites/{id}/records", get(get_site_records).post(create_record))
}

async fn get_site_records(
    State(state): State<AppState>,
    Path(site_id): Path<i64>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    match state.get_sites.get_by_id(site_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err((
                StatusCode::NOT_FOUND,
                format!("Site {} not found", site_id),
            ))
        }
        Err(e) => return Err(api_error(e, "Failed to retrieve site")),
    }

    let records = state
        .get_records
        .get_by_site(site_id)
        .await
        .map_err(|e| api_error(e, "Failed to retrieve DNS records"))?;

    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

async fn create_record(
    State(state): State<AppState>,
    Path(site_id): Path<i64>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let record = state
        .create_record
        .execute(
            site_id,
            &req.record_type,
            req.name,
            req.content,
            req.ttl,
            req.priority,
        )
        .await
        .map_err(|e| api_error(e, "Failed to create DNS record"))?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
