use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use tracing::debug;

use crate::{
    dto::{CreateSiteRequest, SiteResponse},
    errors::{api_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sites", get(get_all_sites).post(create_site))
        .route("/sites/by-name/{name}", get(get_site_by_name))
        .route("/sites/{id}", delete(delete_site))
}

async fn get_all_sites(
    State(state): State<AppState>,
) -> Result<Json<Vec<SiteResponse>>, ApiError> {
    let sites = state
        .get_sites
        .get_all()
        .await
        .map_err(|e| api_error(e, "Failed to retrieve sites"))?;

    debug!(count = sites.len(), "Sites retrieved successfully");
    Ok(Json(sites.into_iter().map(SiteResponse::from).collect()))
}

async fn get_site_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SiteResponse>, ApiError> {
    match state.get_sites.get_by_name(&name.to_ascii_lowercase()).await {
        Ok(Some(site)) => Ok(Json(site.into())),
        Ok(None) => Err((StatusCode::NOT_FOUND, format!("Site '{}' not found", name))),
        Err(e) => Err(api_error(e, "Failed to retrieve site")),
    }
}

async fn create_site(
    State(state): State<AppState>,
    Json(req): Json<CreateSiteRequest>,
) -> Result<(StatusCode, Json<SiteResponse>), ApiError> {
    let site = state
        .create_site
        .execute(req.name, req.target_url, req.active, req.config)
        .await
        .map_err(|e| api_error(e, "Failed to create site"))?;

    Ok((StatusCode::CREATED, Json(site.into())))
}

async fn delete_site(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_site
        .execute(id)
        .await
        .map_err(|e| api_error(e, "Failed to delete site"))?;

    Ok(StatusCode::NO_CONTENT)
}
