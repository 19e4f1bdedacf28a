use axum::http::StatusCode;
use sitegate_domain::DomainError;
use tracing::error;

pub type ApiError = (StatusCode, String);

/// Maps a use-case failure onto the status code the admin API reports.
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidSite(_)
        | DomainError::InvalidRule(_)
        | DomainError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
        DomainError::SiteNotFound(_) | DomainError::RuleNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::SiteConflict(_) => StatusCode::CONFLICT,
        DomainError::DatabaseError(_)
        | DomainError::CounterStoreError(_)
        | DomainError::AnalyticsError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn api_error(err: DomainError, context: &str) -> ApiError {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(error = %err, "{}", context);
    }
    (status, err.to_string())
}
