use axum::{extract::State, response::Json, routing::get, Router};

use crate::{dto::TelemetryStatsResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/telemetry/stats", get(get_telemetry_stats))
}

async fn get_telemetry_stats(State(state): State<AppState>) -> Json<TelemetryStatsResponse> {
    let settings = state.telemetry.settings();

    Json(TelemetryStatsResponse {
        counters: state.telemetry.stats(),
        queue_capacity: settings.queue_capacity,
        batch_size: settings.batch_size,
        flush_interval_ms: settings.flush_interval.as_millis() as u64,
        closed: state.telemetry.is_closed(),
    })
}
