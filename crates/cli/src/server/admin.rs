use axum::http::HeaderValue;
use axum::Router;
use sitegate_api::{create_api_routes, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_admin_server(
    socket_addr: SocketAddr,
    state: AppState,
    cors_allowed_origins: Vec<String>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let app = Router::new()
        .nest("/api", create_api_routes(state))
        .layer(cors_layer(&cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(socket_addr).await?;
    info!(bind_address = %socket_addr, "Admin API listening on http://{}/api", socket_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Admin API stopped");
    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(parsed)
}
