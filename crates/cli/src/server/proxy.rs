use sitegate_infrastructure::proxy::{proxy_router, ProxyState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_proxy_server(
    socket_addr: SocketAddr,
    state: ProxyState,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(socket_addr).await?;

    info!(bind_address = %socket_addr, "Reverse proxy listening");

    // Client addresses feed the rule and rate-limit checks.
    let app = proxy_router(state).into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Reverse proxy stopped");
    Ok(())
}
