use hickory_server::ServerFuture;
use sitegate_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::info;

const TCP_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn start_dns_server(
    socket_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    info!(bind_address = %socket_addr, "Starting DNS server");

    let udp_socket = UdpSocket::bind(socket_addr).await?;
    info!(protocol = "UDP", "DNS server listening");

    let tcp_listener = TcpListener::bind(socket_addr).await?;
    info!(protocol = "TCP", "DNS server listening");

    let mut server = ServerFuture::new(handler);
    server.register_socket(udp_socket);
    server.register_listener(tcp_listener, TCP_TIMEOUT);

    info!("DNS server ready to accept queries");

    shutdown.cancelled().await;
    info!("DNS server shutting down");
    server.shutdown_gracefully().await?;

    Ok(())
}
