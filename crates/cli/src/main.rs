//! # Sitegate
//!
//! Authoritative DNS, reverse proxy and admin API sharing one decision engine.

use clap::Parser;
use sitegate_domain::CliOverrides;
use sitegate_jobs::{CounterSweepJob, JobRunner};
use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "sitegate")]
#[command(version)]
#[command(about = "Edge gateway: authoritative DNS and reverse proxy with IP rules and rate limiting")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address for every listener
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Reverse proxy port
    #[arg(short = 'p', long)]
    proxy_port: Option<u16>,

    /// Admin API port
    #[arg(short = 'a', long)]
    admin_port: Option<u16>,

    /// IPv4 address returned for site names
    #[arg(long)]
    proxy_ip: Option<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            dns_port: self.dns_port,
            proxy_port: self.proxy_port,
            admin_port: self.admin_port,
            proxy_ip: self.proxy_ip.clone(),
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Sitegate starting");

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool.clone());
    let services = di::Services::new(&repos, &config);
    let use_cases = di::UseCases::new(&repos);

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_counter_sweep(
            CounterSweepJob::new(repos.counters.clone())
                .with_interval(config.rate_limit.sweep_interval_secs)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let dns_handler = services.dns_handler(&repos, &config)?;
    let dns_addr = config.server.socket_addr(config.server.dns_port)?;
    let dns_task = spawn_server(
        "dns",
        server::start_dns_server(dns_addr, dns_handler, shutdown.clone()),
        shutdown.clone(),
    );

    let proxy_addr = config.server.socket_addr(config.server.proxy_port)?;
    let proxy_task = spawn_server(
        "proxy",
        server::start_proxy_server(proxy_addr, services.proxy_state()?, shutdown.clone()),
        shutdown.clone(),
    );

    let admin_addr = config.server.socket_addr(config.server.admin_port)?;
    let admin_task = spawn_server(
        "admin",
        server::start_admin_server(
            admin_addr,
            use_cases.app_state(services.telemetry.clone()),
            config.server.cors_allowed_origins.clone(),
            shutdown.clone(),
        ),
        shutdown.clone(),
    );

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!(error = %e, "Failed to listen for shutdown signal");
            }
            info!("Shutdown signal received");
        }
        _ = shutdown.cancelled() => {
            error!("A server stopped unexpectedly, shutting down");
        }
    }

    shutdown.cancel();

    for task in [dns_task, proxy_task, admin_task] {
        if let Err(e) = task.await {
            error!(error = %e, "Server task panicked");
        }
    }

    services.telemetry.shutdown().await;
    let stats = services.telemetry.stats();
    info!(
        flushed_events = stats.flushed_events,
        dropped = stats.dropped,
        lost_events = stats.lost_events,
        "Telemetry drained"
    );

    pool.close().await;
    info!("Sitegate stopped");

    Ok(())
}

/// Runs a listener; a failure cancels `shutdown` so the whole process stops.
fn spawn_server<F>(name: &'static str, server: F, shutdown: CancellationToken) -> JoinHandle<()>
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = server.await {
            error!(server = name, error = %e, "Server exited with error");
            shutdown.cancel();
        }
    })
}
