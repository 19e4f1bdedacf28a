use sitegate_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!(
        level = %config.logging.level,
        json = config.logging.json,
        dns_port = config.server.dns_port,
        proxy_port = config.server.proxy_port,
        admin_port = config.server.admin_port,
        bind = %config.server.bind_address,
        "Logging initialized"
    );
}
