use super::Repositories;
use anyhow::Context;
use sitegate_application::services::{
    DecisionEngine, RateLimiter, TelemetryPipeline, TelemetrySettings,
};
use sitegate_domain::Config;
use sitegate_infrastructure::dns::DnsServerHandler;
use sitegate_infrastructure::proxy::{ProxyState, UpstreamForwarder};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::info;

/// Shared services: one engine and one telemetry pipeline for every front-end.
pub struct Services {
    pub engine: Arc<DecisionEngine>,
    pub telemetry: Arc<TelemetryPipeline>,
}

impl Services {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let limiter = RateLimiter::from_config(repos.counters.clone(), &config.rate_limit);
        let engine = Arc::new(DecisionEngine::new(
            repos.sites.clone(),
            repos.rules.clone(),
            limiter,
        ));

        let settings = TelemetrySettings::from(&config.telemetry);
        let telemetry = Arc::new(TelemetryPipeline::start(repos.analytics.clone(), settings));

        info!(
            rate_limit = config.rate_limit.limit,
            window_secs = config.rate_limit.window_secs,
            queue_capacity = settings.queue_capacity,
            batch_size = settings.batch_size,
            "Services initialized"
        );

        Self { engine, telemetry }
    }

    pub fn dns_handler(
        &self,
        repos: &Repositories,
        config: &Config,
    ) -> anyhow::Result<DnsServerHandler> {
        let proxy_ip: Ipv4Addr = config
            .server
            .proxy_ip
            .parse()
            .with_context(|| format!("Invalid proxy_ip '{}'", config.server.proxy_ip))?;

        Ok(DnsServerHandler::new(
            repos.sites.clone(),
            repos.records.clone(),
            self.engine.clone(),
            self.telemetry.clone(),
            proxy_ip,
        ))
    }

    pub fn proxy_state(&self) -> anyhow::Result<ProxyState> {
        let forwarder = UpstreamForwarder::new().context("Failed to build upstream HTTP client")?;
        Ok(ProxyState {
            engine: self.engine.clone(),
            telemetry: self.telemetry.clone(),
            forwarder,
        })
    }
}
