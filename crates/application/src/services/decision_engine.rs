use sitegate_domain::net::strip_port;
use sitegate_domain::{Decision, DomainError};
use std::sync::Arc;
use tracing::{instrument, warn};

use super::RateLimiter;
use crate::ports::{BlockRuleRepository, SiteRepository};

/// Composes site resolution, IP rules and rate limiting into one decision.
///
/// Holds no mutable state of its own; every call reads the current sites and
/// rules from the repositories, so it is safe to share across all request
/// handlers without locking.
pub struct DecisionEngine {
    sites: Arc<dyn SiteRepository>,
    rules: Arc<dyn BlockRuleRepository>,
    rate_limiter: RateLimiter,
}

impl DecisionEngine {
    pub fn new(
        sites: Arc<dyn SiteRepository>,
        rules: Arc<dyn BlockRuleRepository>,
        rate_limiter: RateLimiter,
    ) -> Self {
        Self {
            sites,
            rules,
            rate_limiter,
        }
    }

    /// Protocol-agnostic check for a client of an already resolved site.
    ///
    /// Rules are evaluated before the rate limiter, so a blocked IP never
    /// touches its counter. Rule and counter store failures fail open.
    #[instrument(skip(self), level = "debug")]
    pub async fn analyze_ip(&self, client_ip: &str, site_id: i64, site_name: &str) -> Decision {
        match self.rules.get_all().await {
            Ok(rules) => {
                if let Some(rule) = rules.iter().find(|r| r.blocks_ip(client_ip)) {
                    return Decision::blocked_by_rule(rule);
                }
            }
            Err(e) => {
                warn!(error = %e, site = %site_name, "Rule lookup failed, skipping rule check");
            }
        }

        match self.rate_limiter.check(site_id, client_ip).await {
            Ok(true) => Decision::allow(),
            Ok(false) => Decision::rate_limited(),
            Err(e) => {
                warn!(error = %e, site = %site_name, client = %client_ip, "Rate limit check failed, allowing request");
                Decision::allow()
            }
        }
    }

    /// HTTP entry point: resolves the site from the Host header first.
    ///
    /// Only a failed site lookup is returned as an error. Unknown or inactive
    /// sites are blocked without consulting rules or counters.
    #[instrument(skip(self), level = "debug")]
    pub async fn analyze(&self, host: &str, remote_addr: &str) -> Result<Decision, DomainError> {
        let site_name = strip_port(host);

        let site = match self.sites.get_by_name(site_name).await? {
            Some(site) if site.active => site,
            _ => return Ok(Decision::site_unavailable()),
        };

        let client_ip = strip_port(remote_addr);
        let decision = self
            .analyze_ip(client_ip, site.id_or_zero(), &site.name)
            .await;

        Ok(decision.with_site(site))
    }
}
