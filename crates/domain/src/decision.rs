use crate::block_rule::BlockRule;
use crate::errors::DomainError;
use crate::site::Site;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const REASON_SITE_UNAVAILABLE: &str = "Domain not found or inactive";
pub const REASON_RATE_LIMITED: &str = "Rate limit exceeded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Allow,
    Block,
    /// Reserved for interactive verification; never produced by the engine.
    Challenge,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Allow => "ALLOW",
            Action::Block => "BLOCK",
            Action::Challenge => "CHALLENGE",
        }
    }
}

impl FromStr for Action {
    type Err = DomainError;

    /// Accepts only the canonical upper-case forms written to storage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALLOW" => Ok(Action::Allow),
            "BLOCK" => Ok(Action::Block),
            "CHALLENGE" => Ok(Action::Challenge),
            other => Err(DomainError::InvalidRule(format!("Unknown action: {}", other))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-request verdict. Lives only for the duration of one call chain.
#[derive(Debug, Clone)]
pub struct Decision {
    pub action: Action,
    pub reason: String,
    pub site: Option<Site>,
    pub request_id: Option<String>,
}

impl Decision {
    pub fn allow() -> Self {
        Self {
            action: Action::Allow,
            reason: String::new(),
            site: None,
            request_id: None,
        }
    }

    pub fn block(reason: impl Into<String>) -> Self {
        Self {
            action: Action::Block,
            reason: reason.into(),
            site: None,
            request_id: None,
        }
    }

    pub fn blocked_by_rule(rule: &BlockRule) -> Self {
        Self::block(format!("IP blocked by rule: {}", rule.description))
    }

    pub fn site_unavailable() -> Self {
        Self::block(REASON_SITE_UNAVAILABLE)
    }

    pub fn rate_limited() -> Self {
        Self::block(REASON_RATE_LIMITED)
    }

    pub fn with_site(mut self, site: Site) -> Self {
        self.site = Some(site);
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    #[inline]
    pub fn is_blocked(&self) -> bool {
        self.action == Action::Block
    }

    /// Site id for telemetry; 0 when no site was resolved.
    pub fn site_id(&self) -> i64 {
        self.site.as_ref().map(Site::id_or_zero).unwrap_or(0)
    }
}
