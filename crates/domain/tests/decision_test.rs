use sitegate_domain::block_rule::{RULE_ACTION_BLOCK, RULE_TYPE_IP};
use sitegate_domain::decision::{REASON_RATE_LIMITED, REASON_SITE_UNAVAILABLE};
use sitegate_domain::{Action, BlockRule, Decision, DomainError, Site};

#[test]
fn test_allow_has_empty_reason() {
    let decision = Decision::allow();

    assert_eq!(decision.action, Action::Allow);
    assert!(decision.reason.is_empty());
    assert!(!decision.is_blocked());
    assert_eq!(decision.site_id(), 0);
}

#[test]
fn test_blocked_by_rule_uses_description() {
    let rule = BlockRule::ip_block("1.2.3.4", "bad actor");
    let decision = Decision::blocked_by_rule(&rule);

    assert!(decision.is_blocked());
    assert_eq!(decision.reason, "IP blocked by rule: bad actor");
}

#[test]
fn test_fixed_block_reasons() {
    assert_eq!(Decision::site_unavailable().reason, REASON_SITE_UNAVAILABLE);
    assert_eq!(Decision::rate_limited().reason, REASON_RATE_LIMITED);
    assert_eq!(REASON_SITE_UNAVAILABLE, "Domain not found or inactive");
    assert_eq!(REASON_RATE_LIMITED, "Rate limit exceeded");
}

#[test]
fn test_with_site_reports_site_id() {
    let mut site = Site::new("example.com", "http://127.0.0.1:3000");
    site.id = Some(42);

    let decision = Decision::allow()
        .with_site(site)
        .with_request_id(Some("req-1".to_string()));

    assert_eq!(decision.site_id(), 42);
    assert_eq!(decision.request_id.as_deref(), Some("req-1"));
}

#[test]
fn test_action_string_forms() {
    assert_eq!(Action::Allow.to_string(), "ALLOW");
    assert_eq!(Action::Block.as_str(), "BLOCK");
    assert_eq!("CHALLENGE".parse::<Action>().unwrap(), Action::Challenge);
    assert_eq!("BLOCK".parse::<Action>().unwrap(), Action::Block);
    assert!(matches!(
        "allow".parse::<Action>(),
        Err(DomainError::InvalidRule(_))
    ));
    assert_eq!(
        serde_json::to_string(&Action::Block).unwrap(),
        "\"BLOCK\""
    );
}

#[test]
fn test_rule_matches_only_ip_block_exact_value() {
    let rule = BlockRule::ip_block("10.0.0.1", "");
    assert!(rule.blocks_ip("10.0.0.1"));
    assert!(!rule.blocks_ip("10.0.0.10"));

    let allow = BlockRule::new(RULE_TYPE_IP, "10.0.0.1", "ALLOW", "");
    assert!(!allow.blocks_ip("10.0.0.1"));

    let other_type = BlockRule::new("COUNTRY", "10.0.0.1", RULE_ACTION_BLOCK, "");
    assert!(!other_type.blocks_ip("10.0.0.1"));
}

#[test]
fn test_rule_validation() {
    assert!(BlockRule::validate("IP", "1.1.1.1", "BLOCK", "desc").is_ok());

    let err = BlockRule::validate("", "1.1.1.1", "BLOCK", "").unwrap_err();
    assert!(err.contains("required"));

    let long = "x".repeat(501);
    assert!(BlockRule::validate("IP", "1.1.1.1", "BLOCK", &long).is_err());
}
