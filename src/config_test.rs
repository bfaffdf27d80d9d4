use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = DashboardConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, DashboardConfig::default());
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.page_size, 12);
    assert_eq!(cfg.campaign_count, 20);
    assert_eq!(cfg.lead_count, 24);
    assert_eq!(cfg.mock_delay_ms, 200);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = DashboardConfig::from_lookup(lookup_from(&[
        ("OUTREACH_API_BASE", "https://example.test/api/"),
        ("OUTREACH_PAGE_SIZE", "25"),
        ("OUTREACH_CAMPAIGN_COUNT", "60"),
        ("OUTREACH_LEAD_COUNT", " 8 "),
        ("OUTREACH_MOCK_DELAY_MS", "0"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base, "https://example.test/api");
    assert_eq!(cfg.page_size, 25);
    assert_eq!(cfg.campaign_count, 60);
    assert_eq!(cfg.lead_count, 8);
    assert_eq!(cfg.mock_delay_ms, 0);
}

#[test]
fn from_lookup_rejects_unparsable_numbers() {
    let err = DashboardConfig::from_lookup(lookup_from(&[("OUTREACH_PAGE_SIZE", "twelve")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "OUTREACH_PAGE_SIZE", value: "twelve".to_owned() });
    assert_eq!(err.to_string(), "invalid value for OUTREACH_PAGE_SIZE: \"twelve\"");
}

#[test]
fn from_lookup_rejects_negative_page_size() {
    let err = DashboardConfig::from_lookup(lookup_from(&[("OUTREACH_PAGE_SIZE", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "OUTREACH_PAGE_SIZE", .. }));
}
