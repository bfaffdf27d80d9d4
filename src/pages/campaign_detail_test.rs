use super::*;
use crate::net::types::{CampaignCounts, CampaignStatus};

fn campaign(id: &str) -> Campaign {
    Campaign::from_counts(id, format!("Brand {id}"), CampaignStatus::Active, CampaignCounts::default())
}

fn store_with(ids: &[&str]) -> CampaignStore {
    let mut store = CampaignStore::default();
    store.apply(CampaignAction::SetCampaigns(ids.iter().map(|id| campaign(id)).collect()));
    store
}

#[test]
fn tabs_are_listed_in_display_order() {
    let labels: Vec<_> = CampaignTab::ALL.into_iter().map(CampaignTab::label).collect();
    assert_eq!(labels, ["Overview", "Leads", "Sequence", "Settings"]);
    assert_eq!(CampaignTab::default(), CampaignTab::Overview);
}

#[test]
fn listed_campaign_is_opened_by_id() {
    let store = store_with(&["1000", "1001"]);
    assert_eq!(detail_load(&store, "1001"), DetailLoad::Open("1001".to_owned()));
}

#[test]
fn unlisted_campaign_is_fetched() {
    let store = store_with(&["1000"]);
    assert_eq!(detail_load(&store, "77"), DetailLoad::Fetch("77".to_owned()));
    assert_eq!(detail_load(&CampaignStore::default(), "1000"), DetailLoad::Fetch("1000".to_owned()));
}

#[test]
fn routed_campaign_requires_route_id() {
    let mut store = store_with(&["1000"]);
    store.apply(CampaignAction::Open("1000".to_owned()));
    assert_eq!(routed_campaign(&store, None), None);
    assert_eq!(routed_campaign(&store, Some("1000")).map(|c| c.id), Some("1000".to_owned()));
}

#[test]
fn routed_campaign_hides_stale_selection() {
    let mut store = store_with(&["1000"]);
    store.apply(CampaignAction::SetSelected(Some(campaign("55"))));
    assert_eq!(routed_campaign(&store, Some("1000")), None);
    assert_eq!(routed_campaign(&store, Some("55")), Some(campaign("55")));
}

#[test]
fn routed_campaign_ignores_unrelated_store_changes() {
    let mut store = store_with(&["1000"]);
    store.apply(CampaignAction::Open("1000".to_owned()));
    let before = routed_campaign(&store, Some("1000"));
    store.apply(CampaignAction::SetLoading(true));
    store.apply(CampaignAction::SetQuery("x".to_owned()));
    assert_eq!(routed_campaign(&store, Some("1000")), before);
}
