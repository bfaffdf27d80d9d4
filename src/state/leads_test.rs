use super::*;
use crate::util::mock::make_leads;

fn lead(id: &str, name: &str) -> Lead {
    Lead::new(id, name)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_store_is_closed_and_idle() {
    let store = LeadStore::default();
    assert!(store.leads().is_empty());
    assert_eq!(store.selected_lead_id(), None);
    assert!(!store.is_slide_open());
    assert_eq!(store.filters(), &LeadFilters::default());
    assert!(!store.loading());
}

// =============================================================
// Collection
// =============================================================

#[test]
fn set_leads_replaces_and_append_concatenates() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(vec![lead("1", "A")]));
    store.apply(LeadAction::SetLeads(vec![lead("2", "B"), lead("3", "C")]));
    store.apply(LeadAction::AppendLeads(vec![lead("2", "B again")]));
    let ids: Vec<&str> = store.leads().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["2", "3", "2"]);
}

#[test]
fn add_or_update_prepends_new_id() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(3)));
    store.apply(LeadAction::AddOrUpdate(lead("new", "Newcomer")));
    assert_eq!(store.leads().len(), 4);
    assert_eq!(store.leads()[0].id, "new");
    assert_eq!(store.leads()[1].id, "1000");
}

#[test]
fn add_or_update_merges_only_touched_fields() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(3)));
    let before = store.leads()[1].clone();

    store.apply(LeadAction::AddOrUpdate(Lead {
        status: Some(LeadStatus::Converted),
        email: Some("changed@example.com".to_owned()),
        ..Lead::new("1001", "")
    }));

    let after = &store.leads()[1];
    assert_eq!(store.leads().len(), 3);
    assert_eq!(after.status, Some(LeadStatus::Converted));
    assert_eq!(after.email.as_deref(), Some("changed@example.com"));
    assert_eq!(after.name, before.name);
    assert_eq!(after.role, before.role);
    assert_eq!(after.company, before.company);
    assert_eq!(after.campaign, before.campaign);
    assert_eq!(after.last_contact, before.last_contact);
    assert_eq!(after.avatar_url, before.avatar_url);
    assert_eq!(after.interactions, before.interactions);
}

#[test]
fn remove_by_id_drops_matches() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(vec![lead("1", "A"), lead("2", "B"), lead("1", "A dup")]));
    store.apply(LeadAction::RemoveById("1".to_owned()));
    let ids: Vec<&str> = store.leads().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["2"]);
}

#[test]
fn remove_by_id_of_open_lead_closes_slide() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(3)));
    store.apply(LeadAction::OpenSlideFor("1001".to_owned()));
    store.apply(LeadAction::RemoveById("1001".to_owned()));
    assert!(!store.is_slide_open());
}

#[test]
fn remove_by_id_of_other_lead_keeps_slide() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(3)));
    store.apply(LeadAction::OpenSlideFor("1001".to_owned()));
    store.apply(LeadAction::RemoveById("1002".to_owned()));
    assert_eq!(store.selected_lead_id(), Some("1001"));
}

// =============================================================
// Slide-over
// =============================================================

#[test]
fn open_then_close_slide_clears_selection_and_visibility() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(24)));

    store.apply(LeadAction::OpenSlideFor("1005".to_owned()));
    assert_eq!(store.selected_lead_id(), Some("1005"));
    assert!(store.is_slide_open());
    assert_eq!(store.selected_lead().map(|l| l.name.as_str()), Some("Person 5"));

    store.apply(LeadAction::CloseSlide);
    assert_eq!(store.selected_lead_id(), None);
    assert!(!store.is_slide_open());
    assert!(store.selected_lead().is_none());
}

#[test]
fn slide_for_unknown_id_is_open_without_lead() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::OpenSlideFor("missing".to_owned()));
    assert!(store.is_slide_open());
    assert!(store.selected_lead().is_none());
}

// =============================================================
// Filters
// =============================================================

#[test]
fn query_matches_name_email_or_company() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(6)));

    store.apply(LeadAction::SetFilterQuery("person3@".to_owned()));
    assert_eq!(store.filtered().len(), 1);

    store.apply(LeadAction::SetFilterQuery("  DIGI ".to_owned()));
    let ids: Vec<&str> = store.filtered().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["1001", "1004"]);

    store.apply(LeadAction::SetFilterQuery("person 2".to_owned()));
    assert_eq!(store.filtered().len(), 1);
}

#[test]
fn status_filter_combines_with_query() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(12)));
    store.apply(LeadAction::SetFilterStatus(Some(LeadStatus::Responded)));
    assert_eq!(store.filtered().len(), 3);

    store.apply(LeadAction::SetFilterQuery("gynoveda".to_owned()));
    let ids: Vec<&str> = store.filtered().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["1006"]);
}

#[test]
fn status_filter_excludes_leads_without_status() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(vec![lead("1", "No status")]));
    store.apply(LeadAction::SetFilterStatus(Some(LeadStatus::Pending)));
    assert!(store.filtered().is_empty());
}

#[test]
fn reset_filters_matches_everything_again() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(8)));
    store.apply(LeadAction::SetFilterQuery("zzz".to_owned()));
    store.apply(LeadAction::SetFilterStatus(Some(LeadStatus::DoNotContact)));
    assert!(store.filtered().is_empty());

    store.apply(LeadAction::ResetFilters);
    assert_eq!(store.filtered().len(), 8);
}

#[test]
fn set_loading_toggles_flag() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLoading(true));
    assert!(store.loading());
}

// =============================================================
// Campaign membership
// =============================================================

#[test]
fn in_campaign_matches_name_and_ignores_filters() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(8)));
    store.apply(LeadAction::SetFilterQuery("no such lead".to_owned()));

    let members = store.in_campaign(" campaign b ");
    let ids: Vec<_> = members.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["1001", "1005"]);
    assert!(store.filtered().is_empty());
}

#[test]
fn in_campaign_is_empty_for_unknown_campaign() {
    let mut store = LeadStore::default();
    store.apply(LeadAction::SetLeads(make_leads(8)));
    store.apply(LeadAction::AddOrUpdate(lead("9", "No Campaign")));
    assert!(store.in_campaign("HempStreet 1").is_empty());
}
