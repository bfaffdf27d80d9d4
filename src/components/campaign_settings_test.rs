use super::*;
use crate::net::types::CampaignCounts;

fn campaign(status: CampaignStatus) -> Campaign {
    Campaign::from_counts("1000", "HempStreet 1", status, CampaignCounts::default())
}

#[test]
fn apply_settings_renames_and_trims() {
    let updated = apply_settings(&campaign(CampaignStatus::Active), "  Spring Push ", true);
    assert_eq!(updated.name, "Spring Push");
    assert_eq!(updated.status, CampaignStatus::Active);
    assert_eq!(updated.id, "1000");
}

#[test]
fn apply_settings_keeps_name_when_blank() {
    let updated = apply_settings(&campaign(CampaignStatus::Active), "   ", true);
    assert_eq!(updated.name, "HempStreet 1");
}

#[test]
fn apply_settings_switch_off_deactivates() {
    let updated = apply_settings(&campaign(CampaignStatus::Active), "x", false);
    assert_eq!(updated.status, CampaignStatus::Inactive);
}

#[test]
fn apply_settings_switch_on_activates_draft() {
    let updated = apply_settings(&campaign(CampaignStatus::Draft), "x", true);
    assert_eq!(updated.status, CampaignStatus::Active);
}

#[test]
fn apply_settings_leaves_draft_when_switch_off() {
    let updated = apply_settings(&campaign(CampaignStatus::Draft), "x", false);
    assert_eq!(updated.status, CampaignStatus::Draft);
}

#[test]
fn apply_settings_preserves_counters() {
    let mut original = campaign(CampaignStatus::Inactive);
    original.total_leads = 40;
    original.description = Some("Pilot".to_owned());
    let updated = apply_settings(&original, "Renamed", false);
    assert_eq!(updated.total_leads, 40);
    assert_eq!(updated.description.as_deref(), Some("Pilot"));
}

// =============================================================
// Form
// =============================================================

#[test]
fn form_starts_from_campaign_with_options_off() {
    let form = SettingsForm::from_campaign(&campaign(CampaignStatus::Active));
    assert_eq!(form.name, "HempStreet 1");
    assert!(form.active);
    assert!(!form.no_personalization);
    assert!(!form.autopilot);
    assert_eq!(form.accounts, default_accounts());
}

#[test]
fn form_remove_account_drops_only_that_id() {
    let mut form = SettingsForm::from_campaign(&campaign(CampaignStatus::Draft));
    form.accounts.push(SenderAccount { id: "acct-2".to_owned(), name: "Second".to_owned(), avatar_url: None });
    form.remove_account("acct-1");
    let ids: Vec<_> = form.accounts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["acct-2"]);
    form.remove_account("missing");
    assert_eq!(form.accounts.len(), 1);
}

#[test]
fn form_reset_restores_details_and_keeps_options() {
    let saved = campaign(CampaignStatus::Active);
    let mut form = SettingsForm::from_campaign(&saved);
    form.name = "Edited".to_owned();
    form.active = false;
    form.autopilot = true;
    form.remove_account("acct-1");

    form.reset_details(&saved);
    assert_eq!(form.name, "HempStreet 1");
    assert!(form.active);
    assert!(form.autopilot);
    assert!(form.accounts.is_empty());
}

#[test]
fn form_apply_to_uses_settings_rules() {
    let draft = campaign(CampaignStatus::Draft);
    let mut form = SettingsForm::from_campaign(&draft);
    form.name = " Renamed ".to_owned();
    let updated = form.apply_to(&draft);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.status, CampaignStatus::Draft);
}

#[test]
fn account_initial_falls_back_for_blank_name() {
    let account = SenderAccount { id: "x".to_owned(), name: String::new(), avatar_url: None };
    assert_eq!(account.initial(), "U");
    assert_eq!(default_accounts()[0].initial(), "J");
}
