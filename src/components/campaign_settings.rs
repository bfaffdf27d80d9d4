//! Campaign settings form: details, sending options, sender accounts, and the
//! danger zone.
//!
//! Saving writes the edited campaign back through the store's `Save` action,
//! which updates both the selection and the matching list entry. The sending
//! options and account list live only in the form. Deleting is not supported
//! and only logs the request.

#[cfg(test)]
#[path = "campaign_settings_test.rs"]
mod campaign_settings_test;

use leptos::prelude::*;

use crate::net::types::{Campaign, CampaignStatus};
use crate::state::campaigns::{CampaignAction, CampaignStore};

const SAVE_FEEDBACK_MS: u32 = 300;

/// Apply form values to a campaign.
///
/// A blank name keeps the current one. Turning the switch off deactivates an
/// active campaign but leaves a draft as a draft.
pub fn apply_settings(campaign: &Campaign, name: &str, active: bool) -> Campaign {
    let mut updated = campaign.clone();
    let name = name.trim();
    if !name.is_empty() {
        name.clone_into(&mut updated.name);
    }
    updated.status = match (active, campaign.status) {
        (true, _) => CampaignStatus::Active,
        (false, CampaignStatus::Draft) => CampaignStatus::Draft,
        (false, _) => CampaignStatus::Inactive,
    };
    updated
}

/// A sender account assigned to the campaign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SenderAccount {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl SenderAccount {
    /// First letter of the name, for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name.chars().next().map_or_else(|| "U".to_owned(), |c| c.to_string())
    }
}

/// Accounts a new form starts with.
pub fn default_accounts() -> Vec<SenderAccount> {
    vec![SenderAccount { id: "acct-1".to_owned(), name: "Jivesh Lakhani".to_owned(), avatar_url: None }]
}

/// Editable settings form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsForm {
    pub name: String,
    pub active: bool,
    /// Send general request templates instead of personalized ones.
    pub no_personalization: bool,
    /// Let the system manage account assignments.
    pub autopilot: bool,
    pub accounts: Vec<SenderAccount>,
}

impl SettingsForm {
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            name: campaign.name.clone(),
            active: campaign.status == CampaignStatus::Active,
            no_personalization: false,
            autopilot: false,
            accounts: default_accounts(),
        }
    }

    pub fn remove_account(&mut self, id: &str) {
        self.accounts.retain(|a| a.id != id);
    }

    /// Discard unsaved detail edits. Options and accounts are kept.
    pub fn reset_details(&mut self, saved: &Campaign) {
        saved.name.clone_into(&mut self.name);
        self.active = saved.status == CampaignStatus::Active;
    }

    /// The campaign to save.
    pub fn apply_to(&self, campaign: &Campaign) -> Campaign {
        apply_settings(campaign, &self.name, self.active)
    }
}

#[component]
pub fn CampaignSettings(campaign: Campaign) -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignStore>>();

    let form = RwSignal::new(SettingsForm::from_campaign(&campaign));
    let saved = StoredValue::new(campaign);
    let saving = move || campaigns.get().loading();

    let on_save = move |_| {
        let payload = form.with_untracked(|f| f.apply_to(&saved.get_value()));
        saved.set_value(payload.clone());
        campaigns.update(|s| {
            s.apply(CampaignAction::SetLoading(true));
            s.apply(CampaignAction::Save(payload));
        });

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::simulate_latency(SAVE_FEEDBACK_MS).await;
                campaigns.update(|s| s.apply(CampaignAction::SetLoading(false)));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = SAVE_FEEDBACK_MS;
            campaigns.update(|s| s.apply(CampaignAction::SetLoading(false)));
        }
    };

    let on_reset = move |_| saved.with_value(|current| form.update(|f| f.reset_details(current)));

    let on_delete = move |_| {
        saved.with_value(|c| log::warn!("campaign {}: delete requested, deleting campaigns is not supported", c.id));
    };

    let accounts = move || {
        form.with(|f| f.accounts.clone())
            .into_iter()
            .map(|account| {
                let id = account.id.clone();
                let initial = account.initial();
                let remove_label = format!("Remove {}", account.name);
                view! {
                    <li class="account-chip">
                        {match account.avatar_url {
                            Some(url) => view! { <img class="account-chip__avatar" src=url alt=""/> }.into_any(),
                            None => view! { <span class="account-chip__avatar">{initial}</span> }.into_any(),
                        }}
                        <span>{account.name}</span>
                        <button
                            class="account-chip__remove"
                            aria-label=remove_label
                            on:click=move |_| form.update(|f| f.remove_account(&id))
                        >
                            "\u{d7}"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="campaign-settings">
            <section class="card">
                <h3>"Campaign Details"</h3>
                <label class="campaign-settings__field">
                    <span>"Campaign Name"</span>
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>

                <label class="campaign-settings__field campaign-settings__field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.active)
                        on:change=move |ev| form.update(|f| f.active = event_target_checked(&ev))
                    />
                    <span>{move || if form.with(|f| f.active) { "Active" } else { "Inactive" }}</span>
                </label>

                <label class="campaign-settings__field campaign-settings__field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.no_personalization)
                        on:change=move |ev| form.update(|f| f.no_personalization = event_target_checked(&ev))
                    />
                    <span>"Request without personalization"</span>
                    <small>"When enabled, send general request templates"</small>
                </label>
            </section>

            <section class="card">
                <label class="campaign-settings__field campaign-settings__field--inline">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.autopilot)
                        on:change=move |ev| form.update(|f| f.autopilot = event_target_checked(&ev))
                    />
                    <span>"AutoPilot Mode"</span>
                    <small>"Let the system automatically manage account assignments"</small>
                </label>
                <h4>"Selected Accounts"</h4>
                <ul class="campaign-settings__accounts">{accounts}</ul>
                <Show when=move || form.with(|f| f.accounts.is_empty())>
                    <p class="card__empty">"No accounts selected."</p>
                </Show>
            </section>

            <section class="card card--danger">
                <div>
                    <h3>"Danger Zone"</h3>
                    <p>"Irreversible and destructive actions"</p>
                </div>
                <button class="btn btn--danger" on:click=on_delete disabled=saving>
                    "Delete Campaign"
                </button>
            </section>

            <div class="campaign-settings__actions">
                <button class="btn" on:click=on_reset>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=on_save disabled=saving>
                    {move || if saving() { "Saving..." } else { "Save changes" }}
                </button>
            </div>
        </div>
    }
}
