//! Campaign detail page with overview, leads, sequence, and settings tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the campaign id from the route. A campaign already in the list is
//! selected by id; anything else is fetched from the API and selected as a
//! snapshot, with a generated mock standing in when the fetch fails. Without
//! a route id the page stays on its loading placeholder.

#[cfg(test)]
#[path = "campaign_detail_test.rs"]
mod campaign_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::campaign_leads::CampaignLeads;
use crate::components::campaign_overview::CampaignOverview;
use crate::components::campaign_sequence::CampaignSequence;
use crate::components::campaign_settings::CampaignSettings;
use crate::config::DashboardConfig;
use crate::net::types::Campaign;
use crate::state::campaigns::{CampaignAction, CampaignStore};

/// Tabs on the detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignTab {
    #[default]
    Overview,
    Leads,
    Sequence,
    Settings,
}

impl CampaignTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Leads, Self::Sequence, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Leads => "Leads",
            Self::Sequence => "Sequence",
            Self::Settings => "Settings",
        }
    }
}

/// How the page gets campaign `id` on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailLoad {
    /// Listed campaign: select it by id.
    Open(String),
    /// Unknown to the store: fetch it.
    Fetch(String),
}

pub fn detail_load(store: &CampaignStore, id: &str) -> DetailLoad {
    if store.find(id).is_some() { DetailLoad::Open(id.to_owned()) } else { DetailLoad::Fetch(id.to_owned()) }
}

/// The selection, but only when it belongs to the routed id.
pub fn routed_campaign(store: &CampaignStore, id: Option<&str>) -> Option<Campaign> {
    let id = id?;
    store.selected_campaign().filter(|c| c.id == id).cloned()
}

#[component]
pub fn CampaignDetailPage() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let campaigns = expect_context::<RwSignal<CampaignStore>>();
    let params = use_params_map();
    let tab = RwSignal::new(CampaignTab::default());

    let campaign_id = move || params.read().get("id");

    Effect::new(move || {
        let Some(id) = campaign_id() else {
            return;
        };
        match campaigns.with_untracked(|s| detail_load(s, &id)) {
            DetailLoad::Open(id) => campaigns.update(|s| s.apply(CampaignAction::Open(id))),
            DetailLoad::Fetch(id) => {
                #[cfg(feature = "csr")]
                {
                    let api_base = config.api_base.clone();
                    leptos::task::spawn_local(async move {
                        let campaign = crate::net::api::load_campaign(&api_base, &id).await;
                        campaigns.update(|s| s.apply(CampaignAction::SetSelected(Some(campaign))));
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&config, id);
                }
            }
        }
    });

    let current = Memo::new(move |_| {
        let id = campaign_id();
        campaigns.with(|s| routed_campaign(s, id.as_deref()))
    });

    let tabs = move || {
        CampaignTab::ALL
            .into_iter()
            .map(|t| {
                view! {
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || tab.get() == t
                        on:click=move |_| tab.set(t)
                    >
                        {t.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="campaign-page">
            {move || match current.get() {
                None => view! { <p class="campaign-page__loading">"Loading campaign\u{2026}"</p> }.into_any(),
                Some(campaign) => {
                    let name = campaign.name.clone();
                    let badge = format!("badge badge--{}", campaign.status.label().to_lowercase());
                    let status = campaign.status.label();
                    view! {
                        <header class="page-header">
                            <div>
                                <h1>{name}</h1>
                                <p class="page-header__subtitle">"Manage and track your campaign performance"</p>
                            </div>
                            <span class=badge>{status}</span>
                        </header>
                        <div class="tabs campaign-page__tabs">{tabs()}</div>
                        <div class="campaign-page__body">
                            {move || match tab.get() {
                                CampaignTab::Overview => {
                                    view! { <CampaignOverview campaign=campaign.clone()/> }.into_any()
                                }
                                CampaignTab::Leads => {
                                    view! { <CampaignLeads campaign_name=campaign.name.clone()/> }.into_any()
                                }
                                CampaignTab::Sequence => {
                                    view! { <CampaignSequence campaign=campaign.clone()/> }.into_any()
                                }
                                CampaignTab::Settings => {
                                    view! { <CampaignSettings campaign=campaign.clone()/> }.into_any()
                                }
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
