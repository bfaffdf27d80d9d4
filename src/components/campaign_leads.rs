//! Leads belonging to one campaign, shown on the campaign detail page.

use leptos::prelude::*;

use crate::components::lead_slide_over::LeadSlideOver;
use crate::config::DashboardConfig;
use crate::state::leads::{LeadAction, LeadStore};

#[component]
pub fn CampaignLeads(campaign_name: String) -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let leads = expect_context::<RwSignal<LeadStore>>();

    if leads.with_untracked(|s| s.leads().is_empty()) {
        let list = crate::net::api::load_leads(&config);
        leads.update(|s| s.apply(LeadAction::SetLeads(list)));
    }

    let members = move || leads.with(|s| s.in_campaign(&campaign_name).into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card campaign-leads">
            {move || {
                let members = members();
                if members.is_empty() {
                    return view! { <p class="card__empty">"No leads in this campaign yet."</p> }.into_any();
                }
                members
                    .into_iter()
                    .map(|lead| {
                        let id = lead.id.clone();
                        view! {
                            <button
                                class="campaign-leads__row"
                                on:click=move |_| leads.update(|s| s.apply(LeadAction::OpenSlideFor(id.clone())))
                            >
                                <span class="campaign-leads__name">{lead.name}</span>
                                <span>{lead.role.unwrap_or_default()}</span>
                                <span>
                                    {lead.status.map(|status| {
                                        view! {
                                            <span class=format!("badge badge--{}", status.tone())>{status.label()}</span>
                                        }
                                    })}
                                </span>
                                <span>{lead.last_contact.unwrap_or_default()}</span>
                            </button>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>

        <LeadSlideOver/>
    }
}
