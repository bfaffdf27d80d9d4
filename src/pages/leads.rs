//! Leads page: searchable, status-filtered lead list with a slide-over.

use leptos::prelude::*;

use crate::components::lead_slide_over::LeadSlideOver;
use crate::config::DashboardConfig;
use crate::net::types::LeadStatus;
use crate::state::leads::{LeadAction, LeadStore};

#[component]
pub fn LeadsPage() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let leads = expect_context::<RwSignal<LeadStore>>();

    if leads.with_untracked(|s| s.leads().is_empty()) {
        let list = crate::net::api::load_leads(&config);
        leads.update(|s| s.apply(LeadAction::SetLeads(list)));
    }

    let on_status_change = move |ev| {
        // The "All" option has an empty value, which parses to no filter.
        let status = event_target_value(&ev).parse::<LeadStatus>().ok();
        leads.update(|s| s.apply(LeadAction::SetFilterStatus(status)));
    };

    let status_options = LeadStatus::ALL
        .into_iter()
        .map(|status| {
            view! {
                <option
                    value=status.label()
                    selected=move || leads.get().filters().status == Some(status)
                >
                    {status.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="leads-page">
            <header class="page-header">
                <h1>"Leads"</h1>
                <div class="leads-page__filters">
                    <input
                        type="search"
                        placeholder="Search..."
                        prop:value=move || leads.get().filters().query.clone()
                        on:input=move |ev| {
                            leads.update(|s| s.apply(LeadAction::SetFilterQuery(event_target_value(&ev))));
                        }
                    />
                    <select on:change=on_status_change>
                        <option value="" selected=move || leads.get().filters().status.is_none()>
                            "All"
                        </option>
                        {status_options}
                    </select>
                </div>
            </header>

            <div class="card leads-table">
                <div class="leads-table__head">
                    <span>"Lead Name / Contact"</span>
                    <span>"Email"</span>
                    <span>"Company"</span>
                    <span>"Campaign"</span>
                    <span>"Status"</span>
                    <span>"Last Contact"</span>
                </div>
                {move || {
                    leads
                        .get()
                        .filtered()
                        .into_iter()
                        .cloned()
                        .map(|lead| {
                            let id = lead.id.clone();
                            view! {
                                <button
                                    class="leads-table__row"
                                    on:click=move |_| leads.update(|s| s.apply(LeadAction::OpenSlideFor(id.clone())))
                                >
                                    <span class="leads-table__who">
                                        <img class="leads-table__avatar" src=lead.avatar_url.unwrap_or_default() alt=""/>
                                        <span>
                                            <span class="leads-table__name">{lead.name}</span>
                                            <span class="leads-table__role">{lead.role.unwrap_or_default()}</span>
                                        </span>
                                    </span>
                                    <span>{lead.email.unwrap_or_default()}</span>
                                    <span>{lead.company.unwrap_or_default()}</span>
                                    <span>{lead.campaign.unwrap_or_default()}</span>
                                    <span>
                                        {lead.status.map(|status| {
                                            view! {
                                                <span class=format!("badge badge--{}", status.tone())>
                                                    {status.label()}
                                                </span>
                                            }
                                        })}
                                    </span>
                                    <span class="leads-table__last-contact">{lead.last_contact.unwrap_or_default()}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>

        <LeadSlideOver/>
    }
}
