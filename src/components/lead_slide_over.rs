//! Slide-over panel showing the selected lead's profile and history.

#[cfg(test)]
#[path = "lead_slide_over_test.rs"]
mod lead_slide_over_test;

use leptos::prelude::*;

use crate::net::types::Lead;
use crate::state::leads::{LeadAction, LeadStore};

/// Keys that dismiss the panel.
pub fn closes_slide(key: &str) -> bool {
    key == "Escape"
}

/// Copy for the timeline when a lead has no interactions.
pub fn empty_history_note(lead: &Lead) -> Option<&'static str> {
    lead.interactions().is_empty().then_some("No history yet")
}

/// Mounted once per lead listing; visible while a lead is selected.
#[component]
pub fn LeadSlideOver() -> impl IntoView {
    let leads = expect_context::<RwSignal<LeadStore>>();

    let is_open = move || leads.get().is_slide_open();
    let selected = move || leads.get().selected_lead().cloned();
    let close = move |_| leads.update(|s| s.apply(LeadAction::CloseSlide));

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if closes_slide(&ev.key()) && leads.with_untracked(LeadStore::is_slide_open) {
                leads.update(|s| s.apply(LeadAction::CloseSlide));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Show when=is_open>
            <div class="slide-over__backdrop" on:click=close></div>
            <aside class="slide-over" role="dialog" aria-label="Lead profile">
                <header class="slide-over__header">
                    <h2>"Lead Profile"</h2>
                    <button class="slide-over__close" title="Close" on:click=close>
                        "\u{2715}"
                    </button>
                </header>
                {move || match selected() {
                    Some(lead) => view! { <LeadProfile lead=lead/> }.into_any(),
                    None => view! { <p class="slide-over__empty">"Lead not found."</p> }.into_any(),
                }}
            </aside>
        </Show>
    }
}

#[component]
fn LeadProfile(lead: Lead) -> impl IntoView {
    let interactions = lead.interactions().to_vec();
    let empty_note = empty_history_note(&lead);
    let badge = lead.status.map(|status| {
        view! { <span class=format!("badge badge--{}", status.tone())>{status.label()}</span> }
    });
    let subtitle = [lead.role.as_deref(), lead.company.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" \u{b7} ");

    view! {
        <div class="lead-profile">
            <div class="lead-profile__header">
                <img class="lead-profile__avatar" src=lead.avatar_url.unwrap_or_default() alt=""/>
                <div>
                    <div class="lead-profile__name">{lead.name}</div>
                    <div class="lead-profile__subtitle">{subtitle}</div>
                    {lead.campaign.map(|c| view! { <div class="lead-profile__campaign">{c}</div> })}
                </div>
                {badge}
            </div>

            <dl class="lead-profile__contact">
                <dt>"Email"</dt>
                <dd>{lead.email.unwrap_or_else(|| "-".to_owned())}</dd>
                <dt>"Last Contact"</dt>
                <dd>{lead.last_contact.unwrap_or_else(|| "-".to_owned())}</dd>
            </dl>

            <h4>"Interaction history"</h4>
            {empty_note.map(|note| view! { <p class="lead-profile__empty">{note}</p> })}
            <ol class="lead-profile__timeline">
                {interactions
                    .into_iter()
                    .map(|it| {
                        let done = it.is_done();
                        view! {
                            <li class="timeline-item">
                                <span class="timeline-item__dot" class:timeline-item__dot--done=done></span>
                                <div class="timeline-item__body">
                                    <div class="timeline-item__title">{it.title}</div>
                                    {it.text.map(|t| view! { <div class="timeline-item__text">{t}</div> })}
                                    {it.time.map(|t| view! { <div class="timeline-item__time">{t}</div> })}
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
