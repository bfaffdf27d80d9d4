//! Campaign message sequence editor with previews and follow-up schedules.

use leptos::prelude::*;

use crate::net::types::{Campaign, Lead};
use crate::state::leads::LeadStore;
use crate::util::sequence::{
    DelayUnit, MessageKind, PERSONALIZATION_FIELDS, SendAfter, SequenceStep, default_steps, render_template, unknown_tokens,
};

/// Edit step `index` in place; out-of-range indexes are ignored.
fn edit_step(steps: RwSignal<Vec<SequenceStep>>, index: usize, edit: impl FnOnce(&mut SequenceStep)) {
    steps.update(|steps| {
        if let Some(step) = steps.get_mut(index) {
            edit(step);
        }
    });
}

/// Lead used for previews when no leads are loaded.
fn sample_lead() -> Lead {
    Lead { role: Some("Manager".to_owned()), ..Lead::new("preview", "Jordan Smith") }
}

#[component]
pub fn CampaignSequence(campaign: Campaign) -> impl IntoView {
    let leads = expect_context::<RwSignal<LeadStore>>();
    let steps = RwSignal::new(default_steps());
    let preview = RwSignal::new(None::<usize>);
    let campaign_id = StoredValue::new(campaign.id);

    let preview_lead = move || leads.with(|s| s.leads().first().cloned()).unwrap_or_else(sample_lead);

    let cards = default_steps()
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let kind = step.kind;
            let template = move || steps.with(|s| s.get(index).map(|s| s.template.clone()).unwrap_or_default());

            let fields = (kind == MessageKind::Request).then(|| {
                view! {
                    <ul class="sequence-card__fields">
                        {PERSONALIZATION_FIELDS
                            .iter()
                            .map(|field| {
                                view! {
                                    <li>
                                        <code>{field.token}</code>
                                        " \u{2013} "
                                        {field.label}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
            });

            let schedule_controls = step.schedule.map(|initial| {
                let after_options = kind
                    .after_options()
                    .iter()
                    .map(|after| {
                        let is_selected = *after == initial.after;
                        view! {
                            <option value=after.value() selected=is_selected>
                                {after.label()}
                            </option>
                        }
                    })
                    .collect_view();
                let unit_options = DelayUnit::ALL
                    .into_iter()
                    .map(|unit| {
                        let is_selected = unit == initial.unit;
                        view! {
                            <option value=unit.value() selected=is_selected>
                                {unit.label()}
                            </option>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="sequence-card__schedule">
                        <span>"Send"</span>
                        <input
                            type="number"
                            min="0"
                            value=initial.amount.to_string()
                            on:input=move |ev| {
                                if let Ok(amount) = event_target_value(&ev).parse::<u32>() {
                                    edit_step(steps, index, |s| {
                                        if let Some(schedule) = s.schedule.as_mut() {
                                            schedule.amount = amount;
                                        }
                                    });
                                }
                            }
                        />
                        <select on:change=move |ev| {
                            if let Some(unit) = DelayUnit::from_value(&event_target_value(&ev)) {
                                edit_step(steps, index, |s| {
                                    if let Some(schedule) = s.schedule.as_mut() {
                                        schedule.unit = unit;
                                    }
                                });
                            }
                        }>{unit_options}</select>
                        <select on:change=move |ev| {
                            if let Some(after) = SendAfter::from_value(&event_target_value(&ev)) {
                                edit_step(steps, index, |s| {
                                    if let Some(schedule) = s.schedule.as_mut() {
                                        schedule.after = after;
                                    }
                                });
                            }
                        }>{after_options}</select>
                        <span class="sequence-card__summary">
                            {move || {
                                steps.with(|s| s.get(index).and_then(|s| s.schedule).map(|s| s.to_string()))
                            }}
                        </span>
                    </div>
                }
            });

            let preview_text = move || {
                (preview.get() == Some(index)).then(|| {
                    let text = template();
                    let unknown = unknown_tokens(&text).join(", ");
                    let rendered = render_template(&text, &preview_lead());
                    view! {
                        <div class="sequence-card__preview">
                            <p>{rendered}</p>
                            {(!unknown.is_empty())
                                .then(|| view! { <p class="sequence-card__warning">{format!("Unknown fields: {unknown}")}</p> })}
                        </div>
                    }
                })
            };

            let on_save = move |_| {
                let length = template().len();
                campaign_id.with_value(|id| log::info!("campaign {id}: saved {} ({length} chars)", kind.label()));
            };

            view! {
                <section class="card sequence-card">
                    <h3>{kind.label()}</h3>
                    {fields}
                    <textarea
                        placeholder=kind.placeholder()
                        prop:value=template
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            edit_step(steps, index, |s| s.template = text);
                        }
                    ></textarea>
                    {schedule_controls}
                    {preview_text}
                    <div class="sequence-card__actions">
                        <button
                            class="btn"
                            on:click=move |_| preview.update(|p| *p = if *p == Some(index) { None } else { Some(index) })
                        >
                            "Preview"
                        </button>
                        <button class="btn btn--primary" on:click=on_save>
                            "Save"
                        </button>
                    </div>
                </section>
            }
        })
        .collect_view();

    view! {
        <div class="campaign-sequence">
            <h2>"Message Sequence"</h2>
            {cards}
        </div>
    }
}
