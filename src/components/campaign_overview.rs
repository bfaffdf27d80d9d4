//! Campaign detail overview: counters, funnel progress, and details.

#[cfg(test)]
#[path = "campaign_overview_test.rs"]
mod campaign_overview_test;

use leptos::prelude::*;

use crate::net::types::Campaign;

/// `YYYY-MM-DD` prefix of an RFC 3339 timestamp.
pub fn short_date(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

#[component]
fn ProgressRow(label: &'static str, percent: u8) -> impl IntoView {
    view! {
        <div class="progress-row">
            <div class="progress-row__label">
                <span>{label}</span>
                <span>{format!("{percent}%")}</span>
            </div>
            <div class="progress">
                <div class="progress__fill" style=format!("width: {percent}%")></div>
            </div>
        </div>
    }
}

#[component]
pub fn CampaignOverview(campaign: Campaign) -> impl IntoView {
    let stats = [
        ("Total Leads", campaign.total_leads),
        ("Request Sent", campaign.request_sent),
        ("Request Accepted", campaign.request_accepted),
        ("Request Replied", campaign.request_replied),
    ];
    let start_date = campaign.start_date.as_deref().map_or_else(|| "-".to_owned(), |d| short_date(d).to_owned());

    view! {
        <div class="campaign-overview">
            <div class="campaign-overview__stats">
                {stats
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">{label}</span>
                                <span class="stat-card__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="campaign-overview__progress">
                <h3>"Campaign Progress"</h3>
                <ProgressRow label="Leads Contacted" percent=campaign.progress.contacted_percent/>
                <ProgressRow label="Acceptance Rate" percent=campaign.progress.acceptance_percent/>
                <ProgressRow label="Reply Rate" percent=campaign.progress.reply_percent/>
            </section>

            <section class="campaign-overview__details">
                <h3>"Campaign Details"</h3>
                <dl>
                    <dt>"Start Date"</dt>
                    <dd>{start_date}</dd>
                    <dt>"Status"</dt>
                    <dd>{campaign.status.label()}</dd>
                    <dt>"Conversion Rate"</dt>
                    <dd>{format!("{:.2}%", campaign.conversion_rate)}</dd>
                </dl>
                {campaign.description.map(|d| view! { <p class="campaign-overview__description">{d}</p> })}
            </section>
        </div>
    }
}
