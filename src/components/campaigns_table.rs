//! Campaign list table.

use leptos::prelude::*;

use crate::net::types::Campaign;

/// Table of campaigns. Clicking a row reports the campaign id.
#[component]
pub fn CampaignsTable(campaigns: Vec<Campaign>, loading: bool, on_row_click: Callback<String>) -> impl IntoView {
    let rows = if loading && campaigns.is_empty() {
        view! {
            <tr>
                <td class="campaigns-table__loading" colspan="5">
                    "Loading campaigns..."
                </td>
            </tr>
        }
        .into_any()
    } else {
        campaigns
            .into_iter()
            .map(|c| {
                let id = c.id.clone();
                let badge = format!("badge badge--{}", c.status.label().to_lowercase());
                view! {
                    <tr class="campaigns-table__row" on:click=move |_| on_row_click.run(id.clone())>
                        <td class="campaigns-table__name">{c.name}</td>
                        <td>
                            <span class=badge>{c.status.label()}</span>
                        </td>
                        <td>{c.total_leads}</td>
                        <td class="campaigns-table__requests">
                            <span title="Sent">{c.request_sent}</span>
                            " / "
                            <span title="Accepted">{c.request_accepted}</span>
                            " / "
                            <span title="Replied">{c.request_replied}</span>
                        </td>
                        <td>{format!("{}%", c.progress.reply_percent)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <table class="campaigns-table">
            <thead>
                <tr>
                    <th>"Campaign Name"</th>
                    <th>"Status"</th>
                    <th>"Total Leads"</th>
                    <th>"Request Status"</th>
                    <th>"Reply Rate"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
