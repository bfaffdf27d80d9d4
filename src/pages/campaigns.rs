//! Campaign list page with status tabs, search, and "load more" paging.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Populates the campaign store from the mock feed the first
//! time it mounts, then renders the store's filtered, cumulatively paged view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::campaigns_table::CampaignsTable;
use crate::config::DashboardConfig;
use crate::net::types::CampaignStatus;
use crate::state::campaigns::{CampaignAction, CampaignStore};

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let config = expect_context::<DashboardConfig>();
    let campaigns = expect_context::<RwSignal<CampaignStore>>();
    let navigate = use_navigate();

    // Keep already-loaded (and possibly edited) campaigns when navigating back.
    if campaigns.with_untracked(|s| s.campaigns().is_empty()) {
        campaigns.update(|s| s.apply(CampaignAction::SetLoading(true)));

        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let list = crate::net::api::load_campaigns(&config).await;
                campaigns.update(|s| {
                    s.apply(CampaignAction::SetCampaigns(list));
                    s.apply(CampaignAction::SetLoading(false));
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let list = crate::util::mock::make_campaigns(
                &mut rand::rng(),
                crate::util::mock::now_utc(),
                config.campaign_count,
            );
            campaigns.update(|s| {
                s.apply(CampaignAction::SetCampaigns(list));
                s.apply(CampaignAction::SetLoading(false));
            });
        }
    }

    let on_row_click = Callback::new(move |id: String| {
        campaigns.update(|s| s.apply(CampaignAction::Open(id.clone())));
        navigate(&format!("/campaign/{id}"), NavigateOptions::default());
    });

    let status_filter = move || campaigns.get().status_filter();
    let tabs = std::iter::once(None)
        .chain(CampaignStatus::ALL.into_iter().map(Some))
        .map(|status| {
            let label = status.map_or("All Campaigns", CampaignStatus::label);
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || status_filter() == status
                    on:click=move |_| campaigns.update(|s| s.apply(CampaignAction::SetStatusFilter(status)))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="campaigns-page">
            <header class="page-header">
                <div>
                    <h1>"Campaigns"</h1>
                    <p class="page-header__subtitle">"Manage your campaigns and track their performance."</p>
                </div>
            </header>

            <div class="campaigns-page__controls">
                <div class="tabs">{tabs}</div>
                <input
                    class="campaigns-page__search"
                    type="search"
                    placeholder="Search campaigns..."
                    prop:value=move || campaigns.get().query().to_owned()
                    on:input=move |ev| {
                        campaigns.update(|s| s.apply(CampaignAction::SetQuery(event_target_value(&ev))));
                    }
                />
            </div>

            <div class="card">
                {move || {
                    let store = campaigns.get();
                    let visible = store.visible().into_iter().cloned().collect::<Vec<_>>();
                    view! { <CampaignsTable campaigns=visible loading=store.loading() on_row_click=on_row_click/> }
                }}

                <Show when=move || campaigns.get().has_more()>
                    <div class="card__footer">
                        <button class="btn" on:click=move |_| campaigns.update(|s| s.apply(CampaignAction::LoadMore))>
                            "Load more"
                        </button>
                    </div>
                </Show>

                <Show when=move || {
                    let store = campaigns.get();
                    !store.loading() && store.filtered().is_empty()
                }>
                    <p class="card__empty">"No campaigns found"</p>
                </Show>
            </div>
        </div>
    }
}
