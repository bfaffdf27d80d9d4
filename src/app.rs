//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::config::DashboardConfig;
use crate::pages::{campaign_detail::CampaignDetailPage, campaigns::CampaignsPage, leads::LeadsPage};
use crate::state::{
    campaigns::CampaignStore,
    leads::LeadStore,
    sidebar::{SidebarAction, SidebarStore},
};

/// Root application component.
///
/// Owns one signal per store and provides them, plus the resolved config, to
/// every page through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DashboardConfig::from_build_env().unwrap_or_else(|err| {
        log::warn!("{err}; using default dashboard config");
        DashboardConfig::default()
    });

    let campaigns = RwSignal::new(CampaignStore::with_page_size(config.page_size));
    let leads = RwSignal::new(LeadStore::default());
    let sidebar = RwSignal::new(SidebarStore::default());

    provide_context(config);
    provide_context(campaigns);
    provide_context(leads);
    provide_context(sidebar);

    view! {
        <Title text="Outreach"/>

        <Router>
            <div class="app-shell" class:app-shell--collapsed=move || sidebar.get().collapsed>
                <button
                    class="app-shell__menu"
                    title="Menu"
                    on:click=move |_| {
                        let open = sidebar.get_untracked().is_open;
                        sidebar.update(|s| s.apply(SidebarAction::SetOpen(!open)));
                    }
                >
                    "\u{2630}"
                </button>
                <Sidebar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CampaignsPage/>
                        <Route path=StaticSegment("campaign") view=CampaignsPage/>
                        <Route path=(StaticSegment("campaign"), ParamSegment("id")) view=CampaignDetailPage/>
                        <Route path=StaticSegment("leads") view=LeadsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
