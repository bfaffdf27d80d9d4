//! Collapsible navigation sidebar with keyboard traversal.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::sidebar::{NAV_SECTIONS, SidebarAction, SidebarStore, is_active, nav_items};

/// Left navigation rail. Arrow keys move focus, Enter follows the focused
/// link, Escape collapses the rail.
#[component]
pub fn Sidebar() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarStore>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let collapsed = move || sidebar.get().collapsed;
    let focused = move || sidebar.get().focused;

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let items = nav_items();
        let len = items.len();
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                sidebar.update(|s| s.apply(SidebarAction::FocusNext { len }));
            }
            "ArrowUp" => {
                ev.prevent_default();
                sidebar.update(|s| s.apply(SidebarAction::FocusPrev { len }));
            }
            "Escape" => sidebar.update(|s| s.apply(SidebarAction::Collapse)),
            "Enter" => {
                if let Some(item) = sidebar.get_untracked().focused.and_then(|i| items.get(i).copied()) {
                    navigate(item.href, NavigateOptions::default());
                }
            }
            _ => {}
        }
    };

    let sections = NAV_SECTIONS
        .iter()
        .scan(0usize, |offset, section| {
            let start = *offset;
            *offset += section.items.len();
            Some((start, section))
        })
        .map(|(start, section)| {
            view! {
                <div class="sidebar__section">
                    <Show when=move || !collapsed()>
                        <div class="sidebar__section-title">{section.title}</div>
                    </Show>
                    {section
                        .items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let index = start + i;
                            let href = item.href;
                            view! {
                                <a
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || is_active(&pathname.get(), href)
                                    class:sidebar__item--focused=move || focused() == Some(index)
                                    href=href
                                    title=item.label
                                >
                                    <span class="sidebar__label" class:sidebar__label--hidden=collapsed>
                                        {item.label}
                                    </span>
                                    {item.badge.map(|badge| view! { <span class="sidebar__badge">{badge}</span> })}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            }
        })
        .collect_view();

    view! {
        <aside
            class="sidebar"
            class:sidebar--collapsed=collapsed
            class:sidebar--hidden=move || !sidebar.get().is_open
            aria-expanded=move || (!collapsed()).to_string()
            tabindex="0"
            on:keydown=on_keydown
        >
            <div class="sidebar__header">
                <span class="sidebar__logo" class:sidebar__label--hidden=collapsed>"Outreach"</span>
                <button
                    class="sidebar__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| sidebar.update(|s| s.apply(SidebarAction::Toggle))
                >
                    {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
                </button>
            </div>
            <nav class="sidebar__nav">{sections}</nav>
        </aside>
    }
}
