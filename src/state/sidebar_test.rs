use super::*;

// =============================================================
// Collapse
// =============================================================

#[test]
fn default_is_open_and_expanded() {
    let store = SidebarStore::default();
    assert!(store.is_open);
    assert!(!store.collapsed);
    assert_eq!(store.focused, None);
}

#[test]
fn toggle_flips_collapsed() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::Toggle);
    assert!(store.collapsed);
    store.apply(SidebarAction::Toggle);
    assert!(!store.collapsed);
}

#[test]
fn collapse_and_expand_are_idempotent() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::Collapse);
    store.apply(SidebarAction::Collapse);
    assert!(store.collapsed);
    store.apply(SidebarAction::Expand);
    store.apply(SidebarAction::Expand);
    assert!(!store.collapsed);
}

#[test]
fn collapsing_clears_focus() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::FocusNext { len: 5 });
    store.apply(SidebarAction::Collapse);
    assert_eq!(store.focused, None);
}

// =============================================================
// Keyboard focus
// =============================================================

#[test]
fn focus_next_starts_at_first_and_clamps_at_last() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::FocusNext { len: 3 });
    assert_eq!(store.focused, Some(0));
    store.apply(SidebarAction::FocusNext { len: 3 });
    store.apply(SidebarAction::FocusNext { len: 3 });
    store.apply(SidebarAction::FocusNext { len: 3 });
    assert_eq!(store.focused, Some(2));
}

#[test]
fn focus_prev_starts_at_last_and_clamps_at_first() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::FocusPrev { len: 3 });
    assert_eq!(store.focused, Some(2));
    store.apply(SidebarAction::FocusPrev { len: 3 });
    store.apply(SidebarAction::FocusPrev { len: 3 });
    store.apply(SidebarAction::FocusPrev { len: 3 });
    assert_eq!(store.focused, Some(0));
}

#[test]
fn focus_on_empty_list_is_noop() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::FocusNext { len: 0 });
    store.apply(SidebarAction::FocusPrev { len: 0 });
    assert_eq!(store.focused, None);
}

#[test]
fn clear_focus_resets_index() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::FocusPrev { len: 4 });
    store.apply(SidebarAction::ClearFocus);
    assert_eq!(store.focused, None);
}

#[test]
fn set_open_hides_without_touching_collapse() {
    let mut store = SidebarStore::default();
    store.apply(SidebarAction::Collapse);
    store.apply(SidebarAction::SetOpen(false));
    assert!(!store.is_open);
    assert!(store.collapsed);
    store.apply(SidebarAction::SetOpen(true));
    assert!(store.is_open);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_items_flatten_sections_in_order() {
    let items = nav_items();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0].id, "dashboard");
    assert_eq!(items[5].id, "billing");
    assert_eq!(items[7].id, "userlogs");
}

#[test]
fn is_active_matches_exact_and_nested_paths() {
    assert!(is_active("/campaign", "/campaign"));
    assert!(is_active("/campaign/1003", "/campaign"));
    assert!(!is_active("/campaigns", "/campaign"));
    assert!(!is_active("/leads", "/campaign"));
}
