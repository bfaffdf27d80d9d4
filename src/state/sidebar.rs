//! Layout sidebar state: collapse flag, mobile visibility, keyboard focus.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// A navigation link in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub badge: Option<&'static str>,
}

/// A titled group of navigation links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Overview",
        items: &[
            NavItem { id: "dashboard", label: "Dashboard", href: "/dashboard", badge: None },
            NavItem { id: "leads", label: "Leads", href: "/leads", badge: None },
            NavItem { id: "campaign", label: "Campaign", href: "/campaign", badge: None },
            NavItem { id: "messages", label: "Messages", href: "/messages", badge: Some("10+") },
            NavItem { id: "linkedin", label: "Linkedin Accounts", href: "/linkedin", badge: None },
        ],
    },
    NavSection {
        title: "Settings",
        items: &[NavItem { id: "billing", label: "Setting & Billing", href: "/settings", badge: None }],
    },
    NavSection {
        title: "Admin Panel",
        items: &[
            NavItem { id: "activity", label: "Activity logs", href: "/admin/activity", badge: None },
            NavItem { id: "userlogs", label: "User logs", href: "/admin/users", badge: None },
        ],
    },
];

/// All navigation items in display order, for keyboard traversal.
pub fn nav_items() -> Vec<NavItem> {
    NAV_SECTIONS.iter().flat_map(|s| s.items.iter().copied()).collect()
}

/// True when `path` is `href` or nested beneath it.
pub fn is_active(path: &str, href: &str) -> bool {
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    Toggle,
    Collapse,
    Expand,
    /// Show or hide the whole sidebar on narrow screens.
    SetOpen(bool),
    /// Move keyboard focus down a list of `len` items.
    FocusNext { len: usize },
    /// Move keyboard focus up a list of `len` items.
    FocusPrev { len: usize },
    ClearFocus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarStore {
    /// Whole sidebar visible (mobile).
    pub is_open: bool,
    /// Narrow icon-only width.
    pub collapsed: bool,
    /// Keyboard-focused nav item index.
    pub focused: Option<usize>,
}

impl Default for SidebarStore {
    fn default() -> Self {
        Self { is_open: true, collapsed: false, focused: None }
    }
}

impl SidebarStore {
    pub fn apply(&mut self, action: SidebarAction) {
        log::debug!("sidebar store: {action:?}");
        match action {
            SidebarAction::Toggle => self.set_collapsed(!self.collapsed),
            SidebarAction::Collapse => self.set_collapsed(true),
            SidebarAction::Expand => self.set_collapsed(false),
            SidebarAction::SetOpen(open) => self.is_open = open,
            SidebarAction::FocusNext { len } => {
                if len > 0 {
                    self.focused = Some(self.focused.map_or(0, |i| (i + 1).min(len - 1)));
                }
            }
            SidebarAction::FocusPrev { len } => {
                if len > 0 {
                    self.focused = Some(self.focused.map_or(len - 1, |i| i.saturating_sub(1).min(len - 1)));
                }
            }
            SidebarAction::ClearFocus => self.focused = None,
        }
    }

    fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        if collapsed {
            self.focused = None;
        }
    }
}
