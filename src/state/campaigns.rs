//! Campaign-list state: collection, selection, search, and load-more paging.
//!
//! DESIGN
//! ======
//! All mutation goes through [`CampaignStore::apply`]. Views hold the store in
//! an `RwSignal` from context and dispatch [`CampaignAction`] values, so there
//! is exactly one writer path to audit.
//!
//! Selection lives in a single slot: either an id resolved against the
//! collection, or a full snapshot (e.g. a campaign fetched for the detail page
//! that is not in the list). Setting one replaces the other.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::net::types::{Campaign, CampaignStatus};

/// The single "current campaign" value.
#[derive(Clone, Debug, PartialEq)]
pub enum CampaignSelection {
    /// Look the campaign up in the collection by id.
    Id(String),
    /// A campaign held directly, independent of the collection.
    Snapshot(Campaign),
}

impl CampaignSelection {
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Snapshot(campaign) => &campaign.id,
        }
    }
}

/// Mutations accepted by [`CampaignStore::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum CampaignAction {
    /// Replace the whole collection.
    SetCampaigns(Vec<Campaign>),
    /// Concatenate onto the collection without de-duplication.
    AppendCampaigns(Vec<Campaign>),
    /// Select a campaign by id.
    Open(String),
    /// Clear the selection.
    Close,
    /// Select a full snapshot, or clear with `None`.
    SetSelected(Option<Campaign>),
    /// Select the snapshot and replace its list entry by id, if present.
    Save(Campaign),
    /// Set the search text; resets to the first page.
    SetQuery(String),
    /// Set or clear the status filter; resets to the first page.
    SetStatusFilter(Option<CampaignStatus>),
    SetPage(usize),
    SetPageSize(usize),
    /// Reveal one more page.
    LoadMore,
    SetLoading(bool),
    /// Clear query and status filter; resets to the first page.
    ResetFilters,
}

impl CampaignAction {
    /// Short name for action logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetCampaigns(_) => "set_campaigns",
            Self::AppendCampaigns(_) => "append_campaigns",
            Self::Open(_) => "open",
            Self::Close => "close",
            Self::SetSelected(_) => "set_selected",
            Self::Save(_) => "save",
            Self::SetQuery(_) => "set_query",
            Self::SetStatusFilter(_) => "set_status_filter",
            Self::SetPage(_) => "set_page",
            Self::SetPageSize(_) => "set_page_size",
            Self::LoadMore => "load_more",
            Self::SetLoading(_) => "set_loading",
            Self::ResetFilters => "reset_filters",
        }
    }
}

/// Campaign collection plus list-view filter and paging state.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignStore {
    campaigns: Vec<Campaign>,
    selection: Option<CampaignSelection>,
    query: String,
    status_filter: Option<CampaignStatus>,
    page: usize,
    page_size: usize,
    loading: bool,
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl CampaignStore {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            campaigns: Vec::new(),
            selection: None,
            query: String::new(),
            status_filter: None,
            page: 1,
            page_size,
            loading: false,
        }
    }

    /// Apply one action. This is the only way the store changes.
    pub fn apply(&mut self, action: CampaignAction) {
        log::debug!("campaign store: {}", action.kind());
        match action {
            CampaignAction::SetCampaigns(list) => self.campaigns = list,
            CampaignAction::AppendCampaigns(list) => self.campaigns.extend(list),
            CampaignAction::Open(id) => self.selection = Some(CampaignSelection::Id(id)),
            CampaignAction::Close | CampaignAction::SetSelected(None) => self.selection = None,
            CampaignAction::SetSelected(Some(campaign)) => {
                self.selection = Some(CampaignSelection::Snapshot(campaign));
            }
            CampaignAction::Save(campaign) => {
                if let Some(slot) = self.campaigns.iter_mut().find(|c| c.id == campaign.id) {
                    *slot = campaign.clone();
                }
                self.selection = Some(CampaignSelection::Snapshot(campaign));
            }
            CampaignAction::SetQuery(query) => {
                self.query = query;
                self.page = 1;
            }
            CampaignAction::SetStatusFilter(status) => {
                self.status_filter = status;
                self.page = 1;
            }
            CampaignAction::SetPage(page) => self.page = page,
            CampaignAction::SetPageSize(size) => self.page_size = size,
            CampaignAction::LoadMore => self.page = self.page.saturating_add(1),
            CampaignAction::SetLoading(loading) => self.loading = loading,
            CampaignAction::ResetFilters => {
                self.query.clear();
                self.status_filter = None;
                self.page = 1;
            }
        }
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn selection(&self) -> Option<&CampaignSelection> {
        self.selection.as_ref()
    }

    pub fn selected_campaign_id(&self) -> Option<&str> {
        self.selection.as_ref().map(CampaignSelection::id)
    }

    /// Resolve the selection to a campaign.
    ///
    /// An id selection yields `None` until a campaign with that id is loaded.
    pub fn selected_campaign(&self) -> Option<&Campaign> {
        match self.selection.as_ref()? {
            CampaignSelection::Id(id) => self.find(id),
            CampaignSelection::Snapshot(campaign) => Some(campaign),
        }
    }

    pub fn find(&self, id: &str) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status_filter(&self) -> Option<CampaignStatus> {
        self.status_filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn filtered(&self) -> Vec<&Campaign> {
        filter_campaigns(&self.campaigns, &self.query, self.status_filter)
    }

    /// The cumulative "load more" window over [`Self::filtered`].
    pub fn visible(&self) -> Vec<&Campaign> {
        let limit = self.page.saturating_mul(self.page_size);
        let mut filtered = self.filtered();
        filtered.truncate(limit);
        filtered
    }

    pub fn has_more(&self) -> bool {
        self.visible().len() < self.filtered().len()
    }
}

/// Case-insensitive name search plus exact status match.
///
/// A blank query and a `None` status both match everything.
pub fn filter_campaigns<'a>(
    campaigns: &'a [Campaign],
    query: &str,
    status: Option<CampaignStatus>,
) -> Vec<&'a Campaign> {
    let needle = query.trim().to_lowercase();
    campaigns
        .iter()
        .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
        .filter(|c| status.is_none_or(|s| c.status == s))
        .collect()
}
