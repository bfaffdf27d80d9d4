//! Lead-list state with a single slide-over detail panel.
//!
//! DESIGN
//! ======
//! The slide-over is open exactly when a lead id is selected, so open/close is
//! one transition over one field rather than two flags kept in step.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use crate::net::types::{Lead, LeadStatus};

/// Search text plus optional exact status match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFilters {
    pub query: String,
    pub status: Option<LeadStatus>,
}

impl LeadFilters {
    /// Case-insensitive match on name, email, or company, and exact status.
    pub fn matches(&self, lead: &Lead) -> bool {
        let needle = self.query.trim().to_lowercase();
        let matches_query = needle.is_empty()
            || lead.name.to_lowercase().contains(&needle)
            || lead.email.as_deref().is_some_and(|e| e.to_lowercase().contains(&needle))
            || lead.company.as_deref().is_some_and(|c| c.to_lowercase().contains(&needle));
        let matches_status = self.status.is_none_or(|s| lead.status == Some(s));
        matches_query && matches_status
    }
}

/// Mutations accepted by [`LeadStore::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum LeadAction {
    SetLeads(Vec<Lead>),
    AppendLeads(Vec<Lead>),
    /// Merge into the lead with the same id, or prepend when absent.
    AddOrUpdate(Lead),
    RemoveById(String),
    /// Select a lead and show the slide-over.
    OpenSlideFor(String),
    /// Clear the selection and hide the slide-over.
    CloseSlide,
    SetFilterQuery(String),
    SetFilterStatus(Option<LeadStatus>),
    ResetFilters,
    SetLoading(bool),
}

impl LeadAction {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetLeads(_) => "set_leads",
            Self::AppendLeads(_) => "append_leads",
            Self::AddOrUpdate(_) => "add_or_update",
            Self::RemoveById(_) => "remove_by_id",
            Self::OpenSlideFor(_) => "open_slide_for",
            Self::CloseSlide => "close_slide",
            Self::SetFilterQuery(_) => "set_filter_query",
            Self::SetFilterStatus(_) => "set_filter_status",
            Self::ResetFilters => "reset_filters",
            Self::SetLoading(_) => "set_loading",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadStore {
    leads: Vec<Lead>,
    selected_lead_id: Option<String>,
    filters: LeadFilters,
    loading: bool,
}

impl LeadStore {
    pub fn apply(&mut self, action: LeadAction) {
        log::debug!("lead store: {}", action.kind());
        match action {
            LeadAction::SetLeads(leads) => self.leads = leads,
            LeadAction::AppendLeads(leads) => self.leads.extend(leads),
            LeadAction::AddOrUpdate(lead) => match self.leads.iter_mut().find(|l| l.id == lead.id) {
                Some(existing) => existing.merge(lead),
                None => self.leads.insert(0, lead),
            },
            LeadAction::RemoveById(id) => {
                self.leads.retain(|l| l.id != id);
                if self.selected_lead_id.as_deref() == Some(id.as_str()) {
                    self.selected_lead_id = None;
                }
            }
            LeadAction::OpenSlideFor(id) => self.selected_lead_id = Some(id),
            LeadAction::CloseSlide => self.selected_lead_id = None,
            LeadAction::SetFilterQuery(query) => self.filters.query = query,
            LeadAction::SetFilterStatus(status) => self.filters.status = status,
            LeadAction::ResetFilters => self.filters = LeadFilters::default(),
            LeadAction::SetLoading(loading) => self.loading = loading,
        }
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn selected_lead_id(&self) -> Option<&str> {
        self.selected_lead_id.as_deref()
    }

    pub fn is_slide_open(&self) -> bool {
        self.selected_lead_id.is_some()
    }

    /// The lead shown in the slide-over, if it is still in the collection.
    pub fn selected_lead(&self) -> Option<&Lead> {
        let id = self.selected_lead_id.as_deref()?;
        self.leads.iter().find(|l| l.id == id)
    }

    pub fn filters(&self) -> &LeadFilters {
        &self.filters
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn filtered(&self) -> Vec<&Lead> {
        self.leads.iter().filter(|l| self.filters.matches(l)).collect()
    }

    /// Leads whose campaign name equals `campaign`, ignoring case and the
    /// page's search filters.
    pub fn in_campaign(&self, campaign: &str) -> Vec<&Lead> {
        let campaign = campaign.trim();
        self.leads
            .iter()
            .filter(|l| l.campaign.as_deref().is_some_and(|c| c.trim().eq_ignore_ascii_case(campaign)))
            .collect()
    }
}
