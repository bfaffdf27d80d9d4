//! Campaign and lead payload types.
//!
//! DESIGN
//! ======
//! These are the shapes served by `GET /api/campaigns/:id` and held by the
//! stores. Field names serialize as camelCase so the client can consume the
//! same JSON a dashboard backend would emit.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A status label that did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0}")]
pub struct UnknownStatus(pub String);

// =============================================================================
// CAMPAIGN
// =============================================================================

/// Campaign lifecycle status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    #[default]
    Active,
    Inactive,
    Draft,
}

impl CampaignStatus {
    pub const ALL: [Self; 3] = [Self::Active, Self::Inactive, Self::Draft];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Draft => "Draft",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CampaignStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// Derived funnel percentages, each in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignProgress {
    pub contacted_percent: u8,
    pub acceptance_percent: u8,
    pub reply_percent: u8,
}

/// Raw engagement counters for a campaign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CampaignCounts {
    pub total_leads: u32,
    pub request_sent: u32,
    pub request_accepted: u32,
    pub request_replied: u32,
}

impl CampaignCounts {
    /// Clamp each stage so `replied <= accepted <= sent <= total`.
    pub fn clamped(self) -> Self {
        let request_sent = self.request_sent.min(self.total_leads);
        let request_accepted = self.request_accepted.min(request_sent);
        let request_replied = self.request_replied.min(request_accepted);
        Self { total_leads: self.total_leads, request_sent, request_accepted, request_replied }
    }

    pub fn progress(self) -> CampaignProgress {
        CampaignProgress {
            contacted_percent: percent(self.request_sent, self.total_leads),
            acceptance_percent: percent(self.request_accepted, self.request_sent),
            reply_percent: percent(self.request_replied, self.request_accepted),
        }
    }

    /// Replies over total leads as a percentage with two decimals.
    pub fn conversion_rate(self) -> f64 {
        if self.total_leads == 0 {
            return 0.0;
        }
        (f64::from(self.request_replied) / f64::from(self.total_leads) * 10_000.0).round() / 100.0
    }
}

/// Rounded `part / whole` percentage; zero when `whole` is zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let value = (f64::from(part) / f64::from(whole) * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}

/// An outreach campaign with aggregate engagement counters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub total_leads: u32,
    #[serde(default)]
    pub request_sent: u32,
    #[serde(default)]
    pub request_accepted: u32,
    #[serde(default)]
    pub request_replied: u32,
    #[serde(default)]
    pub progress: CampaignProgress,
    #[serde(default)]
    pub conversion_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Campaign {
    /// Build a campaign whose derived fields agree with its counters.
    pub fn from_counts(id: impl Into<String>, name: impl Into<String>, status: CampaignStatus, counts: CampaignCounts) -> Self {
        let counts = counts.clamped();
        Self {
            id: id.into(),
            name: name.into(),
            status,
            total_leads: counts.total_leads,
            request_sent: counts.request_sent,
            request_accepted: counts.request_accepted,
            request_replied: counts.request_replied,
            progress: counts.progress(),
            conversion_rate: counts.conversion_rate(),
            start_date: None,
            last_activity: None,
            description: None,
        }
    }

    /// Re-derive counters, progress and conversion rate from the raw counts.
    ///
    /// Payloads from the API are trusted for identity and metadata only.
    #[must_use]
    pub fn normalized(self) -> Self {
        let counts = self.counts();
        Self {
            start_date: self.start_date,
            last_activity: self.last_activity,
            description: self.description,
            ..Self::from_counts(self.id, self.name, self.status, counts)
        }
    }

    pub fn counts(&self) -> CampaignCounts {
        CampaignCounts {
            total_leads: self.total_leads,
            request_sent: self.request_sent,
            request_accepted: self.request_accepted,
            request_replied: self.request_replied,
        }
    }

    /// True when `replied <= accepted <= sent <= total`.
    pub fn counters_consistent(&self) -> bool {
        self.request_replied <= self.request_accepted
            && self.request_accepted <= self.request_sent
            && self.request_sent <= self.total_leads
    }
}

// =============================================================================
// LEAD
// =============================================================================

/// Engagement status of a lead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    Pending,
    Contacted,
    Responded,
    Converted,
    #[serde(rename = "Do Not Contact")]
    DoNotContact,
}

impl LeadStatus {
    pub const ALL: [Self; 5] = [Self::Pending, Self::Contacted, Self::Responded, Self::Converted, Self::DoNotContact];

    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Contacted => "Contacted",
            Self::Responded => "Responded",
            Self::Converted => "Converted",
            Self::DoNotContact => "Do Not Contact",
        }
    }

    /// CSS modifier used for status badges.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Responded => "responded",
            Self::Converted => "converted",
            Self::DoNotContact => "blocked",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LeadStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// One entry in a lead's contact history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Interaction {
    pub fn is_done(&self) -> bool {
        self.status.as_deref() == Some("done")
    }
}

/// A contact tracked through the outreach funnel.
///
/// `campaign` is a display name, not a reference into the campaign store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions: Option<Vec<Interaction>>,
}

impl Lead {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Self::default() }
    }

    /// Shallow-merge `patch` into `self`.
    ///
    /// Present optional fields overwrite; absent ones keep the current value.
    /// An empty `name` counts as absent. The id is never changed.
    pub fn merge(&mut self, patch: Lead) {
        let Lead { id: _, name, role, email, company, campaign, status, last_contact, avatar_url, interactions } = patch;
        if !name.is_empty() {
            self.name = name;
        }
        overwrite(&mut self.role, role);
        overwrite(&mut self.email, email);
        overwrite(&mut self.company, company);
        overwrite(&mut self.campaign, campaign);
        overwrite(&mut self.status, status);
        overwrite(&mut self.last_contact, last_contact);
        overwrite(&mut self.avatar_url, avatar_url);
        overwrite(&mut self.interactions, interactions);
    }

    pub fn interactions(&self) -> &[Interaction] {
        self.interactions.as_deref().unwrap_or_default()
    }
}

fn overwrite<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}
