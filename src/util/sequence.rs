//! Message sequence model: templates, personalization tokens and send schedules.
//!
//! A campaign sequence is a fixed run of four messages. Follow-ups carry a
//! schedule ("send 2 days after connection"); templates may reference lead
//! fields through `{{token}}` placeholders.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::fmt;

use crate::net::types::Lead;

/// A lead field that can be merged into a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalizationField {
    pub token: &'static str,
    pub label: &'static str,
}

pub const PERSONALIZATION_FIELDS: [PersonalizationField; 4] = [
    PersonalizationField { token: "{{fullName}}", label: "Full Name" },
    PersonalizationField { token: "{{firstName}}", label: "First Name" },
    PersonalizationField { token: "{{lastName}}", label: "Last Name" },
    PersonalizationField { token: "{{jobTitle}}", label: "Job Title" },
];

// =============================================================================
// SCHEDULE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DelayUnit {
    #[default]
    Day,
    Week,
}

impl DelayUnit {
    pub const ALL: [Self; 2] = [Self::Day, Self::Week];

    /// Form value used by the unit select.
    pub fn value(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
        }
    }

    fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
        }
    }
}

/// The earlier message a follow-up is timed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendAfter {
    WelcomeMessage,
    Connection,
    FirstFollowUp,
}

impl SendAfter {
    pub const ALL: [Self; 3] = [Self::WelcomeMessage, Self::Connection, Self::FirstFollowUp];

    pub fn value(self) -> &'static str {
        match self {
            Self::WelcomeMessage => "welcome",
            Self::Connection => "connection",
            Self::FirstFollowUp => "firstFollow",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|after| after.value() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WelcomeMessage => "After Welcome Message",
            Self::Connection => "After Connection",
            Self::FirstFollowUp => "After First Follow-up",
        }
    }
}

/// When a follow-up goes out relative to an earlier message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schedule {
    pub amount: u32,
    pub unit: DelayUnit,
    pub after: SendAfter,
}

impl Schedule {
    pub fn new(after: SendAfter) -> Self {
        Self { amount: 1, unit: DelayUnit::Day, after }
    }

    /// Total delay in days.
    pub fn delay_days(self) -> u32 {
        self.amount.saturating_mul(self.unit.days())
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.value();
        let plural = if self.amount == 1 { "" } else { "s" };
        let after = self.after.label().to_lowercase();
        write!(f, "Send {} {unit}{plural} {after}", self.amount)
    }
}

// =============================================================================
// STEPS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Request,
    Connection,
    FirstFollowUp,
    SecondFollowUp,
}

impl MessageKind {
    pub const ALL: [Self; 4] = [Self::Request, Self::Connection, Self::FirstFollowUp, Self::SecondFollowUp];

    pub fn label(self) -> &'static str {
        match self {
            Self::Request => "Request Message",
            Self::Connection => "Connection Message",
            Self::FirstFollowUp => "First Follow-up Message",
            Self::SecondFollowUp => "Second Follow-up Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Request => "Hi {{firstName}}, ...",
            Self::Connection => "Edit your connection message here...",
            Self::FirstFollowUp => "Edit your first follow-up message here...",
            Self::SecondFollowUp => "Edit your second follow-up message here...",
        }
    }

    /// Anchors a follow-up may be timed from. Empty for unscheduled messages.
    pub fn after_options(self) -> &'static [SendAfter] {
        match self {
            Self::Request | Self::Connection => &[],
            Self::FirstFollowUp => &[SendAfter::WelcomeMessage, SendAfter::Connection],
            Self::SecondFollowUp => &[SendAfter::FirstFollowUp, SendAfter::Connection],
        }
    }

    fn default_schedule(self) -> Option<Schedule> {
        self.after_options().first().copied().map(Schedule::new)
    }
}

/// One message in a campaign sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceStep {
    pub kind: MessageKind,
    pub template: String,
    pub schedule: Option<Schedule>,
}

impl SequenceStep {
    pub fn new(kind: MessageKind) -> Self {
        Self { kind, template: String::new(), schedule: kind.default_schedule() }
    }
}

/// The empty four-step sequence a new campaign starts with.
pub fn default_steps() -> Vec<SequenceStep> {
    MessageKind::ALL.into_iter().map(SequenceStep::new).collect()
}

// =============================================================================
// TEMPLATES
// =============================================================================

/// Every `{{...}}` placeholder in `template`, in order of appearance.
pub fn tokens_in(template: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        let end = start + len + 2;
        tokens.push(&rest[start..end]);
        rest = &rest[end..];
    }
    tokens
}

/// Placeholders that no personalization field provides.
pub fn unknown_tokens(template: &str) -> Vec<&str> {
    tokens_in(template)
        .into_iter()
        .filter(|token| PERSONALIZATION_FIELDS.iter().all(|field| field.token != *token))
        .collect()
}

/// Fill the personalization tokens from `lead`. Unknown tokens are left as-is.
pub fn render_template(template: &str, lead: &Lead) -> String {
    let full_name = lead.name.trim();
    let (first_name, last_name) = full_name.split_once(' ').unwrap_or((full_name, ""));
    let job_title = lead.role.as_deref().unwrap_or_default();

    template
        .replace("{{fullName}}", full_name)
        .replace("{{firstName}}", first_name)
        .replace("{{lastName}}", last_name.trim())
        .replace("{{jobTitle}}", job_title)
}
