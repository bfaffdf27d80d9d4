//! Reusable view components.

pub mod campaign_leads;
pub mod campaign_overview;
pub mod campaign_sequence;
pub mod campaign_settings;
pub mod campaigns_table;
pub mod lead_slide_over;
pub mod sidebar;
