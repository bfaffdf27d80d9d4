//! Route-level page components.

pub mod campaign_detail;
pub mod campaigns;
pub mod leads;
