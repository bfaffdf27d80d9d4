//! Network-facing types and REST helpers.

pub mod api;
pub mod types;
