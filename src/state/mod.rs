//! Shared client-side stores.
//!
//! DESIGN
//! ======
//! State is split by domain (`campaigns`, `leads`, `sidebar`) so components
//! depend on small focused models. Each store changes only through its
//! `apply(action)` reducer; the app provides one `RwSignal` per store through
//! context instead of module-level globals.

pub mod campaigns;
pub mod leads;
pub mod sidebar;
