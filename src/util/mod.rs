//! Utility helpers shared across client modules.

pub mod mock;
pub mod sequence;
