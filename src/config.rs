//! Dashboard configuration resolved at build time.
//!
//! The browser has no process environment, so values come from `option_env!`
//! when the WASM bundle is compiled. Absent values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_CAMPAIGN_COUNT: usize = 20;
pub const DEFAULT_LEAD_COUNT: usize = 24;
pub const DEFAULT_MOCK_DELAY_MS: u32 = 200;

/// Errors produced while resolving configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Prefix for REST calls, without a trailing slash.
    pub api_base: String,
    /// Items revealed per "load more" step on the campaign list.
    pub page_size: usize,
    pub campaign_count: usize,
    pub lead_count: usize,
    /// Artificial latency applied before mock data lands in a store.
    pub mock_delay_ms: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            campaign_count: DEFAULT_CAMPAIGN_COUNT,
            lead_count: DEFAULT_LEAD_COUNT,
            mock_delay_ms: DEFAULT_MOCK_DELAY_MS,
        }
    }
}

impl DashboardConfig {
    /// Build config from the variables captured when the crate was compiled.
    ///
    /// - `OUTREACH_API_BASE`: default `/api`
    /// - `OUTREACH_PAGE_SIZE`: default 12
    /// - `OUTREACH_CAMPAIGN_COUNT`: default 20
    /// - `OUTREACH_LEAD_COUNT`: default 24
    /// - `OUTREACH_MOCK_DELAY_MS`: default 200
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "OUTREACH_API_BASE" => option_env!("OUTREACH_API_BASE"),
                "OUTREACH_PAGE_SIZE" => option_env!("OUTREACH_PAGE_SIZE"),
                "OUTREACH_CAMPAIGN_COUNT" => option_env!("OUTREACH_CAMPAIGN_COUNT"),
                "OUTREACH_LEAD_COUNT" => option_env!("OUTREACH_LEAD_COUNT"),
                "OUTREACH_MOCK_DELAY_MS" => option_env!("OUTREACH_MOCK_DELAY_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base = lookup("OUTREACH_API_BASE")
            .map(|raw| raw.trim().trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned());

        Ok(Self {
            api_base,
            page_size: parse_or(&lookup, "OUTREACH_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            campaign_count: parse_or(&lookup, "OUTREACH_CAMPAIGN_COUNT", DEFAULT_CAMPAIGN_COUNT)?,
            lead_count: parse_or(&lookup, "OUTREACH_LEAD_COUNT", DEFAULT_LEAD_COUNT)?,
            mock_delay_ms: parse_or(&lookup, "OUTREACH_MOCK_DELAY_MS", DEFAULT_MOCK_DELAY_MS)?,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}
