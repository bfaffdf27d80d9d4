//! REST helpers for campaign data.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere the fetch reports [`ApiError::Unavailable`] so callers take
//! their fallback path.
//!
//! ERROR HANDLING
//! ==============
//! A failed campaign fetch never surfaces to the user: [`load_campaign`] logs
//! the error and degrades to a generated mock for the same id. List loads are
//! mock-backed and only simulate latency.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Campaign, Lead};
use crate::config::DashboardConfig;
use crate::util::mock;

/// Errors produced by campaign fetches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request could not be sent or completed.
    #[error("request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("unexpected status: {status}")]
    Status { status: u16 },

    /// The response body was not a campaign.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// HTTP is only wired up in the browser build.
    #[error("fetch unavailable outside the browser")]
    Unavailable,
}

/// `GET {api_base}/campaigns/{id}`.
pub fn campaign_endpoint(api_base: &str, id: &str) -> String {
    format!("{}/campaigns/{id}", api_base.trim_end_matches('/'))
}

/// Fetch one campaign from the API.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-2xx status, or an
/// unparsable body.
pub async fn fetch_campaign(api_base: &str, id: &str) -> Result<Campaign, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = campaign_endpoint(api_base, id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<Campaign>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api_base, id);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a campaign, falling back to a generated one on any error.
pub async fn load_campaign(api_base: &str, id: &str) -> Campaign {
    resolve_campaign(id, fetch_campaign(api_base, id).await)
}

/// Pick the fetched campaign, or a mock with the same id when the fetch failed.
///
/// A fetched campaign has its derived fields rebuilt from its counters.
pub fn resolve_campaign(id: &str, fetched: Result<Campaign, ApiError>) -> Campaign {
    match fetched {
        Ok(campaign) => campaign.normalized(),
        Err(err) => {
            log::warn!("campaign {id}: {err}; using mock data");
            mock::make_campaign(&mut rand::rng(), mock::now_utc(), id)
        }
    }
}

/// Load the campaign list after the configured artificial delay.
pub async fn load_campaigns(config: &DashboardConfig) -> Vec<Campaign> {
    simulate_latency(config.mock_delay_ms).await;
    let campaigns = mock::make_campaigns(&mut rand::rng(), mock::now_utc(), config.campaign_count);
    log::info!("loaded {} mock campaigns", campaigns.len());
    campaigns
}

/// Load the lead list. Leads are available immediately.
pub fn load_leads(config: &DashboardConfig) -> Vec<Lead> {
    let leads = mock::make_leads(config.lead_count);
    log::info!("loaded {} mock leads", leads.len());
    leads
}

/// Wait `ms` milliseconds in the browser; resolve immediately elsewhere.
pub async fn simulate_latency(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
