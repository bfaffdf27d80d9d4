//! Mock campaign and lead generators standing in for a data API.
//!
//! Campaigns are random-valued but internally consistent: counters satisfy
//! `replied <= accepted <= sent <= total` and the derived percentages are
//! computed from those counters. Leads are deterministic by index.
//!
//! The RNG and clock are injected so tests can seed them.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use rand::Rng;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::net::types::{Campaign, CampaignCounts, CampaignStatus, Interaction, Lead, LeadStatus};

const BRANDS: [&str; 10] = [
    "Just Herbs",
    "Juicy Chemistry",
    "HyugaLife",
    "HoneyVeda",
    "HempStreet",
    "GreenRoots",
    "PureLeaf",
    "Urban Botanics",
    "NaturaWell",
    "HerbLab",
];

const DESCRIPTIONS: [&str; 6] = [
    "Targeting herb enthusiasts across channels.",
    "Cold outreach campaign focused on small businesses.",
    "Partnership outreach to micro-influencers.",
    "Pilot campaign for new product launch.",
    "Re-engagement campaign for dormant leads.",
    "Seasonal promo focused on repeat customers.",
];

const LEAD_ROLES: [&str; 3] = ["Regional Head", "SEO Growth", "Manager"];
const LEAD_COMPANIES: [&str; 3] = ["Gynoveda", "Digi", "Re'equil"];
const LEAD_STATUS_CYCLE: [LeadStatus; 4] =
    [LeadStatus::Pending, LeadStatus::Contacted, LeadStatus::Responded, LeadStatus::Converted];

/// First numeric id handed out by the generators.
pub const FIRST_MOCK_ID: usize = 1000;

const MIN_TOTAL_LEADS: u32 = 10;
const MAX_TOTAL_LEADS: u32 = 1000;
const START_DATE_WINDOW_DAYS: i64 = 365;

/// Current wall-clock time, read from the browser in WASM builds.
pub fn now_utc() -> OffsetDateTime {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Generate `n` campaigns with ids starting at [`FIRST_MOCK_ID`].
pub fn make_campaigns<R: Rng>(rng: &mut R, now: OffsetDateTime, n: usize) -> Vec<Campaign> {
    (0..n)
        .map(|i| {
            let brand = BRANDS[rng.random_range(0..BRANDS.len())];
            let id = (FIRST_MOCK_ID + i).to_string();
            random_campaign(rng, now, id, format!("{brand} {}", i + 1))
        })
        .collect()
}

/// Generate one campaign for a known id, e.g. when a fetch falls through.
pub fn make_campaign<R: Rng>(rng: &mut R, now: OffsetDateTime, id: &str) -> Campaign {
    let brand = BRANDS[rng.random_range(0..BRANDS.len())];
    random_campaign(rng, now, id.to_owned(), format!("{brand} {id}"))
}

fn random_campaign<R: Rng>(rng: &mut R, now: OffsetDateTime, id: String, name: String) -> Campaign {
    let total_leads = rng.random_range(MIN_TOTAL_LEADS..=MAX_TOTAL_LEADS);
    let request_sent = rng.random_range(0..=total_leads);
    let request_accepted = rng.random_range(0..=request_sent);
    let request_replied = rng.random_range(0..=request_accepted);
    let counts = CampaignCounts { total_leads, request_sent, request_accepted, request_replied };

    let mut campaign = Campaign::from_counts(id, name, random_status(rng), counts);
    let days_ago = rng.random_range(0..START_DATE_WINDOW_DAYS);
    campaign.start_date = (now - Duration::days(days_ago)).format(&Rfc3339).ok();
    campaign.description = Some(DESCRIPTIONS[rng.random_range(0..DESCRIPTIONS.len())].to_owned());
    campaign
}

/// 70% active, 20% inactive, 10% draft.
fn random_status<R: Rng>(rng: &mut R) -> CampaignStatus {
    let roll: f64 = rng.random();
    if roll < 0.7 {
        CampaignStatus::Active
    } else if roll < 0.9 {
        CampaignStatus::Inactive
    } else {
        CampaignStatus::Draft
    }
}

/// Generate `n` leads whose fields cycle by index.
pub fn make_leads(n: usize) -> Vec<Lead> {
    (0..n).map(make_lead).collect()
}

fn make_lead(i: usize) -> Lead {
    let campaign_letter = char::from(b'A' + u8::try_from(i % 4).unwrap_or(0));
    Lead {
        id: (FIRST_MOCK_ID + i).to_string(),
        name: format!("Person {i}"),
        role: Some(LEAD_ROLES[i % 3].to_owned()),
        email: Some(format!("person{i}@example.com")),
        company: Some(LEAD_COMPANIES[i % 3].to_owned()),
        campaign: Some(format!("Campaign {campaign_letter}")),
        status: Some(LEAD_STATUS_CYCLE[i % 4]),
        last_contact: Some(format!("{} mins ago", (i % 60) + 1)),
        avatar_url: Some(format!("https://api.dicebear.com/7.x/initials/svg?seed=Person-{i}")),
        interactions: Some(vec![Interaction {
            id: Some("t1".to_owned()),
            title: "Invitation Request".to_owned(),
            text: Some("Hello!".to_owned()),
            time: Some("10 mins ago".to_owned()),
            status: Some("done".to_owned()),
        }]),
    }
}
