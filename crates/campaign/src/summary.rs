//! Derived display values for the "Active funds" panel.

use alloy_primitives::{U256, U512};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::capability::Clipboard;
use crate::error::ClipboardError;
use crate::model::{Amount, Campaign, UserProfile};
use crate::share::{Origin, share_url};

const NOT_AVAILABLE: &str = "N/A";
const INDICATOR_MAX: u64 = 100;

/// Funding progress of a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "percent")]
pub enum Progress {
    /// `floor(donated * 100 / required)`, saturating at `u64::MAX`. May exceed 100.
    Percent(u64),
    /// Required amount is zero or one of the amounts is malformed.
    Unavailable,
}

impl Progress {
    pub fn of(campaign: &Campaign) -> Self {
        match (campaign.amount_donated.value(), campaign.amount_required.value()) {
            (Some(donated), Some(required)) => percent_of(donated, required),
            _ => Progress::Unavailable,
        }
    }

    /// Value bound to the progress indicator, clamped to `0..=100`.
    pub fn indicator(&self) -> u8 {
        match self {
            Progress::Percent(p) => (*p).min(INDICATOR_MAX) as u8,
            Progress::Unavailable => 0,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Percent(p) => write!(f, "{}%", p),
            Progress::Unavailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

fn percent_of(donated: U256, required: U256) -> Progress {
    if required.is_zero() {
        return Progress::Unavailable;
    }
    // 512-bit intermediate so donated * 100 cannot overflow.
    let wide = U512::from(donated) * U512::from(100u64) / U512::from(required);
    Progress::Percent(u64::try_from(wide).unwrap_or(u64::MAX))
}

/// Read-only panel for one active campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPanel {
    pub description: String,
    pub progress: Progress,
    pub percent_label: String,
    pub donated_label: String,
    pub required_label: String,
    pub indicator: u8,
    pub share_link: Option<String>,
}

impl SummaryPanel {
    /// Builds the panel, or `None` when there is no active campaign.
    pub fn render(
        campaign: Option<&Campaign>,
        profile: &UserProfile,
        origin: &Origin,
    ) -> Option<Self> {
        let campaign = campaign?;
        let progress = Progress::of(campaign);
        if progress == Progress::Unavailable {
            debug!(campaign = %campaign.identifier, "Progress unavailable for campaign");
        }

        let share_link = match share_url(origin, profile) {
            Ok(link) => Some(link),
            Err(e) => {
                warn!("Share link not available: {}", e);
                None
            }
        };

        Some(Self {
            description: campaign.description.clone(),
            progress,
            percent_label: progress.to_string(),
            donated_label: amount_label(&campaign.amount_donated),
            required_label: amount_label(&campaign.amount_required),
            indicator: progress.indicator(),
            share_link,
        })
    }

    /// Copies the share link; a panel without a link is a no-op.
    pub fn copy_link(&self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        match &self.share_link {
            Some(link) => clipboard.copy(link),
            None => Ok(()),
        }
    }
}

fn amount_label(amount: &Amount) -> String {
    match amount.value() {
        Some(v) => format!("${}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}
