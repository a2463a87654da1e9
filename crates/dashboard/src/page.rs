//! Text rendering of the profile page.

use campaign::{Campaign, ClaimGate, Origin, SummaryPanel, UserProfile};
use std::fmt;

const BAR_WIDTH: usize = 20;
const CLAIM_LABEL: &str = "Claim Donation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Wide,
    /// Narrow screens only get the product that is live.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionCard {
    pub title: &'static str,
    pub description: &'static str,
    pub available: bool,
}

pub const OPTION_CARDS: [OptionCard; 3] = [
    OptionCard {
        title: "Lending",
        description: "This feature is coming soon",
        available: false,
    },
    OptionCard {
        title: "Crowdfunding",
        description: "easily raise funds under 10 seconds",
        available: true,
    },
    OptionCard {
        title: "Borrowing",
        description: "This feature is coming soon",
        available: false,
    },
];

pub fn option_cards(layout: Layout) -> Vec<OptionCard> {
    match layout {
        Layout::Wide => OPTION_CARDS.to_vec(),
        Layout::Compact => OPTION_CARDS.iter().copied().filter(|c| c.available).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePage {
    pub cards: Vec<OptionCard>,
    pub summary: Option<SummaryPanel>,
    pub claim_enabled: bool,
}

impl ProfilePage {
    pub fn build(
        campaign: Option<&Campaign>,
        profile: &UserProfile,
        origin: &Origin,
        layout: Layout,
        claim_configured: bool,
    ) -> Self {
        Self {
            cards: option_cards(layout),
            summary: SummaryPanel::render(campaign, profile, origin),
            claim_enabled: ClaimGate::evaluate(claim_configured, campaign),
        }
    }
}

pub fn progress_bar(indicator: u8) -> String {
    let filled = (indicator as usize).min(100) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

impl fmt::Display for ProfilePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "[ {} ] {}", card.title, card.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Active funds")?;

        if let Some(panel) = &self.summary {
            writeln!(f, "  {}  {}", panel.description, panel.percent_label)?;
            writeln!(f, "  {} / {}", panel.donated_label, panel.required_label)?;
            writeln!(f, "  {}", progress_bar(panel.indicator))?;
            if let Some(link) = &panel.share_link {
                writeln!(f, "  {}", link)?;
            }
        }

        let state = if self.claim_enabled { "" } else { " (disabled)" };
        writeln!(f, "<{}>{}", CLAIM_LABEL, state)
    }
}
