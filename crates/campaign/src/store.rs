use tokio::sync::watch;
use tracing::debug;

use crate::model::Campaign;

/// Holds the currently selected campaign.
///
/// Populated by whatever fetches campaigns; the summary view and the
/// claim controller only ever read from it.
pub struct CampaignStore {
    current: watch::Sender<Option<Campaign>>,
}

impl CampaignStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    pub fn with_campaign(campaign: Campaign) -> Self {
        let store = Self::new();
        store.replace(campaign);
        store
    }

    pub fn current(&self) -> Option<Campaign> {
        self.current.borrow().clone()
    }

    pub fn replace(&self, campaign: Campaign) {
        debug!(campaign = %campaign.identifier, "Selected campaign");
        self.current.send_replace(Some(campaign));
    }

    pub fn clear(&self) {
        debug!("Cleared selected campaign");
        self.current.send_replace(None);
    }

    /// Receiver that observes every later `replace`/`clear`.
    pub fn subscribe(&self) -> watch::Receiver<Option<Campaign>> {
        self.current.subscribe()
    }
}

impl Default for CampaignStore {
    fn default() -> Self {
        Self::new()
    }
}
