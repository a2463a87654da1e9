use anyhow::{Result, anyhow};
use campaign::{Campaign, CampaignStore};
use std::path::Path;
use tracing::info;

/// Read a campaign record exported from the indexer/front-end store.
pub fn load_campaign(path: &Path) -> Result<Campaign> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read campaign file {}: {}", path.display(), e))?;
    let campaign: Campaign = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("Invalid campaign file {}: {}", path.display(), e))?;
    Ok(campaign)
}

/// Store seeded from an optional campaign file.
pub fn store_from_file(path: Option<&Path>) -> Result<CampaignStore> {
    let store = CampaignStore::new();
    if let Some(path) = path {
        let campaign = load_campaign(path)?;
        info!("Loaded campaign {} from {}", campaign.identifier, path.display());
        store.replace(campaign);
    }
    Ok(store)
}
