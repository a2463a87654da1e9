use std::fmt;
use url::Url;

use crate::error::CampaignError;
use crate::model::UserProfile;

const DETAILS_PATH: &str = "/details/";

/// Base origin of the web app, e.g. `https://fund.example.org`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    pub fn parse(origin: &str) -> Result<Self, CampaignError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let url = Url::parse(trimmed)
            .map_err(|e| CampaignError::InvalidOrigin(format!("{}: {}", origin, e)))?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(CampaignError::InvalidOrigin(format!(
                    "{}: unsupported scheme '{}'",
                    origin, other
                )));
            }
        }
        if url.host_str().is_none() {
            return Err(CampaignError::InvalidOrigin(format!("{}: missing host", origin)));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public page that lists the user's campaigns.
pub fn share_url(origin: &Origin, profile: &UserProfile) -> Result<String, CampaignError> {
    let id = profile.public_address.trim();
    if id.is_empty() {
        return Err(CampaignError::EmptyIdentifier);
    }
    Ok(format!("{}{}{}", origin.as_str(), DETAILS_PATH, id))
}
