use anyhow::{Result, anyhow};
use campaign::{Address, Origin, UserProfile};
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_ABI_PATH: &str = "abi/CrowdFunding.json";

/// Settings for the profile page and the claim action.
#[derive(Debug, Clone)]
pub struct Config {
    pub origin: Origin,
    pub profile: Option<UserProfile>,
    pub claim_enabled: bool,
    pub abi_path: PathBuf,
    pub contract_address: Option<Address>,
    pub rpc_url: Option<String>,
    pub private_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let origin = Origin::parse(&get("APP_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string()))?;

        let claim_enabled = match get("CLAIM_ENABLED") {
            Some(v) => parse_bool(&v).ok_or_else(|| anyhow!("CLAIM_ENABLED must be true or false, got '{}'", v))?,
            None => false,
        };

        let contract_address = get("CONTRACT_ADDRESS")
            .map(|v| {
                Address::from_str(&v).map_err(|e| anyhow!("Invalid CONTRACT_ADDRESS '{}': {}", v, e))
            })
            .transpose()?;

        Ok(Self {
            origin,
            profile: get("PROFILE_ADDRESS").map(UserProfile::new),
            claim_enabled,
            abi_path: get("CONTRACT_ABI_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ABI_PATH)),
            contract_address,
            rpc_url: get("ETHEREUM_RPC_URL"),
            private_key: get("PRIVATE_KEY"),
        })
    }

    /// Everything `claim` needs, or an error naming the first missing variable.
    pub fn claim_settings(&self) -> Result<(Address, &str, &str)> {
        let contract = self
            .contract_address
            .ok_or_else(|| anyhow!("CONTRACT_ADDRESS not set in environment"))?;
        let rpc_url = self
            .rpc_url
            .as_deref()
            .ok_or_else(|| anyhow!("ETHEREUM_RPC_URL not set in environment"))?;
        let private_key = self
            .private_key
            .as_deref()
            .ok_or_else(|| anyhow!("PRIVATE_KEY not set in environment"))?;
        Ok((contract, rpc_url, private_key))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
