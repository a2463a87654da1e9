use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque campaign identifier as handed out by the contract/indexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(String);

impl CampaignId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An on-chain `uint256` amount as received from the store.
///
/// Upstream data is loosely typed (decimal strings, hex strings, JSON
/// numbers), so anything that does not parse is kept verbatim as
/// `Malformed` and rendered as a fallback instead of failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAmount", into = "String")]
pub enum Amount {
    Value(U256),
    Malformed(String),
}

impl Amount {
    pub fn value(&self) -> Option<U256> {
        match self {
            Amount::Value(v) => Some(*v),
            Amount::Malformed(_) => None,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.value().is_some_and(|v| !v.is_zero())
    }
}

impl From<u64> for Amount {
    fn from(v: u64) -> Self {
        Amount::Value(U256::from(v))
    }
}

impl From<U256> for Amount {
    fn from(v: U256) -> Self {
        Amount::Value(v)
    }
}

impl FromStr for Amount {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match U256::from_str(trimmed) {
            Ok(v) if !trimmed.is_empty() => Amount::Value(v),
            _ => Amount::Malformed(s.to_string()),
        })
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        match amount {
            Amount::Value(v) => v.to_string(),
            Amount::Malformed(raw) => raw,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<RawAmount> for Amount {
    fn from(raw: RawAmount) -> Self {
        match raw {
            RawAmount::Unsigned(v) => Amount::from(v),
            RawAmount::Signed(v) => Amount::Malformed(v.to_string()),
            // serde_json hands integers above u64::MAX over as f64 (wei amounts)
            RawAmount::Float(v) => {
                if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
                    // `{:.0}` prints the exact integer value of the float
                    match U256::from_str(&format!("{:.0}", v)) {
                        Ok(value) => Amount::Value(value),
                        Err(_) => Amount::Malformed(v.to_string()),
                    }
                } else {
                    Amount::Malformed(v.to_string())
                }
            }
            RawAmount::Text(s) => s.parse().unwrap_or_else(|never| match never {}),
        }
    }
}

/// Funding target and progress of one crowdfunding campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(alias = "id")]
    pub identifier: CampaignId,
    #[serde(default)]
    pub description: String,
    pub amount_donated: Amount,
    pub amount_required: Amount,
}

/// The signed-in user as seen by the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "pda")]
    pub public_address: String,
}

impl UserProfile {
    pub fn new(public_address: impl Into<String>) -> Self {
        Self {
            public_address: public_address.into(),
        }
    }
}
