use thiserror::Error;

/// Errors raised while deriving profile-page values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CampaignError {
    #[error("Public identifier is empty")]
    EmptyIdentifier,

    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),
}

/// Failure reported by a transaction-submission backend.
///
/// The display string is what ends up in the user's error toast, so it
/// carries the backend message unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to encode call: {0}")]
    Encoding(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}
