// Module declarations
pub mod capability;
pub mod claim;
pub mod error;
pub mod model;
pub mod share;
pub mod store;
pub mod summary;

// Re-export commonly used types
pub use capability::{
    Clipboard,
    ContractCall,
    Notification,
    NotificationKind,
    Notifier,
    TransactionHandle,
    TransactionSubmitter,
};
pub use claim::{ClaimController, ClaimGate, ClaimOutcome, ClaimState, RejectReason};
pub use error::{CampaignError, ClipboardError, SubmitError};
pub use model::{Amount, Campaign, CampaignId, UserProfile};
pub use share::{Origin, share_url};
pub use store::CampaignStore;
pub use summary::{Progress, SummaryPanel};

pub use alloy_primitives::Address;
