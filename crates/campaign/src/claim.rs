//! "Claim Donation" action: one signed `claim` call per button press.

use alloy_primitives::Address;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::capability::{ContractCall, Notification, Notifier, TransactionHandle, TransactionSubmitter};
use crate::model::{Campaign, CampaignId};

pub const CLAIM_FUNCTION: &str = "claim";
pub const CLAIM_SUCCESS_MESSAGE: &str = "claim Successful";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimState {
    Idle,
    Submitting,
    Succeeded(TransactionHandle),
    Failed(String),
}

impl ClaimState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimState::Succeeded(_) | ClaimState::Failed(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Disabled,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    Submitted(TransactionHandle),
    Failed(String),
    Rejected(RejectReason),
}

/// Decides whether the claim control is interactive.
pub struct ClaimGate;

impl ClaimGate {
    /// Enabled only when switched on and the active campaign has donations to claim.
    pub fn evaluate(configured: bool, campaign: Option<&Campaign>) -> bool {
        configured && campaign.is_some_and(|c| c.amount_donated.is_positive())
    }
}

pub struct ClaimController {
    contract: Address,
    submitter: Arc<dyn TransactionSubmitter>,
    notifier: Arc<dyn Notifier>,
    enabled: AtomicBool,
    state: Mutex<ClaimState>,
}

impl ClaimController {
    pub fn new(
        contract: Address,
        submitter: Arc<dyn TransactionSubmitter>,
        notifier: Arc<dyn Notifier>,
        enabled: bool,
    ) -> Self {
        Self {
            contract,
            submitter,
            notifier,
            enabled: AtomicBool::new(enabled),
            state: Mutex::new(ClaimState::Idle),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    pub async fn state(&self) -> ClaimState {
        self.state.lock().await.clone()
    }

    /// Returns a finished claim to `Idle`. No effect while submitting.
    pub async fn reset(&self) {
        let mut state = self.state.lock().await;
        if state.is_terminal() {
            *state = ClaimState::Idle;
        }
    }

    pub async fn claim(&self, target: &CampaignId) -> ClaimOutcome {
        if !self.is_enabled() {
            debug!(campaign = %target, "Claim ignored: control disabled");
            return ClaimOutcome::Rejected(RejectReason::Disabled);
        }

        {
            let mut state = self.state.lock().await;
            if *state == ClaimState::Submitting {
                warn!(campaign = %target, "Claim ignored: another claim is in flight");
                return ClaimOutcome::Rejected(RejectReason::InFlight);
            }
            *state = ClaimState::Submitting;
        }

        let call = ContractCall {
            contract: self.contract,
            function: CLAIM_FUNCTION.to_string(),
            args: vec![target.as_str().to_string()],
        };
        info!(campaign = %target, contract = %self.contract, "Submitting claim");

        match self.submitter.submit(&call).await {
            Ok(handle) => {
                info!(campaign = %target, tx_hash = %handle.hash, "Claim submitted");
                *self.state.lock().await = ClaimState::Succeeded(handle.clone());
                self.notifier.notify(Notification::success(CLAIM_SUCCESS_MESSAGE));
                ClaimOutcome::Submitted(handle)
            }
            Err(e) => {
                let message = e.to_string();
                error!(campaign = %target, "Claim failed: {}", message);
                *self.state.lock().await = ClaimState::Failed(message.clone());
                self.notifier.notify(Notification::error(message.clone()));
                ClaimOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::NotificationKind;
    use crate::error::SubmitError;
    use crate::model::Amount;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::AtomicUsize;

    struct FixedSubmitter {
        result: Result<TransactionHandle, SubmitError>,
        calls: StdMutex<Vec<ContractCall>>,
    }

    impl FixedSubmitter {
        fn new(result: Result<TransactionHandle, SubmitError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                calls: StdMutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TransactionSubmitter for FixedSubmitter {
        async fn submit(&self, call: &ContractCall) -> Result<TransactionHandle, SubmitError> {
            self.calls.lock().unwrap().push(call.clone());
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(StdMutex<Vec<Notification>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    fn controller(
        submitter: Arc<FixedSubmitter>,
        notifier: Arc<RecordingNotifier>,
        enabled: bool,
    ) -> ClaimController {
        ClaimController::new(Address::repeat_byte(0x11), submitter, notifier, enabled)
    }

    #[tokio::test]
    async fn test_claim_success_notifies_once() {
        let submitter = FixedSubmitter::new(Ok(TransactionHandle::new("0xabc")));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(submitter.clone(), notifier.clone(), true);

        let outcome = ctl.claim(&CampaignId::new("4")).await;

        assert_eq!(outcome, ClaimOutcome::Submitted(TransactionHandle::new("0xabc")));
        assert_eq!(ctl.state().await, ClaimState::Succeeded(TransactionHandle::new("0xabc")));
        let notes = notifier.0.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Success);

        let calls = submitter.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].function, "claim");
        assert_eq!(calls[0].args, vec!["4".to_string()]);
        assert_eq!(calls[0].contract, Address::repeat_byte(0x11));
    }

    #[tokio::test]
    async fn test_claim_failure_notifies_error_without_retry() {
        let submitter =
            FixedSubmitter::new(Err(SubmitError::Rejected("insufficient funds".to_string())));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(submitter.clone(), notifier.clone(), true);

        let outcome = ctl.claim(&CampaignId::new("1")).await;

        assert_eq!(outcome, ClaimOutcome::Failed("insufficient funds".to_string()));
        assert!(matches!(ctl.state().await, ClaimState::Failed(_)));
        let notes = notifier.0.lock().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert!(notes[0].message.contains("insufficient funds"));
        assert_eq!(submitter.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_disabled_controller_never_submits() {
        let submitter = FixedSubmitter::new(Ok(TransactionHandle::new("0x1")));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(submitter.clone(), notifier.clone(), false);

        let outcome = ctl.claim(&CampaignId::new("1")).await;

        assert_eq!(outcome, ClaimOutcome::Rejected(RejectReason::Disabled));
        assert_eq!(ctl.state().await, ClaimState::Idle);
        assert!(submitter.calls.lock().unwrap().is_empty());
        assert!(notifier.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let submitter = FixedSubmitter::new(Ok(TransactionHandle::new("0x1")));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = controller(submitter, notifier, true);

        ctl.claim(&CampaignId::new("1")).await;
        assert!(ctl.state().await.is_terminal());
        ctl.reset().await;
        assert_eq!(ctl.state().await, ClaimState::Idle);
    }

    struct BlockingSubmitter {
        release: tokio::sync::Notify,
        started: tokio::sync::Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TransactionSubmitter for BlockingSubmitter {
        async fn submit(&self, _call: &ContractCall) -> Result<TransactionHandle, SubmitError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            Ok(TransactionHandle::new("0xfeed"))
        }
    }

    #[tokio::test]
    async fn test_second_claim_while_submitting_is_rejected() {
        let submitter = Arc::new(BlockingSubmitter {
            release: tokio::sync::Notify::new(),
            started: tokio::sync::Notify::new(),
            calls: AtomicUsize::new(0),
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let ctl = Arc::new(ClaimController::new(
            Address::ZERO,
            submitter.clone(),
            notifier.clone(),
            true,
        ));

        let first = {
            let ctl = ctl.clone();
            tokio::spawn(async move { ctl.claim(&CampaignId::new("1")).await })
        };
        submitter.started.notified().await;
        assert_eq!(ctl.state().await, ClaimState::Submitting);

        let second = ctl.claim(&CampaignId::new("1")).await;
        assert_eq!(second, ClaimOutcome::Rejected(RejectReason::InFlight));

        submitter.release.notify_one();
        let first = first.await.unwrap();
        assert_eq!(first, ClaimOutcome::Submitted(TransactionHandle::new("0xfeed")));
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.0.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_gate_requires_donations() {
        let mut campaign = Campaign {
            identifier: CampaignId::new("1"),
            description: String::new(),
            amount_donated: Amount::from(0),
            amount_required: Amount::from(100),
        };
        assert!(!ClaimGate::evaluate(true, None));
        assert!(!ClaimGate::evaluate(true, Some(&campaign)));
        campaign.amount_donated = Amount::from(5);
        assert!(ClaimGate::evaluate(true, Some(&campaign)));
        assert!(!ClaimGate::evaluate(false, Some(&campaign)));
    }
}
