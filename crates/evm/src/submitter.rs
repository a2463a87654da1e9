use alloy::json_abi::JsonAbi;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::{RpcError, TransportErrorKind};
use anyhow::Result;
use async_trait::async_trait;
use campaign::{ContractCall, SubmitError, TransactionHandle, TransactionSubmitter};
use std::path::Path;
use tracing::{debug, error, info};

use crate::abi::{encode_call, load_abi};
use crate::signer::signer_from_hex;

/// Sends contract calls to an EVM JSON-RPC endpoint with a local key.
pub struct EvmSubmitter {
    // The provider is built per call rather than stored
    rpc_url: String,
    signer: PrivateKeySigner,
    abi: JsonAbi,
}

impl EvmSubmitter {
    pub fn new(rpc_url: impl Into<String>, signer: PrivateKeySigner, abi: JsonAbi) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            signer,
            abi,
        }
    }

    pub fn connect(rpc_url: &str, private_key: &str, abi_path: &Path) -> Result<Self> {
        let signer = signer_from_hex(private_key)?;
        let abi = load_abi(abi_path)?;
        info!(
            "EVM submitter ready: rpc={}, sender={}",
            rpc_url,
            signer.address()
        );
        Ok(Self::new(rpc_url, signer, abi))
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }
}

#[async_trait]
impl TransactionSubmitter for EvmSubmitter {
    async fn submit(&self, call: &ContractCall) -> Result<TransactionHandle, SubmitError> {
        let input = encode_call(&self.abi, &call.function, &call.args)
            .map_err(|e| SubmitError::Encoding(e.to_string()))?;

        let url: url::Url = self
            .rpc_url
            .parse()
            .map_err(|e| SubmitError::Transport(format!("Invalid RPC URL {}: {}", self.rpc_url, e)))?;
        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(url);

        let tx = TransactionRequest::default()
            .with_from(self.signer.address())
            .with_to(call.contract)
            .with_input(input);

        debug!("Sending {} to {}...", call.function, call.contract);
        let tx_start = std::time::Instant::now();
        let pending = provider.send_transaction(tx).await.map_err(|e| {
            error!("Failed to send {}: {}", call.function, e);
            submit_error(&e)
        })?;

        let hash = pending.tx_hash().to_string();
        info!(
            "Transaction sent: {} (took {}ms)",
            hash,
            tx_start.elapsed().as_millis()
        );
        Ok(TransactionHandle::new(hash))
    }
}

/// Node-side rejections keep the node's own message; anything else is a
/// transport failure.
fn submit_error(e: &RpcError<TransportErrorKind>) -> SubmitError {
    match e.as_error_resp() {
        Some(payload) => SubmitError::Rejected(payload.message.to_string()),
        None => SubmitError::Transport(e.to_string()),
    }
}
