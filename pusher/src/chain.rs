//! EVM submission: one signed `processOracleData` call to the hedging
//! controller, then the receipt wait.

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::ProviderBuilder;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use async_trait::async_trait;
use common_errors::PushError;
use common_structs::{OracleSubmission, TransactionResult, TxStatus};
use url::Url;

use crate::config::ChainConfig;

sol! {
    #[sol(rpc)]
    interface IHedgingController {
        function processOracleData(uint256 marketId, uint256 currentPrice, uint256 timestamp);
    }
}

#[async_trait]
pub trait OracleSubmitter: Send + Sync {
    /// Signs, submits and confirms one controller call.
    async fn submit(&self, submission: &OracleSubmission)
        -> Result<TransactionResult, PushError>;
}

/// Alloy-backed submitter bound to one controller deployment.
pub struct ControllerClient {
    rpc_url: Url,
    signer: PrivateKeySigner,
    contract_address: Address,
}

impl ControllerClient {
    /// Parses endpoint, key and address up front so a bad credential fails
    /// before any pricing call is made.
    pub fn new(config: &ChainConfig) -> Result<Self, PushError> {
        let rpc_url: Url = config
            .rpc_url
            .parse()
            .map_err(|err| PushError::Submission(format!("invalid RPC url: {err}")))?;
        let signer: PrivateKeySigner = config
            .private_key
            .parse()
            .map_err(|err| PushError::Submission(format!("invalid private key: {err}")))?;
        let contract_address: Address = config
            .contract_address
            .parse()
            .map_err(|err| PushError::Submission(format!("invalid contract address: {err}")))?;

        Ok(ControllerClient {
            rpc_url,
            signer,
            contract_address,
        })
    }
}

#[async_trait]
impl OracleSubmitter for ControllerClient {
    async fn submit(
        &self,
        submission: &OracleSubmission,
    ) -> Result<TransactionResult, PushError> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .on_http(self.rpc_url.clone());
        let controller = IHedgingController::new(self.contract_address, provider);

        let pending = controller
            .processOracleData(
                U256::from(submission.market_id),
                submission.price.value,
                U256::from(submission.timestamp),
            )
            .send()
            .await
            .map_err(|err| PushError::Submission(err.to_string()))?;

        let tx_hash = *pending.tx_hash();
        log::info!("transaction sent: {tx_hash}");
        log::info!("waiting for confirmation...");

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|err| PushError::Submission(err.to_string()))?;
        let block_number = receipt
            .block_number
            .ok_or_else(|| PushError::Submission("receipt is missing a block number".to_owned()))?;
        let status = if receipt.status() {
            TxStatus::Success
        } else {
            TxStatus::Reverted
        };

        Ok(TransactionResult {
            tx_hash,
            block_number,
            status,
        })
    }
}
