//! The linear run: fetch, scale, submit, confirm. Each stage logs its
//! observable outcome and the first error ends the run.

use common_errors::PushError;
use common_math::ScalePolicy;
use common_structs::{CurrencyPair, OracleSubmission, TransactionResult, TxStatus};
use log::info;

use crate::chain::OracleSubmitter;
use crate::rates::RateProvider;
use crate::unix_now;

/// Performs exactly one push. Every invocation submits, even if an
/// identical value was submitted moments before; staleness is the
/// controller's concern.
pub async fn push_once(
    provider: &dyn RateProvider,
    policy: &ScalePolicy,
    submitter: &dyn OracleSubmitter,
    market_id: u64,
    pair: &CurrencyPair,
    amount: u64,
) -> Result<TransactionResult, PushError> {
    let quote = provider.fetch_rate(pair, amount).await?;
    info!("exchange rate: {} {} per {}", quote.rate, pair.quote, pair.base);

    let price = policy.apply(&quote.rate)?;
    let submission = OracleSubmission {
        market_id,
        price,
        timestamp: unix_now(),
    };
    info!("market id: {market_id}");
    info!(
        "current price: {} ({} scaled)",
        submission.price.value, quote.rate
    );
    info!("timestamp: {}", submission.timestamp);

    let result = submitter.submit(&submission).await?;
    if result.status == TxStatus::Reverted {
        return Err(PushError::Submission(format!(
            "transaction {} reverted on-chain",
            result.tx_hash
        )));
    }
    info!("transaction confirmed in block {}", result.block_number);

    Ok(result)
}
