//! One-shot push of the TRY/USD currencylayer rate to the hedging
//! controller. Scheduling is external; each invocation performs exactly
//! one submission and exits.

use log::{error, info};
use pusher::chain::ControllerClient;
use pusher::config::{load_local_env, ChainConfig, CurrencyLayerConfig};
use pusher::rates::CurrencyLayer;
use pusher::{pipeline, CurrencyPair, PushError, ScalePolicy};

const FROM_CURRENCY: &str = "TRY";
const TO_CURRENCY: &str = "USD";
const AMOUNT: u64 = 1000;
const MARKET_ID: u64 = 1;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        error!("push failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), PushError> {
    load_local_env();

    let chain = ChainConfig::from_env()?;
    let pricing = CurrencyLayerConfig::from_env()?;

    let provider = CurrencyLayer::new(pricing);
    let submitter = ControllerClient::new(&chain)?;
    let pair = CurrencyPair::new(FROM_CURRENCY, TO_CURRENCY);
    let policy = ScalePolicy::NotionalRound { notional: AMOUNT };

    info!("pushing {pair} to market {MARKET_ID}");
    let result =
        pipeline::push_once(&provider, &policy, &submitter, MARKET_ID, &pair, AMOUNT).await?;
    println!(
        "transaction {} confirmed in block {}",
        result.tx_hash, result.block_number
    );
    Ok(())
}
