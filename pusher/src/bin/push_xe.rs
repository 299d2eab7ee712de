//! One-shot push of the USD/AED XE mid rate to the hedging controller,
//! expanded to 18 implied decimal places before submission.

use log::{error, info};
use pusher::chain::ControllerClient;
use pusher::config::{load_local_env, ChainConfig, XeConfig};
use pusher::rates::XeConvert;
use pusher::{pipeline, CurrencyPair, PushError, ScalePolicy, WAD_DECIMALS};

const FROM_CURRENCY: &str = "USD";
const TO_CURRENCY: &str = "AED";
const AMOUNT: u64 = 1;
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
    let pricing = XeConfig::from_env()?;

    let provider = XeConvert::new(pricing);
    let submitter = ControllerClient::new(&chain)?;
    let pair = CurrencyPair::new(FROM_CURRENCY, TO_CURRENCY);
    let policy = ScalePolicy::FixedPoint {
        decimals: WAD_DECIMALS,
    };

    info!("pushing {pair} to market {MARKET_ID}");
    let result =
        pipeline::push_once(&provider, &policy, &submitter, MARKET_ID, &pair, AMOUNT).await?;
    println!(
        "transaction {} confirmed in block {}",
        result.tx_hash, result.block_number
    );
    Ok(())
}
