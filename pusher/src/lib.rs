pub mod chain;
pub mod config;
pub mod pipeline;
pub mod rates;

pub use common_errors::{PushError, ScaleError};
pub use common_math::{ScalePolicy, WAD_DECIMALS};
pub use common_structs::{
    CurrencyPair, OracleSubmission, RateQuote, ScaledPrice, TransactionResult, TxStatus,
};

/// Seconds since the unix epoch, as the controller expects timestamps.
pub(crate) fn unix_now() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is set before the unix epoch")
        .as_secs()
}
