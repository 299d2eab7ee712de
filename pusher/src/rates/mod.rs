//! Pricing API clients. One capability trait, one client per upstream
//! source, each returning the rate as the decimal text the API produced.

mod currencylayer;
mod xe;

pub use currencylayer::CurrencyLayer;
pub use xe::XeConvert;

use async_trait::async_trait;
use common_errors::PushError;
use common_structs::{CurrencyPair, RateQuote};

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches a single quote for the pair. `amount` is the notional to
    /// convert for sources that price a quantity rather than a unit; unit
    /// sources ignore it.
    async fn fetch_rate(&self, pair: &CurrencyPair, amount: u64) -> Result<RateQuote, PushError>;
}
