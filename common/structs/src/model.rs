use core::fmt;

use alloy_primitives::{B256, U256};

/// A base/quote currency pairing, e.g. TRY priced in USD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyPair {
    pub base: String,
    pub quote: String,
}

impl CurrencyPair {
    pub fn new(base: &str, quote: &str) -> Self {
        CurrencyPair {
            base: base.to_owned(),
            quote: quote.to_owned(),
        }
    }

    /// Concatenated key used by quote-style pricing responses, e.g. "TRYUSD".
    pub fn ticker(&self) -> String {
        let mut ticker = String::with_capacity(self.base.len() + self.quote.len());
        ticker.push_str(&self.base);
        ticker.push_str(&self.quote);
        ticker
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// One exchange rate as returned by a pricing API. The rate is kept as the
/// decimal string it arrived as; scaling decides how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuote {
    pub pair: CurrencyPair,
    pub rate: String,
    pub fetched_at: u64,
}

/// Integer encoding of a decimal rate under a fixed-point convention.
/// `value` always fits the contract's uint256; `decimals` records how many
/// implied fractional places the integer carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledPrice {
    pub value: U256,
    pub decimals: u8,
}

/// The three values handed to `processOracleData`, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleSubmission {
    pub market_id: u64,
    pub price: ScaledPrice,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Reverted,
}

/// Outcome of a confirmed submission: the mined transaction and its block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResult {
    pub tx_hash: B256,
    pub block_number: u64,
    pub status: TxStatus,
}

impl TransactionResult {
    pub fn succeeded(&self) -> bool {
        self.status == TxStatus::Success
    }
}
