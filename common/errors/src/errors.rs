use thiserror::Error;

/// Failure of a single push run. Every variant is terminal: the binaries log
/// it once and exit non-zero, nothing is retried or rolled back.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("missing required configuration key `{0}`")]
    MissingConfig(&'static str),

    #[error("pricing api request failed: {0}")]
    PricingRequest(String),

    #[error("pricing api responded with status {0}")]
    PricingStatus(u16),

    #[error("pricing api rejected the request: {0}")]
    PricingRejected(String),

    #[error("unexpected pricing api response shape: {0}")]
    PricingShape(String),

    #[error("cannot scale rate: {0}")]
    Scaling(#[from] ScaleError),

    #[error("chain submission failed: {0}")]
    Submission(String),
}

/// Rejected inputs to the scaling stage. A run must never reach the chain
/// with a zero or garbage price, so all of these abort before submission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("rate is zero")]
    ZeroRate,

    #[error("`{0}` is not a valid decimal rate")]
    InvalidRate(String),

    #[error("rate `{rate}` has more than {decimals} fractional digits")]
    ExcessPrecision { rate: String, decimals: u8 },

    #[error("scaled rate does not fit an unsigned 256-bit integer")]
    Overflow,
}
