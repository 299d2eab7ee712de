use alloy_primitives::U256;
use common_errors::ScaleError;
use common_structs::ScaledPrice;

/// Implied fractional places of the 18-decimal on-chain convention.
pub const WAD_DECIMALS: u8 = 18;

const BASE: u64 = 10;

/// How a fetched decimal rate becomes the integer the contract expects.
/// The two feeds encode different fixed-point conventions, so the policies
/// stay distinct instead of being unified behind one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalePolicy {
    /// Multiply the rate by a notional amount and round to a plain integer
    /// (no implied decimals).
    NotionalRound { notional: u64 },
    /// Expand the decimal string to `decimals` implied fractional places
    /// with exact base-10 arithmetic.
    FixedPoint { decimals: u8 },
}

impl ScalePolicy {
    pub fn apply(&self, rate: &str) -> Result<ScaledPrice, ScaleError> {
        match *self {
            ScalePolicy::NotionalRound { notional } => scale_to_notional(rate, notional),
            ScalePolicy::FixedPoint { decimals } => expand_fixed_point(rate, decimals),
        }
    }
}

/// `round(rate × notional)` as a plain integer price.
///
/// The rate goes through f64 because that is the convention of this feed:
/// the quote arrives as a JSON number and the notional product is rounded
/// half away from zero. Zero products are rejected so a stale or dust rate
/// never reaches the chain.
pub fn scale_to_notional(rate: &str, notional: u64) -> Result<ScaledPrice, ScaleError> {
    let parsed: f64 = rate
        .trim()
        .parse()
        .map_err(|_| ScaleError::InvalidRate(rate.to_owned()))?;

    if !parsed.is_finite() || parsed < 0.0 {
        return Err(ScaleError::InvalidRate(rate.to_owned()));
    }
    if parsed == 0.0 {
        return Err(ScaleError::ZeroRate);
    }

    let scaled = (parsed * notional as f64).round();
    if scaled == 0.0 {
        return Err(ScaleError::ZeroRate);
    }
    if scaled >= u128::MAX as f64 {
        return Err(ScaleError::Overflow);
    }

    Ok(ScaledPrice {
        value: U256::from(scaled as u128),
        decimals: 0,
    })
}

/// Exact base-10 expansion of a decimal string into a fixed-point integer.
///
/// `"3.6725"` with 18 decimals is exactly `3672500000000000000`; the digits
/// are never routed through a float, so there is no binary rounding drift.
/// Inputs with more fractional digits than the target precision are refused
/// rather than silently truncated.
pub fn expand_fixed_point(rate: &str, decimals: u8) -> Result<ScaledPrice, ScaleError> {
    let trimmed = rate.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || (trimmed.contains('.') && !all_digits(frac_part)) {
        return Err(ScaleError::InvalidRate(rate.to_owned()));
    }
    if frac_part.len() > decimals as usize {
        return Err(ScaleError::ExcessPrecision {
            rate: trimmed.to_owned(),
            decimals,
        });
    }

    let scale = pow10(decimals)?;
    let int_units = U256::from_str_radix(int_part, BASE)
        .map_err(|_| ScaleError::Overflow)?
        .checked_mul(scale)
        .ok_or(ScaleError::Overflow)?;

    let frac_units = if frac_part.is_empty() {
        U256::ZERO
    } else {
        // Right-pad the fractional digits up to the target precision.
        let padding = decimals as usize - frac_part.len();
        let frac = U256::from_str_radix(frac_part, BASE).map_err(|_| ScaleError::Overflow)?;
        frac.checked_mul(pow10(padding as u8)?)
            .ok_or(ScaleError::Overflow)?
    };

    let value = int_units.checked_add(frac_units).ok_or(ScaleError::Overflow)?;
    if value == U256::ZERO {
        return Err(ScaleError::ZeroRate);
    }

    Ok(ScaledPrice { value, decimals })
}

fn pow10(exp: u8) -> Result<U256, ScaleError> {
    U256::from(BASE)
        .checked_pow(U256::from(exp))
        .ok_or(ScaleError::Overflow)
}
