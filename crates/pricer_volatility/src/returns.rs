//! Log returns with the reversed-lag pairing.

use crate::error::VolatilityError;

/// Log returns `ln(P[i] / P[i + 1])` for consecutive prices.
///
/// Each return pairs a price with the one stored *after* it and is indexed
/// by the earlier position, so the output has `prices.len() - 1` entries.
/// For a newest-first series this is the usual one-day return; for an
/// oldest-first series it is its negation. The input order is used as is.
///
/// Non-positive or NaN prices are not rejected and give NaN or infinite
/// returns.
///
/// # Errors
/// `VolatilityError::TooFewPrices` if fewer than two prices are supplied.
///
/// # Examples
/// ```
/// use pricer_volatility::log_returns;
///
/// let returns = log_returns(&[100.0, 105.0, 103.0]).unwrap();
/// assert_eq!(returns, vec![(100.0_f64 / 105.0).ln(), (105.0_f64 / 103.0).ln()]);
/// ```
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, VolatilityError> {
    if prices.len() < 2 {
        return Err(VolatilityError::TooFewPrices { len: prices.len() });
    }
    Ok(prices.windows(2).map(|w| (w[0] / w[1]).ln()).collect())
}
