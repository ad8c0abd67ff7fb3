//! Left-aligned rolling realised volatility.

use pricer_core::math::sample_std_dev;

use crate::error::VolatilityError;
use crate::returns::log_returns;

/// Bessel-corrected standard deviation of every `window` consecutive returns.
///
/// Entry `i` covers `returns[i..i + window]`, i.e. the result is keyed by the
/// start of its window. Output length is `returns.len() - window + 1`. The
/// values are per-period (daily for daily returns), not annualised.
///
/// # Errors
/// - `VolatilityError::InvalidWindow` if `window < 2`
/// - `VolatilityError::WindowTooLong` if `window > returns.len()`
///
/// # Examples
/// ```
/// use pricer_volatility::rolling_volatility;
///
/// let vols = rolling_volatility(&[0.01, -0.02, 0.03, 0.0], 3).unwrap();
/// assert_eq!(vols.len(), 2);
/// ```
pub fn rolling_volatility(returns: &[f64], window: usize) -> Result<Vec<f64>, VolatilityError> {
    if window < 2 {
        return Err(VolatilityError::InvalidWindow { window });
    }
    if window > returns.len() {
        return Err(VolatilityError::WindowTooLong {
            window,
            len: returns.len(),
        });
    }
    Ok(returns.windows(window).map(|w| sample_std_dev(w)).collect())
}

/// Rolling volatility of the log returns of `prices`.
///
/// # Errors
/// Any error of [`log_returns`] or [`rolling_volatility`].
pub fn daily_historical_volatility(
    prices: &[f64],
    window: usize,
) -> Result<Vec<f64>, VolatilityError> {
    rolling_volatility(&log_returns(prices)?, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_left_aligned_windows() {
        let returns = [0.01, -0.02, 0.03, 0.0, 0.015];
        let vols = rolling_volatility(&returns, 3).unwrap();
        assert_eq!(vols.len(), 3);
        assert_eq!(vols[0], sample_std_dev(&returns[0..3]));
        assert_eq!(vols[2], sample_std_dev(&returns[2..5]));
    }

    #[test]
    fn test_bessel_correction() {
        // Deviations ±1 around 0: variance = 2 / (2 - 1) = 2
        let vols = rolling_volatility(&[1.0, -1.0], 2).unwrap();
        assert_relative_eq!(vols[0], 2.0_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_window_equal_to_length() {
        let vols = rolling_volatility(&[0.1, 0.2, 0.3], 3).unwrap();
        assert_eq!(vols.len(), 1);
        assert_relative_eq!(vols[0], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_window_too_long() {
        assert_eq!(
            rolling_volatility(&[0.1, 0.2], 3),
            Err(VolatilityError::WindowTooLong { window: 3, len: 2 })
        );
    }

    #[test]
    fn test_window_too_short() {
        for window in [0, 1] {
            assert_eq!(
                rolling_volatility(&[0.1, 0.2, 0.3], window),
                Err(VolatilityError::InvalidWindow { window })
            );
        }
    }

    #[test]
    fn test_daily_historical_volatility_composes() {
        let prices = [100.0, 101.0, 99.5, 102.0, 101.2, 100.7];
        let composed = daily_historical_volatility(&prices, 3).unwrap();
        let manual = rolling_volatility(&log_returns(&prices).unwrap(), 3).unwrap();
        assert_eq!(composed, manual);
        assert_eq!(composed.len(), prices.len() - 1 - 3 + 1);
    }

    #[test]
    fn test_daily_historical_volatility_insufficient() {
        assert_eq!(
            daily_historical_volatility(&[100.0], 2),
            Err(VolatilityError::TooFewPrices { len: 1 })
        );
        assert_eq!(
            daily_historical_volatility(&[100.0, 101.0, 102.0], 3),
            Err(VolatilityError::WindowTooLong { window: 3, len: 2 })
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_length_law(
            returns in prop::collection::vec(-0.1..0.1_f64, 2..80),
            window in 2usize..40,
        ) {
            match rolling_volatility(&returns, window) {
                Ok(vols) => {
                    prop_assert_eq!(vols.len(), returns.len() - window + 1);
                    prop_assert!(vols.iter().all(|&v| v >= 0.0));
                }
                Err(err) => {
                    prop_assert!(window > returns.len());
                    prop_assert_eq!(err, VolatilityError::WindowTooLong { window, len: returns.len() });
                }
            }
        }
    }
}
