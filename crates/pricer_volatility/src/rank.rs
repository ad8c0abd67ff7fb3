//! Historical-volatility rank: linear rescaling onto [0, 100].

use pricer_core::math::range;

use crate::error::VolatilityError;

/// Min/max anchors of a reference volatility series.
///
/// The minimum maps to rank 0 and the maximum to rank 100. Values outside
/// the reference range extrapolate linearly beyond [0, 100].
///
/// # Examples
/// ```
/// use pricer_volatility::HvRank;
///
/// let rank = HvRank::new(&[10.0, 12.0, 15.0, 20.0]).unwrap();
/// assert_eq!(rank.rank(15.0), 50.0);
/// assert_eq!(rank.volatility(50.0), 15.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HvRank {
    low: f64,
    high: f64,
}

impl HvRank {
    /// Anchors the rank on the min and max of `reference`.
    ///
    /// A NaN in `reference` makes every rank NaN.
    ///
    /// # Errors
    /// - `VolatilityError::EmptyReference` if `reference` is empty
    /// - `VolatilityError::DegenerateRange` if its min equals its max
    pub fn new(reference: &[f64]) -> Result<Self, VolatilityError> {
        let (low, high) = range(reference).ok_or(VolatilityError::EmptyReference)?;
        if low == high {
            return Err(VolatilityError::DegenerateRange { value: low });
        }
        Ok(Self { low, high })
    }

    /// Minimum of the reference series (rank 0).
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Maximum of the reference series (rank 100).
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// (value - min) / (max - min) * 100
    #[inline]
    pub fn rank(&self, value: f64) -> f64 {
        (value - self.low) / (self.high - self.low) * 100.0
    }

    /// rank / 100 * (max - min) + min
    #[inline]
    pub fn volatility(&self, rank: f64) -> f64 {
        rank_to_value(rank, self.low, self.high)
    }
}

#[inline]
fn rank_to_value(rank: f64, low: f64, high: f64) -> f64 {
    rank / 100.0 * (high - low) + low
}

/// Rank of `value` within the min/max of `reference`.
///
/// # Errors
/// See [`HvRank::new`].
///
/// # Examples
/// ```
/// use pricer_volatility::to_rank;
///
/// assert_eq!(to_rank(15.0, &[10.0, 12.0, 15.0, 20.0]).unwrap(), 50.0);
/// assert!(to_rank(0.2, &[0.2, 0.2]).is_err());
/// ```
pub fn to_rank(value: f64, reference: &[f64]) -> Result<f64, VolatilityError> {
    Ok(HvRank::new(reference)?.rank(value))
}

/// Volatility at `rank` within the min/max of `reference`.
///
/// Never fails: ranks outside [0, 100] extrapolate, a flat reference returns
/// its single value and an empty reference gives NaN.
///
/// # Examples
/// ```
/// use pricer_volatility::from_rank;
///
/// assert_eq!(from_rank(50.0, &[10.0, 12.0, 15.0, 20.0]), 15.0);
/// assert_eq!(from_rank(150.0, &[10.0, 20.0]), 25.0);
/// ```
pub fn from_rank(rank: f64, reference: &[f64]) -> f64 {
    match range(reference) {
        Some((low, high)) => rank_to_value(rank, low, high),
        None => f64::NAN,
    }
}
