//! Dated price, return and volatility series.
//!
//! Each series pairs a value with the date it is indexed by. The
//! analytics never reorder: a [`PriceSeries`] is processed in the order it
//! was built, and derived series keep the dates of the positions they are
//! aligned to.
//!
//! - [`ReturnSeries`]: one entry per consecutive price pair, dated by the
//!   first price of the pair
//! - [`VolatilitySeries`]: one entry per rolling window, dated by the first
//!   return of the window

use pricer_core::types::Date;

use crate::error::VolatilityError;
use crate::rank::HvRank;
use crate::returns::log_returns;
use crate::rolling::rolling_volatility;

fn check_lengths(dates: &[Date], values: &[f64]) -> Result<(), VolatilityError> {
    if dates.len() != values.len() {
        return Err(VolatilityError::LengthMismatch {
            dates: dates.len(),
            values: values.len(),
        });
    }
    Ok(())
}

/// Daily closing prices, one per trading day.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_volatility::PriceSeries;
///
/// let series: PriceSeries = [
///     (Date::from_ymd(2017, 7, 5).unwrap(), 100.0),
///     (Date::from_ymd(2017, 7, 6).unwrap(), 105.0),
///     (Date::from_ymd(2017, 7, 7).unwrap(), 103.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let returns = series.log_returns().unwrap();
/// assert_eq!(returns.len(), 2);
/// assert_eq!(returns.dates()[0], Date::from_ymd(2017, 7, 5).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawPriceSeries"))]
pub struct PriceSeries {
    dates: Vec<Date>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Creates a series from parallel date and close vectors.
    ///
    /// # Errors
    /// `VolatilityError::LengthMismatch` if the lengths differ.
    pub fn new(dates: Vec<Date>, closes: Vec<f64>) -> Result<Self, VolatilityError> {
        check_lengths(&dates, &closes)?;
        Ok(Self { dates, closes })
    }

    /// Observation dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Closing prices.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// True when the series holds no observations.
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// Appends one observation.
    pub fn push(&mut self, date: Date, close: f64) {
        self.dates.push(date);
        self.closes.push(close);
    }

    /// `(date, close)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.closes.iter().copied())
    }

    /// Log returns, dated by the first price of each pair.
    ///
    /// # Errors
    /// `VolatilityError::TooFewPrices` for fewer than two observations.
    pub fn log_returns(&self) -> Result<ReturnSeries, VolatilityError> {
        let values = log_returns(&self.closes)?;
        let dates = self.dates[..values.len()].to_vec();
        Ok(ReturnSeries { dates, values })
    }

    /// Rolling volatility of the log returns over `window` days.
    ///
    /// # Errors
    /// Any error of [`PriceSeries::log_returns`] or
    /// [`ReturnSeries::rolling_volatility`].
    pub fn daily_historical_volatility(
        &self,
        window: usize,
    ) -> Result<VolatilitySeries, VolatilityError> {
        self.log_returns()?.rolling_volatility(window)
    }
}

impl FromIterator<(Date, f64)> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        let (dates, closes) = iter.into_iter().unzip();
        Self { dates, closes }
    }
}

/// Log returns indexed by the earlier date of each price pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawSeries"))]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Creates a series from parallel date and return vectors.
    ///
    /// # Errors
    /// `VolatilityError::LengthMismatch` if the lengths differ.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> Result<Self, VolatilityError> {
        check_lengths(&dates, &values)?;
        Ok(Self { dates, values })
    }

    /// Dates the returns are indexed by.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Log returns.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of returns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series holds no returns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Left-aligned rolling volatility, dated by the start of each window.
    ///
    /// # Errors
    /// See [`rolling_volatility`].
    pub fn rolling_volatility(&self, window: usize) -> Result<VolatilitySeries, VolatilityError> {
        let values = rolling_volatility(&self.values, window)?;
        let dates = self.dates[..values.len()].to_vec();
        Ok(VolatilitySeries { dates, values })
    }
}

/// Rolling realised volatility indexed by window start.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawSeries"))]
pub struct VolatilitySeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl VolatilitySeries {
    /// Creates a series from parallel date and volatility vectors.
    ///
    /// # Errors
    /// `VolatilityError::LengthMismatch` if the lengths differ.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> Result<Self, VolatilityError> {
        check_lengths(&dates, &values)?;
        Ok(Self { dates, values })
    }

    /// Window start dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Volatility values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of windows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the series holds no windows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The entry with the most recent date, whatever the stored order.
    pub fn latest(&self) -> Option<(Date, f64)> {
        self.dates
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .max_by_key(|(date, _)| *date)
    }

    /// Rank anchors spanning this series.
    ///
    /// # Errors
    /// See [`HvRank::new`].
    pub fn hv_rank(&self) -> Result<HvRank, VolatilityError> {
        HvRank::new(&self.values)
    }
}

/// Unchecked wire shapes; deserialisation goes through the length-checked
/// constructors.
#[cfg(feature = "serde")]
mod raw {
    use super::*;

    #[derive(serde::Deserialize)]
    pub(super) struct RawPriceSeries {
        dates: Vec<Date>,
        closes: Vec<f64>,
    }

    #[derive(serde::Deserialize)]
    pub(super) struct RawSeries {
        dates: Vec<Date>,
        values: Vec<f64>,
    }

    impl TryFrom<RawPriceSeries> for PriceSeries {
        type Error = VolatilityError;

        fn try_from(raw: RawPriceSeries) -> Result<Self, Self::Error> {
            PriceSeries::new(raw.dates, raw.closes)
        }
    }

    impl TryFrom<RawSeries> for ReturnSeries {
        type Error = VolatilityError;

        fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
            ReturnSeries::new(raw.dates, raw.values)
        }
    }

    impl TryFrom<RawSeries> for VolatilitySeries {
        type Error = VolatilityError;

        fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
            VolatilitySeries::new(raw.dates, raw.values)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Date {
        Date::from_ymd(2017, 7, d).unwrap()
    }

    fn series(closes: &[f64]) -> PriceSeries {
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| (day(i as u32 + 1), close))
            .collect()
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            PriceSeries::new(vec![day(1)], vec![1.0, 2.0]),
            Err(VolatilityError::LengthMismatch {
                dates: 1,
                values: 2
            })
        );
    }

    #[test]
    fn test_returns_keep_earlier_dates() {
        let returns = series(&[100.0, 105.0, 103.0]).log_returns().unwrap();
        assert_eq!(returns.dates(), &[day(1), day(2)]);
        assert_eq!(returns.values()[0], (100.0_f64 / 105.0).ln());
    }

    #[test]
    fn test_volatility_dated_by_window_start() {
        let prices = series(&[100.0, 101.0, 99.0, 102.0, 100.5, 101.5]);
        let vols = prices.daily_historical_volatility(3).unwrap();
        assert_eq!(vols.len(), 3);
        assert_eq!(vols.dates(), &[day(1), day(2), day(3)]);
    }

    #[test]
    fn test_no_reordering() {
        let mut prices = PriceSeries::default();
        prices.push(day(3), 103.0);
        prices.push(day(1), 100.0);
        prices.push(day(2), 105.0);
        let returns = prices.log_returns().unwrap();
        assert_eq!(returns.dates(), &[day(3), day(1)]);
        assert_eq!(returns.values()[0], (103.0_f64 / 100.0).ln());
    }

    #[test]
    fn test_latest_uses_dates_not_position() {
        let newest_first = VolatilitySeries::new(vec![day(9), day(8), day(7)], vec![0.3, 0.2, 0.1]).unwrap();
        assert_eq!(newest_first.latest(), Some((day(9), 0.3)));

        let oldest_first = VolatilitySeries::new(vec![day(7), day(8), day(9)], vec![0.1, 0.2, 0.3]).unwrap();
        assert_eq!(oldest_first.latest(), Some((day(9), 0.3)));

        let empty = VolatilitySeries::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(empty.latest(), None);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            series(&[100.0]).log_returns(),
            Err(VolatilityError::TooFewPrices { len: 1 })
        );
        assert_eq!(
            series(&[100.0, 101.0, 102.0]).daily_historical_volatility(5),
            Err(VolatilityError::WindowTooLong { window: 5, len: 2 })
        );
    }

    #[test]
    fn test_hv_rank_of_series() {
        let vols = VolatilitySeries::new(vec![day(1), day(2), day(3), day(4)], vec![10.0, 12.0, 15.0, 20.0]).unwrap();
        assert_eq!(vols.hv_rank().unwrap().rank(15.0), 50.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() {
        let json = serde_json::to_value(series(&[100.0, 101.0])).unwrap();
        assert_eq!(json["dates"][0], "2017-07-01");
        assert_eq!(json["closes"][1], 101.0);

        let back: PriceSeries = serde_json::from_value(json).unwrap();
        assert_eq!(back, series(&[100.0, 101.0]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_misaligned_series() {
        let err = serde_json::from_str::<PriceSeries>(
            r#"{"dates":["2017-07-07"],"closes":[100.0,101.0,102.0]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("1 dates but 3 values"));

        assert!(serde_json::from_str::<ReturnSeries>(
            r#"{"dates":["2017-07-07","2017-07-06"],"values":[0.01]}"#
        )
        .is_err());
        assert!(serde_json::from_str::<VolatilitySeries>(
            r#"{"dates":[],"values":[0.2]}"#
        )
        .is_err());

        let vols: VolatilitySeries =
            serde_json::from_str(r#"{"dates":["2017-07-07"],"values":[0.2]}"#).unwrap();
        assert_eq!(vols.latest(), Some((day(7), 0.2)));
    }
}
