//! Time types and day count conventions.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DayCountConvention`: Conversion between day counts and year fractions
//!
//! Option maturities are quoted in calendar days; the pricing engine turns
//! them into year fractions through a [`DayCountConvention`].
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{Date, DayCountConvention};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let yf = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//! assert!((yf - 0.4986).abs() < 0.001);
//!
//! let yf_days = DayCountConvention::ActualActual365.year_fraction_days(365.0);
//! assert_eq!(yf_days, 1.0);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Formats accepted by [`Date::parse_quote`], tried in order.
const QUOTE_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d-%b-%y", "%d-%b-%Y"];

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Errors
    /// `DateError::InvalidDate` if the components do not form a calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Parses a date as it appears in historical quote files.
    ///
    /// Accepts ISO 8601 (`2017-07-07`) and the abbreviated month forms
    /// `07-Jul-17` / `07-Jul-2017`. Surrounding whitespace and a leading
    /// byte-order mark are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::Date;
    ///
    /// let iso = Date::parse_quote("2017-07-07").unwrap();
    /// let legacy = Date::parse_quote(" 07-Jul-17 ").unwrap();
    /// assert_eq!(iso, legacy);
    /// ```
    pub fn parse_quote(s: &str) -> Result<Self, DateError> {
        let cleaned = s.trim().trim_start_matches('\u{feff}');
        QUOTE_DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(cleaned, fmt).ok())
            .map(Date)
            .ok_or_else(|| DateError::ParseError(format!("unrecognised quote date '{}'", cleaned)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day Count Convention (year fraction convention).
///
/// # Variants
/// - `ActualActual365`: Actual days / 365 (default for option maturities)
/// - `ActualActual360`: Actual days / 360 (money market basis)
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
///
/// let act_360 = DayCountConvention::ActualActual360;
/// assert_eq!(act_360.year_fraction_days(180.0), 0.5);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    #[default]
    ActualActual365,

    /// Actual/360: actual_days / 360.0
    ActualActual360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::ActualActual365 => "ACT/365",
            DayCountConvention::ActualActual360 => "ACT/360",
        }
    }

    /// Number of days in the convention's year.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayCountConvention::ActualActual365 => 365.0,
            DayCountConvention::ActualActual360 => 360.0,
        }
    }

    /// Converts a (possibly fractional) day count into a year fraction.
    ///
    /// Negative and non-finite inputs pass straight through the division.
    #[inline]
    pub fn year_fraction_days(&self, days: f64) -> f64 {
        days / self.days_per_year()
    }

    /// Calculates the year fraction between two dates.
    ///
    /// Returns a negative value when `start > end`.
    pub fn year_fraction_dates(&self, start: Date, end: Date) -> f64 {
        self.year_fraction_days((end - start) as f64)
    }
}

impl FromStr for DayCountConvention {
    type Err = String;

    /// Parses day count convention from string (case-insensitive).
    ///
    /// - ACT/365: "ACT/365", "Actual/365", "Act365", "A365"
    /// - ACT/360: "ACT/360", "Actual/360", "Act360", "A360"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" => Ok(DayCountConvention::ActualActual365),
            "ACT360" | "ACTUAL360" | "A360" => Ok(DayCountConvention::ActualActual360),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ymd_invalid() {
        match Date::from_ymd(2023, 2, 29) {
            Err(DateError::InvalidDate { year, month, day }) => {
                assert_eq!((year, month, day), (2023, 2, 29));
            }
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_iso_round_trip() {
        let date = Date::parse("2017-07-07").unwrap();
        assert_eq!(date.to_string(), "2017-07-07");
    }

    #[test]
    fn test_parse_quote_legacy_format() {
        let date = Date::parse_quote("07-Jul-17").unwrap();
        assert_eq!(date, Date::from_ymd(2017, 7, 7).unwrap());

        let date = Date::parse_quote("30-Jun-2017").unwrap();
        assert_eq!(date, Date::from_ymd(2017, 6, 30).unwrap());
    }

    #[test]
    fn test_parse_quote_strips_bom_and_whitespace() {
        let date = Date::parse_quote("\u{feff}2017-07-07\r").unwrap();
        assert_eq!(date, Date::from_ymd(2017, 7, 7).unwrap());
    }

    #[test]
    fn test_parse_quote_rejects_garbage() {
        let err = Date::parse_quote("yesterday").unwrap_err();
        assert!(matches!(err, DateError::ParseError(_)));
    }

    #[test]
    fn test_date_ordering() {
        let a = Date::from_ymd(2017, 7, 6).unwrap();
        let b = Date::from_ymd(2017, 7, 7).unwrap();
        assert!(a < b);
        assert_eq!(b - a, 1);
    }

    #[test]
    fn test_year_fraction_days() {
        let act_365 = DayCountConvention::ActualActual365;
        assert_relative_eq!(act_365.year_fraction_days(365.0), 1.0, epsilon = 1e-15);
        assert_relative_eq!(act_365.year_fraction_days(5.0), 5.0 / 365.0, epsilon = 1e-15);
        assert_eq!(act_365.year_fraction_days(0.0), 0.0);

        let act_360 = DayCountConvention::ActualActual360;
        assert_relative_eq!(act_360.year_fraction_days(90.0), 0.25, epsilon = 1e-15);
    }

    #[test]
    fn test_year_fraction_dates_negative_when_reversed() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let end = Date::from_ymd(2024, 7, 1).unwrap();
        let conv = DayCountConvention::ActualActual365;
        assert_relative_eq!(conv.year_fraction_dates(start, end), 182.0 / 365.0, epsilon = 1e-12);
        assert_relative_eq!(conv.year_fraction_dates(end, start), -182.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_is_act_365() {
        assert_eq!(DayCountConvention::default(), DayCountConvention::ActualActual365);
    }

    #[test]
    fn test_day_count_from_str() {
        assert_eq!(
            "act/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActualActual360
        );
        assert_eq!(
            "Actual/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActualActual365
        );
        assert!("30/360".parse::<DayCountConvention>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_day_count_serde_uses_name() {
        let json = serde_json::to_string(&DayCountConvention::ActualActual360).unwrap();
        assert_eq!(json, "\"ACT/360\"");
        let back: DayCountConvention = serde_json::from_str("\"ACT/365\"").unwrap();
        assert_eq!(back, DayCountConvention::ActualActual365);
    }
}
