//! European option specification over spot / strike grids.

use pricer_core::types::DayCountConvention;

use super::axis::GridAxis;
use super::payoff::OptionType;
use crate::analytical::{AnalyticalError, GammaConvention};

/// Inputs to the grid pricer.
///
/// `spot` and `strike` each hold a scalar or a 1-D sequence; the engine
/// evaluates every spot × strike pair. `volatility` is a scalar or a
/// sequence aligned with `spot`. Maturity is quoted in calendar days and
/// converted to years through `day_count`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::builder(OptionType::Call)
///     .spot(vec![90.0, 100.0, 110.0])
///     .strike(100.0)
///     .maturity_days(30.0)
///     .rate(0.03)
///     .volatility(0.25)
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.spot.len(), 3);
/// assert_eq!(spec.dividend_yield, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionSpec {
    /// Call or Put
    pub option_type: OptionType,
    /// Underlying price(s), strictly positive
    pub spot: GridAxis,
    /// Strike price(s), strictly positive
    pub strike: GridAxis,
    /// Time to maturity in calendar days, non-negative
    pub maturity_days: f64,
    /// Annualised continuously-compounded risk-free rate
    pub rate: f64,
    /// Annualised continuous dividend yield
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,
    /// Annualised volatility, scalar or aligned with `spot`; non-negative
    pub volatility: GridAxis,
    /// Basis used to turn `maturity_days` into a year fraction
    #[cfg_attr(feature = "serde", serde(default))]
    pub day_count: DayCountConvention,
    /// Formula used for the gamma output
    #[cfg_attr(feature = "serde", serde(default))]
    pub gamma_convention: GammaConvention,
}

impl OptionSpec {
    /// Creates a specification with ACT/365 and the Black-Scholes gamma.
    ///
    /// # Errors
    /// See [`OptionSpec::validate`].
    pub fn new(
        option_type: OptionType,
        spot: impl Into<GridAxis>,
        strike: impl Into<GridAxis>,
        maturity_days: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: impl Into<GridAxis>,
    ) -> Result<Self, AnalyticalError> {
        let spec = Self {
            option_type,
            spot: spot.into(),
            strike: strike.into(),
            maturity_days,
            rate,
            dividend_yield,
            volatility: volatility.into(),
            day_count: DayCountConvention::default(),
            gamma_convention: GammaConvention::default(),
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Starts a builder for the given option type.
    pub fn builder(option_type: OptionType) -> OptionSpecBuilder {
        OptionSpecBuilder::new(option_type)
    }

    /// Time to maturity as a year fraction under `day_count`.
    #[inline]
    pub fn year_fraction(&self) -> f64 {
        self.day_count.year_fraction_days(self.maturity_days)
    }

    /// Returns a copy with every spot shifted by `change`, keeping its shape.
    pub fn with_spot_shift(&self, change: f64) -> Self {
        Self {
            spot: self.spot.map(|s| s + change),
            ..self.clone()
        }
    }

    /// Checks the domain of every input.
    ///
    /// NaN inputs are not rejected; they propagate into the outputs.
    ///
    /// # Errors
    /// - `EmptyAxis` if `spot`, `strike` or `volatility` is an empty sequence
    /// - `InvalidSpot` / `InvalidStrike` for a value <= 0
    /// - `InvalidVolatility` for a value < 0
    /// - `InvalidMaturity` if `maturity_days` < 0
    /// - `VolatilityShapeMismatch` if a volatility sequence is not aligned with `spot`
    pub fn validate(&self) -> Result<(), AnalyticalError> {
        for (axis, name) in [
            (&self.spot, "spot"),
            (&self.strike, "strike"),
            (&self.volatility, "volatility"),
        ] {
            if axis.is_empty() {
                return Err(AnalyticalError::EmptyAxis { axis: name });
            }
        }

        if let Some(&spot) = self.spot.values().iter().find(|&&s| s <= 0.0) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if let Some(&strike) = self.strike.values().iter().find(|&&k| k <= 0.0) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if let Some(&volatility) = self.volatility.values().iter().find(|&&v| v < 0.0) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if self.maturity_days < 0.0 {
            return Err(AnalyticalError::InvalidMaturity {
                days: self.maturity_days,
            });
        }

        if let GridAxis::Vector(vols) = &self.volatility {
            if vols.len() != self.spot.len() {
                return Err(AnalyticalError::VolatilityShapeMismatch {
                    expected: self.spot.len(),
                    got: vols.len(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for [`OptionSpec`].
///
/// Defaults: spot 100, strike 100, maturity 0 days, rate 0, dividend
/// yield 0, volatility 0, ACT/365, Black-Scholes gamma.
#[derive(Debug, Clone)]
pub struct OptionSpecBuilder {
    spec: OptionSpec,
}

impl OptionSpecBuilder {
    fn new(option_type: OptionType) -> Self {
        Self {
            spec: OptionSpec {
                option_type,
                spot: GridAxis::Scalar(100.0),
                strike: GridAxis::Scalar(100.0),
                maturity_days: 0.0,
                rate: 0.0,
                dividend_yield: 0.0,
                volatility: GridAxis::Scalar(0.0),
                day_count: DayCountConvention::default(),
                gamma_convention: GammaConvention::default(),
            },
        }
    }

    /// Sets the spot axis.
    pub fn spot(mut self, spot: impl Into<GridAxis>) -> Self {
        self.spec.spot = spot.into();
        self
    }

    /// Sets the strike axis.
    pub fn strike(mut self, strike: impl Into<GridAxis>) -> Self {
        self.spec.strike = strike.into();
        self
    }

    /// Sets the time to maturity in days.
    pub fn maturity_days(mut self, days: f64) -> Self {
        self.spec.maturity_days = days;
        self
    }

    /// Sets the annualised risk-free rate.
    pub fn rate(mut self, rate: f64) -> Self {
        self.spec.rate = rate;
        self
    }

    /// Sets the annualised dividend yield.
    pub fn dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.spec.dividend_yield = dividend_yield;
        self
    }

    /// Sets the volatility (scalar or aligned with spot).
    pub fn volatility(mut self, volatility: impl Into<GridAxis>) -> Self {
        self.spec.volatility = volatility.into();
        self
    }

    /// Sets the day count basis for the maturity.
    pub fn day_count(mut self, day_count: DayCountConvention) -> Self {
        self.spec.day_count = day_count;
        self
    }

    /// Sets the gamma formula.
    pub fn gamma_convention(mut self, convention: GammaConvention) -> Self {
        self.spec.gamma_convention = convention;
        self
    }

    /// Validates and returns the specification.
    pub fn build(self) -> Result<OptionSpec, AnalyticalError> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call() -> OptionSpecBuilder {
        OptionSpec::builder(OptionType::Call)
            .maturity_days(30.0)
            .volatility(0.2)
    }

    #[test]
    fn test_new_valid() {
        let spec = OptionSpec::new(OptionType::Put, 100.0, 95.0, 5.0, 0.03, 0.0, 0.05).unwrap();
        assert_eq!(spec.option_type, OptionType::Put);
        assert_eq!(spec.day_count, DayCountConvention::ActualActual365);
        assert_eq!(spec.gamma_convention, GammaConvention::BlackScholes);
    }

    #[test]
    fn test_zero_maturity_and_volatility_are_valid() {
        assert!(call().maturity_days(0.0).volatility(0.0).build().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_spot() {
        let err = call().spot(vec![100.0, 0.0]).build().unwrap_err();
        assert_eq!(err, AnalyticalError::InvalidSpot { spot: 0.0 });
    }

    #[test]
    fn test_rejects_non_positive_strike() {
        let err = call().strike(-5.0).build().unwrap_err();
        assert_eq!(err, AnalyticalError::InvalidStrike { strike: -5.0 });
    }

    #[test]
    fn test_rejects_negative_volatility() {
        let err = call().volatility(-0.01).build().unwrap_err();
        assert_eq!(err, AnalyticalError::InvalidVolatility { volatility: -0.01 });
    }

    #[test]
    fn test_rejects_negative_maturity() {
        let err = call().maturity_days(-1.0).build().unwrap_err();
        assert_eq!(err, AnalyticalError::InvalidMaturity { days: -1.0 });
    }

    #[test]
    fn test_rejects_misaligned_volatility() {
        let err = call()
            .spot(vec![90.0, 100.0, 110.0])
            .volatility(vec![0.2, 0.3])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::VolatilityShapeMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn test_rejects_empty_axis() {
        let err = call().strike(Vec::new()).build().unwrap_err();
        assert_eq!(err, AnalyticalError::EmptyAxis { axis: "strike" });
    }

    #[test]
    fn test_nan_is_not_rejected() {
        assert!(call().spot(f64::NAN).build().is_ok());
    }

    #[test]
    fn test_year_fraction_uses_day_count() {
        let spec = call().maturity_days(90.0).build().unwrap();
        assert_eq!(spec.year_fraction(), 90.0 / 365.0);

        let spec = call()
            .maturity_days(90.0)
            .day_count(DayCountConvention::ActualActual360)
            .build()
            .unwrap();
        assert_eq!(spec.year_fraction(), 0.25);
    }

    #[test]
    fn test_with_spot_shift() {
        let spec = call().spot(vec![90.0, 100.0]).build().unwrap();
        let shifted = spec.with_spot_shift(2.5);
        assert_eq!(shifted.spot, GridAxis::Vector(vec![92.5, 102.5]));
        assert_eq!(shifted.strike, spec.strike);
    }
}
