//! Output grids of the Black-Scholes engine.

use std::fmt;
use std::str::FromStr;

use ndarray::ArrayD;

use super::error::AnalyticalError;

/// Quantity produced by the grid pricer.
///
/// Only these four are computed; theta and vega are rejected by name.
///
/// # Examples
/// ```
/// use pricer_models::analytical::Metric;
///
/// assert_eq!("Delta".parse::<Metric>().unwrap(), Metric::Delta);
/// assert!("vega".parse::<Metric>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Option value
    Price,
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// ∂V/∂r per unit rate, with time to maturity in years.
    ///
    /// Equals `ω τ K e^{-rτ} N(ω d2)` with `τ = days / days_per_year`, so it
    /// is `1 / days_per_year` of the same expression written with the
    /// maturity in days. Divide by 100 for the change per 1 % of rate.
    Rho,
}

impl Metric {
    /// Every metric, in output order.
    pub const ALL: [Metric; 4] = [Metric::Price, Metric::Delta, Metric::Gamma, Metric::Rho];

    /// Lower-case name used as the output key.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Price => "price",
            Metric::Delta => "delta",
            Metric::Gamma => "gamma",
            Metric::Rho => "rho",
        }
    }
}

impl FromStr for Metric {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| AnalyticalError::UnsupportedMetric {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Price and Greeks over the spot × strike grid.
///
/// All four arrays share one shape: `(spots, strikes)` when both axes are
/// sequences, a 1-D array when one of them is a scalar, and a 0-d array
/// when both are.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    /// Option values
    pub price: ArrayD<f64>,
    /// Spot sensitivities
    pub delta: ArrayD<f64>,
    /// Second spot sensitivities
    pub gamma: ArrayD<f64>,
    /// Rate sensitivities per unit rate
    pub rho: ArrayD<f64>,
}

impl PricingResult {
    /// Grid for one metric.
    pub fn get(&self, metric: Metric) -> &ArrayD<f64> {
        match metric {
            Metric::Price => &self.price,
            Metric::Delta => &self.delta,
            Metric::Gamma => &self.gamma,
            Metric::Rho => &self.rho,
        }
    }

    /// Looks a grid up by metric name.
    ///
    /// # Errors
    /// `AnalyticalError::UnsupportedMetric` for any name other than
    /// price, delta, gamma or rho.
    pub fn get_by_name(&self, name: &str) -> Result<&ArrayD<f64>, AnalyticalError> {
        Ok(self.get(name.parse()?))
    }

    /// `(metric, grid)` pairs in [`Metric::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, &ArrayD<f64>)> {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Shape shared by every grid.
    pub fn shape(&self) -> &[usize] {
        self.price.shape()
    }

    /// The single value of a 0-d result, `None` otherwise.
    pub fn scalar(&self, metric: Metric) -> Option<f64> {
        let grid = self.get(metric);
        if grid.ndim() == 0 {
            grid.first().copied()
        } else {
            None
        }
    }

    /// Element-wise `self - base` for every metric.
    ///
    /// Both results must come from specifications with the same axis shapes.
    pub fn difference(&self, base: &PricingResult) -> PricingResult {
        PricingResult {
            price: &self.price - &base.price,
            delta: &self.delta - &base.delta,
            gamma: &self.gamma - &base.gamma,
            rho: &self.rho - &base.rho,
        }
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use super::*;
    use ndarray::ArrayViewD;
    use serde::ser::{SerializeMap, SerializeSeq};
    use serde::{Serialize, Serializer};

    /// Serialises an n-d array as nested sequences, a 0-d array as a number.
    struct Nested<'a>(ArrayViewD<'a, f64>);

    impl Serialize for Nested<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.0.ndim() == 0 {
                return match self.0.first() {
                    Some(value) => serializer.serialize_f64(*value),
                    None => serializer.serialize_none(),
                };
            }
            let mut seq = serializer.serialize_seq(Some(self.0.len_of(ndarray::Axis(0))))?;
            for row in self.0.outer_iter() {
                seq.serialize_element(&Nested(row))?;
            }
            seq.end()
        }
    }

    impl Serialize for PricingResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(Metric::ALL.len()))?;
            for (metric, grid) in self.iter() {
                map.serialize_entry(metric.name(), &Nested(grid.view()))?;
            }
            map.end()
        }
    }
}
