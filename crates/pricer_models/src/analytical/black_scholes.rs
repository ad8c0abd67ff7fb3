//! Black-Scholes-Merton grid pricer for European options.
//!
//! Prices and Greeks are evaluated for every spot × strike pair in one pass
//! using ndarray broadcasting: spot and volatility enter as `(m, 1)`
//! columns, strike as a `(1, n)` row.
//!
//! ## Mathematical Formulas
//!
//! With ω = +1 for a call and -1 for a put, τ the year fraction:
//!
//! - d₁ = (ln(S/K) + (r - q + σ²/2)τ) / (σ√τ)
//! - d₂ = d₁ - σ√τ
//! - **Price**: V = ω·S·e^(-qτ)·N(ω·d₁) - ω·K·e^(-rτ)·N(ω·d₂)
//! - **Delta**: ω·e^(-qτ)·N(ω·d₁)
//! - **Gamma**: e^(-qτ)·φ(d₁) / (S·σ·√τ)
//! - **Rho**: ω·τ·K·e^(-rτ)·N(ω·d₂)
//!
//! ## Degenerate Limits
//!
//! At τ = 0 (every element) and where σ = 0 (per spot row) the lognormal
//! terms are undefined. Those elements take the deterministic forward
//! limit on m = S·e^(-qτ) - K·e^(-rτ):
//!
//! - price = max(ω·m, 0)
//! - delta = ω·e^(-qτ) when ω·m > 0, else 0
//! - gamma = 0
//! - rho = ω·τ·K·e^(-rτ) when ω·m > 0, else 0
//!
//! At τ = 0 this is exactly the intrinsic value with a step delta.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayD, Axis, Zip};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::result::PricingResult;
use crate::instruments::payoff::positive_part;
use crate::instruments::{GridAxis, OptionSpec};

/// Formula used for the gamma output.
///
/// # Variants
/// - `BlackScholes`: e^(-qτ)·φ(d₁) / (S·σ·√τ), the second spot derivative
///   of the price
/// - `Simplified`: 1 / (σ·S·√τ), without the density factor
///
/// τ is the year fraction under the option's day count for both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GammaConvention {
    /// Textbook Black-Scholes gamma
    #[default]
    BlackScholes,
    /// Density-free approximation
    Simplified,
}

impl GammaConvention {
    /// Configuration name of the convention.
    pub fn name(&self) -> &'static str {
        match self {
            GammaConvention::BlackScholes => "black_scholes",
            GammaConvention::Simplified => "simplified",
        }
    }
}

impl FromStr for GammaConvention {
    type Err = AnalyticalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "black_scholes" | "bs" => Ok(GammaConvention::BlackScholes),
            "simplified" => Ok(GammaConvention::Simplified),
            _ => Err(AnalyticalError::UnknownGammaConvention {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GammaConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four output grids before squeezing.
struct Grids {
    price: Array2<f64>,
    delta: Array2<f64>,
    gamma: Array2<f64>,
    rho: Array2<f64>,
}

/// Discounting and axis data shared by both branches.
struct Inputs {
    omega: f64,
    tau: f64,
    dividend_discount: f64,
    spot: Array2<f64>,
    volatility: Array2<f64>,
    /// S·e^(-qτ), shape (m, 1)
    forward_spot: Array2<f64>,
    /// K·e^(-rτ), shape (1, n)
    discounted_strike: Array2<f64>,
}

impl Inputs {
    fn new(spec: &OptionSpec) -> Self {
        let tau = spec.year_fraction();
        let m = spec.spot.len();
        let dividend_discount = (-spec.dividend_yield * tau).exp();
        let rate_discount = (-spec.rate * tau).exp();

        let spot = spec.spot.to_array().insert_axis(Axis(1));
        let strike = spec.strike.to_array().insert_axis(Axis(0));
        let volatility = match &spec.volatility {
            GridAxis::Scalar(sigma) => Array2::from_elem((m, 1), *sigma),
            GridAxis::Vector(_) => spec.volatility.to_array().insert_axis(Axis(1)),
        };

        Self {
            omega: spec.option_type.sign(),
            tau,
            dividend_discount,
            forward_spot: &spot * dividend_discount,
            discounted_strike: &strike * rate_discount,
            spot,
            volatility,
        }
    }

    fn shape(&self) -> (usize, usize) {
        (self.spot.nrows(), self.discounted_strike.ncols())
    }
}

/// Prices a European option over the spot × strike grid.
///
/// The output shape is `(len(spot), len(strike))`; a scalar spot or strike
/// drops its axis, so two scalars give a 0-d result. NaN inputs propagate
/// to NaN outputs.
///
/// # Errors
/// Any [`OptionSpec::validate`] failure.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{black_scholes, Metric};
/// use pricer_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 365.0, 0.05, 0.0, 0.2).unwrap();
/// let result = black_scholes::price(&spec).unwrap();
///
/// let value = result.scalar(Metric::Price).unwrap();
/// assert!((value - 10.4506).abs() < 1e-4);
/// ```
pub fn price(spec: &OptionSpec) -> Result<PricingResult, AnalyticalError> {
    spec.validate()?;

    let inputs = Inputs::new(spec);
    let grids = if inputs.tau == 0.0 {
        forward_limit(&inputs)
    } else {
        let mut grids = lognormal(&inputs, spec.gamma_convention);
        let flat = inputs.volatility.mapv(|sigma| sigma == 0.0);
        if flat.iter().any(|&is_flat| is_flat) {
            let limit = forward_limit(&inputs);
            overwrite_where(&mut grids.price, &limit.price, &flat);
            overwrite_where(&mut grids.delta, &limit.delta, &flat);
            overwrite_where(&mut grids.gamma, &limit.gamma, &flat);
            overwrite_where(&mut grids.rho, &limit.rho, &flat);
        }
        grids
    };

    let squeezed = |grid: Array2<f64>| squeeze(grid, &spec.spot, &spec.strike);
    Ok(PricingResult {
        price: squeezed(grids.price),
        delta: squeezed(grids.delta),
        gamma: squeezed(grids.gamma),
        rho: squeezed(grids.rho),
    })
}

/// Change of every metric when the spot axis moves by `change`.
///
/// Returns `price(spot + change) - price(spot)` element-wise, with the same
/// shape as [`price`].
///
/// # Errors
/// Validation failures of either the base or the shifted specification,
/// e.g. `InvalidSpot` when `change` pushes a spot to zero or below.
pub fn price_change_surface(
    spec: &OptionSpec,
    change: f64,
) -> Result<PricingResult, AnalyticalError> {
    let base = price(spec)?;
    let shifted = price(&spec.with_spot_shift(change))?;
    Ok(shifted.difference(&base))
}

/// Same grid evaluated at expiry (maturity 0 days).
///
/// # Errors
/// Any [`OptionSpec::validate`] failure.
pub fn price_at_expiry(spec: &OptionSpec) -> Result<PricingResult, AnalyticalError> {
    let expired = OptionSpec {
        maturity_days: 0.0,
        ..spec.clone()
    };
    price(&expired)
}

fn lognormal(inputs: &Inputs, convention: GammaConvention) -> Grids {
    let omega = inputs.omega;
    let tau = inputs.tau;
    let (m, n) = inputs.shape();

    let sigma_sqrt_tau = &inputs.volatility * tau.sqrt();
    let log_moneyness = (&inputs.forward_spot / &inputs.discounted_strike).mapv(f64::ln);
    let convexity = inputs.volatility.mapv(|sigma| 0.5 * sigma * sigma * tau);

    // ln(S e^{-qτ} / K e^{-rτ}) already carries the (r - q)τ drift.
    let d1 = (&log_moneyness + &convexity) / &sigma_sqrt_tau;
    let d2 = &d1 - &sigma_sqrt_tau;

    let n_d1 = d1.mapv(|x| norm_cdf(omega * x));
    let n_d2 = d2.mapv(|x| norm_cdf(omega * x));

    let asset_leg = &inputs.forward_spot * &n_d1;
    let strike_leg = &inputs.discounted_strike * &n_d2;

    let price = &asset_leg * omega - &strike_leg * omega;
    let delta = n_d1 * (omega * inputs.dividend_discount);
    let rho = strike_leg * (omega * tau);

    let spot_sigma_sqrt_tau = &inputs.spot * &sigma_sqrt_tau;
    let gamma = match convention {
        GammaConvention::BlackScholes => {
            &d1.mapv(norm_pdf) * inputs.dividend_discount / &spot_sigma_sqrt_tau
        }
        GammaConvention::Simplified => {
            Array2::from_shape_fn((m, n), |(i, _)| 1.0 / spot_sigma_sqrt_tau[[i, 0]])
        }
    };

    Grids {
        price,
        delta,
        gamma,
        rho,
    }
}

fn forward_limit(inputs: &Inputs) -> Grids {
    let omega = inputs.omega;
    let tau = inputs.tau;
    let moneyness = &inputs.forward_spot - &inputs.discounted_strike;

    let price = moneyness.mapv(|x| positive_part(omega * x));
    let delta = moneyness.mapv(|x| in_the_money(omega * x, omega * inputs.dividend_discount));
    let gamma = moneyness.mapv(|x| if x.is_nan() { f64::NAN } else { 0.0 });
    let rho = Zip::from(&moneyness)
        .and_broadcast(&inputs.discounted_strike)
        .map_collect(|&x, &discounted| in_the_money(omega * x, omega * tau * discounted));

    Grids {
        price,
        delta,
        gamma,
        rho,
    }
}

/// `value` where the signed moneyness is strictly positive, 0 otherwise.
#[inline]
fn in_the_money(signed_moneyness: f64, value: f64) -> f64 {
    if signed_moneyness.is_nan() {
        f64::NAN
    } else if signed_moneyness > 0.0 {
        value
    } else {
        0.0
    }
}

/// Copies `source` into `target` on the rows flagged by the `(m, 1)` mask.
fn overwrite_where(target: &mut Array2<f64>, source: &Array2<f64>, mask: &Array2<bool>) {
    Zip::from(target)
        .and(source)
        .and_broadcast(mask)
        .for_each(|t, &s, &flagged| {
            if flagged {
                *t = s;
            }
        });
}

/// Drops the axes that came from scalar inputs.
fn squeeze(grid: Array2<f64>, spot: &GridAxis, strike: &GridAxis) -> ArrayD<f64> {
    let mut grid = grid.into_dyn();
    if strike.is_scalar() {
        grid = grid.index_axis_move(Axis(1), 0);
    }
    if spot.is_scalar() {
        grid = grid.index_axis_move(Axis(0), 0);
    }
    grid
}
