//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float`. The CDF is built on a Chebyshev fit of
//! the complementary error function whose error is *relative* (below 1.2e-7
//! everywhere), so deep out-of-the-money deltas keep their significant digits.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Chebyshev coefficients for erfc, innermost first.
const ERFC_COEFFS: [f64; 10] = [
    0.17087277,
    -0.82215223,
    1.48851587,
    -1.13520398,
    0.27886807,
    -0.18628806,
    0.09678418,
    0.37409196,
    1.00002368,
    -1.26551223,
];

/// Complementary error function.
///
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
///
/// Symmetric by construction: erfc(-x) = 2 - erfc(x), which makes
/// `norm_cdf(x) + norm_cdf(-x) == 1` hold to rounding.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let half = T::from(0.5).unwrap_or_else(T::nan);
    let abs_x = x.abs();

    let t = one / (one + half * abs_x);
    let poly = ERFC_COEFFS.iter().fold(T::zero(), |acc, &c| {
        c_as::<T>(c) + t * acc
    });
    let erfc_abs = t * (-abs_x * abs_x + poly).exp();

    if x < T::zero() {
        T::from(2.0).unwrap_or_else(T::nan) - erfc_abs
    } else {
        erfc_abs
    }
}

#[inline]
fn c_as<T: Float>(c: f64) -> T {
    T::from(c).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// Returns exactly 0 at -∞ and 1 at +∞, and NaN for NaN input.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert_eq!(norm_cdf(f64::INFINITY), 1.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = c_as::<T>(SQRT_2);
    let half = c_as::<T>(0.5);
    half * erfc(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = c_as::<T>(FRAC_1_SQRT_2PI);
    let half = c_as::<T>(0.5);
    frac_1_sqrt_2pi * (-half * x * x).exp()
}
