//! Sample statistics over slices.
//!
//! All functions are generic over `T: Float` and propagate NaN instead of
//! filtering it: a NaN anywhere in the input yields a NaN result.

use num_traits::Float;

/// Arithmetic mean of a slice.
///
/// Returns NaN for an empty slice.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::sample_mean;
///
/// assert_eq!(sample_mean(&[1.0_f64, 2.0, 3.0]), 2.0);
/// ```
#[inline]
pub fn sample_mean<T: Float>(values: &[T]) -> T {
    let n = T::from(values.len()).unwrap_or_else(T::nan);
    values.iter().fold(T::zero(), |acc, &x| acc + x) / n
}

/// Bessel-corrected sample standard deviation.
///
/// sqrt( Σ(xᵢ - x̄)² / (n - 1) )
///
/// Returns NaN when fewer than two values are supplied.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::sample_std_dev;
///
/// let sd = sample_std_dev(&[2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.138089935).abs() < 1e-9);
/// ```
pub fn sample_std_dev<T: Float>(values: &[T]) -> T {
    if values.len() < 2 {
        return T::nan();
    }
    let mean = sample_mean(values);
    let sum_sq = values.iter().fold(T::zero(), |acc, &x| {
        let diff = x - mean;
        acc + diff * diff
    });
    let dof = T::from(values.len() - 1).unwrap_or_else(T::nan);
    (sum_sq / dof).sqrt()
}

/// Minimum and maximum of a slice, as `(min, max)`.
///
/// Returns `None` for an empty slice and `(NaN, NaN)` if any element is NaN.
///
/// # Examples
/// ```
/// use pricer_core::math::statistics::range;
///
/// assert_eq!(range(&[10.0_f64, 12.0, 15.0, 20.0]), Some((10.0, 20.0)));
/// assert_eq!(range::<f64>(&[]), None);
/// ```
pub fn range<T: Float>(values: &[T]) -> Option<(T, T)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &x| {
        if x.is_nan() || lo.is_nan() {
            (T::nan(), T::nan())
        } else {
            (lo.min(x), hi.max(x))
        }
    }))
}
