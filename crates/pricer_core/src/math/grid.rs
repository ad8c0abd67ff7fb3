//! Evenly spaced axis construction.
//!
//! Spot and strike axes fed to the grid pricer are built with these two
//! helpers; their endpoint semantics follow the usual numeric-array
//! conventions (`linspace` includes `end`, `arange` excludes it).

/// `num` evenly spaced values over `[start, end]`, both ends included.
///
/// Returns an empty vector for `num == 0` and `[start]` for `num == 1`.
///
/// # Examples
/// ```
/// use pricer_core::math::linspace;
///
/// assert_eq!(linspace(112.5, 187.5, 4), vec![112.5, 137.5, 162.5, 187.5]);
/// ```
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Values `start, start + step, ...` strictly below `end`.
///
/// Returns an empty vector when `step` is not positive, `end <= start`, or
/// the point count is not finite.
///
/// # Examples
/// ```
/// use pricer_core::math::arange;
///
/// assert_eq!(arange(75.0, 77.0, 0.5), vec![75.0, 75.5, 76.0, 76.5]);
/// ```
pub fn arange(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(end > start) {
        return Vec::new();
    }
    let len = ((end - start) / step).ceil();
    if !len.is_finite() || len >= usize::MAX as f64 {
        return Vec::new();
    }
    (0..len as usize).map(|i| start + step * i as f64).collect()
}
