//! Integration tests for module exports.
//!
//! Verify that all public modules and types are reachable via absolute paths.

/// Test that the statistics helpers are accessible via absolute path.
#[test]
fn test_statistics_module_exports() {
    use pricer_core::math::statistics::{range, sample_mean, sample_std_dev};

    let values = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    assert_eq!(sample_mean(&values), 5.0);
    assert!((sample_std_dev(&values) - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    assert_eq!(range(&values), Some((2.0, 9.0)));
}

/// Test that the grid builders are re-exported from `math`.
#[test]
fn test_grid_module_exports() {
    use pricer_core::math::{arange, linspace};

    let spots = linspace(112.5, 187.5, 20);
    assert_eq!(spots.len(), 20);
    assert_eq!(spots[0], 112.5);
    assert_eq!(spots[19], 187.5);

    let strikes = arange(75.0, 225.0, 0.5);
    assert_eq!(strikes.len(), 300);
    assert_eq!(strikes[0], 75.0);
    assert!(*strikes.last().unwrap() < 225.0);
}

/// Test that types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use pricer_core::types::time::{Date, DayCountConvention};
    use pricer_core::types::{ErrorKind, PricingError};

    let quote = Date::parse_quote("7-Jul-17").unwrap();
    assert_eq!(quote, Date::from_ymd(2017, 7, 7).unwrap());

    assert_eq!(DayCountConvention::default().days_per_year(), 365.0);

    let err = PricingError::InsufficientData("one price".to_string());
    assert_eq!(err.kind(), ErrorKind::InsufficientData);
}

/// Test that date errors convert into the shared taxonomy.
#[test]
fn test_date_error_converts_to_pricing_error() {
    use pricer_core::types::time::Date;
    use pricer_core::types::{ErrorKind, PricingError};

    let err: PricingError = Date::parse_quote("not a date").unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}
