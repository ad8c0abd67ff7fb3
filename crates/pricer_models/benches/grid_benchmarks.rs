//! Criterion benchmarks for the Black-Scholes grid pricer.
//!
//! Measures full-grid pricing (price, delta, gamma, rho) as the spot and
//! strike axes grow, plus the spot-change surface which prices twice.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::{arange, linspace};
use pricer_models::analytical::{price, price_change_surface};
use pricer_models::instruments::{OptionSpec, OptionType};

/// Dashboard-shaped request: spots ±25 % and strikes 50 %..150 % of `reference`.
fn grid_spec(reference: f64, spots: usize, strike_step: f64) -> OptionSpec {
    OptionSpec::builder(OptionType::Put)
        .spot(linspace(0.75 * reference, 1.25 * reference, spots))
        .strike(arange(0.5 * reference, 1.5 * reference, strike_step))
        .maturity_days(5.0)
        .rate(0.03)
        .volatility(0.05)
        .build()
        .unwrap()
}

fn bench_grid_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_pricing");

    for (spots, step) in [(20, 0.5), (100, 0.5), (500, 0.1)] {
        let spec = grid_spec(150.0, spots, step);
        let cells = spec.spot.len() * spec.strike.len();
        group.bench_with_input(BenchmarkId::new("price", cells), &spec, |b, spec| {
            b.iter(|| price(black_box(spec)).unwrap());
        });
    }

    group.finish();
}

fn bench_change_surface(c: &mut Criterion) {
    let spec = grid_spec(150.0, 20, 0.5);
    c.bench_function("price_change_surface_20x300", |b| {
        b.iter(|| price_change_surface(black_box(&spec), black_box(2.5)).unwrap());
    });
}

fn bench_scalar_pricing(c: &mut Criterion) {
    let spec = OptionSpec::new(OptionType::Call, 100.0, 100.0, 365.0, 0.05, 0.0, 0.2).unwrap();
    c.bench_function("price_scalar", |b| {
        b.iter(|| price(black_box(&spec)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_grid_pricing,
    bench_change_surface,
    bench_scalar_pricing
);
criterion_main!(benches);
