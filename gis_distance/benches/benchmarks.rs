use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gis_distance::{DistanceCalculator, Formula};

fn benchmark_fresh(formula: Formula, points: (f64, f64, f64, f64)) -> Result<f64> {
    let (lat1, lon1, lat2, lon2) = points;
    let mut calc = DistanceCalculator::new(lat1, lon1, lat2, lon2)?;
    calc.set_formula_kind(formula);
    Ok(calc.distance()?)
}

fn criterion_benchmark(c: &mut Criterion) {
    let points = (40.47, 73.58, 34.3, 118.15);
    for formula in Formula::ALL {
        c.bench_function(&format!("Uncached {formula} distance"), |b| {
            b.iter(|| benchmark_fresh(black_box(formula), black_box(points)))
        });
    }

    let mut calc = DistanceCalculator::new(points.0, points.1, points.2, points.3)
        .expect("benchmark points are valid");
    c.bench_function("Cached haversine distance", |b| {
        b.iter(|| black_box(&mut calc).distance())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
