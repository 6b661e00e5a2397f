use carprice::traits::{Fit, Transformer};
use carprice_datasets::generate::linear_with_noise;
use carprice_linear::GradientDescent;
use carprice_preprocessing::ZScoreScaler;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn perform_gd(num_rows: usize) {
    let mut rng = SmallRng::seed_from_u64(42);
    let raw = linear_with_noise(num_rows, (5000., 300000.), 8500., -0.02, 400., &mut rng);
    let scaler = ZScoreScaler::new().fit(&raw).unwrap();
    let dataset = scaler.transform(raw);

    let _model = GradientDescent::params()
        .learning_rate(0.05)
        .fit(&dataset)
        .unwrap();
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("carprice_linear");
    let sizes: [usize; 3] = [100, 1_000, 10_000];
    for size in sizes {
        group.bench_with_input(
            BenchmarkId::new("GradientDescent", size),
            &size,
            |b, size| {
                b.iter(|| perform_gd(*size));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
