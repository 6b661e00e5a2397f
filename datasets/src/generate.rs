//! Utility functions for randomly generating datasets

use carprice::Dataset;
use ndarray::Array1;
use ndarray_rand::{
    rand::Rng,
    rand_distr::{StandardNormal, Uniform},
    RandomExt,
};

/// Generate `n` cars whose price falls linearly with the mileage, plus gaussian noise
///
/// Mileages are drawn uniformly from `km_range` (which must not be empty) and prices follow
/// `intercept + slope * km + noise * e` with `e` standard normal. The columns are named `km` and
/// `price`.
///
/// `linear_with_noise` can be used to assemble a synthetic dataset to test or benchmark the
/// training loop with a known ground truth.
pub fn linear_with_noise(
    n: usize,
    km_range: (f64, f64),
    intercept: f64,
    slope: f64,
    noise: f64,
    rng: &mut impl Rng,
) -> Dataset<f64> {
    let km: Array1<f64> = Array1::random_using(n, Uniform::new(km_range.0, km_range.1), rng);
    let e: Array1<f64> = Array1::random_using(n, StandardNormal, rng);
    let price = km.mapv(|x| intercept + slope * x) + e * noise;

    Dataset::from_pairs(km.iter().copied().zip(price.iter().copied())).with_names("km", "price")
}
