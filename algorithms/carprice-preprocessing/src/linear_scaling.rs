//! Z-score scaling of both columns of a dataset

use crate::error::{PreprocessingError, Result};
use carprice::traits::{Fit, Transformer};
use carprice::{Dataset, Float};
use ndarray::ArrayView1;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Z-score scaler: learns the mean and the standard deviation of the feature and of the target
/// column of a dataset, producing a [fitted scaler](FittedZScore) that maps both columns to
/// zero mean and unit standard deviation and back.
///
/// The standard deviation is the sample standard deviation by default, i.e. the sum of squared
/// deviations is divided by `n - 1`. Use [`ddof`](Self::ddof) to change the delta degrees of
/// freedom.
///
/// ### Example
///
/// ```rust
/// use carprice::traits::{Fit, Transformer};
/// use carprice::Dataset;
/// use carprice_preprocessing::ZScoreScaler;
///
/// let dataset = Dataset::from_pairs(vec![(0., 10000.), (100000., 8000.), (200000., 6000.)]);
/// // learn the column statistics
/// let scaler = ZScoreScaler::new().fit(&dataset)?;
/// assert_eq!(scaler.feature().mean(), 100000.);
/// // normalise the dataset with them
/// let normalized = scaler.transform(dataset);
/// # Ok::<(), carprice_preprocessing::PreprocessingError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZScoreScaler {
    ddof: usize,
}

impl Default for ZScoreScaler {
    fn default() -> Self {
        ZScoreScaler::new()
    }
}

impl ZScoreScaler {
    /// Initializes the scaler with the sample standard deviation (`ddof = 1`)
    pub fn new() -> Self {
        Self { ddof: 1 }
    }

    /// Setter for the delta degrees of freedom of the standard deviation
    pub fn ddof(mut self, ddof: usize) -> Self {
        self.ddof = ddof;
        self
    }
}

impl<F: Float> Fit<F, PreprocessingError> for ZScoreScaler {
    type Object = FittedZScore<F>;

    /// Estimates mean and standard deviation of both columns.
    ///
    /// Returns an error if there are not more samples than `ddof` (two with the default), if a
    /// column contains non-finite values or if a column is constant.
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let feature =
            ColumnScale::estimate(dataset.records().view(), self.ddof, dataset.feature_name())?;
        let target =
            ColumnScale::estimate(dataset.targets().view(), self.ddof, dataset.target_name())?;

        log::debug!(
            "fitted z-score: {} mean = {}, std = {}; {} mean = {}, std = {}",
            dataset.feature_name(),
            feature.mean,
            feature.std,
            dataset.target_name(),
            target.mean,
            target.std
        );

        Ok(FittedZScore { feature, target })
    }
}

/// Mean and standard deviation of a single column
///
/// The standard deviation is always finite and strictly positive.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnScale<F> {
    mean: F,
    std: F,
}

impl<F: Float> ColumnScale<F> {
    /// Rebuild column statistics, for example from a persisted model
    ///
    /// Returns [`InvalidScale`](PreprocessingError::InvalidScale) if the mean is not finite or
    /// the standard deviation is not finite and strictly positive.
    pub fn new(mean: F, std: F) -> Result<Self> {
        if !mean.is_finite() || !std.is_finite() || std <= F::zero() {
            return Err(PreprocessingError::InvalidScale(
                mean.to_string(),
                std.to_string(),
            ));
        }

        Ok(ColumnScale { mean, std })
    }

    fn estimate(values: ArrayView1<F>, ddof: usize, name: &str) -> Result<Self> {
        if values.len() < 2 || values.len() <= ddof {
            return Err(PreprocessingError::NotEnoughSamples);
        }
        if values.iter().any(|x| !x.is_finite()) {
            return Err(PreprocessingError::NonFinite(name.to_string()));
        }
        // a constant column can still end up with a tiny non-zero deviation through rounding
        if values.iter().all(|x| *x == values[0]) {
            return Err(PreprocessingError::DegenerateColumn(name.to_string()));
        }

        let mean = values.mean().ok_or(PreprocessingError::NotEnoughSamples)?;
        let std = values.std(F::cast(ddof));
        if !std.is_finite() || std <= F::zero() {
            return Err(PreprocessingError::DegenerateColumn(name.to_string()));
        }

        Ok(ColumnScale { mean, std })
    }

    pub fn mean(&self) -> F {
        self.mean
    }

    pub fn std(&self) -> F {
        self.std
    }

    /// `(x - mean) / std`
    pub fn normalize(&self, x: F) -> F {
        (x - self.mean) / self.std
    }

    /// `z * std + mean`, the inverse of [`normalize`](Self::normalize)
    pub fn denormalize(&self, z: F) -> F {
        z * self.std + self.mean
    }
}

/// The result of fitting a [z-score scaler](ZScoreScaler).
///
/// Holds the statistics of the feature and of the target column. They are read-only once
/// estimated and are shared by training, plotting and persistence.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FittedZScore<F> {
    feature: ColumnScale<F>,
    target: ColumnScale<F>,
}

impl<F: Float> FittedZScore<F> {
    /// Assemble a fitted scaler from already known column statistics
    pub fn from_parts(feature: ColumnScale<F>, target: ColumnScale<F>) -> Self {
        FittedZScore { feature, target }
    }

    pub fn feature(&self) -> &ColumnScale<F> {
        &self.feature
    }

    pub fn target(&self) -> &ColumnScale<F> {
        &self.target
    }

    pub fn normalize_feature(&self, x: F) -> F {
        self.feature.normalize(x)
    }

    pub fn denormalize_feature(&self, z: F) -> F {
        self.feature.denormalize(z)
    }

    pub fn normalize_target(&self, y: F) -> F {
        self.target.normalize(y)
    }

    pub fn denormalize_target(&self, z: F) -> F {
        self.target.denormalize(z)
    }

    /// Maps a normalised dataset back to the original units
    pub fn inverse_transform(&self, dataset: Dataset<F>) -> Dataset<F> {
        let (feature, target) = (self.feature, self.target);
        dataset
            .map_records(|z| feature.denormalize(z))
            .map_targets(|z| target.denormalize(z))
    }
}

impl<F: Float> Transformer<Dataset<F>, Dataset<F>> for FittedZScore<F> {
    /// Normalises both columns of the dataset, column names are kept
    fn transform(&self, dataset: Dataset<F>) -> Dataset<F> {
        let (feature, target) = (self.feature, self.target);
        dataset
            .map_records(|x| feature.normalize(x))
            .map_targets(|y| target.normalize(y))
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnScale, FittedZScore, ZScoreScaler};
    use crate::error::PreprocessingError;
    use approx::assert_abs_diff_eq;
    use carprice::traits::{Fit, Transformer};
    use carprice::Dataset;
    use ndarray::array;

    fn cars() -> Dataset<f64> {
        Dataset::from_pairs(vec![
            (240000., 3650.),
            (139800., 3800.),
            (150500., 4400.),
            (185530., 4450.),
            (176000., 5250.),
            (114800., 5350.),
            (166800., 5800.),
            (89000., 5990.),
            (144500., 5999.),
            (84000., 6200.),
        ])
        .with_names("km", "price")
    }

    #[test]
    fn estimates_sample_statistics() {
        let dataset = Dataset::from_pairs(vec![(1., 10.), (2., 20.), (3., 30.)]);
        let scaler = ZScoreScaler::new().fit(&dataset).unwrap();

        assert_abs_diff_eq!(scaler.feature().mean(), 2.);
        assert_abs_diff_eq!(scaler.feature().std(), 1.);
        assert_abs_diff_eq!(scaler.target().mean(), 20.);
        assert_abs_diff_eq!(scaler.target().std(), 10.);
    }

    #[test]
    fn population_statistics_with_zero_ddof() {
        let dataset = Dataset::from_pairs(vec![(1., 1.), (3., 5.)]);
        let scaler = ZScoreScaler::new().ddof(0).fit(&dataset).unwrap();

        assert_abs_diff_eq!(scaler.feature().std(), 1.);
        assert_abs_diff_eq!(scaler.target().std(), 2.);
    }

    #[test]
    fn transformed_columns_are_standardized() {
        let scaler = ZScoreScaler::new().fit(&cars()).unwrap();
        let normalized = scaler.transform(cars());

        assert_abs_diff_eq!(normalized.records().mean().unwrap(), 0., epsilon = 1e-12);
        assert_abs_diff_eq!(normalized.targets().mean().unwrap(), 0., epsilon = 1e-12);
        assert_abs_diff_eq!(normalized.records().std(1.), 1., epsilon = 1e-12);
        assert_abs_diff_eq!(normalized.targets().std(1.), 1., epsilon = 1e-12);
        assert_eq!(normalized.feature_name(), "km");
        assert_eq!(normalized.target_name(), "price");
    }

    #[test]
    fn normalization_round_trip() {
        let original = cars();
        let scaler = ZScoreScaler::new().fit(&original).unwrap();
        let restored = scaler.inverse_transform(scaler.transform(original.clone()));

        assert_abs_diff_eq!(restored.records(), original.records(), epsilon = 1e-8);
        assert_abs_diff_eq!(restored.targets(), original.targets(), epsilon = 1e-8);
    }

    #[test]
    fn scalar_helpers_match_dataset_transform() {
        let scaler = ZScoreScaler::new().fit(&cars()).unwrap();
        let normalized = scaler.transform(cars());

        assert_abs_diff_eq!(
            scaler.normalize_feature(240000.),
            normalized.records()[0],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            scaler.denormalize_target(normalized.targets()[0]),
            3650.,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            scaler.denormalize_feature(scaler.normalize_feature(1234.)),
            1234.,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            scaler.normalize_target(scaler.denormalize_target(-0.5)),
            -0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn constant_column_is_degenerate() {
        let dataset = Dataset::from_pairs(vec![(1., 7000.), (2., 7000.), (3., 7000.)])
            .with_names("km", "price");
        let res: Result<FittedZScore<f64>, _> = ZScoreScaler::new().fit(&dataset);

        assert_eq!(
            res.unwrap_err(),
            PreprocessingError::DegenerateColumn("price".to_string())
        );
    }

    #[test]
    fn constant_fractional_column_is_degenerate() {
        let dataset = Dataset::from_pairs(vec![(0.1, 1.), (0.1, 2.), (0.1, 3.)]);
        let res: Result<FittedZScore<f64>, _> = ZScoreScaler::new().fit(&dataset);

        assert_eq!(
            res.unwrap_err(),
            PreprocessingError::DegenerateColumn("feature".to_string())
        );
    }

    #[test]
    fn single_sample_is_not_enough() {
        let dataset = Dataset::from_pairs(vec![(1., 2.)]);
        let res: Result<FittedZScore<f64>, _> = ZScoreScaler::new().fit(&dataset);

        assert_eq!(res.unwrap_err(), PreprocessingError::NotEnoughSamples);
    }

    #[test]
    fn rejects_non_finite_values() {
        let dataset = Dataset::new(array![1., f64::NAN, 3.], array![1., 2., 3.])
            .unwrap()
            .with_names("km", "price");
        let res: Result<FittedZScore<f64>, _> = ZScoreScaler::new().fit(&dataset);

        assert_eq!(
            res.unwrap_err(),
            PreprocessingError::NonFinite("km".to_string())
        );
    }

    #[test]
    fn column_scale_validation() {
        assert!(ColumnScale::new(100000., 50000.).is_ok());
        assert!(ColumnScale::new(1., 0.).is_err());
        assert!(ColumnScale::new(1., -2.).is_err());
        assert!(ColumnScale::new(f64::NAN, 1.).is_err());
        assert!(ColumnScale::new(1., f64::INFINITY).is_err());
    }

    #[test]
    fn rebuilt_scaler_matches_fitted_one() {
        let fitted = ZScoreScaler::new().fit(&cars()).unwrap();
        let rebuilt = FittedZScore::from_parts(
            ColumnScale::new(fitted.feature().mean(), fitted.feature().std()).unwrap(),
            ColumnScale::new(fitted.target().mean(), fitted.target().std()).unwrap(),
        );

        assert_eq!(fitted, rebuilt);
    }
}
