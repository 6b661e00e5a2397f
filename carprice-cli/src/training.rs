//! Normalise, then train: the pipeline behind the `train` binary
use carprice::traits::{Fit, Transformer};
use carprice::Dataset;
use carprice_linear::{
    FittedGradientDescent, GradientDescentParams, LinearError, TrainingObserver,
};
use carprice_preprocessing::{FittedZScore, PreprocessingError, ZScoreScaler};
use thiserror::Error;

use crate::model::PersistedModel;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),
    #[error(transparent)]
    Linear(#[from] LinearError),
    #[error("training diverged after {iterations} iterations, try a smaller learning rate")]
    Diverged { iterations: usize },
}

/// Everything a training run produces
#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub scaler: FittedZScore<f64>,
    pub normalized: Dataset<f64>,
    pub fitted: FittedGradientDescent<f64>,
}

impl TrainedModel {
    /// The part of the run that is written to disk
    pub fn persisted(&self) -> PersistedModel {
        PersistedModel::new(self.fitted.model(), &self.scaler)
    }
}

/// Fits the z-score statistics on `dataset`, then runs gradient descent on the normalised data
///
/// A run whose parameters end up infinite or NaN is reported as [`TrainError::Diverged`].
pub fn train<O: TrainingObserver<f64>>(
    dataset: &Dataset<f64>,
    params: &GradientDescentParams<f64>,
    observer: O,
) -> Result<TrainedModel, TrainError> {
    let scaler = ZScoreScaler::new().fit(dataset)?;
    let normalized = scaler.transform(dataset.clone());
    let fitted = params.fit_observed(None, &normalized, observer)?;

    let model = fitted.model();
    if !model.intercept().is_finite() || !model.slope().is_finite() {
        return Err(TrainError::Diverged {
            iterations: fitted.termination().iterations(),
        });
    }

    Ok(TrainedModel {
        scaler,
        normalized,
        fitted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use carprice_linear::{GradientDescent, LinearModel, NoObserver};

    #[test]
    fn predicts_nine_thousand_at_fifty_thousand_km() {
        let dataset = Dataset::from_pairs(vec![(0., 10000.), (100000., 8000.), (200000., 6000.)])
            .with_names("km", "price");
        let params = GradientDescent::params()
            .learning_rate(0.1)
            .tolerance(1e-8)
            .max_iterations(2000);

        let trained = train(&dataset, &params, NoObserver).unwrap();
        assert!(trained.fitted.termination().converged());

        let prediction = trained.persisted().predict_price(50000.).unwrap();
        assert_abs_diff_eq!(prediction.price, 9000., epsilon = 90.);
    }

    #[test]
    fn observer_is_forwarded() {
        let dataset = Dataset::from_pairs(vec![(1., 3.), (2., 2.), (3., 1.)]);
        let params = GradientDescent::params().max_iterations(7).tolerance(1e-15);
        let mut calls = 0;

        let trained = train(&dataset, &params, |_: usize, _: &LinearModel<f64>, _: f64| {
            calls += 1
        })
        .unwrap();

        assert_eq!(calls, 7);
        assert_eq!(trained.fitted.cost_history().len(), 7);
    }

    #[test]
    fn degenerate_column_stops_training() {
        let dataset = Dataset::from_pairs(vec![(5., 3.), (5., 2.)]).with_names("km", "price");
        let params = GradientDescent::params();

        assert_eq!(
            train(&dataset, &params, NoObserver).unwrap_err(),
            TrainError::Preprocessing(PreprocessingError::DegenerateColumn("km".to_string()))
        );
    }

    #[test]
    fn exploding_learning_rate_is_diverged() {
        let dataset = Dataset::from_pairs(vec![(0., 10000.), (100000., 8000.), (200000., 6000.)]);
        let params = GradientDescent::params()
            .learning_rate(5.)
            .max_iterations(1000);

        assert!(matches!(
            train(&dataset, &params, NoObserver).unwrap_err(),
            TrainError::Diverged { .. }
        ));
    }

    #[test]
    fn invalid_params_are_reported() {
        let dataset = Dataset::from_pairs(vec![(1., 3.), (2., 2.)]);
        let params = GradientDescent::params().max_iterations(0);

        assert_eq!(
            train(&dataset, &params, NoObserver).unwrap_err(),
            TrainError::Linear(LinearError::InvalidMaxIterations)
        );
    }
}
