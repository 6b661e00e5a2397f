//! Batch gradient descent for a single-feature linear model
use crate::error::{LinearError, Result};
use crate::hyperparams::{GradientDescentParams, GradientDescentValidParams};
use crate::observer::{NoObserver, TrainingObserver};
use carprice::metrics::SingleTargetRegression;
use carprice::traits::{Fit, FitWith, Predict};
use carprice::{Dataset, Float, ParamGuard};
use ndarray::{Array1, ArrayBase, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A straight line `intercept + slope * x`
///
/// A fresh model has both parameters at zero. The parameters only change through training, a
/// fitted model is retrained by passing it to [`FitWith::fit_with`].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearModel<F> {
    intercept: F,
    slope: F,
}

impl<F: Float> LinearModel<F> {
    pub fn new(intercept: F, slope: F) -> Self {
        LinearModel { intercept, slope }
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    pub fn slope(&self) -> F {
        self.slope
    }

    /// Mean squared error of the model on a dataset, without the ½ factor
    pub fn cost(&self, dataset: &Dataset<F>) -> carprice::error::Result<F> {
        let predicted = self.predict(dataset);
        predicted.mean_squared_error(dataset)
    }

    /// Coefficient of determination (R²) of the model on a dataset
    ///
    /// Returns [`DegenerateTarget`](carprice::Error::DegenerateTarget) if all targets are equal.
    pub fn score(&self, dataset: &Dataset<F>) -> carprice::error::Result<F> {
        let predicted = self.predict(dataset);
        predicted.r2(dataset)
    }
}

impl<F: Float> Predict<F, F> for LinearModel<F> {
    fn predict(&self, x: F) -> F {
        self.intercept + self.slope * x
    }
}

impl<'a, F: Float, D: Data<Elem = F>> Predict<&'a ArrayBase<D, Ix1>, Array1<F>>
    for LinearModel<F>
{
    fn predict(&self, x: &'a ArrayBase<D, Ix1>) -> Array1<F> {
        x.mapv(|x| self.intercept + self.slope * x)
    }
}

impl<'a, F: Float> Predict<&'a Dataset<F>, Array1<F>> for LinearModel<F> {
    /// Predicts a target for every record of the dataset
    fn predict(&self, dataset: &'a Dataset<F>) -> Array1<F> {
        self.predict(dataset.records())
    }
}

/// Why training stopped
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The cost changed by less than the tolerance in iteration `iteration` (zero-based)
    Converged { iteration: usize },
    /// All `iterations` iterations ran without converging
    MaxIterationsReached { iterations: usize },
}

impl Termination {
    /// Number of iterations executed
    pub fn iterations(&self) -> usize {
        match *self {
            Termination::Converged { iteration } => iteration + 1,
            Termination::MaxIterationsReached { iterations } => iterations,
        }
    }

    pub fn converged(&self) -> bool {
        matches!(self, Termination::Converged { .. })
    }
}

/// Outcome of a training run: the learned model, one cost per iteration and the reason to stop
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct FittedGradientDescent<F> {
    model: LinearModel<F>,
    cost_history: Vec<F>,
    termination: Termination,
}

impl<F: Float> FittedGradientDescent<F> {
    pub fn model(&self) -> &LinearModel<F> {
        &self.model
    }

    pub fn into_model(self) -> LinearModel<F> {
        self.model
    }

    /// Cost of every iteration, computed before that iteration's update
    pub fn cost_history(&self) -> &[F] {
        &self.cost_history
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn initial_cost(&self) -> Option<F> {
        self.cost_history.first().copied()
    }

    pub fn final_cost(&self) -> Option<F> {
        self.cost_history.last().copied()
    }

    /// Whether the cost rose at least once between two iterations
    pub fn cost_increased(&self) -> bool {
        self.cost_history.windows(2).any(|w| w[1] > w[0])
    }
}

impl<F: Float> Predict<F, F> for FittedGradientDescent<F> {
    fn predict(&self, x: F) -> F {
        self.model.predict(x)
    }
}

impl<F: Float> GradientDescentValidParams<F> {
    /// Runs gradient descent, reporting every iteration to `observer`
    ///
    /// Training starts from `init` or, if `None`, from the zero model. The dataset is expected to
    /// be normalised already.
    pub fn fit_observed<O: TrainingObserver<F>>(
        &self,
        init: Option<LinearModel<F>>,
        dataset: &Dataset<F>,
        mut observer: O,
    ) -> Result<FittedGradientDescent<F>> {
        if dataset.is_empty() {
            return Err(LinearError::NotEnoughSamples);
        }

        let x = dataset.records();
        let y = dataset.targets();
        let m = F::cast(dataset.nsamples());
        let lr = self.learning_rate();

        let mut model = init.unwrap_or_default();
        let mut cost_history = Vec::with_capacity(self.max_iterations());
        let mut warned = false;

        for iteration in 0..self.max_iterations() {
            let errors = model.predict(x) - y;
            let cost = errors.dot(&errors) / m;
            let grad_intercept = errors.sum() / m;
            let grad_slope = errors.dot(x) / m;

            model = LinearModel {
                intercept: model.intercept - lr * grad_intercept,
                slope: model.slope - lr * grad_slope,
            };
            cost_history.push(cost);

            log::trace!(
                "iteration {}: cost = {}, intercept = {}, slope = {}",
                iteration,
                cost,
                model.intercept,
                model.slope
            );
            observer.observe(iteration, &model, cost);

            if iteration >= 1 {
                let previous = cost_history[iteration - 1];
                if cost > previous && !warned {
                    log::warn!(
                        "cost increased from {} to {} in iteration {}, the learning rate {} may be too large",
                        previous,
                        cost,
                        iteration,
                        lr
                    );
                    warned = true;
                }

                if (previous - cost).abs() < self.tolerance() {
                    log::debug!("converged after {} iterations", iteration + 1);
                    return Ok(FittedGradientDescent {
                        model,
                        cost_history,
                        termination: Termination::Converged { iteration },
                    });
                }
            }
        }

        log::debug!(
            "stopped after {} iterations without converging",
            self.max_iterations()
        );

        Ok(FittedGradientDescent {
            model,
            cost_history,
            termination: Termination::MaxIterationsReached {
                iterations: self.max_iterations(),
            },
        })
    }
}

impl<F: Float> GradientDescentParams<F> {
    /// Checks the hyperparameters, then trains like
    /// [`GradientDescentValidParams::fit_observed`]
    pub fn fit_observed<O: TrainingObserver<F>>(
        &self,
        init: Option<LinearModel<F>>,
        dataset: &Dataset<F>,
        observer: O,
    ) -> Result<FittedGradientDescent<F>> {
        self.check_ref()?.fit_observed(init, dataset, observer)
    }
}

impl<F: Float> Fit<F, LinearError> for GradientDescentValidParams<F> {
    type Object = FittedGradientDescent<F>;

    /// Trains a model starting from zero intercept and zero slope
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        self.fit_observed(None, dataset, NoObserver)
    }
}

impl<F: Float> FitWith<F, LinearError> for GradientDescentValidParams<F> {
    type ObjectIn = Option<LinearModel<F>>;
    type ObjectOut = FittedGradientDescent<F>;

    /// Trains a model starting from `model`, or from zero if `None`
    fn fit_with(&self, model: Self::ObjectIn, dataset: &Dataset<F>) -> Result<Self::ObjectOut> {
        self.fit_observed(model, dataset, NoObserver)
    }
}
