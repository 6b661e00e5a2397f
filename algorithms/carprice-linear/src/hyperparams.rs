use crate::error::LinearError;
use carprice::{Float, ParamGuard};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Batch gradient descent on a single-feature linear model
///
/// Every iteration computes the prediction error over the whole dataset, records the mean squared
/// error and moves intercept and slope against their gradients, both at once. Training stops as
/// soon as two consecutive costs differ by less than [`tolerance`](Self::tolerance), or after
/// [`max_iterations`](Self::max_iterations) iterations.
///
/// The learning rate is not adapted during training. The regressor is meant to be fitted on
/// z-score normalised data, where rates between `0.01` and `0.1` are well behaved.
///
/// ## Examples
///
/// ```rust
/// use carprice::traits::{Fit, Predict};
/// use carprice::Dataset;
/// use carprice_linear::GradientDescent;
///
/// let dataset = Dataset::from_pairs(vec![(-1., 1.), (0., 0.), (1., -1.)]);
/// let fitted = GradientDescent::params()
///     .learning_rate(0.1)
///     .tolerance(1e-10)
///     .fit(&dataset)?;
/// let price: f64 = fitted.model().predict(0.5);
/// assert!((price + 0.5).abs() < 1e-3);
/// # Ok::<(), carprice_linear::LinearError>(())
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentValidParams<F> {
    learning_rate: F,
    tolerance: F,
    max_iterations: usize,
}

impl<F: Float> GradientDescentValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDescentParams<F>(pub(crate) GradientDescentValidParams<F>);

/// Entry point of the regressor, holds no state by itself
pub struct GradientDescent;

impl GradientDescent {
    pub fn params<F: Float>() -> GradientDescentParams<F> {
        GradientDescentParams::new()
    }
}

impl<F: Float> Default for GradientDescentParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> GradientDescentParams<F> {
    /// Learning rate 0.01, tolerance 1e-6 and at most 1000 iterations
    pub fn new() -> Self {
        Self(GradientDescentValidParams {
            learning_rate: F::cast(0.01),
            tolerance: F::cast(1e-6),
            max_iterations: 1000,
        })
    }

    /// Step size applied to both gradients
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Stop once the cost changes by less than this between two iterations
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Upper bound on the number of iterations
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.0.max_iterations = max_iterations;
        self
    }
}

impl<F: Float> ParamGuard for GradientDescentParams<F> {
    type Checked = GradientDescentValidParams<F>;
    type Error = LinearError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let params = &self.0;
        if !params.learning_rate.is_finite() || params.learning_rate <= F::zero() {
            Err(LinearError::InvalidLearningRate(
                params.learning_rate.to_string(),
            ))
        } else if !params.tolerance.is_finite() || params.tolerance <= F::zero() {
            Err(LinearError::InvalidTolerance(params.tolerance.to_string()))
        } else if params.max_iterations == 0 {
            Err(LinearError::InvalidMaxIterations)
        } else {
            Ok(params)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
