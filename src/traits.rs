//! Provide traits for different classes of algorithms
//!

use crate::dataset::{Dataset, Float};
use std::convert::From;

/// Transformation algorithms
///
/// A transformer takes a dataset and transforms it into a different one. It has no concept of
/// state and provides therefore no method to predict new data. A typical example is the z-score
/// normalisation of a dataset once its statistics are known.
pub trait Transformer<X, Y> {
    fn transform(&self, x: X) -> Y;
}

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// the z-score scaler learns the mean and standard deviation of both columns and the gradient
/// descent regressor learns an intercept and a slope.
pub trait Fit<F: Float, E: std::error::Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object, E>;
}

/// Fit with an optional starting point
///
/// This is the same as [`Fit`] but takes an already existing model. With `None` the algorithm
/// starts from its initial state, with `Some(model)` it resumes from the given model, which is
/// how a fitted model gets retrained.
pub trait FitWith<F: Float, E: std::error::Error + From<crate::error::Error>> {
    type ObjectIn;
    type ObjectOut;

    fn fit_with(&self, model: Self::ObjectIn, dataset: &Dataset<F>)
        -> Result<Self::ObjectOut, E>;
}

/// Predict with model
///
/// Prediction is a pure function of the fitted state, the model is only read.
pub trait Predict<X, Y> {
    fn predict(&self, x: X) -> Y;
}
