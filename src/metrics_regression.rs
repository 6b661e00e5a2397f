//! Common metrics for regression
//!
//! This module implements common comparison metrices for continuous variables. All of them
//! compare a prediction (`self`) against the ground truth (`compare_to`) and return an error
//! instead of `NaN` when the comparison is undefined.

use ndarray::ArrayView1;

use crate::{
    dataset::{AsSingleTargets, Float},
    error::{Error, Result},
};

fn check_shapes<F>(pred: &ArrayView1<F>, truth: &ArrayView1<F>) -> Result<()> {
    if pred.len() != truth.len() {
        return Err(Error::MismatchedShapes(pred.len(), truth.len()));
    }
    if truth.is_empty() {
        return Err(Error::NotEnoughSamples);
    }
    Ok(())
}

/// Regression metrices trait for single targets.
///
/// It is possible to compute the listed mectrics between:
/// * One-dimensional array - One-dimensional array
/// * One-dimensional array - dataset
/// * dataset - One-dimensional array
///
/// To evaluate the accuracy of a prediction, use
/// ```
/// use carprice::prelude::*;
/// use ndarray::array;
///
/// let truth = array![1f64, 2., 3.];
/// let prediction = array![1.1f64, 1.9, 3.0];
/// let r2 = prediction.r2(&truth)?;
/// assert!(r2 > 0.9);
/// # Ok::<(), carprice::Error>(())
/// ```
pub trait SingleTargetRegression<F: Float>: AsSingleTargets<F> {
    /// Maximal error between two continuous variables
    fn max_error<T: AsSingleTargets<F>>(&self, compare_to: &T) -> Result<F> {
        let (pred, truth) = (self.as_single_targets(), compare_to.as_single_targets());
        check_shapes(&pred, &truth)?;

        Ok(pred
            .iter()
            .zip(truth.iter())
            .map(|(p, t)| (*p - *t).abs())
            .fold(F::neg_infinity(), F::max))
    }

    /// Mean error between two continuous variables
    fn mean_absolute_error<T: AsSingleTargets<F>>(&self, compare_to: &T) -> Result<F> {
        let (pred, truth) = (self.as_single_targets(), compare_to.as_single_targets());
        check_shapes(&pred, &truth)?;

        let sum: F = pred
            .iter()
            .zip(truth.iter())
            .map(|(p, t)| (*p - *t).abs())
            .sum();
        Ok(sum / F::cast(truth.len()))
    }

    /// Mean squared error between two continuous variables
    fn mean_squared_error<T: AsSingleTargets<F>>(&self, compare_to: &T) -> Result<F> {
        let (pred, truth) = (self.as_single_targets(), compare_to.as_single_targets());
        check_shapes(&pred, &truth)?;

        let sum: F = pred
            .iter()
            .zip(truth.iter())
            .map(|(p, t)| (*p - *t) * (*p - *t))
            .sum();
        Ok(sum / F::cast(truth.len()))
    }

    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// Returns [`DegenerateTarget`](Error::DegenerateTarget) when all values of `compare_to` are
    /// identical, the total sum of squares is zero in that case.
    // r2 = 1 - sum((pred_i - y_i)^2)/sum((mean_y - y_i)^2)
    // the mean is taken over `compare_to`, the ground truth
    fn r2<T: AsSingleTargets<F>>(&self, compare_to: &T) -> Result<F> {
        let (pred, truth) = (self.as_single_targets(), compare_to.as_single_targets());
        check_shapes(&pred, &truth)?;

        if truth.iter().all(|y| *y == truth[0]) {
            return Err(Error::DegenerateTarget);
        }

        let mean = truth.mean().ok_or(Error::NotEnoughSamples)?;
        let ss_tot: F = truth.iter().map(|y| (*y - mean) * (*y - mean)).sum();
        if !(ss_tot > F::zero()) {
            return Err(Error::DegenerateTarget);
        }

        let ss_res: F = pred
            .iter()
            .zip(truth.iter())
            .map(|(p, t)| (*t - *p) * (*t - *p))
            .sum();

        Ok(F::one() - ss_res / ss_tot)
    }
}

impl<F: Float, T: AsSingleTargets<F>> SingleTargetRegression<F> for T {}
