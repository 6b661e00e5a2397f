//! Datasets
//!
//! This module implements the single-feature dataset struct and the helper traits extending
//! its functionality.
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, NdFloat, ScalarOperand};

use num_traits::{FromPrimitive, NumCast};

use std::iter::Sum;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

mod impl_dataset;
mod iter;

pub use iter::Iter;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used both for the records and
/// for the targets of a dataset.
pub trait Float:
    NdFloat + FromPrimitive + ScalarOperand + Default + Sum + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// A single-feature dataset
///
/// Records and targets are two columns of the same length. The records hold the feature (for
/// example the mileage of a car) and the targets the value to regress (for example its price).
/// Each column carries a name, used in error messages, summaries and plots.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    pub(crate) records: Array1<F>,
    pub(crate) targets: Array1<F>,
    pub(crate) feature_name: String,
    pub(crate) target_name: String,
}

/// Access to a single target column
///
/// Implemented for one-dimensional arrays and for datasets, so that metrics can compare a
/// prediction either against a plain array or against the targets of a dataset.
pub trait AsSingleTargets<F> {
    fn as_single_targets(&self) -> ArrayView1<'_, F>;
}

impl<F, D: Data<Elem = F>> AsSingleTargets<F> for ArrayBase<D, Ix1> {
    fn as_single_targets(&self) -> ArrayView1<'_, F> {
        self.view()
    }
}

impl<F: Float> AsSingleTargets<F> for Dataset<F> {
    fn as_single_targets(&self) -> ArrayView1<'_, F> {
        self.targets.view()
    }
}
