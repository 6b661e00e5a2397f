//!
//! `carprice-linear` fits a straight line to a single-feature dataset by batch gradient descent.
//!
//! ## Current state
//!
//! `carprice-linear` currently provides
//! - the [`GradientDescent`] regressor with its hyperparameters,
//! - the fitted [`LinearModel`] predicting scalars, arrays and whole datasets,
//! - a per-iteration [`TrainingObserver`] hook and the full cost history of a run.
//!
//! The regressor works on whatever units it is given. Car prices and mileages differ by several
//! orders of magnitude, so the dataset is normalised first with `carprice-preprocessing` and
//! predictions are mapped back to prices afterwards.
//!
//! ## Example
//!
//! ```rust
//! use carprice::traits::{Fit, Predict, Transformer};
//! use carprice::Dataset;
//! use carprice_linear::GradientDescent;
//! use carprice_preprocessing::ZScoreScaler;
//!
//! let raw = Dataset::from_pairs(vec![(0., 10000.), (100000., 8000.), (200000., 6000.)]);
//! let scaler = ZScoreScaler::new().fit(&raw).unwrap();
//! let fitted = GradientDescent::params()
//!     .learning_rate(0.1)
//!     .tolerance(1e-8)
//!     .fit(&scaler.transform(raw))
//!     .unwrap();
//!
//! let z: f64 = fitted.model().predict(scaler.normalize_feature(50000.));
//! let price = scaler.denormalize_target(z);
//! assert!((price - 9000.).abs() < 90.);
//! ```

mod algorithm;
mod error;
mod hyperparams;
mod observer;

pub use algorithm::*;
pub use error::*;
pub use hyperparams::*;
pub use observer::*;
