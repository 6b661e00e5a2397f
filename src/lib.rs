//! `carprice` estimates the price of a used car from its mileage.
//!
//! The workspace is split the way classical machine learning toolkits usually are: this crate
//! carries the shared vocabulary, the algorithms live in their own crates.
//!
//! * [`Dataset`] is a single-feature dataset: one feature column (mileage) and one target
//!   column (price) of the same length.
//! * [`traits`] declares how algorithms are fitted and how fitted models predict.
//! * [`ParamGuard`] validates hyperparameters before an algorithm is fitted.
//! * [`metrics`] compares predictions against ground truth, most notably with the coefficient of
//!   determination (R²).
//!
//! The algorithm crates are
//!
//! * `carprice-preprocessing`: z-score normalisation of both columns,
//! * `carprice-linear`: a linear model fitted by batch gradient descent,
//!
//! and `carprice-datasets` loads the CSV files while `carprice-cli` provides the `train`,
//! `predict` and `score` binaries.

pub mod dataset;
pub mod error;
mod metrics_regression;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Dataset, Float};
pub use error::Error;
pub use param_guard::ParamGuard;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::metrics_regression::SingleTargetRegression;
}
