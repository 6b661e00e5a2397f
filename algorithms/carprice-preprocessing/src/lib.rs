//! # Preprocessing
//! `carprice-preprocessing` provides the normalisation applied to a dataset before a linear
//! model is trained on it.
//!
//! ## Current state
//!
//! Right now `carprice-preprocessing` provides the following preprocessing algorithms:
//! * z-score scaling of both the feature and the target column, together with its inverse
//!
//! The fitted scaler is shared between training, prediction and evaluation so that a prediction
//! made on raw kilometres can be mapped back to a raw price.

mod error;
mod linear_scaling;

pub use error::{PreprocessingError, Result};
pub use linear_scaling::{ColumnScale, FittedZScore, ZScoreScaler};
