//! `carprice-cli` wires the carprice crates into three binaries:
//!
//! * `train` loads a CSV dataset, normalises it, runs gradient descent and saves the model,
//! * `predict` loads a saved model and prices mileages typed at a prompt,
//! * `score` loads a saved model and a dataset and reports R², MSE and MAE.
//!
//! The library part holds everything the binaries do besides argument parsing, so that it can be
//! tested without a terminal.

pub mod evaluate;
pub mod input;
pub mod logging;
pub mod model;
pub mod plot;
pub mod prompt;
pub mod training;

pub use evaluate::{evaluate, EvaluateError, Evaluation, FitQuality, StatsSource};
pub use input::{parse_mileage, InputError, PromptInput};
pub use model::{ModelFileError, ModelRecord, PersistedModel, PricePrediction};
pub use prompt::run_prompt;
pub use training::{train, TrainError, TrainedModel};
