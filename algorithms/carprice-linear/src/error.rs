//! An error when training the gradient descent regressor
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinearError>;

/// An error when training the gradient descent regressor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinearError {
    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(String),
    #[error("tolerance must be finite and positive, got {0}")]
    InvalidTolerance(String),
    #[error("at least one iteration is required")]
    InvalidMaxIterations,
    #[error("At least one sample needed")]
    NotEnoughSamples,
    #[error(transparent)]
    BaseCrate(#[from] carprice::Error),
}
