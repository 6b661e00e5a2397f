//! Error definitions for preprocessing
use thiserror::Error;
pub type Result<T> = std::result::Result<T, PreprocessingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreprocessingError {
    #[error("not enough samples to estimate the standard deviation")]
    NotEnoughSamples,
    /// The column is constant, dividing by its standard deviation is undefined
    #[error("column `{0}` has zero standard deviation")]
    DegenerateColumn(String),
    #[error("column `{0}` contains non-finite values")]
    NonFinite(String),
    #[error("invalid column statistics: mean = {0}, std = {1}")]
    InvalidScale(String, String),
    #[error(transparent)]
    BaseCrate(#[from] carprice::Error),
}
