//! Error types in carprice
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("not enough samples")]
    NotEnoughSamples,
    #[error("mismatched lengths: {0} records but {1} targets")]
    MismatchedShapes(usize, usize),
    /// All targets are identical, so the total sum of squares is zero and R² is undefined
    #[error("targets have zero total variance, the coefficient of determination is undefined")]
    DegenerateTarget,
    #[error("non-finite value in {0}")]
    NonFinite(String),
}
