use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

/// An error when loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset file `{}` not found", .0.display())]
    NotFound(PathBuf),
    #[error("required column `{0}` is missing from the header")]
    MissingColumn(String),
    #[error("line {line}: value `{value}` in column `{column}` is not a finite number")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },
    #[error("at least two rows are required, found {0}")]
    TooFewRows(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
