//! `carprice-datasets` loads car price datasets and generates synthetic ones.
//!
//! ## Current State
//!
//! * [`load_csv`] and [`from_reader`] read a CSV file with a header row into a
//!   [`carprice::Dataset`], with `km` as feature and `price` as target
//! * [`describe`] computes minimum, maximum, mean, median and standard deviation of both columns
//! * `generate` (behind the `generate` feature) samples noisy linear datasets for tests and
//!   benchmarks
//!
//! ## Using a dataset
//!
//! ```no_run
//! let dataset = carprice_datasets::load_csv("data/data.csv")?;
//! println!("{}", carprice_datasets::describe(&dataset));
//! # Ok::<(), carprice_datasets::DatasetError>(())
//! ```

mod dataset;
mod error;
mod summary;

#[cfg(feature = "generate")]
pub mod generate;

pub use dataset::{
    from_reader, from_reader_with_columns, load_csv, FEATURE_COLUMN, TARGET_COLUMN,
};
pub use error::{DatasetError, Result};
pub use summary::{describe, ColumnSummary, DatasetSummary};
