//! Descriptive statistics of a dataset's columns
use std::fmt;

use carprice::Dataset;
use ndarray::ArrayView1;

/// Count, extremes, mean, median and sample standard deviation of one column
///
/// Statistics that are undefined for the column (for example the standard deviation of a single
/// value) are `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

impl ColumnSummary {
    fn from_column(name: &str, column: ArrayView1<f64>) -> Self {
        let count = column.len();
        let mut sorted = column.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let median = match count {
            0 => f64::NAN,
            n if n % 2 == 1 => sorted[n / 2],
            n => (sorted[n / 2 - 1] + sorted[n / 2]) / 2.,
        };

        ColumnSummary {
            name: name.to_string(),
            count,
            min: sorted.first().copied().unwrap_or(f64::NAN),
            max: sorted.last().copied().unwrap_or(f64::NAN),
            mean: column.mean().unwrap_or(f64::NAN),
            median,
            std: if count > 1 { column.std(1.) } else { f64::NAN },
        }
    }
}

/// Summary of the feature and of the target column
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub feature: ColumnSummary,
    pub target: ColumnSummary,
}

/// Compute the column summaries of a dataset
pub fn describe(dataset: &Dataset<f64>) -> DatasetSummary {
    DatasetSummary {
        feature: ColumnSummary::from_column(dataset.feature_name(), dataset.records().view()),
        target: ColumnSummary::from_column(dataset.target_name(), dataset.targets().view()),
    }
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} {:>6} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            self.name, self.count, self.min, self.max, self.mean, self.median, self.std
        )
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "column", "count", "min", "max", "mean", "median", "std"
        )?;
        writeln!(f, "{}", self.feature)?;
        write!(f, "{}", self.target)
    }
}
