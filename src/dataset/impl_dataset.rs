use ndarray::Array1;

use super::{iter::Iter, Dataset, Float};
use crate::error::{Error, Result};

impl<F: Float> Dataset<F> {
    /// Create a new dataset from a feature column and a target column
    ///
    /// Both columns must have the same length, otherwise
    /// [`MismatchedShapes`](crate::Error::MismatchedShapes) is returned. The columns are named
    /// `feature` and `target` until renamed with [`with_names`](Self::with_names).
    pub fn new(records: Array1<F>, targets: Array1<F>) -> Result<Dataset<F>> {
        if records.len() != targets.len() {
            return Err(Error::MismatchedShapes(records.len(), targets.len()));
        }

        Ok(Dataset {
            records,
            targets,
            feature_name: "feature".to_string(),
            target_name: "target".to_string(),
        })
    }

    /// Create a dataset from `(feature, target)` pairs
    pub fn from_pairs<I: IntoIterator<Item = (F, F)>>(pairs: I) -> Dataset<F> {
        let (records, targets): (Vec<F>, Vec<F>) = pairs.into_iter().unzip();

        Dataset {
            records: Array1::from(records),
            targets: Array1::from(targets),
            feature_name: "feature".to_string(),
            target_name: "target".to_string(),
        }
    }

    /// Rename the feature and the target column
    pub fn with_names<S: Into<String>, T: Into<String>>(mut self, feature: S, target: T) -> Self {
        self.feature_name = feature.into();
        self.target_name = target.into();
        self
    }

    pub fn records(&self) -> &Array1<F> {
        &self.records
    }

    pub fn targets(&self) -> &Array1<F> {
        &self.targets
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Number of `(feature, target)` pairs
    pub fn nsamples(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over `(feature, target)` pairs in row order
    pub fn iter(&self) -> Iter<'_, F> {
        Iter::new(&self.records, &self.targets)
    }

    /// Apply a function to every record, keeping targets and names
    pub fn map_records<G: FnMut(F) -> F>(self, fnc: G) -> Dataset<F> {
        let Dataset {
            records,
            targets,
            feature_name,
            target_name,
        } = self;

        Dataset {
            records: records.mapv(fnc),
            targets,
            feature_name,
            target_name,
        }
    }

    /// Apply a function to every target, keeping records and names
    pub fn map_targets<G: FnMut(F) -> F>(self, fnc: G) -> Dataset<F> {
        let Dataset {
            records,
            targets,
            feature_name,
            target_name,
        } = self;

        Dataset {
            records,
            targets: targets.mapv(fnc),
            feature_name,
            target_name,
        }
    }
}
