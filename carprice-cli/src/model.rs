//! Persisted model: the learned line together with the normalisation statistics
use std::convert::TryFrom;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use carprice::traits::Predict;
use carprice_linear::LinearModel;
use carprice_preprocessing::{ColumnScale, FittedZScore, PreprocessingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::InputError;

/// An error when reading or writing a model file
#[derive(Error, Debug)]
pub enum ModelFileError {
    #[error("model file `{}` not found", .0.display())]
    NotFound(PathBuf),
    #[error("model file `{}` is malformed", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("model parameters are not finite (theta0 = {theta0}, theta1 = {theta1})")]
    NonFinite { theta0: f64, theta1: f64 },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// The JSON record of a model file, exactly six numbers
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModelRecord {
    pub theta0: f64,
    pub theta1: f64,
    pub km_mean: f64,
    pub km_std: f64,
    pub price_mean: f64,
    pub price_std: f64,
}

/// A trained model ready to predict prices in raw units
///
/// Serialised as a [`ModelRecord`]. Reading a record with a non-positive or non-finite standard
/// deviation fails, so a loaded model always has usable statistics.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(try_from = "ModelRecord", into = "ModelRecord")]
pub struct PersistedModel {
    model: LinearModel<f64>,
    scaler: FittedZScore<f64>,
}

/// A price predicted for a mileage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePrediction {
    pub km: f64,
    pub price: f64,
}

impl PricePrediction {
    /// A negative price is reported, but flagged as unrealistic
    pub fn is_implausible(&self) -> bool {
        self.price < 0.
    }
}

impl PersistedModel {
    pub fn new(model: &LinearModel<f64>, scaler: &FittedZScore<f64>) -> Self {
        PersistedModel {
            model: *model,
            scaler: *scaler,
        }
    }

    pub fn model(&self) -> &LinearModel<f64> {
        &self.model
    }

    pub fn scaler(&self) -> &FittedZScore<f64> {
        &self.scaler
    }

    pub fn record(&self) -> ModelRecord {
        ModelRecord::from(*self)
    }

    /// Predicts the price of a car in raw units
    ///
    /// The mileage is normalised with the stored statistics, fed to the line and the result is
    /// mapped back to a price. Negative or non-finite mileages are rejected.
    pub fn predict_price(&self, km: f64) -> Result<PricePrediction, InputError> {
        if !km.is_finite() {
            return Err(InputError::NonFinite(km.to_string()));
        }
        if km < 0. {
            return Err(InputError::NegativeMileage(km));
        }

        let z: f64 = self.model.predict(self.scaler.normalize_feature(km));
        let price = self.scaler.denormalize_target(z);

        Ok(PricePrediction { km, price })
    }

    /// Writes the model as pretty-printed JSON, creating missing parent directories
    ///
    /// A model with a non-finite intercept or slope is refused, JSON has no number for it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelFileError> {
        let (theta0, theta1) = (self.model.intercept(), self.model.slope());
        if !theta0.is_finite() || !theta1.is_finite() {
            return Err(ModelFileError::NonFinite { theta0, theta1 });
        }

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs::write(path, json)?;
        log::debug!("model written to {}", path.display());

        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ModelFileError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ModelFileError::NotFound(path.to_path_buf()),
            _ => ModelFileError::Io(err),
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                ModelFileError::Io(source.into())
            } else {
                ModelFileError::Malformed {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }
}

impl TryFrom<ModelRecord> for PersistedModel {
    type Error = PreprocessingError;

    fn try_from(record: ModelRecord) -> Result<Self, Self::Error> {
        let scaler = FittedZScore::from_parts(
            ColumnScale::new(record.km_mean, record.km_std)?,
            ColumnScale::new(record.price_mean, record.price_std)?,
        );

        Ok(PersistedModel {
            model: LinearModel::new(record.theta0, record.theta1),
            scaler,
        })
    }
}

impl From<PersistedModel> for ModelRecord {
    fn from(model: PersistedModel) -> Self {
        let (feature, target) = (model.scaler.feature(), model.scaler.target());

        ModelRecord {
            theta0: model.model.intercept(),
            theta1: model.model.slope(),
            km_mean: feature.mean(),
            km_std: feature.std(),
            price_mean: target.mean(),
            price_std: target.std(),
        }
    }
}
