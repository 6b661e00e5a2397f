//! Scoring a persisted model against a dataset
use std::fmt;

use carprice::metrics::SingleTargetRegression;
use carprice::traits::{Fit, Predict, Transformer};
use carprice::Dataset;
use carprice_preprocessing::{FittedZScore, PreprocessingError, ZScoreScaler};
use ndarray::Array1;
use thiserror::Error;

use crate::model::PersistedModel;

/// Which statistics normalise the evaluation dataset
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSource {
    /// Re-estimate mean and standard deviation on the evaluation dataset
    Dataset,
    /// Use the statistics stored with the model at training time
    Model,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluateError {
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),
    #[error(transparent)]
    BaseCrate(#[from] carprice::Error),
}

/// Rough verdict on a coefficient of determination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitQuality {
    Excellent,
    Decent,
    Poor,
}

impl FitQuality {
    pub fn from_r2(r2: f64) -> Self {
        if r2 > 0.8 {
            FitQuality::Excellent
        } else if r2 > 0.6 {
            FitQuality::Decent
        } else {
            FitQuality::Poor
        }
    }
}

impl fmt::Display for FitQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitQuality::Excellent => write!(f, "excellent fit"),
            FitQuality::Decent => write!(f, "decent fit"),
            FitQuality::Poor => write!(f, "poor fit, needs improvement"),
        }
    }
}

/// Scores in normalised units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub r2: f64,
    pub mse: f64,
    pub mae: f64,
    pub verdict: FitQuality,
}

pub fn evaluate(
    model: &PersistedModel,
    dataset: &Dataset<f64>,
    source: StatsSource,
) -> Result<Evaluation, EvaluateError> {
    let scaler: FittedZScore<f64> = match source {
        StatsSource::Dataset => ZScoreScaler::new().fit(dataset)?,
        StatsSource::Model => *model.scaler(),
    };
    let normalized = scaler.transform(dataset.clone());
    let predicted: Array1<f64> = model.model().predict(&normalized);

    let r2 = predicted.r2(&normalized)?;
    Ok(Evaluation {
        r2,
        mse: predicted.mean_squared_error(&normalized)?,
        mae: predicted.mean_absolute_error(&normalized)?,
        verdict: FitQuality::from_r2(r2),
    })
}
