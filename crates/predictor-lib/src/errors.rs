//! Error taxonomy for the prediction pipeline
//!
//! Three failure families: `LoadError` is fatal at startup, `SchemaMismatch`
//! rejects one call at the input boundary, `ClassifierError` fails one call
//! during inference. The process keeps serving after the latter two.

use std::path::PathBuf;
use thiserror::Error;

/// Classifier artifact could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("classifier artifact not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read classifier artifact {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("classifier artifact is {size} bytes, exceeds maximum {max}")]
    TooLarge { size: usize, max: usize },

    #[error("artifact checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("failed to deserialize classifier artifact")]
    Parse(#[source] anyhow::Error),
}

/// Input vector disagrees with the fixed schema
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaMismatch {
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' at position {position}, schema expects it at {expected_at}")]
    OutOfOrder {
        field: String,
        position: usize,
        expected_at: usize,
    },

    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' is not a finite number")]
    NonFinite { field: String },
}

/// Classifier failed while producing a prediction
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("inference failed")]
    Inference(#[source] anyhow::Error),

    #[error("class index {index} outside the {classes}-class label table")]
    ClassIndexOutOfRange { index: usize, classes: usize },

    #[error("classifier output is not a probability distribution: {reason}")]
    InvalidDistribution { reason: String },
}

/// Failure of a single prediction call
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Schema(#[from] SchemaMismatch),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
